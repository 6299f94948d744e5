use std::path::PathBuf;
use std::sync::Arc;

use geo::InvalidCoordinate;
use geo::region::InvertedRegion;

/// Errors reading the zone catalog. Fatal, a catalog is either loaded whole or not at all.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("unable to read dataset directory '{path}'")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "'{file_name}' doesn't match the '<zone>__<min_lng>__<max_lng>__<min_lat>__<max_lat>.geojson' format"
    )]
    MalformedName { file_name: String },
    #[error("invalid bounding box value in '{file_name}'")]
    InvalidBound {
        file_name: String,
        #[source]
        source: InvalidCoordinate,
    },
    #[error("inverted bounding box in '{file_name}'")]
    InvertedBounds {
        file_name: String,
        #[source]
        source: InvertedRegion,
    },
}

/// Errors loading a single region's geometry. Only the lookup that needed it fails.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("unable to read zone geometry '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to decode zone geometry '{path}'")]
    Decode {
        path: PathBuf,
        #[source]
        source: geojson::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Dataset(Arc<DatasetError>),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(
        "no time zone database is available, install the system tz database (e.g. the 'tzdata' package) or enable jiff's bundled database"
    )]
    MissingDependency,
    #[error("'{zone_id}' is not a zone in the time zone database")]
    UnknownZone {
        zone_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<DatasetError> for Error {
    fn from(error: DatasetError) -> Self {
        Self::Dataset(Arc::new(error))
    }
}

impl From<Arc<DatasetError>> for Error {
    fn from(error: Arc<DatasetError>) -> Self {
        Self::Dataset(error)
    }
}
