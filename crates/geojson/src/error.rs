use geo::geom::InvalidGeometry;

use crate::GeometryType;

/// Errors that can occur while decoding a zone boundary document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unsupported document type '{0}'")]
    UnsupportedDocument(String),
    #[error("{0} geometries don't enclose an area, expected Polygon or MultiPolygon")]
    UnsupportedGeometry(GeometryType),
    #[error("{kind} is missing its '{member}' member")]
    MissingMember {
        kind: &'static str,
        member: &'static str,
    },
    #[error("FeatureCollection has no features")]
    NoFeatures,
    #[error("invalid geometry: {0}")]
    Invalid(#[from] InvalidGeometry),
}
