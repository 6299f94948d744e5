//! The zone catalog: every region in the dataset, built from the file names alone.
//!
//! A dataset is a flat directory of `.geojson` files, one per region, named
//! `<zone>__<min_lng>__<max_lng>__<min_lat>__<max_lat>.geojson`. Zone ids have every `/`
//! escaped as `--`, so `Europe/Moscow` is stored as `Europe--Moscow`. Nothing inside the files
//! is read until a lookup needs the exact geometry.
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use geo::{Latitude, Longitude, Region};

use crate::error::DatasetError;

/// Extension of the region files, anything else in the dataset directory is skipped.
pub const FILE_EXTENSION: &str = "geojson";

const FIELD_SEPARATOR: &str = "__";
const ESCAPED_SLASH: &str = "--";

/// Handle to the geometry of a [`ZoneRegion`], resolved by a
/// [`GeometryLoader`](crate::loader::GeometryLoader) only when it's needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryRef(PathBuf);

impl GeometryRef {
    #[inline]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for GeometryRef {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.0.display().fmt(formatter)
    }
}

/// One spatial unit of a time zone. Zones can be split over several regions, so the zone id
/// isn't unique within a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRegion {
    zone_id: Box<str>,
    bbox: Region,
    geometry: GeometryRef,
}

impl ZoneRegion {
    pub fn new(zone_id: impl Into<Box<str>>, bbox: Region, geometry: GeometryRef) -> Self {
        Self {
            zone_id: zone_id.into(),
            bbox,
            geometry,
        }
    }

    /// The IANA zone id, i.e `Europe/Moscow`.
    #[inline]
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// The inclusive bounding box of the region's geometry.
    #[inline]
    pub fn bbox(&self) -> &Region {
        &self.bbox
    }

    #[inline]
    pub fn geometry_ref(&self) -> &GeometryRef {
        &self.geometry
    }

    /// Builds a region from the name of a dataset file. The file itself isn't touched.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, DatasetError> {
        let path = path.into();

        let file_name = || {
            path.file_name()
                .unwrap_or(path.as_os_str())
                .to_string_lossy()
                .into_owned()
        };

        let (zone, [min_lng, max_lng, min_lat, max_lat]) = path
            .file_stem()
            .and_then(OsStr::to_str)
            .and_then(split_file_stem)
            .ok_or_else(|| DatasetError::MalformedName {
                file_name: file_name(),
            })?;

        let invalid_bound = |source| DatasetError::InvalidBound {
            file_name: file_name(),
            source,
        };

        let bbox = Region::new(
            min_lng.parse::<Longitude>().map_err(invalid_bound)?,
            max_lng.parse::<Longitude>().map_err(invalid_bound)?,
            min_lat.parse::<Latitude>().map_err(invalid_bound)?,
            max_lat.parse::<Latitude>().map_err(invalid_bound)?,
        )
        .map_err(|source| DatasetError::InvertedBounds {
            file_name: file_name(),
            source,
        })?;

        let zone_id = zone.replace(ESCAPED_SLASH, "/");

        Ok(Self::new(zone_id, bbox, GeometryRef(path)))
    }
}

/// Splits `<zone>__<a>__<b>__<c>__<d>` into the escaped zone and its 4 bounds. The bounds are
/// always the last 4 fields, so a zone containing the separator still splits correctly.
fn split_file_stem(stem: &str) -> Option<(&str, [&str; 4])> {
    let mut fields = stem.rsplitn(5, FIELD_SEPARATOR);

    let max_lat = fields.next()?;
    let min_lat = fields.next()?;
    let max_lng = fields.next()?;
    let min_lng = fields.next()?;
    let zone = fields.next().filter(|zone| !zone.is_empty())?;

    Some((zone, [min_lng, max_lng, min_lat, max_lat]))
}

/// Every [`ZoneRegion`] of a dataset, in a fixed order. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    regions: Vec<ZoneRegion>,
}

impl Catalog {
    /// Reads the catalog from a dataset directory. Entries are sorted by file name, so the
    /// catalog order doesn't depend on the order the filesystem lists them in.
    pub fn load(dataset_dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dataset_dir = dataset_dir.as_ref();

        let read_dir_err = |source| DatasetError::ReadDir {
            path: dataset_dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();

        for entry in fs::read_dir(dataset_dir).map_err(read_dir_err)? {
            let path = entry.map_err(read_dir_err)?.path();

            if path.extension().and_then(OsStr::to_str) != Some(FILE_EXTENSION) || !path.is_file() {
                tracing::debug!(message = "skipping dataset entry", path = %path.display());
                continue;
            }

            paths.push(path);
        }

        paths.sort_unstable();

        let regions = paths
            .into_iter()
            .map(ZoneRegion::from_path)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            message = "loaded zone catalog",
            regions = regions.len(),
            dataset_dir = %dataset_dir.display()
        );

        Ok(Self { regions })
    }

    /// Builds a catalog from regions that are already in memory, kept in the given order.
    pub fn from_regions<I>(regions: I) -> Self
    where
        I: IntoIterator<Item = ZoneRegion>,
    {
        Self {
            regions: regions.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ZoneRegion> {
        self.regions.iter()
    }

    /// Distinct zone ids, in the order they first appear in the catalog.
    pub fn zone_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.regions.len());

        self.regions
            .iter()
            .map(ZoneRegion::zone_id)
            .filter(|zone_id| seen.insert(*zone_id))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ZoneRegion;
    type IntoIter = std::slice::Iter<'a, ZoneRegion>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

impl FromIterator<ZoneRegion> for Catalog {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = ZoneRegion>,
    {
        Self::from_regions(iter)
    }
}
