use std::path::Path;

use geo::{ContainsPoint, Point};

use crate::catalog::Catalog;
use crate::error::{DatasetError, GeometryError};
use crate::loader::{FsLoader, GeometryLoader};
use crate::lookup::Lookup;

/// Resolves points to the time zones containing them.
///
/// Each lookup is a two stage query: the catalog's bounding boxes narrow the regions down
/// to a handful of candidates, then (only if more than one candidate remains) each
/// candidate's exact geometry is loaded and tested. A single candidate is returned as is,
/// without ever loading its geometry.
#[derive(Debug, Clone)]
pub struct ZoneFinder<L = FsLoader> {
    catalog: Catalog,
    loader: L,
}

impl ZoneFinder<FsLoader> {
    /// Loads the catalog from a dataset directory, reading geometry straight from disk.
    pub fn open(dataset_dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Catalog::load(dataset_dir).map(|catalog| Self::new(catalog, FsLoader))
    }
}

impl<L> ZoneFinder<L> {
    #[inline]
    pub const fn new(catalog: Catalog, loader: L) -> Self {
        Self { catalog, loader }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    #[inline]
    pub fn into_parts(self) -> (Catalog, L) {
        (self.catalog, self.loader)
    }
}

impl<L> ZoneFinder<L>
where
    L: GeometryLoader,
{
    /// Finds the zone(s) containing the point at 'lat'/'lng' (decimal degrees).
    ///
    /// Coordinates that aren't on the globe (out of range, NaN or infinite) can't be inside
    /// any zone, so they're [`Lookup::NotFound`] rather than an error. The only error is
    /// failing to load a candidate's geometry.
    pub fn lookup(&self, lat: f64, lng: f64) -> Result<Lookup<'_>, GeometryError> {
        let _span = tracing::debug_span!("lookup", lat, lng).entered();

        match Point::new_checked(lng, lat) {
            Ok(point) => self.lookup_point(point),
            Err(error) => {
                tracing::debug!(message = "query coordinates aren't on the globe", %error);
                Ok(Lookup::NotFound)
            }
        }
    }

    pub fn lookup_point(&self, point: Point) -> Result<Lookup<'_>, GeometryError> {
        let mut candidates = self.catalog.candidates(point);

        let Some(first) = candidates.next() else {
            return Ok(Lookup::NotFound);
        };

        let Some(second) = candidates.next() else {
            tracing::debug!(message = "single candidate", zone_id = first.zone_id());
            return Ok(Lookup::Zone(first.zone_id()));
        };

        let mut matches = Vec::new();

        for region in [first, second].into_iter().chain(candidates) {
            let geometry = self.loader.load(region).inspect_err(|error| {
                tracing::warn!(
                    message = "unable to load zone geometry",
                    zone_id = region.zone_id(),
                    geometry = %region.geometry_ref(),
                    %error
                );
            })?;

            if geometry.contains_point(point) {
                matches.push(region.zone_id());
            }
        }

        tracing::debug!(message = "tested candidate geometries", matches = matches.len());

        Ok(Lookup::from_matches(matches))
    }
}
