//! Resolving a [`ZoneRegion`]'s geometry handle to the geometry itself.
use std::collections::HashMap;
use std::sync::Arc;

use geo::Geometry;
use parking_lot::Mutex;

use crate::catalog::{GeometryRef, ZoneRegion};
use crate::error::GeometryError;

/// Loads the exact geometry of a region. Only called for regions that survive the
/// bounding box filter.
pub trait GeometryLoader {
    fn load(&self, region: &ZoneRegion) -> Result<Arc<Geometry>, GeometryError>;
}

impl<L> GeometryLoader for &L
where
    L: GeometryLoader + ?Sized,
{
    #[inline]
    fn load(&self, region: &ZoneRegion) -> Result<Arc<Geometry>, GeometryError> {
        L::load(self, region)
    }
}

impl<L> GeometryLoader for Box<L>
where
    L: GeometryLoader + ?Sized,
{
    #[inline]
    fn load(&self, region: &ZoneRegion) -> Result<Arc<Geometry>, GeometryError> {
        L::load(self, region)
    }
}

impl<L> GeometryLoader for Arc<L>
where
    L: GeometryLoader + ?Sized,
{
    #[inline]
    fn load(&self, region: &ZoneRegion) -> Result<Arc<Geometry>, GeometryError> {
        L::load(self, region)
    }
}

/// Reads and decodes the region's file on every call, nothing is kept around.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl GeometryLoader for FsLoader {
    fn load(&self, region: &ZoneRegion) -> Result<Arc<Geometry>, GeometryError> {
        let path = region.geometry_ref().path();

        let bytes = std::fs::read(path).map_err(|source| GeometryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let geometry = geojson::from_slice(&bytes).map_err(|source| GeometryError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            message = "loaded zone geometry",
            zone_id = region.zone_id(),
            polygons = geometry.polygons().len(),
            bytes = bytes.len()
        );

        Ok(Arc::new(geometry))
    }
}

type Slot = Arc<Mutex<Option<Arc<Geometry>>>>;

/// Wraps another loader, keeping every geometry it loads. Each handle is loaded at most once,
/// concurrent callers asking for the same handle wait on the first one. Failed loads aren't
/// kept, the next call for that handle tries again.
#[derive(Debug, Default)]
pub struct CachingLoader<L = FsLoader> {
    inner: L,
    slots: Mutex<HashMap<GeometryRef, Slot>>,
}

impl<L> CachingLoader<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            slots: Mutex::new(HashMap::new()),
        }
    }

    #[inline]
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// The number of geometries currently held.
    pub fn cached(&self) -> usize {
        let slots = self.slots.lock().values().cloned().collect::<Vec<_>>();
        slots.iter().filter(|slot| slot.lock().is_some()).count()
    }

    /// Drops every held geometry.
    pub fn clear(&self) {
        self.slots.lock().clear();
    }
}

impl<L> GeometryLoader for CachingLoader<L>
where
    L: GeometryLoader,
{
    fn load(&self, region: &ZoneRegion) -> Result<Arc<Geometry>, GeometryError> {
        // only hold the map lock long enough to find the slot, the load itself happens
        // under the per-handle lock
        let slot = Arc::clone(
            self.slots
                .lock()
                .entry(region.geometry_ref().clone())
                .or_default(),
        );

        let mut guard = slot.lock();

        if let Some(geometry) = guard.as_ref() {
            return Ok(Arc::clone(geometry));
        }

        let geometry = self.inner.load(region)?;
        *guard = Some(Arc::clone(&geometry));
        Ok(geometry)
    }
}
