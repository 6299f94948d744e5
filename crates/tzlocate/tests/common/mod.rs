#![allow(dead_code)]
use std::path::PathBuf;
use std::sync::Arc;

use geo::Geometry;
use parking_lot::Mutex;
use tzlocate::{FsLoader, GeometryError, GeometryLoader, ZoneFinder, ZoneRegion};

pub const ZONES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/zones");
pub const BROKEN_GEOMETRY: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/broken_geometry");
pub const BAD_NAME: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bad_name");
pub const INVERTED_BBOX: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/inverted_bbox");
pub const ANTIMERIDIAN: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/antimeridian");

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Records the zone id of every region whose geometry gets loaded.
#[derive(Debug, Default)]
pub struct Spy<L = FsLoader> {
    inner: L,
    loaded: Mutex<Vec<String>>,
}

impl<L> Spy<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            loaded: Mutex::new(Vec::new()),
        }
    }

    /// Takes the zone ids loaded since the last call.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.loaded.lock())
    }

    pub fn count(&self) -> usize {
        self.loaded.lock().len()
    }
}

impl<L: GeometryLoader> GeometryLoader for Spy<L> {
    fn load(&self, region: &ZoneRegion) -> Result<Arc<Geometry>, GeometryError> {
        self.loaded.lock().push(region.zone_id().to_owned());
        self.inner.load(region)
    }
}

pub fn spy_finder(dataset_dir: &str) -> ZoneFinder<Spy> {
    init_tracing();

    let (catalog, _) = ZoneFinder::open(dataset_dir).unwrap().into_parts();
    ZoneFinder::new(catalog, Spy::default())
}

/// A fresh, empty directory under the system temp dir.
pub fn empty_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tzlocate-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
