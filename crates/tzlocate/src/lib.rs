//! Resolves a point on the globe to the IANA time zone containing it.
//!
//! Lookups run against a static dataset of zone regions: a [`Catalog`] of bounding boxes built
//! from the dataset's file names, plus each region's exact (multi)polygon boundary, loaded on
//! demand by a [`GeometryLoader`]. The bounding boxes settle most lookups on their own, the
//! exact geometry is only needed where boxes overlap.
//!
//! ```no_run
//! let finder = tzlocate::ZoneFinder::open("/srv/tz-regions")?;
//!
//! match finder.lookup(55.75, 37.616667)? {
//!     tzlocate::Lookup::Zone(zone_id) => println!("{zone_id}"),
//!     tzlocate::Lookup::Ambiguous(zone_ids) => println!("one of {zone_ids:?}"),
//!     tzlocate::Lookup::NotFound => println!("not in any zone"),
//! }
//! # Ok::<(), tzlocate::Error>(())
//! ```
#![warn(missing_debug_implementations)]
use std::sync::{Arc, OnceLock};

pub mod catalog;
pub mod config;
mod error;
pub mod filter;
mod finder;
pub mod loader;
mod lookup;
pub mod nearest;
#[cfg(feature = "tz")]
pub mod tz;

pub use catalog::{Catalog, GeometryRef, ZoneRegion};
pub use config::{Config, DynLoader};
pub use error::{DatasetError, Error, GeometryError};
pub use finder::ZoneFinder;
pub use loader::{CachingLoader, FsLoader, GeometryLoader};
pub use lookup::Lookup;
#[cfg(feature = "tz")]
pub use tz::TimeZones;

/// The process wide [`ZoneFinder`], built from [`Config::from_env`] on first use.
///
/// A dataset that fails to load is remembered, every later call returns the same error
/// without trying again.
pub fn global() -> Result<&'static ZoneFinder<DynLoader>, Error> {
    static GLOBAL: OnceLock<Result<ZoneFinder<DynLoader>, Arc<DatasetError>>> = OnceLock::new();

    match GLOBAL.get_or_init(|| Config::from_env().finder().map_err(Arc::new)) {
        Ok(finder) => Ok(finder),
        Err(error) => Err(Error::Dataset(Arc::clone(error))),
    }
}

/// [`ZoneFinder::lookup`] against the [`global`] finder.
pub fn lookup(lat: f64, lng: f64) -> Result<Lookup<'static>, Error> {
    Ok(global()?.lookup(lat, lng)?)
}

/// [`ZoneFinder::get`] against the [`global`] finder.
#[cfg(feature = "tz")]
pub fn get(lat: f64, lng: f64) -> Result<TimeZones, Error> {
    global()?.get(lat, lng)
}
