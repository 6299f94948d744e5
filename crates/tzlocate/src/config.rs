use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::DatasetError;
use crate::finder::ZoneFinder;
use crate::loader::{CachingLoader, FsLoader, GeometryLoader};

// using macros instead of consts so we can statically concat in the log messages
macro_rules! dataset_dir_env_var {
    () => {
        "TZLOCATE_DATASET_DIR"
    };
}

macro_rules! cache_geometry_env_var {
    () => {
        "TZLOCATE_CACHE_GEOMETRY"
    };
}

/// A type erased loader, so the caching choice can be made at runtime.
pub type DynLoader = Box<dyn GeometryLoader + Send + Sync>;

/// Where the dataset lives and how its geometry is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the per-region `.geojson` files.
    pub dataset_dir: PathBuf,
    /// Keep every loaded geometry in memory, see [`CachingLoader`].
    pub cache_geometry: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_dir: default_dataset_dir(),
            cache_geometry: false,
        }
    }
}

/// The `data` directory shipped alongside this crate.
pub fn default_dataset_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

impl Config {
    /// Gets the config from the environment.
    /// Lazily initializes the value, so subsequent calls will return the cached value.
    ///
    /// Missing variables fall back to the [`Default`] values. Invalid ones do too, after
    /// emitting a warning (once).
    pub fn from_env() -> &'static Config {
        static CONFIG_FROM_ENV: OnceLock<Config> = OnceLock::new();

        CONFIG_FROM_ENV.get_or_init(|| Self::from_vars(std::env::var_os))
    }

    fn from_vars<F>(get_var: F) -> Self
    where
        F: Fn(&'static str) -> Option<OsString>,
    {
        let mut config = Self::default();

        if let Some(dataset_dir) = read_dataset_dir(&get_var) {
            config.dataset_dir = dataset_dir;
        }

        if let Some(cache_geometry) = read_cache_geometry(&get_var) {
            config.cache_geometry = cache_geometry;
        }

        config
    }

    /// Loads the catalog and builds a finder with the configured loader.
    pub fn finder(&self) -> Result<ZoneFinder<DynLoader>, DatasetError> {
        let catalog = Catalog::load(&self.dataset_dir)?;

        if catalog.is_empty() {
            tracing::warn!(
                message = concat!(
                    "no zone regions found, every lookup will be NotFound. set '",
                    dataset_dir_env_var!(),
                    "' to a dataset directory"
                ),
                dataset_dir = %self.dataset_dir.display()
            );
        }

        let loader: DynLoader = if self.cache_geometry {
            Box::new(CachingLoader::new(FsLoader))
        } else {
            Box::new(FsLoader)
        };

        Ok(ZoneFinder::new(catalog, loader))
    }
}

fn read_dataset_dir<F>(get_var: F) -> Option<PathBuf>
where
    F: Fn(&'static str) -> Option<OsString>,
{
    let var = get_var(dataset_dir_env_var!())?;

    if var.is_empty() {
        tracing::warn!(message = concat!("'", dataset_dir_env_var!(), "' is set, but empty"));
        return None;
    }

    Some(PathBuf::from(var))
}

fn read_cache_geometry<F>(get_var: F) -> Option<bool>
where
    F: Fn(&'static str) -> Option<OsString>,
{
    let var = match get_var(cache_geometry_env_var!())?.into_string() {
        Ok(var) => var,
        Err(invalid) => {
            tracing::warn!(
                message = concat!("invalid unicode found in '", cache_geometry_env_var!(), "'"),
                ?invalid
            );
            return None;
        }
    };

    let flag = parse_flag(&var);

    if flag.is_none() {
        tracing::warn!(
            message = concat!("error parsing value in '", cache_geometry_env_var!(), "'"),
            %var
        );
    }

    flag
}

fn parse_flag(s: &str) -> Option<bool> {
    const TRUTHY: &[&str] = &["true", "1", "yes", "on"];
    const FALSY: &[&str] = &["false", "0", "no", "off"];

    let s = s.trim();

    if TRUTHY.iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| s.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}
