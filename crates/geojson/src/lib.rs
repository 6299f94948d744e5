//! Just enough GeoJSON to pull a single areal geometry out of a zone boundary document.
//!
//! Accepted documents are a `FeatureCollection` (the first feature is used), a bare `Feature`
//! or a bare `Polygon`/`MultiPolygon` geometry object. Members can appear in any order, and
//! anything that isn't needed to reach the coordinates is skipped without being decoded.
#![warn(missing_debug_implementations)]
mod document;
mod error;
mod geometry;

pub use document::{from_slice, from_str};
pub use error::Error;
pub use geometry::GeometryType;
