//! Planar geometry over geographic coordinates: validated [`Longitude`]/[`Latitude`] values,
//! [`Point`]s, bounding [`Region`]s, and the raw [`Position`]s and polygon types needed for
//! point-in-polygon tests.
//!
//! Coordinates are treated as plain `(x, y) = (lng, lat)` pairs, no projection is applied.
pub mod ang;
pub mod contains;
pub mod geom;
pub mod lng_lat;
pub mod point;
pub mod position;
pub mod region;

pub use contains::ContainsPoint;
pub use geom::Geometry;
pub use lng_lat::{InvalidCoordinate, Latitude, Longitude};
pub use point::Point;
pub use position::Position;
pub use region::Region;
