use std::fmt;

use geo::Geometry;
use geo::geom::{MultiPolygon, Polygon};
use serde_json::value::RawValue;

use crate::Error;

/// Every GeoJSON geometry type. Only the areal ones can be decoded into a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }

    /// Matches the exact (case sensitive) type name used in the `type` member.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Some(match name {
            "Point" => Self::Point,
            "MultiPoint" => Self::MultiPoint,
            "LineString" => Self::LineString,
            "MultiLineString" => Self::MultiLineString,
            "Polygon" => Self::Polygon,
            "MultiPolygon" => Self::MultiPolygon,
            "GeometryCollection" => Self::GeometryCollection,
            _ => return None,
        })
    }

    #[inline]
    pub const fn is_areal(&self) -> bool {
        matches!(self, Self::Polygon | Self::MultiPolygon)
    }

    /// Decodes the buffered `coordinates` member of a geometry of this type.
    pub(crate) fn decode_coordinates(self, coordinates: &RawValue) -> Result<Geometry, Error> {
        match self {
            Self::Polygon => serde_json::from_str::<Polygon>(coordinates.get())
                .map(Geometry::Polygon)
                .map_err(Error::Json),
            Self::MultiPolygon => serde_json::from_str::<MultiPolygon>(coordinates.get())
                .map(Geometry::MultiPolygon)
                .map_err(Error::Json),
            other => Err(Error::UnsupportedGeometry(other)),
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
