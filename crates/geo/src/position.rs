//! Raw GeoJSON positions, as stored in the rings of a geometry.
use std::fmt;

use serde::{Deserialize, de};

use crate::Point;
use crate::ang::Degrees;

/// A ring vertex, taken from the dataset as is.
///
/// Unlike [`Point`], the coordinates aren't range checked: a vertex a hair past the
/// antimeridian or a pole is still a usable edge endpoint for ray casting. Only non-finite
/// values are rejected, since no edge can be built from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The longitude, in degrees.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The latitude, in degrees.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Great circle distance to 'other' (haversine), as the central angle between the two.
    pub fn angular_distance(&self, other: &Self) -> Degrees {
        let lat1 = self.y.to_radians();
        let lon1 = self.x.to_radians();
        let lat2 = other.y.to_radians();
        let lon2 = other.x.to_radians();

        let delta_lat_sin = ((lat2 - lat1) / 2.0).sin();
        let delta_lon_sin = ((lon2 - lon1) / 2.0).sin();

        let a_term_1 = delta_lat_sin * delta_lat_sin;
        let a_term_2 = lat1.cos() * lat2.cos() * delta_lon_sin * delta_lon_sin;

        // rounding can push 'a' a hair past 1 for antipodal positions
        let a = (a_term_1 + a_term_2).min(1.0);

        let c = 2.0 * f64::atan2(a.sqrt(), (1.0 - a).sqrt());

        Degrees::new(c.to_degrees())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

impl From<Point> for Position {
    #[inline]
    fn from(point: Point) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<(f64, f64)> for Position {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PositionVisitor)
    }
}

struct PositionVisitor;

impl PositionVisitor {
    fn finite<E>(&self, value: f64) -> Result<f64, E>
    where
        E: de::Error,
    {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(de::Error::invalid_value(de::Unexpected::Float(value), self))
        }
    }
}

impl<'de> de::Visitor<'de> for PositionVisitor {
    type Value = Position;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "2-3 element array of finite numbers: x, y and an optional altitude"
        )
    }

    fn visit_seq<S>(self, mut seq_access: S) -> Result<Self::Value, S::Error>
    where
        S: de::SeqAccess<'de>,
    {
        let x: f64 = seq_access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let y: f64 = seq_access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        // altitude (and anything past it) plays no part in planar containment
        while seq_access.next_element::<de::IgnoredAny>()?.is_some() {}

        Ok(Position::new(self.finite(x)?, self.finite(y)?))
    }
}
