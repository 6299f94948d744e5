use std::fmt;

use crate::lng_lat::{InvalidCoordinate, Latitude, Longitude};

/// Represents a valid point on the Earth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    longitude: Longitude,
    latitude: Latitude,
}

impl Point {
    /// Assembles a [`Point`] from a [`Longitude`] and [`Latitude`].
    pub const fn new(longitude: Longitude, latitude: Latitude) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Assembles a [`Point`] from a longitude and latitude as [`f64`]'s. If either is invalid,
    /// an [`Err`] is returned.
    pub const fn new_checked(longitude: f64, latitude: f64) -> Result<Self, InvalidCoordinate> {
        let longitude = match Longitude::new_checked(longitude) {
            Ok(lon) => lon,
            Err(err) => return Err(err),
        };

        let latitude = match Latitude::new_checked(latitude) {
            Ok(lat) => lat,
            Err(err) => return Err(err),
        };

        Ok(Self::new(longitude, latitude))
    }

    /// Returns the [`Longitude`].
    pub const fn longitude(&self) -> Longitude {
        self.longitude
    }

    /// Returns the inner [`Latitude`].
    pub const fn latitude(&self) -> Latitude {
        self.latitude
    }

    /// The planar x coordinate, i.e the longitude as an [`f64`].
    #[inline]
    pub const fn x(&self) -> f64 {
        self.longitude.get()
    }

    /// The planar y coordinate, i.e the latitude as an [`f64`].
    #[inline]
    pub const fn y(&self) -> f64 {
        self.latitude.get()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "({}, {})", self.longitude, self.latitude)
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = InvalidCoordinate;

    fn try_from(lon_lat: (f64, f64)) -> Result<Self, Self::Error> {
        Self::new_checked(lon_lat.0, lon_lat.1)
    }
}

#[cfg(any(test, feature = "random-geom"))]
mod point_rand_impls {
    use rand::Rng;
    use rand::distr::{Distribution, StandardUniform};

    use super::Point;

    impl Distribution<Point> for StandardUniform {
        fn sample<R>(&self, rng: &mut R) -> Point
        where
            R: Rng + ?Sized,
        {
            Point::new(rng.random(), rng.random())
        }
    }

    impl Point {
        pub fn random() -> Self {
            rand::random()
        }
    }
}
