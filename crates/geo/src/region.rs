use std::fmt;
use std::ops::RangeInclusive;

use crate::{Latitude, Longitude, Point};

/// A region on the Earth, bounded by 2 latitude + 2 longitude lines. Used as the bounding box
/// of a geometry.
///
/// All bounds are inclusive, a point sitting exactly on one of the bounding lines is
/// considered inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// The minimum bounding longitude.
    min_lon: Longitude,
    /// The maximum bounding longitude.
    max_lon: Longitude,
    /// The minimum bounding latitude.
    min_lat: Latitude,
    /// The maximum bounding latitude.
    max_lat: Latitude,
}

/// Returned by [`Region::new`] when a minimum bound is larger than its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertedRegion {
    axis: &'static str,
}

impl fmt::Display for InvertedRegion {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "minimum {} is larger than the maximum {}",
            self.axis, self.axis
        )
    }
}

impl std::error::Error for InvertedRegion {}

macro_rules! impl_point_fns {
    ($($fn_name:ident($lon_field:ident, $lat_field:ident)),* $(,)?) => {
        $(
            #[inline]
            pub const fn $fn_name(&self) -> Point {
                Point::new(self.$lon_field, self.$lat_field)
            }
        )*
    };
}

impl Region {
    /// Builds a region from its bounds, given in the `(min_lng, max_lng, min_lat, max_lat)`
    /// order used by the zone datasets.
    pub fn new(
        min_lon: Longitude,
        max_lon: Longitude,
        min_lat: Latitude,
        max_lat: Latitude,
    ) -> Result<Self, InvertedRegion> {
        if min_lon > max_lon {
            return Err(InvertedRegion { axis: "longitude" });
        }

        if min_lat > max_lat {
            return Err(InvertedRegion { axis: "latitude" });
        }

        Ok(Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        })
    }

    /// Creates a region from a single point. The resulting region will have 0 area.
    #[inline]
    pub const fn from_point(pt: Point) -> Self {
        let lat = pt.latitude();
        let lon = pt.longitude();

        Self {
            min_lon: lon,
            min_lat: lat,
            max_lon: lon,
            max_lat: lat,
        }
    }

    #[inline]
    pub const fn lat_range(&self) -> RangeInclusive<Latitude> {
        self.min_lat..=self.max_lat
    }

    #[inline]
    pub const fn lon_range(&self) -> RangeInclusive<Longitude> {
        self.min_lon..=self.max_lon
    }

    impl_point_fns! {
        bottom_left(min_lon, min_lat),
        top_right(max_lon, max_lat),
    }

    /// Inclusive on every edge.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        self.lon_range().contains(&pt.longitude()) && self.lat_range().contains(&pt.latitude())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "[{}, {}] x [{}, {}]",
            self.min_lon, self.max_lon, self.min_lat, self.max_lat
        )
    }
}
