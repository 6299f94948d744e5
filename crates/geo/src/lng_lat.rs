//! [`Latitude`] and [`Longitude`] definitions

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::FpCategory;
use std::str::FromStr;

macro_rules! impl_lat_lon {
    ($(($name:ident: $min:expr => $max:expr)),* $(,)?) => {
        $(
            #[doc = concat!(
                " A valid ",
                stringify!($name),
                " on the Earth, in degrees.\n\n",
                " Thin wrapper around an [`f64`], which validates that the value is not\n",
                " [`f64::NAN`], [`f64::INFINITY`], [`f64::NEG_INFINITY`], or outside of the\n",
                " range of valid values for this coordinate type ([",
                stringify!($min),
                ", ",
                stringify!($max),
                "])",
            )]
            #[repr(transparent)]
            #[derive(Default, Clone, Copy)]
            pub struct $name(f64);

            impl $name {
                #[doc = concat!(" The zero value for [`", stringify!($name), "`]")]
                pub const ZERO: Self = Self(0.0);

                #[doc = concat!(
                    " Creates a new [`",
                    stringify!($name),
                    "`], validating that the floating point value is not NaN, ",
                    "+/- Infinity, or outside of its valid range.",
                )]
                #[inline]
                pub const fn new_checked(value: f64) -> Result<Self, InvalidCoordinate> {
                    match value.classify() {
                        FpCategory::Nan => Err(InvalidCoordinate::new(
                            CoordinateType::$name,
                            InvalidCoordinateReason::IsNaN,
                        )),
                        FpCategory::Infinite => Err(InvalidCoordinate::new(
                            CoordinateType::$name,
                            InvalidCoordinateReason::IsInf,
                        )),
                        _ if $max < value => Err(InvalidCoordinate::new(
                            CoordinateType::$name,
                            InvalidCoordinateReason::AboveMaximum { max: $max, value },
                        )),
                        _ if $min > value => Err(InvalidCoordinate::new(
                            CoordinateType::$name,
                            InvalidCoordinateReason::BelowMinimum { min: $min, value },
                        )),
                        // -0.0 + 0.0 == +0.0, keeps the total ordering in line with '=='
                        _ => Ok(Self(value + 0.0)),
                    }
                }

                #[doc = concat!("Returns the underlying ", stringify!($name), " as a [`f64`]")]
                #[inline]
                pub const fn get(self) -> f64 {
                    self.0
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.debug_tuple(stringify!($name))
                        .field(&self.0)
                        .finish()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    write!(formatter, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = InvalidCoordinate;

                #[inline]
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    s.trim()
                        .parse::<f64>()
                        .map_err(|err| {
                            let reason = InvalidCoordinateReason::ParseErr(err);
                            InvalidCoordinate::new(CoordinateType::$name, reason)
                        })
                        .and_then($name::new_checked)
                }
            }

            // construction rules out NaN, so the total ordering is the float ordering.
            impl PartialEq for $name {
                fn eq(&self, rhs: &Self) -> bool {
                    self.cmp(rhs).is_eq()
                }
            }

            impl Eq for $name {}

            impl Hash for $name {
                #[inline]
                fn hash<H>(&self, hasher: &mut H)
                where
                    H: Hasher
                {
                    self.0.to_bits().hash(hasher)
                }
            }

            impl PartialOrd for $name {
                fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                    Some(self.cmp(rhs))
                }
            }

            impl Ord for $name {
                fn cmp(&self, rhs: &Self) -> Ordering {
                    self.0.total_cmp(&rhs.0)
                }
            }
        )*
    };
}

impl_lat_lon! {
    (Latitude: -90.0 => 90.0),
    (Longitude: -180.0 => 180.0),
}

/// Enum containing the valid coordinate types. Used to generalize the error returned from
/// [`Latitude::new_checked`] and [`Longitude::new_checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateType {
    Latitude,
    Longitude,
}

impl CoordinateType {
    /// Returns the name of the variant as an lowercase `&'static str`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

/// An error returned by [`Latitude::new_checked`] and [`Longitude::new_checked`], if the value
/// passed in was either [`f64::NAN`], [`f64::INFINITY`], [`f64::NEG_INFINITY`], or out of range
/// for that unit.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidCoordinate {
    coordinate: CoordinateType,
    reason: InvalidCoordinateReason,
}

impl InvalidCoordinate {
    pub(crate) const fn new(coordinate: CoordinateType, reason: InvalidCoordinateReason) -> Self {
        Self { coordinate, reason }
    }

    /// Returns the coordinate type that caused the error.
    pub const fn coordinate(&self) -> CoordinateType {
        self.coordinate
    }

    /// Returns the reason the coordinate is invalid.
    pub const fn reason(&self) -> &InvalidCoordinateReason {
        &self.reason
    }
}

/// The reason why a coordinate failed to build.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidCoordinateReason {
    IsNaN,
    IsInf,
    ParseErr(std::num::ParseFloatError),
    BelowMinimum { min: f64, value: f64 },
    AboveMaximum { max: f64, value: f64 },
}

impl fmt::Display for InvalidCoordinateReason {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IsNaN => write!(formatter, "'NaN'"),
            Self::IsInf => write!(formatter, "infinite"),
            Self::ParseErr(err) => write!(formatter, "parsed: {err}"),
            Self::BelowMinimum { min, value } => {
                write!(formatter, "below the minimum valid value {min} (received {value})")
            }
            Self::AboveMaximum { max, value } => {
                write!(formatter, "above the maximum valid value {max} (received {value})")
            }
        }
    }
}

impl std::error::Error for InvalidCoordinate {}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "{} invalid: cannot be {}",
            self.coordinate.as_str(),
            self.reason
        )
    }
}

#[cfg(any(test, feature = "random-geom"))]
mod rand_impls {
    use rand::Rng;
    use rand::distr::{Distribution, StandardUniform};

    use super::{Latitude, Longitude};

    impl Distribution<Latitude> for StandardUniform {
        fn sample<R>(&self, rng: &mut R) -> Latitude
        where
            R: Rng + ?Sized,
        {
            Latitude(rng.random_range(-90.0..=90.0))
        }
    }

    impl Distribution<Longitude> for StandardUniform {
        fn sample<R>(&self, rng: &mut R) -> Longitude
        where
            R: Rng + ?Sized,
        {
            Longitude(rng.random_range(-180.0..=180.0))
        }
    }
}
