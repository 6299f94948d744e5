//! Coordinate types that contain nested [`Position`]s ([`LinearRing`]s, [`Polygon`]s, etc.)
use std::fmt;

use serde::{Deserialize, de};

use crate::Position;

macro_rules! impl_nested_geometries {
    ($(
        ($name:ident, $inner:ty)
    ),* $(,)?) => {
        $(
            #[doc = "Defines GeoJson "]
            #[doc = stringify!($name)]
            #[doc = " coordinates. Thin wrapper around `[`Vec`]<[`"]
            #[doc = stringify!($inner)]
            #[doc = "`]>`."]
            #[repr(transparent)]
            #[derive(Debug, Clone, PartialEq)]
            pub struct $name(Vec<$inner>);

            impl $name {
                #[doc = "Creates an empty [`"]
                #[doc = stringify!($name)]
                #[doc = "`]"]
                #[inline]
                pub fn new() -> Self {
                    Self(Vec::new())
                }

                #[doc = "Pushes an [`"]
                #[doc = stringify!($inner)]
                #[doc = "`] to the end of any existing ones."]
                #[inline]
                pub fn push(&mut self, inner: $inner) {
                    self.0.push(inner);
                }

                #[doc = "Returns the number of inner [`"]
                #[doc = stringify!($inner)]
                #[doc = "`] contained within this instance"]
                #[inline]
                pub fn len(&self) -> usize {
                    self.0.len()
                }

                #[doc = "Whether or not this contains any [`"]
                #[doc = stringify!($inner)]
                #[doc = "`]"]
                #[inline]
                pub fn is_empty(&self) -> bool {
                    self.0.is_empty()
                }

                #[doc = "Returns an [`Iterator`] over references to the inner [`"]
                #[doc = stringify!($inner)]
                #[doc = "`]"]
                #[inline]
                pub fn iter(&self) -> std::slice::Iter<'_, $inner> {
                    self.0.as_slice().iter()
                }

                #[doc = "Returns a slice of the inner [`"]
                #[doc = stringify!($inner)]
                #[doc = "`]"]
                #[inline]
                pub fn as_slice(&self) -> &[$inner] {
                    self.0.as_slice()
                }
            }

            impl Default for $name {
                #[inline]
                fn default() -> Self {
                    Self::new()
                }
            }

            impl From<Vec<$inner>> for $name {
                #[inline]
                fn from(vec: Vec<$inner>) -> Self {
                    Self(vec)
                }
            }

            impl<'a> IntoIterator for &'a $name {
                type Item = &'a $inner;
                type IntoIter = std::slice::Iter<'a, $inner>;

                fn into_iter(self) -> Self::IntoIter {
                    self.0.iter()
                }
            }

            impl FromIterator<$inner> for $name {
                fn from_iter<I>(iter: I) -> Self
                where
                    I: IntoIterator<Item = $inner>
                {
                    Self(iter.into_iter().collect::<Vec<$inner>>())
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: de::Deserializer<'de>
                {
                    deserializer.deserialize_seq(NestedVisitor::new(stringify!($name))).map(Self)
                }
            }
        )*
    };
}

impl_nested_geometries! {
    (LinearRing, Position),
    (Polygon, LinearRing),
    (MultiPolygon, Polygon),
}

impl LinearRing {
    /// Iterates over every edge of the ring as `(start, end)` pairs, including the closing edge
    /// from the last point back to the first. Rings are implicitly closed, if the first point is
    /// also stored as the last one the closing edge simply has zero length.
    pub fn edges(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        let closing = self.0.last().copied();

        self.0.iter().scan(closing, |prev, &point| {
            let start = prev.replace(point)?;
            Some((start, point))
        })
    }
}

impl Polygon {
    /// The outer boundary (ring 0), if there is one.
    #[inline]
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.0.first()
    }

    /// Every ring after the exterior, each one a hole.
    #[inline]
    pub fn holes(&self) -> &[LinearRing] {
        self.0.get(1..).unwrap_or_default()
    }

    /// Iterates over every point of every ring.
    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().flat_map(|ring| ring.iter().copied())
    }
}

// allows building polygons straight from nested position vectors
impl FromIterator<Vec<Position>> for Polygon {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Vec<Position>>,
    {
        iter.into_iter().map(LinearRing).collect::<Polygon>()
    }
}

struct NestedVisitor<'a, T> {
    expecting: &'a str,
    _inner: std::marker::PhantomData<T>,
}

impl<'a, T> NestedVisitor<'a, T> {
    fn new(expecting: &'a str) -> Self {
        Self {
            expecting,
            _inner: std::marker::PhantomData,
        }
    }
}

impl<'de, T> de::Visitor<'de> for NestedVisitor<'_, T>
where
    T: Deserialize<'de>,
{
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "valid {} coordinates", self.expecting)
    }

    fn visit_seq<S>(self, mut seq_access: S) -> Result<Self::Value, S::Error>
    where
        S: de::SeqAccess<'de>,
    {
        let mut coords = seq_access
            .size_hint()
            .map(Vec::with_capacity)
            .unwrap_or_default();

        while let Some(elem) = seq_access.next_element()? {
            coords.push(elem);
        }

        Ok(coords)
    }
}
