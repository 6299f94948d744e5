use std::fmt;

pub mod nested;

pub use nested::{LinearRing, MultiPolygon, Polygon};

use crate::Position;

/// The minimum number of stored points a [`LinearRing`] needs to enclose any area.
pub const MIN_RING_POINTS: usize = 3;

/// An areal geometry, either a single (possibly holed) [`Polygon`] or a set of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(multi: MultiPolygon) -> Self {
        Self::MultiPolygon(multi)
    }
}

impl Geometry {
    /// Returns the constituent polygons. A [`Geometry::Polygon`] yields just itself.
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Self::Polygon(polygon) => std::slice::from_ref(polygon),
            Self::MultiPolygon(multi) => multi.as_slice(),
        }
    }

    /// Iterates over every point in every ring of every polygon.
    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        self.polygons().iter().flat_map(|polygon| polygon.points())
    }

    /// Checks the structure needed for containment tests to mean anything: at least one
    /// polygon, every polygon with an exterior ring, and every ring with
    /// [`MIN_RING_POINTS`] points.
    pub fn validate(&self) -> Result<(), InvalidGeometry> {
        if matches!(self, Self::MultiPolygon(multi) if multi.is_empty()) {
            return Err(InvalidGeometry::EmptyMultiPolygon);
        }

        for (polygon_idx, polygon) in self.polygons().iter().enumerate() {
            if polygon.is_empty() {
                return Err(InvalidGeometry::EmptyPolygon {
                    polygon: polygon_idx,
                });
            }

            for (ring_idx, ring) in polygon.iter().enumerate() {
                if ring.len() < MIN_RING_POINTS {
                    return Err(InvalidGeometry::RingTooShort {
                        polygon: polygon_idx,
                        ring: ring_idx,
                        points: ring.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Structural problems found by [`Geometry::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGeometry {
    EmptyMultiPolygon,
    EmptyPolygon {
        polygon: usize,
    },
    RingTooShort {
        polygon: usize,
        ring: usize,
        points: usize,
    },
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyMultiPolygon => formatter.write_str("multipolygon has no polygons"),
            Self::EmptyPolygon { polygon } => write!(formatter, "polygon {polygon} has no rings"),
            Self::RingTooShort {
                polygon,
                ring,
                points,
            } => write!(
                formatter,
                "ring {ring} of polygon {polygon} has {points} points, at least {MIN_RING_POINTS} are required"
            ),
        }
    }
}

impl std::error::Error for InvalidGeometry {}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<Position> {
        [(min, min), (max, min), (max, max), (min, max)]
            .into_iter()
            .map(Position::from)
            .collect()
    }

    #[test]
    fn test_validate() {
        let polygon: Polygon = [square(0.0, 10.0), square(2.0, 3.0)].into_iter().collect();
        let geometry = Geometry::from(polygon.clone());
        assert_eq!(geometry.validate(), Ok(()));

        let multi = Geometry::from(MultiPolygon::from(vec![polygon.clone(), Polygon::new()]));
        assert_eq!(
            multi.validate(),
            Err(InvalidGeometry::EmptyPolygon { polygon: 1 })
        );

        assert_eq!(
            Geometry::from(MultiPolygon::new()).validate(),
            Err(InvalidGeometry::EmptyMultiPolygon)
        );

        let mut short_hole = square(2.0, 3.0);
        short_hole.truncate(2);
        let with_short_hole: Polygon = [square(0.0, 10.0), short_hole].into_iter().collect();

        let err = Geometry::from(with_short_hole).validate().unwrap_err();
        assert_eq!(
            err,
            InvalidGeometry::RingTooShort {
                polygon: 0,
                ring: 1,
                points: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "ring 1 of polygon 0 has 2 points, at least 3 are required"
        );
    }

    #[test]
    fn test_points() {
        let multi = MultiPolygon::from(vec![
            [square(0.0, 1.0)].into_iter().collect::<Polygon>(),
            [square(5.0, 7.5), square(6.0, 7.0)].into_iter().collect::<Polygon>(),
        ]);
        let geometry = Geometry::from(multi);

        assert_eq!(geometry.polygons().len(), 2);
        assert_eq!(geometry.points().count(), 12);
        assert_eq!(geometry.points().last(), Some(Position::new(6.0, 7.0)));
    }
}
