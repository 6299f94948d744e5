//! Point-in-polygon tests.
//!
//! Rings are tested by ray casting with the even-odd rule: a horizontal ray is cast from the
//! point towards +x, and each ring edge it crosses is counted. An odd count means the point is
//! inside the ring.
//!
//! Edges are treated as half-open in y (an edge only counts when exactly one endpoint lies
//! strictly above the point), so a ray passing through a shared vertex is counted once.
//! Points lying exactly on an edge are not special-cased, and may land on either side
//! depending on floating point rounding in the intersection.
use crate::geom::{Geometry, LinearRing, MultiPolygon, Polygon};
use crate::{Point, Region};

/// Types that can answer whether a [`Point`] lies within them.
pub trait ContainsPoint {
    fn contains_point(&self, point: Point) -> bool;
}

impl<T> ContainsPoint for &T
where
    T: ContainsPoint + ?Sized,
{
    #[inline]
    fn contains_point(&self, point: Point) -> bool {
        T::contains_point(self, point)
    }
}

impl LinearRing {
    /// The number of ring edges crossed by a ray cast from 'point' towards +x.
    pub fn ray_crossings(&self, point: Point) -> usize {
        let (x, y) = (point.x(), point.y());

        self.edges()
            .filter(|(a, b)| {
                let (xa, ya) = (a.x(), a.y());
                let (xb, yb) = (b.x(), b.y());

                // straddling guarantees ya != yb, so the division below is safe
                (yb > y) != (ya > y) && x < (xa - xb) * (y - yb) / (ya - yb) + xb
            })
            .count()
    }
}

impl ContainsPoint for LinearRing {
    #[inline]
    fn contains_point(&self, point: Point) -> bool {
        self.ray_crossings(point) % 2 == 1
    }
}

/// Inside the exterior ring and outside every hole. Holes are assumed not to nest, a hole
/// inside a hole is still excluded rather than toggling back to inside.
impl ContainsPoint for Polygon {
    fn contains_point(&self, point: Point) -> bool {
        match self.exterior() {
            Some(exterior) if exterior.contains_point(point) => {
                !self.holes().iter().any(|hole| hole.contains_point(point))
            }
            _ => false,
        }
    }
}

/// Union semantics: any polygon containing the point is enough.
impl ContainsPoint for MultiPolygon {
    #[inline]
    fn contains_point(&self, point: Point) -> bool {
        self.iter().any(|polygon| polygon.contains_point(point))
    }
}

impl ContainsPoint for Geometry {
    #[inline]
    fn contains_point(&self, point: Point) -> bool {
        match self {
            Self::Polygon(polygon) => polygon.contains_point(point),
            Self::MultiPolygon(multi) => multi.contains_point(point),
        }
    }
}

impl ContainsPoint for Region {
    #[inline]
    fn contains_point(&self, point: Point) -> bool {
        self.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::{Latitude, Longitude, Position};

    fn pt(lon: f64, lat: f64) -> Point {
        Point::new_checked(lon, lat).unwrap()
    }

    fn ring(coords: &[(f64, f64)]) -> LinearRing {
        coords.iter().copied().map(Position::from).collect()
    }

    fn square(min: f64, max: f64) -> LinearRing {
        ring(&[(min, min), (max, min), (max, max), (min, max)])
    }

    #[test]
    fn test_ring_even_odd() {
        let square = square(0.0, 10.0);

        assert!(square.contains_point(pt(5.0, 5.0)));
        assert!(square.contains_point(pt(0.5, 9.5)));
        assert!(!square.contains_point(pt(-1.0, 5.0)));
        assert!(!square.contains_point(pt(11.0, 5.0)));
        assert!(!square.contains_point(pt(5.0, 10.5)));

        assert_eq!(square.ray_crossings(pt(-1.0, 5.0)), 2);
        assert_eq!(square.ray_crossings(pt(5.0, 5.0)), 1);
        assert_eq!(square.ray_crossings(pt(11.0, 5.0)), 0);
    }

    #[test]
    fn test_explicit_and_implicit_closure_agree() {
        let open = ring(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)]);
        let closed = ring(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0), (0.0, 0.0)]);

        for point in [pt(2.0, 1.0), pt(2.0, 3.9), pt(0.5, 2.0), pt(3.5, 2.0), pt(-1.0, 1.0)] {
            assert_eq!(open.contains_point(point), closed.contains_point(point));
            assert_eq!(open.ray_crossings(point), closed.ray_crossings(point));
        }
    }

    #[test]
    fn test_ray_through_vertex_counts_once() {
        // diamond, the ray from (0, 0) passes exactly through the right vertex (2, 0)
        let diamond = ring(&[(0.0, -2.0), (2.0, 0.0), (0.0, 2.0), (-2.0, 0.0)]);

        assert_eq!(diamond.ray_crossings(pt(0.0, 0.0)), 1);
        assert!(diamond.contains_point(pt(0.0, 0.0)));
        // left of the diamond the ray passes through both side vertices
        assert_eq!(diamond.ray_crossings(pt(-3.0, 0.0)), 2);
        assert!(!diamond.contains_point(pt(-3.0, 0.0)));
    }

    #[test]
    fn test_concave_ring() {
        // a 'U' shape, open towards +y
        let u_shape = ring(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 6.0),
            (4.0, 6.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 6.0),
            (0.0, 6.0),
        ]);

        assert!(u_shape.contains_point(pt(1.0, 4.0)));
        assert!(u_shape.contains_point(pt(5.0, 4.0)));
        assert!(u_shape.contains_point(pt(3.0, 1.0)));
        assert!(!u_shape.contains_point(pt(3.0, 4.0)));
        assert_eq!(u_shape.ray_crossings(pt(-1.0, 4.0)), 4);
    }

    #[test]
    fn test_polygon_with_holes() {
        let polygon = Polygon::from(vec![
            square(0.0, 10.0),
            square(2.0, 4.0),
            square(6.0, 8.0),
        ]);

        assert!(polygon.contains_point(pt(5.0, 5.0)));
        assert!(polygon.contains_point(pt(1.0, 1.0)));
        assert!(!polygon.contains_point(pt(3.0, 3.0)));
        assert!(!polygon.contains_point(pt(7.0, 7.0)));
        assert!(!polygon.contains_point(pt(12.0, 3.0)));
    }

    #[test]
    fn test_nested_hole_stays_excluded() {
        // an island inside a lake: holes don't toggle, so the island is still outside
        let polygon = Polygon::from(vec![square(0.0, 10.0), square(2.0, 8.0), square(4.0, 6.0)]);

        assert!(!polygon.contains_point(pt(5.0, 5.0)));
        assert!(!polygon.contains_point(pt(3.0, 3.0)));
        assert!(polygon.contains_point(pt(1.0, 1.0)));
    }

    #[test]
    fn test_empty_polygon_contains_nothing() {
        assert!(!Polygon::new().contains_point(pt(0.0, 0.0)));
        assert!(!MultiPolygon::new().contains_point(pt(0.0, 0.0)));
    }

    #[test]
    fn test_vertex_past_the_antimeridian() {
        // one vertex a hair past 180, still a plain edge endpoint
        let sliver = ring(&[(170.0, 0.0), (180.0000001, 0.0), (180.0000001, 10.0), (170.0, 10.0)]);

        assert!(sliver.contains_point(pt(177.0, 5.0)));
        assert!(sliver.contains_point(pt(180.0, 5.0)));
        assert!(!sliver.contains_point(pt(169.0, 5.0)));
    }

    #[test]
    fn test_multipolygon_union() {
        let multi = MultiPolygon::from(vec![
            Polygon::from(vec![square(0.0, 1.0)]),
            Polygon::from(vec![square(5.0, 10.0), square(6.0, 7.0)]),
        ]);
        let geometry = Geometry::from(multi);

        assert!(geometry.contains_point(pt(0.5, 0.5)));
        assert!(geometry.contains_point(pt(8.0, 8.0)));
        assert!(!geometry.contains_point(pt(6.5, 6.5)));
        assert!(!geometry.contains_point(pt(3.0, 3.0)));
    }

    #[test]
    fn test_random_points_match_bounds_for_rectangle() {
        let mut rng = rand::rng();
        let rectangle = Polygon::from(vec![ring(&[
            (-20.0, -10.0),
            (30.0, -10.0),
            (30.0, 40.0),
            (-20.0, 40.0),
        ])]);
        let bounds = Region::new(
            Longitude::new_checked(-20.0).unwrap(),
            Longitude::new_checked(30.0).unwrap(),
            Latitude::new_checked(-10.0).unwrap(),
            Latitude::new_checked(40.0).unwrap(),
        )
        .unwrap();

        for _ in 0..10_000 {
            let point = pt(rng.random_range(-60.0..60.0), rng.random_range(-60.0..60.0));

            // skip the edges themselves, those are allowed to go either way
            let on_edge = [-20.0, 30.0].contains(&point.x()) || [-10.0, 40.0].contains(&point.y());
            if on_edge {
                continue;
            }

            assert_eq!(
                rectangle.contains_point(point),
                bounds.contains_point(point),
                "{point}"
            );
        }
    }
}
