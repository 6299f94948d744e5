//! Nearest region fallback, for callers that want *some* zone for points that fall between
//! region geometries (coastal waters, simplification gaps).
//!
//! Never used by [`ZoneFinder::lookup`](crate::ZoneFinder::lookup): the nearest region by
//! vertex distance isn't necessarily the zone that actually governs a point.
use geo::ang::Degrees;
use geo::{Point, Position};

use crate::catalog::ZoneRegion;
use crate::error::GeometryError;
use crate::loader::GeometryLoader;

/// A region picked by [`nearest_zone`], along with how far away it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub zone_id: &'a str,
    /// Great circle distance from the point to the closest vertex of the region's geometry.
    pub distance: Degrees,
}

/// Ranks 'regions' by the great circle distance from 'point' to the closest vertex of each
/// region's geometry, returning the closest. Ties keep the earliest region.
///
/// Every region's geometry is loaded, so 'regions' should already be narrowed down, e.g to
/// the bounding box candidates of the point.
pub fn nearest_zone<'a, I, L>(
    regions: I,
    loader: &L,
    point: Point,
) -> Result<Option<Nearest<'a>>, GeometryError>
where
    I: IntoIterator<Item = &'a ZoneRegion>,
    L: GeometryLoader + ?Sized,
{
    let mut nearest: Option<Nearest<'a>> = None;

    let origin = Position::from(point);

    for region in regions {
        let geometry = loader.load(region)?;

        let Some(distance) = geometry
            .points()
            .map(|vertex| origin.angular_distance(&vertex))
            .min_by(Degrees::total_cmp)
        else {
            continue;
        };

        if nearest.is_none_or(|current| distance.total_cmp(&current.distance).is_lt()) {
            nearest = Some(Nearest {
                zone_id: region.zone_id(),
                distance,
            });
        }
    }

    Ok(nearest)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geo::Geometry;
    use geo::geom::{LinearRing, Polygon};

    use super::*;
    use crate::catalog::{Catalog, GeometryRef};

    /// Serves a unit square whose lower left corner is the handle, i.e `"3,4"`.
    struct Squares;

    impl GeometryLoader for Squares {
        fn load(&self, region: &ZoneRegion) -> Result<Arc<Geometry>, GeometryError> {
            let handle = region.geometry_ref().path().to_string_lossy();
            let (x, y) = handle.split_once(',').unwrap();
            let (x, y): (f64, f64) = (x.parse().unwrap(), y.parse().unwrap());

            let ring = [(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0)]
                .into_iter()
                .map(Position::from)
                .collect::<LinearRing>();

            Ok(Arc::new(Geometry::Polygon(Polygon::from(vec![ring]))))
        }
    }

    fn catalog(squares: &[(&str, &str)]) -> Catalog {
        squares
            .iter()
            .map(|&(zone_id, handle)| {
                let bbox = geo::Region::from_point(Point::new_checked(0.0, 0.0).unwrap());
                ZoneRegion::new(zone_id, bbox, GeometryRef::new(handle))
            })
            .collect()
    }

    #[test]
    fn test_nearest_zone() {
        let catalog = catalog(&[("Etc/Far", "10,10"), ("Etc/Near", "2,0"), ("Etc/West", "-4,0")]);
        let point = Point::new_checked(0.0, 0.5).unwrap();

        let nearest = nearest_zone(&catalog, &Squares, point).unwrap().unwrap();

        assert_eq!(nearest.zone_id, "Etc/Near");
        assert!(nearest.distance.get() > 1.9 && nearest.distance.get() < 2.1);
    }

    #[test]
    fn test_ties_keep_the_first() {
        let catalog = catalog(&[("Etc/First", "1,0"), ("Etc/Second", "1,0")]);
        let point = Point::new_checked(0.0, 0.0).unwrap();

        let nearest = nearest_zone(&catalog, &Squares, point).unwrap().unwrap();
        assert_eq!(nearest.zone_id, "Etc/First");
    }

    #[test]
    fn test_no_regions() {
        let point = Point::new_checked(0.0, 0.0).unwrap();
        assert_eq!(nearest_zone(&Catalog::default(), &Squares, point).unwrap(), None);
    }
}
