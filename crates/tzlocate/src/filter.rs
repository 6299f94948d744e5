//! The bounding box prefilter. Pure, it never touches a region's geometry.
use std::iter::FusedIterator;

use geo::Point;

use crate::catalog::{Catalog, ZoneRegion};

/// Returns every region whose (inclusive) bounding box covers 'point', in catalog order.
#[inline]
pub fn filter(catalog: &Catalog, point: Point) -> Candidates<'_> {
    Candidates {
        regions: catalog.iter(),
        point,
    }
}

impl Catalog {
    /// Shorthand for [`filter`].
    #[inline]
    pub fn candidates(&self, point: Point) -> Candidates<'_> {
        filter(self, point)
    }
}

/// Iterator over the bounding box candidates for a point. Created by [`filter`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    regions: std::slice::Iter<'a, ZoneRegion>,
    point: Point,
}

impl Candidates<'_> {
    /// The point being filtered for.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a ZoneRegion;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let point = self.point;
        self.regions.find(|region| region.bbox().contains(point))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.regions.size_hint().1)
    }
}

impl FusedIterator for Candidates<'_> {}
