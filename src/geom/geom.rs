use geo::{BoundingRect, Contains, Coord, MultiPolygon, Point, Rect};
use rstar::{RTree, AABB};

use super::bbox::BoundingBox;

/// Projected mark shapes with an R-tree over their bounding boxes, used to
/// answer "which mark is under the pointer".
#[derive(Debug, Clone)]
pub(crate) struct Geometries {
    shapes: Vec<MultiPolygon<f64>>,
    rtree: RTree<BoundingBox>,
}

impl Geometries {
    /// Construct from shapes in draw order. Empty shapes are kept (so indices
    /// line up with marks) but never indexed.
    pub(crate) fn new(shapes: Vec<MultiPolygon<f64>>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                shapes.iter().enumerate()
                    .filter_map(|(i, shape)| shape.bounding_rect().map(|rect| BoundingBox::new(i, rect)))
                    .collect()
            ),
            shapes,
        }
    }

    #[inline] pub(crate) fn len(&self) -> usize { self.shapes.len() }

    /// Index of the topmost shape containing the point. Shapes drawn later
    /// paint over earlier ones, so the highest index wins.
    pub(crate) fn locate(&self, x: f64, y: f64) -> Option<usize> {
        let point = Point::new(x, y);
        self.rtree.locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .map(BoundingBox::idx)
            .filter(|&i| self.shapes[i].contains(&point))
            .max()
    }
}

/// Bounding rectangle covering every non-empty shape.
pub(crate) fn union_bounds<'a>(shapes: impl Iterator<Item = &'a MultiPolygon<f64>>) -> Option<Rect<f64>> {
    shapes
        .filter_map(|polygon| polygon.bounding_rect())
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![polygon![
            (x: x0, y: y0), (x: x0 + size, y: y0), (x: x0 + size, y: y0 + size), (x: x0, y: y0 + size), (x: x0, y: y0),
        ]])
    }

    #[test]
    fn locate_finds_containing_shape() {
        let geoms = Geometries::new(vec![square(0.0, 0.0, 10.0), square(10.0, 0.0, 10.0)]);
        assert_eq!(geoms.len(), 2);
        assert_eq!(geoms.locate(5.0, 5.0), Some(0));
        assert_eq!(geoms.locate(15.0, 5.0), Some(1));
        assert_eq!(geoms.locate(25.0, 5.0), None);
    }

    #[test]
    fn locate_prefers_topmost_overlap() {
        let geoms = Geometries::new(vec![square(0.0, 0.0, 10.0), square(4.0, 4.0, 2.0)]);
        assert_eq!(geoms.locate(5.0, 5.0), Some(1));
        assert_eq!(geoms.locate(1.0, 1.0), Some(0));
    }

    #[test]
    fn empty_shapes_are_skipped() {
        let geoms = Geometries::new(vec![MultiPolygon::new(Vec::new()), square(0.0, 0.0, 1.0)]);
        assert_eq!(geoms.locate(0.5, 0.5), Some(1));
        let bounds = union_bounds(geoms.shapes.iter()).unwrap();
        assert_eq!((bounds.min().x, bounds.max().y), (0.0, 1.0));
    }
}
