// Defines an Axis-Aligned Bounding Box

use crate::common::IdGenerator;
use crate::math::Point;
use crate::shapes::Rect;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Point,
    pub max: Point,
}

impl AABB {
    /// Creates a new AABB. The corners may be given in any order.
    pub fn new(min: Point, max: Point) -> Self {
        AABB {
            min: Point::new(min.x.min(max.x), min.y.min(max.y)),
            max: Point::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for point in rest {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(AABB::new(min_pt, max_pt))
    }

    /// The box around a circle.
    pub fn around_circle(center: Point, radius: f64) -> Self {
        let r = Point::new(radius, radius);
        AABB::new(center - r, center + r)
    }

    /// Builds a rectangle shape from the min and max corners.
    pub fn to_rect(&self, ids: &mut IdGenerator) -> Rect {
        let mut rect = Rect::new();
        rect.set_diagonal(ids, self.min, self.max);
        rect
    }
}
