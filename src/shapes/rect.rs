use crate::bounds::AABB;
use crate::common::IdGenerator;
use crate::math::Point;
use crate::storage::record::{self, DataLine};
use crate::storage::RecordError;

use super::{Figure, Outline, ShapeKind};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rect {
    outline: Outline,
    // Not derived from the corners, so both stay zero.
    width: f64,
    height: f64,
}

impl Rect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the four corners. The center is their mean.
    pub fn set(&mut self, ids: &mut IdGenerator, p1: Point, p2: Point, p3: Point, p4: Point) {
        let corners = vec![p1, p2, p3, p4];
        let center = Point::mean(&corners);
        self.outline.assign(ids, corners, center);
    }

    /// Sets the rectangle from two opposite corners, filling in the other two.
    pub fn set_diagonal(&mut self, ids: &mut IdGenerator, p1: Point, p3: Point) {
        let p2 = Point::new(p3.x, p1.y);
        let p4 = Point::new(p1.x, p3.y);
        self.set(ids, p1, p2, p3, p4);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bounding_box(&self) -> Option<AABB> {
        AABB::from_points(self.outline.points())
    }
}

impl Figure for Rect {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rect
    }

    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn outline_mut(&mut self) -> &mut Outline {
        &mut self.outline
    }

    fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    fn fields(&self) -> Vec<f64> {
        record::coordinates(self.outline.points())
    }

    fn read_fields(&mut self, data: &DataLine) -> Result<(), RecordError> {
        data.expect_values(ShapeKind::Rect, 8)?;
        let corners = record::points_from(ShapeKind::Rect, &data.values)?;
        self.outline.restore(data, corners);
        Ok(())
    }
}
