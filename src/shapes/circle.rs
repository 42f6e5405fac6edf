use crate::bounds::AABB;
use crate::common::IdGenerator;
use crate::math::Point;
use crate::storage::record::DataLine;
use crate::storage::RecordError;

use super::{Figure, Outline, ShapeKind};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Circle {
    outline: Outline,
    radius: f64,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the center and radius. A circle has no boundary points.
    pub fn set(&mut self, ids: &mut IdGenerator, center: Point, radius: f64) {
        self.outline.assign(ids, Vec::new(), Some(center));
        self.radius = radius;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn bounding_box(&self) -> Option<AABB> {
        self.outline.center().map(|center| AABB::around_circle(center, self.radius))
    }
}

impl Figure for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn outline_mut(&mut self) -> &mut Outline {
        &mut self.outline
    }

    fn is_valid(&self) -> bool {
        false
    }

    fn fields(&self) -> Vec<f64> {
        vec![self.radius]
    }

    fn read_fields(&mut self, data: &DataLine) -> Result<(), RecordError> {
        data.expect_values(ShapeKind::Circle, 1)?;
        self.outline.restore(data, Vec::new());
        self.radius = data.values[0];
        Ok(())
    }
}
