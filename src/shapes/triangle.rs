use crate::bounds::AABB;
use crate::common::IdGenerator;
use crate::math::Point;
use crate::storage::record::{self, DataLine};
use crate::storage::RecordError;

use super::{Figure, Outline, ShapeKind};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangle {
    outline: Outline,
    // Stored and persisted, but never derived from the vertices.
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the three vertices. The center is their mean.
    pub fn set(&mut self, ids: &mut IdGenerator, p1: Point, p2: Point, p3: Point) {
        let vertices = vec![p1, p2, p3];
        let center = Point::mean(&vertices);
        self.outline.assign(ids, vertices, center);
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bounding_box(&self) -> Option<AABB> {
        AABB::from_points(self.outline.points())
    }
}

impl Figure for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
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
        let mut fields = record::coordinates(self.outline.points());
        fields.push(self.base);
        fields.push(self.height);
        fields
    }

    fn read_fields(&mut self, data: &DataLine) -> Result<(), RecordError> {
        data.expect_values(ShapeKind::Triangle, 8)?;
        let vertices = record::points_from(ShapeKind::Triangle, &data.values[..6])?;
        self.outline.restore(data, vertices);
        self.base = data.values[6];
        self.height = data.values[7];
        Ok(())
    }
}
