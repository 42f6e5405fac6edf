use crate::bounds::AABB;
use crate::common::IdGenerator;
use crate::math::Point;
use crate::storage::record::{self, DataLine};
use crate::storage::RecordError;

use super::{Figure, Outline, ShapeKind};

/// An open chain of line segments through its vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    outline: Outline,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polyline and sets its vertices in one step.
    pub fn with_points(ids: &mut IdGenerator, points: Vec<Point>) -> Self {
        let mut polyline = Self::new();
        polyline.set(ids, points);
        polyline
    }

    /// Sets the vertices. The center is the mean of all of them (None if there are none).
    pub fn set(&mut self, ids: &mut IdGenerator, points: Vec<Point>) {
        let center = Point::mean(&points);
        self.outline.assign(ids, points, center);
    }

    pub fn bounding_box(&self) -> Option<AABB> {
        AABB::from_points(self.outline.points())
    }
}

impl Figure for Polyline {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polyline
    }

    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn outline_mut(&mut self) -> &mut Outline {
        &mut self.outline
    }

    fn is_valid(&self) -> bool {
        self.outline.points().len() >= 2
    }

    fn fields(&self) -> Vec<f64> {
        record::coordinates(self.outline.points())
    }

    fn read_fields(&mut self, data: &DataLine) -> Result<(), RecordError> {
        let vertices = record::points_from(ShapeKind::Polyline, &data.values)?;
        self.outline.restore(data, vertices);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
            Point::new(4.0, 2.0),
            Point::new(5.0, 1.0),
            Point::new(3.0, 4.0),
            Point::new(4.0, 4.0),
        ]
    }

    #[test]
    fn test_polyline_center_is_vertex_mean() {
        let mut ids = IdGenerator::new();
        let polyline = Polyline::with_points(&mut ids, zigzag());
        let center = polyline.center().unwrap();
        assert!((center.x - 20.0 / 6.0).abs() < EPSILON);
        assert!((center.y - 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_polyline_validity() {
        let mut ids = IdGenerator::new();
        assert!(!Polyline::with_points(&mut ids, vec![]).is_valid());
        assert!(!Polyline::with_points(&mut ids, vec![Point::new(1.0, 1.0)]).is_valid());
        assert!(Polyline::with_points(&mut ids, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]).is_valid());
        assert!(Polyline::with_points(&mut ids, zigzag()).is_valid());
    }

    #[test]
    fn test_polyline_without_points_has_no_center() {
        let mut ids = IdGenerator::new();
        let polyline = Polyline::with_points(&mut ids, vec![]);
        assert_eq!(polyline.center(), None);
        assert_eq!(polyline.bounding_box(), None);
    }

    #[test]
    fn test_polyline_bounding_box() {
        let mut ids = IdGenerator::new();
        let aabb = Polyline::with_points(&mut ids, zigzag()).bounding_box().unwrap();
        assert_eq!(aabb.min, Point::new(1.0, 1.0));
        assert_eq!(aabb.max, Point::new(5.0, 4.0));
    }

    #[test]
    fn test_polyline_record() {
        let mut ids = IdGenerator::new();
        let polyline = Polyline::with_points(&mut ids, zigzag());
        let mut out = Vec::new();
        polyline.write_record(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let data_line = text.lines().nth(1).unwrap();
        assert!(data_line.ends_with(",2.5,1,1,3,3,4,2,5,1,3,4,4,4"));

        let mut restored = Polyline::new();
        restored.read_record(data_line).unwrap();
        assert_eq!(restored, polyline);
    }
}
