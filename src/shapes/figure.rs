use std::io::Write;

use crate::common::{Color, IdGenerator, ShapeId};
use crate::math::Point;
use crate::storage::record::{self, DataLine};
use crate::storage::{RecordError, StorageError};

use super::ShapeKind;

/// The state every shape variant carries: center, boundary points, color and id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    center: Option<Point>,
    points: Vec<Point>,
    color: Color,
    id: ShapeId,
}

impl Outline {
    /// Replaces the geometry and takes a fresh id.
    pub(crate) fn assign(&mut self, ids: &mut IdGenerator, points: Vec<Point>, center: Option<Point>) {
        self.points = points;
        self.center = center;
        self.id = ids.next_id();
    }

    /// Replaces the geometry with what a record says, keeping the record's id.
    pub(crate) fn restore(&mut self, data: &DataLine, points: Vec<Point>) {
        self.id = data.id;
        self.center = Some(data.center);
        self.points = points;
    }

    pub fn center(&self) -> Option<Point> {
        self.center
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }
}

/// Behaviour shared by the four shape variants.
pub trait Figure {
    fn kind(&self) -> ShapeKind;

    fn outline(&self) -> &Outline;

    fn outline_mut(&mut self) -> &mut Outline;

    fn is_valid(&self) -> bool;

    /// The values written after the id and center.
    fn fields(&self) -> Vec<f64>;

    /// Rewrites this shape from a decoded data line. Leaves the shape untouched on error.
    fn read_fields(&mut self, data: &DataLine) -> Result<(), RecordError>;

    /// The center, or None if the geometry has not been set.
    fn center(&self) -> Option<Point> {
        self.outline().center()
    }

    fn points(&self) -> &[Point] {
        self.outline().points()
    }

    fn id(&self) -> ShapeId {
        self.outline().id()
    }

    fn color(&self) -> Color {
        self.outline().color()
    }

    fn set_color(&mut self, red: i32, green: i32, blue: i32) {
        self.outline_mut().color = Color::new(red, green, blue);
    }

    /// Writes the tag line and data line for this shape.
    fn write_record(&self, out: &mut dyn Write) -> Result<(), StorageError> {
        let center = self.center().ok_or_else(|| StorageError::Unconfigured(self.kind()))?;
        record::write_record(out, self.kind(), self.id(), center, &self.fields())
    }

    /// Reads this shape back from a data line (the line after the tag).
    fn read_record(&mut self, line: &str) -> Result<(), RecordError> {
        let data = DataLine::parse(line)?;
        self.read_fields(&data)
    }
}
