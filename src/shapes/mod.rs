pub mod circle;
pub mod figure;
pub mod polyline;
pub mod rect;
pub mod triangle;

use std::fmt;
use std::io::Write;

// Re-export the specific shape types
pub use circle::Circle;
pub use figure::{Figure, Outline};
pub use polyline::Polyline;
pub use rect::Rect;
pub use triangle::Triangle;

use crate::common::{Color, ShapeId};
use crate::math::Point;
use crate::storage::{RecordError, StorageError};

/// The four kinds of shape, with their file tags and factory selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Circle,
    Triangle,
    Polyline,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [ShapeKind::Rect, ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Polyline];

    /// The tag line that introduces a record of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Polyline => "polyline",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// 1 = rectangle, 2 = circle, 3 = triangle, 4 = polyline.
    pub fn from_selector(selector: i32) -> Option<Self> {
        match selector {
            1 => Some(ShapeKind::Rect),
            2 => Some(ShapeKind::Circle),
            3 => Some(ShapeKind::Triangle),
            4 => Some(ShapeKind::Polyline),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Enum representing any of the four shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    Triangle(Triangle),
    Polyline(Polyline),
}

impl Shape {
    /// A shape of the given kind whose geometry has not been set yet.
    pub fn empty(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rect => Shape::Rect(Rect::new()),
            ShapeKind::Circle => Shape::Circle(Circle::new()),
            ShapeKind::Triangle => Shape::Triangle(Triangle::new()),
            ShapeKind::Polyline => Shape::Polyline(Polyline::new()),
        }
    }

    /// Decodes a shape from its data line.
    pub fn from_record(kind: ShapeKind, line: &str) -> Result<Self, RecordError> {
        let mut shape = Shape::empty(kind);
        shape.read_record(line)?;
        Ok(shape)
    }

    pub fn as_figure(&self) -> &dyn Figure {
        match self {
            Shape::Rect(rect) => rect,
            Shape::Circle(circle) => circle,
            Shape::Triangle(triangle) => triangle,
            Shape::Polyline(polyline) => polyline,
        }
    }

    pub fn as_figure_mut(&mut self) -> &mut dyn Figure {
        match self {
            Shape::Rect(rect) => rect,
            Shape::Circle(circle) => circle,
            Shape::Triangle(triangle) => triangle,
            Shape::Polyline(polyline) => polyline,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.as_figure().kind()
    }

    pub fn center(&self) -> Option<Point> {
        self.as_figure().center()
    }

    pub fn points(&self) -> &[Point] {
        self.as_figure().points()
    }

    pub fn id(&self) -> ShapeId {
        self.as_figure().id()
    }

    pub fn is_valid(&self) -> bool {
        self.as_figure().is_valid()
    }

    pub fn color(&self) -> Color {
        self.as_figure().color()
    }

    pub fn set_color(&mut self, red: i32, green: i32, blue: i32) {
        self.as_figure_mut().set_color(red, green, blue)
    }

    pub fn write_record(&self, out: &mut dyn Write) -> Result<(), StorageError> {
        self.as_figure().write_record(out)
    }

    pub fn read_record(&mut self, line: &str) -> Result<(), RecordError> {
        self.as_figure_mut().read_record(line)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Shape::Polyline(polyline)
    }
}

/// Creates an unconfigured shape from a selector (see `ShapeKind::from_selector`).
/// Returns None for an unknown selector.
pub fn factory(selector: i32) -> Option<Shape> {
    ShapeKind::from_selector(selector).map(Shape::empty)
}
