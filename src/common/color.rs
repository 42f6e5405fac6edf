//! Defines the display color carried by every shape.

/// An RGB color. Shapes keep it in memory only; it is not part of the file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Color {
    pub const BLACK: Color = Color { red: 0, green: 0, blue: 0 };

    /// Creates a new color from its components.
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Color { red, green, blue }
    }
}
