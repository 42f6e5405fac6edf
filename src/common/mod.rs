pub mod color;
pub mod id;

pub use color::Color;
pub use id::{IdGenerator, ShapeId};
