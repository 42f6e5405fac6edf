pub mod math;
pub mod common;
pub mod bounds;
pub mod shapes;
pub mod storage;
pub mod console;
pub mod logging;

// Re-export key types for easier use
pub use math::Point;
pub use common::{Color, IdGenerator, ShapeId};
pub use bounds::AABB;
pub use shapes::{factory, Circle, Figure, Polyline, Rect, Shape, ShapeKind, Triangle};
pub use storage::{restore_all, save_all, RecordError, StorageError};
