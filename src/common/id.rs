//! Shape identifiers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use log::warn;

/// Identifies a shape record. Has no meaning beyond telling records apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ShapeId(pub u64);

impl ShapeId {
    /// Id of a shape whose geometry has never been set.
    pub const UNASSIGNED: ShapeId = ShapeId(0);

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShapeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ShapeId)
    }
}

/// Hands out shape ids. Ids are strictly increasing and never reused until the
/// id space runs out, after which every id is `u64::MAX`.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator { next: 1 }
    }

    /// Returns a fresh id.
    pub fn next_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        if self.next == u64::MAX {
            warn!("Shape ids exhausted, reusing {}", id);
        }
        self.next = self.next.saturating_add(1);
        id
    }

    /// Moves the generator past an id that came from elsewhere (e.g. a file),
    /// so later ids cannot collide with it.
    pub fn observe(&mut self, id: ShapeId) {
        if id.0 >= self.next {
            self.next = id.0.saturating_add(1);
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
