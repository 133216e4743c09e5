mod sweep;

pub use sweep::SweepIntersect;

use crate::geometry::Vector;

/// A crossing between two segments of a batch, identified by their indices.
///
/// `between.0 < between.1` always holds; the pair is ordered on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub point: Vector,
    pub between: (usize, usize),
}

impl Intersection {
    #[must_use]
    pub fn new(point: Vector, a: usize, b: usize) -> Self {
        Self {
            point,
            between: (a.min(b), a.max(b)),
        }
    }

    /// The smaller segment index.
    #[must_use]
    pub fn lower(&self) -> usize {
        self.between.0
    }

    /// The larger segment index.
    #[must_use]
    pub fn upper(&self) -> usize {
        self.between.1
    }
}
