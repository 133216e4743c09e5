use crate::geometry::{Geometry, Vector};
use crate::math::Matrix3;

use super::AffineTransform2D;

/// Translates a geometry batch by a displacement vector.
#[derive(Debug)]
pub struct Translate {
    displacement: Vector,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector) -> Self {
        Self { displacement }
    }

    /// The homogeneous translation matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        let mut matrix = Matrix3::identity();
        matrix[(0, 2)] = self.displacement.x;
        matrix[(1, 2)] = self.displacement.y;
        matrix
    }

    /// Executes the translation, modifying the batch in place.
    pub fn execute(&self, batch: &mut [Geometry]) {
        AffineTransform2D::new(self.matrix()).execute(batch);
    }
}
