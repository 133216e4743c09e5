use crate::geometry::Geometry;
use crate::math::Matrix3;

/// Applies a 3x3 homogeneous matrix to every point of a geometry batch.
///
/// Circles map their center only; the matrices used here are rigid so the
/// radius stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineTransform2D {
    matrix: Matrix3,
}

impl AffineTransform2D {
    /// Creates a new `AffineTransform2D` operation.
    #[must_use]
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Executes the transformation, modifying the batch in place.
    pub fn execute(&self, batch: &mut [Geometry]) {
        for geometry in batch {
            geometry.map_points(|p| p.transformed(&self.matrix));
        }
    }
}
