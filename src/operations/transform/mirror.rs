use crate::geometry::Geometry;
use crate::math::Matrix3;

use super::AffineTransform2D;

/// Coordinate negated by a [`Mirror`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAxis {
    /// Negates x: reflects across the y axis.
    X,
    /// Negates y: reflects across the x axis.
    Y,
}

/// Mirrors a geometry batch by negating one coordinate of every point.
#[derive(Debug)]
pub struct Mirror {
    axis: MirrorAxis,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(axis: MirrorAxis) -> Self {
        Self { axis }
    }

    /// The homogeneous reflection matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        let mut matrix = Matrix3::identity();
        match self.axis {
            MirrorAxis::X => matrix[(0, 0)] = -1.0,
            MirrorAxis::Y => matrix[(1, 1)] = -1.0,
        }
        matrix
    }

    /// Executes the mirror, modifying the batch in place.
    pub fn execute(&self, batch: &mut [Geometry]) {
        AffineTransform2D::new(self.matrix()).execute(batch);
    }
}
