use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::PRECISE_EPSILON;

use super::Vector;

/// A circle in the plane.
///
/// Carried through the pipeline as data: it can be mirrored and translated
/// but is never offset or intersected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vector,
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not a positive finite number.
    pub fn new(center: Vector, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < PRECISE_EPSILON {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}
