use std::f64::consts::{FRAC_PI_2, PI};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Point2, Vector2, PRECISE_EPSILON};

/// A 2D point or displacement.
///
/// Drill hits are carried as bare `Vector`s; segments and polygons are built
/// from them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle` radians from the +X axis.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Signed angle from the +X axis, in `(-π, π]`.
    ///
    /// Near-vertical vectors skip the arctangent and return `±π/2` by the
    /// sign of `y`. The zero vector has angle `0`.
    #[must_use]
    pub fn angle(self) -> f64 {
        if self.x.abs() < PRECISE_EPSILON {
            if self.y.abs() < PRECISE_EPSILON {
                return 0.0;
            }
            return if self.y > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        }
        let angle = self.y.atan2(self.x);
        if angle <= -PI {
            PI
        } else {
            angle
        }
    }

    /// Returns this vector scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the magnitude is below
    /// [`PRECISE_EPSILON`].
    pub fn normalized(self) -> Result<Self> {
        let len = self.magnitude();
        if len < PRECISE_EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self / len)
    }

    /// This vector rotated 90° counter-clockwise.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// True when both coordinates are within `tolerance` distance.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        self.distance_to(other) <= tolerance
    }

    /// Applies a homogeneous 2D transform to this point.
    #[must_use]
    pub fn transformed(self, matrix: &Matrix3) -> Self {
        matrix.transform_point(&Point2::from(self)).into()
    }
}

impl From<Point2> for Vector {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector> for Point2 {
    fn from(v: Vector) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2 {
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
