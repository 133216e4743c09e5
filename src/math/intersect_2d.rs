use crate::geometry::Vector;

use super::{PARAM_EPSILON, PRECISE_EPSILON};

/// True when two direction vectors are parallel within [`PRECISE_EPSILON`].
///
/// The determinant is compared relative to the product of the lengths, so the
/// test is a bound on the sine of the angle between them and does not depend
/// on the coordinate scale.
#[must_use]
pub fn is_parallel(d1: Vector, d2: Vector) -> bool {
    d1.cross(d2).abs() <= PRECISE_EPSILON * d1.magnitude() * d2.magnitude()
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(p1: Vector, d1: Vector, p2: Vector, d2: Vector) -> Option<(f64, f64)> {
    if is_parallel(d1, d2) {
        return None;
    }
    let cross = d1.cross(d2);
    let delta = p2 - p1;
    let t = delta.cross(d2) / cross;
    let u = delta.cross(d1) / cross;
    Some((t, u))
}

/// True when `t` lies in `[0, 1]` widened by [`PARAM_EPSILON`].
#[must_use]
pub fn param_in_unit_range(t: f64) -> bool {
    (-PARAM_EPSILON..=1.0 + PARAM_EPSILON).contains(&t)
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: Vector, dir: Vector, t: f64) -> Vector {
    origin + dir * t
}
