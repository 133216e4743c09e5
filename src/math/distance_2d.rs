use crate::geometry::Vector;

/// Returns the minimum distance from `point` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(point: Vector, a: Vector, b: Vector) -> f64 {
    let d = b - a;
    let len_sq = d.dot(d);

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return point.distance_to(a);
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((point - a).dot(d) / len_sq).clamp(0.0, 1.0);
    point.distance_to(a + d * t)
}

/// Returns the perpendicular distance from `point` to the infinite line
/// through `a` and `b`.
///
/// Falls back to the point distance when `a` and `b` coincide.
#[must_use]
pub fn point_to_line_dist(point: Vector, a: Vector, b: Vector) -> f64 {
    let d = b - a;
    let len = d.magnitude();
    if len < 1e-10 {
        return point.distance_to(a);
    }
    d.cross(point - a).abs() / len
}
