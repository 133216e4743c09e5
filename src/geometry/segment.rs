use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::distance_2d::{point_to_line_dist, point_to_segment_dist};
use crate::math::intersect_2d::{is_parallel, line_line_intersect_2d, param_in_unit_range, point_at};
use crate::math::PRECISE_EPSILON;

use super::Vector;

/// A directed line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vector,
    pub end: Vector,
}

impl Segment {
    #[must_use]
    pub const fn new(start: Vector, end: Vector) -> Self {
        Self { start, end }
    }

    /// Displacement from `start` to `end`.
    #[must_use]
    pub fn vector(&self) -> Vector {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().magnitude()
    }

    /// Unit direction from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a zero-length segment.
    pub fn direction(&self) -> Result<Vector> {
        self.vector().normalized()
    }

    #[must_use]
    pub fn midpoint(&self) -> Vector {
        (self.start + self.end) / 2.0
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Both endpoints moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Parameter of the orthogonal projection of `point` onto this segment's
    /// line: `0` at `start`, `1` at `end`. Zero-length segments project to `0`.
    #[must_use]
    pub fn project(&self, point: Vector) -> f64 {
        let d = self.vector();
        let len_sq = d.dot(d);
        if len_sq < PRECISE_EPSILON * PRECISE_EPSILON {
            return 0.0;
        }
        (point - self.start).dot(d) / len_sq
    }

    /// Perpendicular distance from `point` to the infinite line through this segment.
    #[must_use]
    pub fn distance_to_line(&self, point: Vector) -> f64 {
        point_to_line_dist(point, self.start, self.end)
    }

    /// Distance from `point` to the nearest point of the segment itself.
    #[must_use]
    pub fn distance_to_point(&self, point: Vector) -> f64 {
        point_to_segment_dist(point, self.start, self.end)
    }

    /// True when `point` is within `tolerance` of the segment.
    #[must_use]
    pub fn contains_point(&self, point: Vector, tolerance: f64) -> bool {
        self.distance_to_point(point) <= tolerance
    }

    /// True when `point` lies on the infinite line within [`PRECISE_EPSILON`].
    #[must_use]
    pub fn point_on_line(&self, point: Vector) -> bool {
        self.distance_to_line(point) < PRECISE_EPSILON
    }

    /// True when `point` is within `tolerance` of either endpoint.
    #[must_use]
    pub fn touches_endpoint(&self, point: Vector, tolerance: f64) -> bool {
        point.approx_eq(self.start, tolerance) || point.approx_eq(self.end, tolerance)
    }

    /// Finds the point where this segment meets `other`.
    ///
    /// Crossing segments are solved with Cramer's rule; the parameters on both
    /// segments must lie in `[0, 1]` (with a small margin). Parallel segments
    /// only meet at an endpoint of one lying on the other within `tolerance`;
    /// the lexicographically smallest such endpoint is returned so the answer
    /// does not depend on argument order.
    ///
    /// With `reject_at_endpoints`, a meeting point within `tolerance` of any of
    /// the four endpoints is discarded. Adjacent polygon edges share a vertex
    /// and would otherwise always be reported.
    #[must_use]
    pub fn intersects(
        &self,
        other: &Segment,
        reject_at_endpoints: bool,
        tolerance: f64,
    ) -> Option<Vector> {
        let d1 = self.vector();
        let d2 = other.vector();

        let point = if is_parallel(d1, d2) {
            self.shared_endpoint(other, tolerance)?
        } else {
            let (t, u) = line_line_intersect_2d(self.start, d1, other.start, d2)?;
            if !param_in_unit_range(t) || !param_in_unit_range(u) {
                return None;
            }
            point_at(self.start, d1, t)
        };

        if reject_at_endpoints
            && (self.touches_endpoint(point, tolerance) || other.touches_endpoint(point, tolerance))
        {
            return None;
        }
        Some(point)
    }

    /// Collinear or parallel overlap: the smallest endpoint of either segment
    /// that lies on the other.
    fn shared_endpoint(&self, other: &Segment, tolerance: f64) -> Option<Vector> {
        [other.start, other.end]
            .into_iter()
            .filter(|&p| self.contains_point(p, tolerance))
            .chain(
                [self.start, self.end]
                    .into_iter()
                    .filter(|&p| other.contains_point(p, tolerance)),
            )
            .min_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)))
    }
}
