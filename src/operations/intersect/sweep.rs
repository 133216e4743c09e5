use std::collections::HashSet;

use tracing::trace;

use crate::geometry::Segment;
use crate::math::PRECISE_EPSILON;

use super::Intersection;

/// Finds every pairwise crossing in a set of segments with a sweep along X.
///
/// Segments are oriented left to right and sorted by their left end. While
/// walking them in that order, an active window keeps only the segments whose
/// right end still reaches the current left end; each new segment is tested
/// against that window alone. Touches at segment endpoints are not reported.
///
/// Indices in the result refer to positions in the input slice.
#[derive(Debug)]
pub struct SweepIntersect<'a> {
    segments: &'a [Segment],
    tolerance: f64,
}

impl<'a> SweepIntersect<'a> {
    /// Creates a new sweep over `segments`.
    ///
    /// `tolerance` widens the active window and decides when a meeting point
    /// counts as an endpoint touch.
    #[must_use]
    pub fn new(segments: &'a [Segment], tolerance: f64) -> Self {
        Self {
            segments,
            tolerance,
        }
    }

    /// Runs the sweep, returning unique intersections sorted by index pair.
    #[must_use]
    pub fn execute(&self) -> Vec<Intersection> {
        let tol = self.tolerance;

        let mut sorted: Vec<(usize, Segment)> = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if s.start.x <= s.end.x {
                    (i, *s)
                } else {
                    (i, s.reversed())
                }
            })
            .collect();
        sorted.sort_by(|a, b| a.1.start.x.total_cmp(&b.1.start.x));

        let mut active: Vec<(usize, Segment)> = Vec::new();
        let mut seen: HashSet<GridKey> = HashSet::new();
        let mut found = Vec::new();

        for &(index, seg) in &sorted {
            // Nothing further right can reach a segment that ends before this one starts.
            active.retain(|(_, a)| a.end.x + tol >= seg.start.x);

            for &(other_index, other) in &active {
                if let Some(point) = seg.intersects(&other, true, tol) {
                    let hit = Intersection::new(point, index, other_index);
                    if seen.insert(grid_key(&hit, tol)) {
                        found.push(hit);
                    }
                }
            }
            active.push((index, seg));
        }

        found.sort_by(|a, b| {
            a.between
                .cmp(&b.between)
                .then(a.point.x.total_cmp(&b.point.x))
                .then(a.point.y.total_cmp(&b.point.y))
        });

        trace!(
            segments = self.segments.len(),
            intersections = found.len(),
            "sweep complete"
        );
        found
    }
}

type GridKey = (i64, i64, usize, usize);

/// Snaps the crossing point to the tolerance grid so near-identical crossings
/// of the same pair collapse to one entry.
#[allow(clippy::cast_possible_truncation)]
fn grid_key(hit: &Intersection, tolerance: f64) -> GridKey {
    let cell = tolerance.max(PRECISE_EPSILON);
    (
        (hit.point.x / cell).round() as i64,
        (hit.point.y / cell).round() as i64,
        hit.between.0,
        hit.between.1,
    )
}
