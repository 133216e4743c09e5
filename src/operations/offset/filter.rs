use tracing::trace;

use crate::geometry::{Segment, Vector};
use crate::math::distance_2d::point_to_segment_dist;

use super::slice::RingSlice;

/// Keeps the slices whose midpoint lies at least half the offset distance
/// from the source ring.
///
/// A loop left behind when a notch closes up runs back toward the notch
/// floor, so its midpoint sits well inside the offset band.
#[must_use]
pub fn apply<'a>(slices: &'a [RingSlice], original: &[Segment], distance: f64) -> Vec<&'a RingSlice> {
    let threshold = distance.abs() * 0.5;

    let kept: Vec<&RingSlice> = slices
        .iter()
        .filter(|s| s.points.len() >= 2 && min_dist_to_ring(s.midpoint(), original) >= threshold)
        .collect();

    trace!(slices = slices.len(), kept = kept.len(), threshold, "filtered slices");
    kept
}

fn min_dist_to_ring(point: Vector, ring: &[Segment]) -> f64 {
    ring.iter()
        .map(|seg| point_to_segment_dist(point, seg.start, seg.end))
        .fold(f64::MAX, f64::min)
}
