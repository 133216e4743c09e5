use tracing::trace;

use crate::geometry::{Polygon, Segment, Vector};

/// Groups a stream of connected segments into closed outlines.
///
/// Trace files list outline edges in drawing order. A new polygon starts
/// whenever a segment does not begin where the previous one ended (within
/// `tolerance`); each polygon collects the start points of its segments.
#[derive(Debug)]
pub struct Polygonize<'a> {
    segments: &'a [Segment],
    tolerance: f64,
}

impl<'a> Polygonize<'a> {
    /// Creates a new `Polygonize` operation.
    #[must_use]
    pub fn new(segments: &'a [Segment], tolerance: f64) -> Self {
        Self {
            segments,
            tolerance,
        }
    }

    /// Executes the grouping. Empty input gives no polygons.
    #[must_use]
    pub fn execute(&self) -> Vec<Polygon> {
        let mut polygons: Vec<Polygon> = Vec::new();
        let mut current: Vec<Vector> = Vec::new();
        let mut last_end: Option<Vector> = None;

        for seg in self.segments {
            let connected = last_end.is_some_and(|end| end.distance_to(seg.start) <= self.tolerance);
            if !connected && !current.is_empty() {
                polygons.push(Polygon::new(std::mem::take(&mut current)));
            }
            current.push(seg.start);
            last_end = Some(seg.end);
        }
        if !current.is_empty() {
            polygons.push(Polygon::new(current));
        }

        trace!(
            segments = self.segments.len(),
            polygons = polygons.len(),
            "polygonized"
        );
        polygons
    }
}
