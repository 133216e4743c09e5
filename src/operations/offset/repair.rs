use tracing::trace;

use crate::geometry::{Segment, Vector};
use crate::math::polygon_2d::{dedup_ring, signed_area_2d};
use crate::operations::intersect::Intersection;

use super::RepairMode;

/// Outcome of cutting self-crossings out of a raw offset ring.
#[derive(Debug)]
pub struct Resolution {
    /// `severed[i]` marks ring segment `i` as dropped from the result.
    pub severed: Vec<bool>,
    /// Number of crossings that led to a cut.
    pub resolved: usize,
}

/// Processing order for crossings: lower index ascending, then upper index
/// descending, so the widest span starting at each segment is handled first.
pub fn order(hits: &mut [Intersection]) {
    hits.sort_by(|a, b| a.lower().cmp(&b.lower()).then(b.upper().cmp(&a.upper())));
}

/// Cuts each crossing out of `ring`.
///
/// For a crossing `P` between segments `a < b`, the lower segment's end and
/// the upper segment's start are trimmed to `P` and every segment strictly
/// between them is severed. Under [`RepairMode::Winding`] the ring's other
/// loop through `P` (`b+1..`, `..a-1`) may be severed instead, see
/// [`forward_loop_is_cut`]; `orientation` is the sign of the source
/// polygon's area.
///
/// A crossing is skipped when it precedes the last forward cut, when either
/// segment is already severed, or when a previous trim moved `P` off one of
/// its segments.
pub fn resolve(
    ring: &mut [Segment],
    hits: &[Intersection],
    mode: RepairMode,
    orientation: f64,
    tolerance: f64,
) -> Resolution {
    let m = ring.len();
    let mut severed = vec![false; m];
    let mut resolved = 0;
    let mut cursor: Option<usize> = None;

    for hit in hits {
        let (a, b) = hit.between;
        let p = hit.point;

        if cursor.is_some_and(|c| a < c) || severed[a] || severed[b] {
            continue;
        }
        if !ring[a].contains_point(p, tolerance) || !ring[b].contains_point(p, tolerance) {
            continue;
        }

        let cut_forward = match mode {
            RepairMode::Forward => true,
            RepairMode::Winding => forward_loop_is_cut(ring, &severed, hit, orientation),
        };

        if cut_forward {
            ring[a].end = p;
            ring[b].start = p;
            severed[a + 1..b].fill(true);
            cursor = Some(b);
        } else {
            ring[b].end = p;
            ring[a].start = p;
            severed[b + 1..m].fill(true);
            severed[..a].fill(true);
        }
        resolved += 1;
        trace!(a, b, x = p.x, y = p.y, cut_forward, "cut crossing");
    }

    Resolution { severed, resolved }
}

/// Picks which of the two loops through a crossing to sever.
///
/// When exactly one loop winds against `orientation` that loop goes;
/// otherwise the one with less surviving length does. Corner bevel loops
/// outgrow the core once a rectangle is deflated past about a third of its
/// short side, so length alone cuts the wrong loop there.
fn forward_loop_is_cut(
    ring: &[Segment],
    severed: &[bool],
    hit: &Intersection,
    orientation: f64,
) -> bool {
    let m = ring.len();
    let (a, b) = hit.between;
    let p = hit.point;

    let forward_inverted = is_inverted(
        std::iter::once(ring[a].end)
            .chain(surviving_points(ring, severed, a + 1..b))
            .chain([ring[b].start]),
        p,
        orientation,
    );
    let wrap_inverted = is_inverted(
        std::iter::once(ring[b].end)
            .chain(surviving_points(ring, severed, b + 1..m))
            .chain(surviving_points(ring, severed, 0..a))
            .chain([ring[a].start]),
        p,
        orientation,
    );
    if forward_inverted != wrap_inverted {
        return forward_inverted;
    }

    let forward = p.distance_to(ring[a].end)
        + span_length(ring, severed, a + 1..b)
        + ring[b].start.distance_to(p);
    let wrap = p.distance_to(ring[b].end)
        + span_length(ring, severed, b + 1..m)
        + span_length(ring, severed, 0..a)
        + ring[a].start.distance_to(p);
    forward <= wrap
}

/// Start points of the surviving segments, in ring order, with
/// near-duplicates dropped.
#[must_use]
pub fn rebuild(ring: &[Segment], severed: &[bool], tolerance: f64) -> Vec<Vector> {
    let points: Vec<Vector> = ring
        .iter()
        .zip(severed)
        .filter(|(_, cut)| !**cut)
        .map(|(seg, _)| seg.start)
        .collect();
    dedup_ring(&points, tolerance)
}

/// True when the closed loop `p, points...` winds against `orientation`.
fn is_inverted(points: impl Iterator<Item = Vector>, p: Vector, orientation: f64) -> bool {
    let outline: Vec<Vector> = std::iter::once(p).chain(points).collect();
    signed_area_2d(&outline) * orientation < 0.0
}

fn surviving_points<'r>(
    ring: &'r [Segment],
    severed: &'r [bool],
    range: std::ops::Range<usize>,
) -> impl Iterator<Item = Vector> + 'r {
    ring[range.clone()]
        .iter()
        .zip(&severed[range])
        .filter(|(_, cut)| !**cut)
        .flat_map(|(seg, _)| [seg.start, seg.end])
}

fn span_length(ring: &[Segment], severed: &[bool], range: std::ops::Range<usize>) -> f64 {
    ring[range.clone()]
        .iter()
        .zip(&severed[range])
        .filter(|(_, cut)| !**cut)
        .map(|(seg, _)| seg.length())
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn chain(points: &[(f64, f64)]) -> Vec<Segment> {
        let n = points.len();
        (0..n)
            .map(|i| {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % n];
                Segment::new(Vector::new(x0, y0), Vector::new(x1, y1))
            })
            .collect()
    }

    #[test]
    fn order_puts_widest_span_first() {
        let p = Vector::zero();
        let mut hits = vec![
            Intersection::new(p, 2, 5),
            Intersection::new(p, 0, 3),
            Intersection::new(p, 0, 7),
            Intersection::new(p, 1, 4),
        ];
        order(&mut hits);
        let pairs: Vec<(usize, usize)> = hits.iter().map(|h| h.between).collect();
        assert_eq!(pairs, vec![(0, 7), (0, 3), (1, 4), (2, 5)]);
    }

    #[test]
    fn small_loop_is_cut_forward() {
        // A square with a small overshoot loop at the bottom-right corner:
        // segment 0 runs past x=10, segments 1..=2 loop back, segment 3 crosses 0.
        let mut ring = chain(&[
            (0.0, 0.0),
            (11.0, 0.0),
            (11.0, -1.0),
            (10.0, -1.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ]);
        let hits = vec![Intersection::new(Vector::new(10.0, 0.0), 0, 3)];
        let res = resolve(&mut ring, &hits, RepairMode::Forward, 1.0, TOL);
        assert_eq!(res.resolved, 1);
        assert_eq!(res.severed, vec![false, true, true, false, false, false]);

        let points = rebuild(&ring, &res.severed, TOL);
        assert_eq!(
            points,
            vec![
                Vector::new(0.0, 0.0),
                Vector::new(10.0, 0.0),
                Vector::new(10.0, 10.0),
                Vector::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn loop_across_ring_start_is_cut_by_wrapping() {
        // Same overshoot, but the loop straddles the ring's first segment.
        let mut ring = chain(&[
            (11.0, -1.0),
            (10.0, -1.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
            (11.0, 0.0),
        ]);
        let hits = vec![Intersection::new(Vector::new(10.0, 0.0), 1, 4)];
        let res = resolve(&mut ring, &hits, RepairMode::Winding, 1.0, TOL);
        assert_eq!(res.resolved, 1);
        assert_eq!(res.severed, vec![true, false, false, false, false, true]);

        let points = rebuild(&ring, &res.severed, TOL);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Vector::new(10.0, 0.0));
    }

    #[test]
    fn forward_mode_cuts_between_indices_even_across_ring_start() {
        let mut ring = chain(&[
            (11.0, -1.0),
            (10.0, -1.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
            (11.0, 0.0),
        ]);
        let hits = vec![Intersection::new(Vector::new(10.0, 0.0), 1, 4)];
        let res = resolve(&mut ring, &hits, RepairMode::Forward, 1.0, TOL);
        assert_eq!(res.severed, vec![false, false, true, true, false, false]);

        let points = rebuild(&ring, &res.severed, TOL);
        assert_eq!(
            points,
            vec![
                Vector::new(11.0, -1.0),
                Vector::new(10.0, -1.0),
                Vector::new(10.0, 0.0),
                Vector::new(11.0, 0.0),
            ]
        );
    }

    #[test]
    fn crossing_inside_severed_span_is_skipped() {
        let p = Vector::new(10.0, 0.0);
        let mut ring = chain(&[
            (0.0, 0.0),
            (11.0, 0.0),
            (11.0, -1.0),
            (10.0, -1.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ]);
        let hits = vec![Intersection::new(p, 0, 3), Intersection::new(p, 1, 2)];
        let res = resolve(&mut ring, &hits, RepairMode::Forward, 1.0, TOL);
        assert_eq!(res.resolved, 1);
    }

    #[test]
    fn stale_point_is_skipped() {
        let mut ring = chain(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let hits = vec![Intersection::new(Vector::new(50.0, 50.0), 0, 2)];
        let res = resolve(&mut ring, &hits, RepairMode::Forward, 1.0, TOL);
        assert_eq!(res.resolved, 0);
        assert!(res.severed.iter().all(|s| !s));
    }
}
