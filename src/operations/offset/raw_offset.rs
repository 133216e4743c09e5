use crate::geometry::{Segment, Vector};
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::{MITER_LIMIT, PARAM_EPSILON};

/// Builds the raw (unrepaired) offset ring.
///
/// Every edge is translated along its own normal by `amount`. Consecutive
/// shifted edges are then joined:
/// 1. Ends within `tolerance`: both snap to their midpoint
/// 2. Ends apart but the edges extend to meet within the miter limit: both
///    extend to the miter corner
/// 3. Otherwise: a connecting segment is inserted after the first edge
///
/// Case 3 is what overlapping edges at concave corners produce; the crossing
/// it leaves behind is cut away by the repair step.
#[must_use]
pub fn build(edges: &[Segment], edge_normals: &[Vector], amount: f64, tolerance: f64) -> Vec<Segment> {
    let mut shifted: Vec<Segment> = edges
        .iter()
        .zip(edge_normals)
        .map(|(edge, normal)| edge.translated(*normal * amount))
        .collect();

    let n = shifted.len();
    let mut connectors: Vec<Option<Segment>> = vec![None; n];

    for i in 0..n {
        let j = (i + 1) % n;
        let (cur, next) = (shifted[i], shifted[j]);

        if cur.end.distance_to(next.start) <= tolerance {
            let mid = (cur.end + next.start) / 2.0;
            shifted[i].end = mid;
            shifted[j].start = mid;
        } else if let Some(corner) = miter_corner(&cur, &next, amount) {
            shifted[i].end = corner;
            shifted[j].start = corner;
        } else {
            connectors[i] = Some(Segment::new(cur.end, next.start));
        }
    }

    shifted
        .into_iter()
        .zip(connectors)
        .flat_map(|(edge, connector)| std::iter::once(edge).chain(connector))
        .collect()
}

/// Corner where `cur` extended forward meets `next` extended backward.
///
/// `None` when the lines are parallel, when reaching the corner would
/// shorten either edge, or when the corner lies past the miter limit.
fn miter_corner(cur: &Segment, next: &Segment, amount: f64) -> Option<Vector> {
    let d_cur = cur.vector();
    let (t, u) = line_line_intersect_2d(cur.start, d_cur, next.start, next.vector())?;
    if t < 1.0 - PARAM_EPSILON || u > PARAM_EPSILON {
        return None;
    }

    let corner = point_at(cur.start, d_cur, t);
    let limit = MITER_LIMIT * amount.abs();
    (corner.distance_to(cur.end) <= limit && corner.distance_to(next.start) <= limit)
        .then_some(corner)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    const TOL: f64 = 1e-6;

    fn raw(poly: &Polygon, amount: f64) -> Vec<Segment> {
        let normals = poly.normals().unwrap();
        build(&poly.edges(), &normals.edge, amount, TOL)
    }

    fn assert_closed_chain(ring: &[Segment]) {
        for i in 0..ring.len() {
            let next = &ring[(i + 1) % ring.len()];
            assert!(
                ring[i].end.approx_eq(next.start, 1e-9),
                "gap after segment {i}: {:?} -> {:?}",
                ring[i].end,
                next.start
            );
        }
    }

    #[test]
    fn convex_corners_are_mitered() {
        let square = Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(10.0, 0.0),
            Vector::new(10.0, 10.0),
            Vector::new(0.0, 10.0),
        ]);
        let ring = raw(&square, 1.0);
        assert_eq!(ring.len(), 4);
        assert_closed_chain(&ring);
        // Edge 1 is the bottom edge, stretched to both miter corners.
        assert!(ring[1].start.approx_eq(Vector::new(-1.0, -1.0), 1e-9));
        assert!(ring[1].end.approx_eq(Vector::new(11.0, -1.0), 1e-9));
    }

    #[test]
    fn concave_corner_gets_connector() {
        let l_shape = Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(10.0, 0.0),
            Vector::new(10.0, 5.0),
            Vector::new(5.0, 5.0),
            Vector::new(5.0, 10.0),
            Vector::new(0.0, 10.0),
        ]);
        let ring = raw(&l_shape, 1.0);
        assert_eq!(ring.len(), 7);
        assert_closed_chain(&ring);
        // The connector follows edge 3, which ends at the reflex corner.
        assert!(ring[4].start.approx_eq(Vector::new(5.0, 6.0), 1e-9));
        assert!(ring[4].end.approx_eq(Vector::new(6.0, 5.0), 1e-9));
    }

    #[test]
    fn sharp_spike_is_beveled() {
        // The tip at (20, 1) is far sharper than the miter limit allows.
        let spike = Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(20.0, 1.0),
            Vector::new(0.0, 2.0),
        ]);
        let ring = raw(&spike, 0.5);
        assert_eq!(ring.len(), 4);
        assert_closed_chain(&ring);
    }

    #[test]
    fn zero_amount_keeps_edges() {
        let tri = Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(4.0, 0.0),
            Vector::new(0.0, 3.0),
        ]);
        let ring = raw(&tri, 0.0);
        assert_eq!(ring, tri.edges());
    }
}
