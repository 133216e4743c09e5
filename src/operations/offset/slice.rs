use crate::geometry::{Segment, Vector};

/// A run of a closed ring between two points where the ring touches itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSlice {
    pub points: Vec<Vector>,
}

impl RingSlice {
    /// Total length of the run.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
    }

    /// The point halfway along the run.
    #[must_use]
    pub fn midpoint(&self) -> Vector {
        let mut remaining = self.length() / 2.0;
        for w in self.points.windows(2) {
            let step = w[0].distance_to(w[1]);
            if remaining <= step && step > 0.0 {
                return w[0] + (w[1] - w[0]) * (remaining / step);
            }
            remaining -= step;
        }
        self.points.last().copied().unwrap_or_default()
    }
}

/// Splits a closed ring wherever it touches itself.
///
/// Contacts are proper crossings, a vertex resting on another edge, and the
/// ends of collinear overlaps; the sweep rejects the last two as endpoint
/// touches. Returns `None` when the ring never touches itself.
#[must_use]
pub fn build(points: &[Vector], tolerance: f64) -> Option<Vec<RingSlice>> {
    let n = points.len();
    let edges: Vec<Segment> = (0..n)
        .map(|i| Segment::new(points[i], points[(i + 1) % n]))
        .collect();

    let contacts = find_contacts(&edges, tolerance);
    if contacts.is_empty() {
        return None;
    }
    let is_contact = |p: Vector| contacts.iter().any(|c| c.distance_to(p) <= tolerance);

    // Ring walk with every contact inserted on the edge it lies on.
    let mut walk: Vec<Vector> = Vec::with_capacity(n + contacts.len());
    for edge in &edges {
        walk.push(edge.start);
        let mut inner: Vec<(f64, Vector)> = contacts
            .iter()
            .filter(|&&c| edge.contains_point(c, tolerance) && !edge.touches_endpoint(c, tolerance))
            .map(|&c| (edge.project(c), c))
            .collect();
        inner.sort_by(|x, y| x.0.total_cmp(&y.0));
        inner.dedup_by(|x, y| x.1.distance_to(y.1) <= tolerance);
        walk.extend(inner.into_iter().map(|(_, c)| c));
    }

    let first = walk.iter().position(|&p| is_contact(p))?;
    walk.rotate_left(first);
    walk.push(walk[0]);

    let mut slices = Vec::new();
    let mut current = vec![walk[0]];
    for &p in &walk[1..] {
        current.push(p);
        if is_contact(p) {
            slices.push(RingSlice {
                points: std::mem::replace(&mut current, vec![p]),
            });
        }
    }
    Some(slices)
}

/// Every point where two non-adjacent edges meet.
fn find_contacts(edges: &[Segment], tolerance: f64) -> Vec<Vector> {
    let n = edges.len();
    let mut contacts: Vec<Vector> = Vec::new();
    let mut push = |p: Vector| {
        if !contacts.iter().any(|c| c.distance_to(p) <= tolerance) {
            contacts.push(p);
        }
    };

    for i in 0..n {
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (ei, ej) = (&edges[i], &edges[j]);
            if let Some(p) = ei.intersects(ej, false, tolerance) {
                push(p);
            }
            for q in [ej.start, ej.end] {
                if ei.contains_point(q, tolerance) {
                    push(q);
                }
            }
            for q in [ei.start, ei.end] {
                if ej.contains_point(q, tolerance) {
                    push(q);
                }
            }
        }
    }
    contacts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-6;

    fn ring(points: &[(f64, f64)]) -> Vec<Vector> {
        points.iter().map(|&(x, y)| Vector::new(x, y)).collect()
    }

    #[test]
    fn simple_ring_has_no_slices() {
        let square = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert!(build(&square, TOL).is_none());
    }

    #[test]
    fn collinear_overlap_splits_ring() {
        // The top edge is walked twice between x=4 and x=6, once on each side
        // of a pocket hanging below it.
        let pocketed = ring(&[
            (0.0, 10.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (4.0, 10.0),
            (4.0, 5.0),
            (6.0, 5.0),
            (6.0, 10.0),
        ]);
        let slices = build(&pocketed, TOL).unwrap();
        assert_eq!(slices.len(), 4);

        let total: f64 = slices.iter().map(RingSlice::length).sum();
        assert_abs_diff_eq!(total, 10.0 + 10.0 + 10.0 + 6.0 + 5.0 + 2.0 + 5.0 + 6.0, epsilon = 1e-9);

        let pocket = slices
            .iter()
            .find(|s| s.points.contains(&Vector::new(4.0, 5.0)))
            .unwrap();
        assert_eq!(pocket.points.first(), Some(&Vector::new(4.0, 10.0)));
        assert_eq!(pocket.points.last(), Some(&Vector::new(6.0, 10.0)));
    }

    #[test]
    fn midpoint_is_halfway_along() {
        let slice = RingSlice {
            points: ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0)]),
        };
        assert_abs_diff_eq!(slice.length(), 6.0, epsilon = 1e-12);
        assert!(slice.midpoint().approx_eq(Vector::new(3.0, 0.0), 1e-12));
    }
}
