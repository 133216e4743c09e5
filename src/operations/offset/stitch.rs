use crate::geometry::Vector;

use super::slice::RingSlice;

/// Chains slices end to start into closed rings.
///
/// Greedy: each chain grows by the unused slice whose start is closest to
/// its end (within `tolerance`, earlier candidates after the current slice
/// win ties) until the chain returns to its own start. Chains that never
/// close are dropped.
#[must_use]
pub fn connect(slices: &[&RingSlice], tolerance: f64) -> Vec<Vec<Vector>> {
    let n = slices.len();
    let mut used = vec![false; n];
    let mut rings = Vec::new();

    for start in 0..n {
        if used[start] {
            continue;
        }
        used[start] = true;
        let mut chain: Vec<Vector> = slices[start].points.clone();
        let mut current = start;

        while !is_closed(&chain, tolerance) {
            let Some(&end) = chain.last() else { break };

            let mut best: Option<(usize, f64)> = None;
            for offset in 1..n {
                let candidate = (current + offset) % n;
                if used[candidate] {
                    continue;
                }
                let Some(&head) = slices[candidate].points.first() else { continue };
                let dist = head.distance_to(end);
                if dist <= tolerance && best.is_none_or(|(_, d)| dist < d) {
                    best = Some((candidate, dist));
                }
            }

            let Some((next, _)) = best else { break };
            used[next] = true;
            chain.extend_from_slice(&slices[next].points[1..]);
            current = next;
        }

        if is_closed(&chain, tolerance) {
            chain.pop();
            rings.push(chain);
        }
    }

    rings
}

fn is_closed(chain: &[Vector], tolerance: f64) -> bool {
    chain.len() > 3
        && chain
            .first()
            .zip(chain.last())
            .is_some_and(|(first, last)| first.distance_to(*last) <= tolerance)
}
