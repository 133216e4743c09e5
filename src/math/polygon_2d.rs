use crate::geometry::Vector;

/// Computes the signed area of a closed point ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Vector]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].cross(points[j]);
    }
    sum * 0.5
}

/// Length of the closed ring, including the closing edge back to the first point.
#[must_use]
pub fn perimeter_2d(points: &[Vector]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| points[i].distance_to(points[(i + 1) % n]))
        .sum()
}

/// Returns the ring started `offset` positions later, wrapping around.
#[must_use]
pub fn rotate_ring(points: &[Vector], offset: usize) -> Vec<Vector> {
    let mut rotated = points.to_vec();
    if !rotated.is_empty() {
        rotated.rotate_left(offset % points.len());
    }
    rotated
}

/// Drops points closer than `tolerance` to their predecessor, including the
/// closing pair (last point against the first).
#[must_use]
pub fn dedup_ring(points: &[Vector], tolerance: f64) -> Vec<Vector> {
    let mut kept: Vec<Vector> = Vec::with_capacity(points.len());
    for &pt in points {
        match kept.last() {
            Some(prev) if prev.distance_to(pt) < tolerance => {}
            _ => kept.push(pt),
        }
    }
    while kept.len() > 1 && kept[kept.len() - 1].distance_to(kept[0]) < tolerance {
        kept.pop();
    }
    kept
}

/// Rotates a closed ring so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Gives a deterministic start for comparisons.
#[cfg(test)]
#[must_use]
pub fn rotate_to_canonical_start(points: &[Vector]) -> Vec<Vector> {
    use super::PRECISE_EPSILON;

    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - PRECISE_EPSILON
            || (pt.x - b.x).abs() < PRECISE_EPSILON && pt.y < b.y
        {
            best = i;
        }
    }
    rotate_ring(points, best)
}
