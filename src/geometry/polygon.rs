use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{dedup_ring, perimeter_2d, rotate_ring, signed_area_2d};

use super::{Segment, Vector};

/// A closed ring of points; the last point connects back to the first.
///
/// Outward normals assume counter-clockwise winding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Vector>,
}

/// Per-edge and per-vertex outward unit normals of a [`Polygon`].
///
/// Derived data: computed from a snapshot of the points and not updated when
/// the polygon changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonNormals {
    /// `edge[i]` is the normal of the edge `points[i-1] → points[i]`.
    pub edge: Vec<Vector>,
    /// `vertex[i]` bisects the two edges meeting at `points[i]`: edges `i` and
    /// `i+1` under the edge numbering above. A numbering where edge `i`
    /// leaves `points[i]` would call these edges `i-1` and `i`.
    pub vertex: Vec<Vector>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Vector>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The closing edges of the ring; edge `i` runs `points[i-1] → points[i]`,
    /// so edge `0` is the closing edge from the last point.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.points.len();
        (0..n)
            .map(|i| Segment::new(self.points[(i + n - 1) % n], self.points[i]))
            .collect()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.points)
    }

    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Same ring, starting `offset` points later.
    #[must_use]
    pub fn rotated(&self, offset: usize) -> Self {
        Self::new(rotate_ring(&self.points, offset))
    }

    /// Same ring with near-duplicate neighbours removed.
    #[must_use]
    pub fn deduplicated(&self, tolerance: f64) -> Self {
        Self::new(dedup_ring(&self.points, tolerance))
    }

    /// Outward unit normal of edge `i` (`points[i-1] → points[i]`).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the edge has zero length, or
    /// `GeometryError::TooFewPoints` if `i` does not name an edge.
    pub fn edge_normal(&self, i: usize) -> Result<Vector> {
        let n = self.points.len();
        if n < 2 || i >= n {
            return Err(GeometryError::TooFewPoints {
                required: i.max(1) + 1,
                actual: n,
            }
            .into());
        }
        let back = (self.points[(i + n - 1) % n] - self.points[i]).normalized()?;
        // A quarter turn of `prev - cur` points away from a CCW ring.
        Ok(back.perpendicular())
    }

    /// Computes edge and vertex normals for the ring.
    ///
    /// Each vertex normal is built from the mean angle of its two edge
    /// normals and flipped when it opposes the incoming edge normal, which
    /// happens when the two angles straddle `±π`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` for rings under 3 points, or
    /// `GeometryError::ZeroVector` when two consecutive points coincide.
    pub fn normals(&self) -> Result<PolygonNormals> {
        let n = self.points.len();
        if n < 3 {
            return Err(GeometryError::TooFewPoints {
                required: 3,
                actual: n,
            }
            .into());
        }

        let mut edge = Vec::with_capacity(n);
        for i in 0..n {
            edge.push(self.edge_normal(i)?);
        }

        let vertex = (0..n)
            .map(|i| {
                let incoming = edge[i];
                let outgoing = edge[(i + 1) % n];
                let mean = (incoming.angle() + outgoing.angle()) / 2.0;
                let bisector = Vector::from_angle(mean);
                if bisector.dot(incoming) < 0.0 {
                    -bisector
                } else {
                    bisector
                }
            })
            .collect();

        Ok(PolygonNormals { edge, vertex })
    }
}

impl From<Vec<Vector>> for Polygon {
    fn from(points: Vec<Vector>) -> Self {
        Self::new(points)
    }
}
