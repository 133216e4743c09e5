use crate::geometry::{Geometry, Vector};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Vector,
    /// Maximum corner of the bounding box.
    pub max: Vector,
}

impl Aabb {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Vector {
        (self.min + self.max) / 2.0
    }

    fn include(&mut self, p: Vector) {
        self.min = Vector::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Vector::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }
}

/// Computes the axis-aligned bounding box of a geometry batch.
///
/// The box is grown on every side by `margin` times its larger dimension,
/// so a margin of `0.05` leaves a 5% border for plotting.
#[derive(Debug)]
pub struct BoundingBox<'a> {
    batch: &'a [Geometry],
    margin: f64,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(batch: &'a [Geometry], margin: f64) -> Self {
        Self { batch, margin }
    }

    /// Executes the query, returning `None` for an empty batch.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let mut extremes = self.batch.iter().flat_map(|g| match g {
            Geometry::Circle(c) => {
                let r = Vector::new(c.radius, c.radius);
                vec![c.center - r, c.center + r]
            }
            other => other.points(),
        });

        let first = extremes.next()?;
        let mut aabb = Aabb {
            min: first,
            max: first,
        };
        for p in extremes {
            aabb.include(p);
        }

        let pad = self.margin * aabb.width().max(aabb.height());
        let pad = Vector::new(pad, pad);
        aabb.min -= pad;
        aabb.max += pad;
        Some(aabb)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::{Circle, Polygon, Segment};

    #[test]
    fn empty_batch_has_no_box() {
        assert!(BoundingBox::new(&[], 0.1).execute().is_none());
    }

    #[test]
    fn single_point_is_degenerate_box() {
        let batch = vec![Geometry::Point(Vector::new(2.0, 3.0))];
        let aabb = BoundingBox::new(&batch, 0.5).execute().unwrap();
        assert_eq!(aabb.min, Vector::new(2.0, 3.0));
        assert_eq!(aabb.max, Vector::new(2.0, 3.0));
    }

    #[test]
    fn mixed_batch_bounds() {
        let batch: Vec<Geometry> = vec![
            Vector::new(1.0, 1.0).into(),
            Segment::new(Vector::new(-2.0, 0.0), Vector::new(3.0, 4.0)).into(),
            Polygon::new(vec![
                Vector::new(0.0, -1.0),
                Vector::new(1.0, 0.0),
                Vector::new(0.0, 1.0),
            ])
            .into(),
            Circle::new(Vector::new(5.0, 5.0), 1.0).unwrap().into(),
        ];
        let aabb = BoundingBox::new(&batch, 0.0).execute().unwrap();
        assert_eq!(aabb.min, Vector::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vector::new(6.0, 6.0));
        assert_abs_diff_eq!(aabb.width(), 8.0);
        assert_abs_diff_eq!(aabb.height(), 7.0);
        assert_eq!(aabb.center(), Vector::new(2.0, 2.5));
    }

    #[test]
    fn margin_scales_with_larger_side() {
        let batch: Vec<Geometry> =
            vec![Segment::new(Vector::new(0.0, 0.0), Vector::new(10.0, 2.0)).into()];
        let aabb = BoundingBox::new(&batch, 0.1).execute().unwrap();
        assert_abs_diff_eq!(aabb.min.x, -1.0);
        assert_abs_diff_eq!(aabb.min.y, -1.0);
        assert_abs_diff_eq!(aabb.max.x, 11.0);
        assert_abs_diff_eq!(aabb.max.y, 3.0);
    }
}
