use serde::{Deserialize, Serialize};

use super::{Circle, Polygon, Segment, Vector};

/// One element of a processing batch.
///
/// Drill hits are `Point`s, trace edges are `Segment`s and closed outlines
/// are `Polygon`s. Downstream consumers only read coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Point(Vector),
    Segment(Segment),
    Polygon(Polygon),
    Circle(Circle),
}

impl Geometry {
    /// Short name of the variant, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Segment(_) => "segment",
            Self::Polygon(_) => "polygon",
            Self::Circle(_) => "circle",
        }
    }

    /// Applies `f` to every coordinate the geometry owns.
    ///
    /// A circle maps its center only; the radius is unaffected by the rigid
    /// transforms the pipeline applies.
    pub fn map_points<F>(&mut self, mut f: F)
    where
        F: FnMut(Vector) -> Vector,
    {
        match self {
            Self::Point(p) => *p = f(*p),
            Self::Segment(s) => {
                s.start = f(s.start);
                s.end = f(s.end);
            }
            Self::Polygon(poly) => {
                for p in &mut poly.points {
                    *p = f(*p);
                }
            }
            Self::Circle(c) => c.center = f(c.center),
        }
    }

    /// The defining points, in cutting order.
    #[must_use]
    pub fn points(&self) -> Vec<Vector> {
        match self {
            Self::Point(p) => vec![*p],
            Self::Segment(s) => vec![s.start, s.end],
            Self::Polygon(poly) => poly.points.clone(),
            Self::Circle(c) => vec![c.center],
        }
    }
}

impl From<Vector> for Geometry {
    fn from(p: Vector) -> Self {
        Self::Point(p)
    }
}

impl From<Segment> for Geometry {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}

impl From<Circle> for Geometry {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}
