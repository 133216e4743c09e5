#![allow(clippy::unwrap_used)]

use std::f64::consts::PI;

use etchpath::geometry::{Geometry, Polygon, Segment, Vector};
use etchpath::operations::intersect::SweepIntersect;
use etchpath::operations::offset::{PolygonOffset, RepairMode};
use etchpath::operations::query::BoundingBox;
use etchpath::operations::transform::{transform, Mirror, MirrorAxis};
use etchpath::TransformSettings;
use proptest::prelude::*;

const TOL: f64 = 1e-6;

fn coord() -> impl Strategy<Value = f64> {
    -1.0e3f64..1.0e3
}

fn grid() -> impl Strategy<Value = f64> {
    (-20i32..=20).prop_map(f64::from)
}

fn rectangle(w: f64, h: f64) -> Polygon {
    Polygon::new(vec![
        Vector::new(0.0, 0.0),
        Vector::new(w, 0.0),
        Vector::new(w, h),
        Vector::new(0.0, h),
    ])
}

fn bounds_close(poly: &Polygon, min: (f64, f64), max: (f64, f64)) -> bool {
    let batch = vec![Geometry::Polygon(poly.clone())];
    let aabb = BoundingBox::new(&batch, 0.0).execute().unwrap();
    (aabb.min.x - min.0).abs() < 1e-6
        && (aabb.min.y - min.1).abs() < 1e-6
        && (aabb.max.x - max.0).abs() < 1e-6
        && (aabb.max.y - max.1).abs() < 1e-6
}

proptest! {
    #[test]
    fn angle_is_in_half_open_range(x in coord(), y in coord()) {
        prop_assume!(x != 0.0 || y != 0.0);
        let a = Vector::new(x, y).angle();
        prop_assert!(a > -PI && a <= PI, "angle {a}");
    }

    #[test]
    fn distance_is_symmetric(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Vector::new(ax, ay);
        let b = Vector::new(bx, by);
        prop_assert_eq!(a.distance_to(b), b.distance_to(a));
    }

    #[test]
    fn intersects_is_symmetric(
        c in prop::array::uniform8(grid()),
        reject in any::<bool>(),
    ) {
        let s1 = Segment::new(Vector::new(c[0], c[1]), Vector::new(c[2], c[3]));
        let s2 = Segment::new(Vector::new(c[4], c[5]), Vector::new(c[6], c[7]));
        prop_assume!(s1.length() > 0.0 && s2.length() > 0.0);

        match (s1.intersects(&s2, reject, TOL), s2.intersects(&s1, reject, TOL)) {
            (None, None) => {}
            (Some(p), Some(q)) => prop_assert!(p.approx_eq(q, 1e-9), "{p:?} vs {q:?}"),
            (p, q) => prop_assert!(false, "asymmetric: {p:?} vs {q:?}"),
        }
    }

    #[test]
    fn four_mirrors_are_identity(points in prop::collection::vec((coord(), coord()), 1..20)) {
        let original: Vec<Geometry> = points
            .iter()
            .map(|&(x, y)| Geometry::Point(Vector::new(x, y)))
            .collect();
        let mut batch = original.clone();
        for axis in [MirrorAxis::X, MirrorAxis::Y, MirrorAxis::X, MirrorAxis::Y] {
            Mirror::new(axis).execute(&mut batch);
        }
        prop_assert_eq!(batch, original);
    }

    #[test]
    fn default_settings_are_identity(points in prop::collection::vec((coord(), coord()), 2..20)) {
        let vectors: Vec<Vector> = points.iter().map(|&(x, y)| Vector::new(x, y)).collect();
        let batch: Vec<Geometry> = vec![
            Geometry::Point(vectors[0]),
            Geometry::Segment(Segment::new(vectors[0], vectors[1])),
            Geometry::Polygon(Polygon::new(vectors.clone())),
        ];
        let out = transform(batch.clone(), &TransformSettings::default()).unwrap();
        prop_assert_eq!(out, batch);
    }

    #[test]
    fn inflating_a_rectangle_grows_its_bounds(
        w in 2.0f64..50.0,
        h in 2.0f64..50.0,
        amount in 0.25f64..10.0,
    ) {
        let out = PolygonOffset::new(rectangle(w, h), amount, TOL).execute().unwrap();
        prop_assert_eq!(out.len(), 4);
        prop_assert!(out.is_counter_clockwise());
        prop_assert!(bounds_close(&out, (-amount, -amount), (w + amount, h + amount)));
    }

    #[test]
    fn deflating_a_rectangle_shrinks_its_bounds(
        w in 2.0f64..50.0,
        h in 2.0f64..50.0,
        amount in 0.25f64..10.0,
    ) {
        prop_assume!(amount < 0.45 * w.min(h));
        let out = PolygonOffset::new(rectangle(w, h), -amount, TOL)
            .with_repair(RepairMode::Winding)
            .execute()
            .unwrap();
        prop_assert_eq!(out.len(), 4);
        prop_assert!(out.is_counter_clockwise());
        prop_assert!(bounds_close(&out, (amount, amount), (w - amount, h - amount)));
    }

    #[test]
    fn inflated_notch_stays_inside_outer_square(
        width in 0.2f64..4.0,
        depth in 1.0f64..9.0,
        center in 3.0f64..7.0,
        amount in 0.1f64..4.0,
        mode in prop_oneof![Just(RepairMode::Forward), Just(RepairMode::Winding)],
    ) {
        let notched = Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(10.0, 0.0),
            Vector::new(10.0, 10.0),
            Vector::new(center + width / 2.0, 10.0),
            Vector::new(center, 10.0 - depth),
            Vector::new(center - width / 2.0, 10.0),
            Vector::new(0.0, 10.0),
        ]);
        let out = PolygonOffset::new(notched, amount, TOL)
            .with_repair(mode)
            .execute()
            .unwrap();

        let hull = (10.0 + 2.0 * amount).powi(2);
        let area = out.signed_area();
        prop_assert!(area > 0.0 && area <= hull + 1e-6, "area {area} hull {hull} ring {out:?}");
        let edges = out.edges();
        prop_assert!(SweepIntersect::new(&edges, TOL).execute().is_empty(), "ring {out:?}");
    }
}
