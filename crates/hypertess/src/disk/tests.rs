use super::*;
use crate::error::GeomWarning;
use crate::isometry::{Isometry, IsometryGroup};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;

fn disk_point(r_max: f64) -> impl Strategy<Value = Coordinate> {
    (0.0..r_max, 0.0..(2.0 * PI)).prop_map(|(r, t)| Coordinate::new(r * t.cos(), r * t.sin()))
}

fn random_disk_point(rng: &mut StdRng, r_max: f64) -> Coordinate {
    let r = rng.gen_range(0.0..r_max);
    let t = rng.gen_range(0.0..(2.0 * PI));
    Coordinate::new(r * t.cos(), r * t.sin())
}

proptest! {
    #[test]
    fn hyperboloid_round_trip(pt in disk_point(0.99)) {
        let back = Coordinate::from_hyperboloid(pt.to_hyperboloid());
        prop_assert!(back.approx_eq(&pt, 1e-9), "{pt:?} -> {back:?}");
    }

    #[test]
    fn lift_lands_on_the_hyperboloid(pt in disk_point(0.95)) {
        let h = pt.to_hyperboloid();
        // x² + y² - z² = -1 on the upper sheet
        prop_assert!((h.x * h.x + h.y * h.y - h.z * h.z + 1.0).abs() < 1e-6 * h.z * h.z);
        prop_assert!(h.z >= 1.0);
    }

    #[test]
    fn edge_samples_are_spaced_and_pinned(
        a in disk_point(0.95),
        b in disk_point(0.95),
        spacing in prop::sample::select(vec![0.05, 0.1, 0.2]),
    ) {
        let cross = (a.x * b.y - b.x * a.y).abs();
        prop_assume!(cross > 1e-3 || cross < 1e-12);
        let e = Edge::new(a, b, spacing);
        let pts = e.points();
        prop_assert_eq!(pts[0], a);
        prop_assert_eq!(*pts.last().unwrap(), b);
        for w in pts.windows(2) {
            prop_assert!(w[0].distance(&w[1]) <= spacing + 1e-9);
        }
        if pts.len() > 2 {
            prop_assert_eq!(e.segments() % 2, 0);
            prop_assert!(e.spacing() <= spacing + 1e-12);
        } else {
            prop_assert!(e.arc.length < spacing);
        }
        for p in pts {
            prop_assert!(p.check().is_none(), "sample {p:?} left the disk");
        }
    }
}

#[test]
fn chord_through_origin_is_straight() {
    let arc = Arc::new(Coordinate::new(-0.3, -0.3), Coordinate::new(0.5, 0.5));
    assert!(arc.is_straight());
    assert!((arc.length - 0.8 * 2f64.sqrt()).abs() < 1e-12);

    let from_centre = Arc::new(Coordinate::ORIGIN, Coordinate::new(0.2, 0.7));
    assert!(from_centre.is_straight());
}

#[test]
fn circular_arc_is_orthogonal_to_the_rim() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a = random_disk_point(&mut rng, 0.9);
        let b = random_disk_point(&mut rng, 0.9);
        if (a.x * b.y - b.x * a.y).abs() < 1e-3 {
            continue;
        }
        let arc = Arc::new(a, b);
        let ArcShape::Circular { circle, start_angle, end_angle, .. } = arc.shape else {
            panic!("expected circular arc for {a:?} {b:?}");
        };
        // orthogonal circles: |c|² = r² + 1
        let c2 = circle.centre.norm_squared();
        assert!((c2 - circle.radius * circle.radius - 1.0).abs() < 1e-6 * c2.max(1.0));
        assert!((circle.centre.distance(&b) - circle.radius).abs() < 1e-9 * circle.radius.max(1.0));
        assert!(arc.length <= PI * circle.radius + 1e-12);
        assert!(arc.length + 1e-12 >= a.distance(&b));
        assert!((0.0..2.0 * PI).contains(&start_angle));
        assert!((0.0..2.0 * PI).contains(&end_angle));
        // walking the full length along the traversal direction reaches the end point
        assert!(arc.point_at_length(arc.length).approx_eq(&b, 1e-7));
    }
}

#[test]
fn coincident_endpoints_are_degenerate() {
    let p = Coordinate::new(0.4, -0.1);
    let arc = Arc::new(p, p);
    assert!(arc.is_degenerate());
    assert_eq!(arc.length, 0.0);
    let e = Edge::from_arc(arc, 0.1);
    assert_eq!(e.points(), &[p, p]);
}

#[test]
fn points_outside_the_disk_are_reported_not_clamped() {
    let p = Coordinate::new(0.9, 0.9);
    assert_eq!(p.check(), Some(GeomWarning::OutsideDisk { x: 0.9, y: 0.9 }));
    assert!(Coordinate::new(1.0, 0.0).check().is_none());
    assert!(Coordinate::new(f64::NAN, 0.0).check().is_some());
}

#[test]
fn polygon_warnings_cover_edge_samples() {
    let v = [
        Coordinate::new(0.0, 0.0),
        Coordinate::new(1.5, 0.0),
        Coordinate::new(0.0, 0.2),
    ];
    let poly = Polygon::new(v, SurfaceTag::Primary, 0.1);
    let outside: Vec<(f64, f64)> = poly
        .warnings()
        .into_iter()
        .filter_map(|w| match w {
            GeomWarning::OutsideDisk { x, y } => Some((x, y)),
            _ => None,
        })
        .collect();
    assert!(outside.contains(&(1.5, 0.0)));
    // samples on the diameter past the rim, not only the vertex
    assert!(
        outside.iter().any(|&(x, y)| x > 1.0 && x < 1.5 && y.abs() < 1e-9),
        "{outside:?}"
    );
}

#[test]
fn polygon_edges_follow_vertex_order() {
    let v = [
        Coordinate::new(0.1, 0.0),
        Coordinate::new(0.0, 0.3),
        Coordinate::new(-0.2, -0.2),
    ];
    let poly = Polygon::new(v, SurfaceTag::Primary, 0.1);
    for i in 0..3 {
        assert_eq!(poly.edges()[i].start(), v[i]);
        assert_eq!(poly.edges()[i].end(), v[(i + 1) % 3]);
    }
    assert!(poly.warnings().is_empty());
}

#[test]
fn centroid_is_the_incentre() {
    // equilateral triangle centred on the origin
    let r = 0.3;
    let v = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0].map(|t: f64| Coordinate::new(r * t.cos(), r * t.sin()));
    let poly = Polygon::new(v, SurfaceTag::Primary, 0.1);
    assert!(poly.centroid().approx_eq(&Coordinate::ORIGIN, 1e-12));

    // right triangle with legs 3,4 (scaled): incentre at (r, r), r = (a + b - c) / 2
    let s = 0.1;
    let v = [
        Coordinate::new(0.0, 0.0),
        Coordinate::new(3.0 * s, 0.0),
        Coordinate::new(0.0, 4.0 * s),
    ];
    let poly = Polygon::new(v, SurfaceTag::Secondary, 0.1);
    assert!(poly.centroid().approx_eq(&Coordinate::new(s, s), 1e-12));
}

#[test]
fn transform_keeps_or_overrides_the_tag() {
    let g = IsometryGroup::new(5, 4);
    let v = [
        Coordinate::ORIGIN,
        Coordinate::new(0.2, 0.1),
        Coordinate::new(0.25, 0.0),
    ];
    let poly = Polygon::new(v, SurfaceTag::Secondary, 0.1);
    let moved = poly.transform(&g.edge_transforms()[1]);
    assert_eq!(moved.tag(), SurfaceTag::Secondary);
    let flipped = poly.transform_with_tag(g.edge_reflection(), SurfaceTag::Primary);
    assert_eq!(flipped.tag(), SurfaceTag::Primary);
    assert_eq!(SurfaceTag::Primary.flipped(), SurfaceTag::Secondary);
    assert_eq!(SurfaceTag::Secondary.index(), 1);

    let same = poly.transform(&Isometry::identity());
    for (a, b) in same.vertices().iter().zip(poly.vertices()) {
        assert!(a.approx_eq(b, 1e-12));
    }
}

#[test]
fn rotations_preserve_edge_lengths() {
    let mut rng = StdRng::seed_from_u64(42);
    let g = IsometryGroup::new(8, 3);
    for _ in 0..20 {
        let v = [
            random_disk_point(&mut rng, 0.8),
            random_disk_point(&mut rng, 0.8),
            random_disk_point(&mut rng, 0.8),
        ];
        let poly = Polygon::new(v, SurfaceTag::Primary, 0.1);
        let k = rng.gen_range(0..8);
        let rotated = poly.transform(&g.rotate_cw()[k]);
        for (a, b) in poly.edges().iter().zip(rotated.edges()) {
            assert!((a.arc.length - b.arc.length).abs() < 1e-6);
        }
    }
}
