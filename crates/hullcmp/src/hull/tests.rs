use super::*;
use crate::geom2::{cross, orientation, Orientation, Point2, MAX_COORD};
use rand::{rngs::StdRng, Rng, SeedableRng};
use nalgebra::vector;
use proptest::prelude::*;
use std::collections::HashSet;

fn key_set(points: &[Point2]) -> HashSet<(i64, i64)> {
    // Test fixtures use integer-valued coordinates.
    points.iter().map(|p| (p.x as i64, p.y as i64)).collect()
}

fn both(points: &[Point2]) -> (Vec<Point2>, Vec<Point2>) {
    (
        compute_hull_gift_wrap(points).unwrap(),
        compute_hull_angular_sweep(points).unwrap(),
    )
}

#[test]
fn single_point() {
    let pts = vec![vector![0.0, 0.0]];
    let (j, g) = both(&pts);
    assert_eq!(j, pts);
    assert_eq!(g, pts);
}

#[test]
fn two_points_verbatim() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
    let (j, g) = both(&pts);
    assert_eq!(j, pts);
    assert_eq!(g, pts);
}

#[test]
fn empty_input() {
    let (j, g) = both(&[]);
    assert!(j.is_empty());
    assert!(g.is_empty());
}

#[test]
fn five_collinear_points() {
    let pts: Vec<Point2> = (0..5).map(|i| vector![i as f64, 0.0]).collect();
    let (j, g) = both(&pts);
    let expected = vec![vector![0.0, 0.0], vector![4.0, 0.0]];
    assert_eq!(j, expected);
    assert_eq!(g, expected);
    for hull in [&j, &g] {
        let ext = extend_with_boundary_points(hull, &pts);
        assert_eq!(ext, pts);
    }
}

#[test]
fn collinear_shuffled_input() {
    let pts = vec![
        vector![3.0, 0.0],
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.0],
    ];
    let (j, g) = both(&pts);
    assert_eq!(key_set(&j), key_set(&[vector![0.0, 0.0], vector![4.0, 0.0]]));
    assert_eq!(key_set(&g), key_set(&j));
}

#[test]
fn square_with_interior_point() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![1.0, 1.0],
    ];
    let (j, g) = both(&pts);
    assert_eq!(j.len(), 4);
    assert_eq!(g.len(), 4);
    let corners = key_set(&pts[..4]);
    assert_eq!(key_set(&j), corners);
    assert_eq!(key_set(&g), corners);
}

#[test]
fn all_identical_points() {
    let pts = vec![vector![3.5, -1.0]; 7];
    let (j, g) = both(&pts);
    assert_eq!(j, vec![vector![3.5, -1.0]]);
    assert_eq!(g, vec![vector![3.5, -1.0]]);
}

#[test]
fn duplicates_collapse_before_small_input_shortcut() {
    let pts = vec![
        vector![1.0, 1.0],
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 0.0],
    ];
    let (j, g) = both(&pts);
    assert_eq!(j, vec![vector![1.0, 1.0], vector![0.0, 0.0]]);
    assert_eq!(g, j);
}

#[test]
fn non_finite_rejected() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, f64::NAN], vector![2.0, 0.0]];
    assert!(matches!(
        compute_hull_gift_wrap(&pts),
        Err(HullError::NonFinite { index: 1, .. })
    ));
    let pts = vec![vector![f64::INFINITY, 0.0]];
    assert!(matches!(
        compute_hull_angular_sweep(&pts),
        Err(HullError::NonFinite { index: 0, .. })
    ));
    assert!(compute_hull(&pts, HullAlgorithm::GiftWrap, HullCfg::default()).is_err());
}

#[test]
fn compute_hull_respects_boundary_mode() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 2.0],
    ];
    let v = compute_hull(&pts, HullAlgorithm::AngularSweep, HullCfg::vertices_only()).unwrap();
    assert_eq!(v.len(), 3);
    let b = compute_hull(&pts, HullAlgorithm::AngularSweep, HullCfg::default()).unwrap();
    assert_eq!(
        b,
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 2.0]
        ]
    );
    let j = compute_hull(&pts, HullAlgorithm::GiftWrap, HullCfg::default()).unwrap();
    assert_eq!(j.len(), 4);
    assert_eq!(j[0], vector![0.0, 0.0]);
}

#[test]
fn compare_reports_agreement() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 3.0],
        vector![0.0, 3.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![4.0, 3.0],
    ];
    let cmp = compare_hulls(&pts, HullCfg::default()).unwrap();
    assert!(cmp.same_vertex_set);
    assert_eq!(cmp.points.len(), 6);
    assert_eq!(cmp.jarvis.len(), 5);
    assert_eq!(cmp.graham.len(), 5);
}

#[test]
fn algorithm_labels() {
    assert_eq!(HullAlgorithm::GiftWrap.to_string(), "Jarvis");
    assert_eq!(HullAlgorithm::AngularSweep.name(), "Graham");
}

#[test]
fn huge_coordinates_rejected() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let pts: Vec<Point2> = (0..12)
            .map(|_| vector![rng.gen_range(-1e200..1e200), rng.gen_range(-1e200..1e200)])
            .collect();
        assert!(matches!(
            compute_hull_gift_wrap(&pts),
            Err(HullError::OutOfRange { .. })
        ));
        assert!(matches!(
            compute_hull_angular_sweep(&pts),
            Err(HullError::OutOfRange { .. })
        ));
    }
    let pts = vec![vector![0.0, 0.0], vector![1.0, -2e150]];
    assert_eq!(
        validate_points(&pts),
        Err(HullError::OutOfRange {
            index: 1,
            x: 1.0,
            y: -2e150
        })
    );
}

#[test]
fn coordinates_at_the_bound_stay_exact() {
    // Opposite corners at ±MAX_COORD: cross products stay finite.
    let m = MAX_COORD;
    let pts = vec![
        vector![-m, -m],
        vector![m, -m],
        vector![m, m],
        vector![-m, m],
        vector![0.0, 0.0],
        vector![0.0, -m],
    ];
    assert!(cross(pts[0], pts[2], pts[1]).is_finite());
    let (j, g) = both(&pts);
    assert_eq!(j.len(), 4);
    assert_eq!(g.len(), 4);
    let cmp = compare_hulls(&pts, HullCfg::default()).unwrap();
    assert!(cmp.same_vertex_set);
    assert_eq!(cmp.graham.len(), 5);
}

fn integer_cloud() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-20i32..=20, -20i32..=20), 0..40).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| vector![x as f64, y as f64])
            .collect()
    })
}

proptest! {
    #[test]
    fn hull_points_come_from_input(pts in integer_cloud()) {
        let input = key_set(&pts);
        let (j, g) = both(&pts);
        prop_assert!(key_set(&j).is_subset(&input));
        prop_assert!(key_set(&g).is_subset(&input));
    }

    #[test]
    fn hulls_have_no_repeats(pts in integer_cloud()) {
        let (j, g) = both(&pts);
        prop_assert_eq!(key_set(&j).len(), j.len());
        prop_assert_eq!(key_set(&g).len(), g.len());
        for hull in [&j, &g] {
            let ext = extend_with_boundary_points(hull, &pts);
            prop_assert_eq!(key_set(&ext).len(), ext.len());
        }
    }

    #[test]
    fn engines_agree_on_vertex_set(pts in integer_cloud()) {
        let (j, g) = both(&pts);
        prop_assert_eq!(j.len(), g.len());
        prop_assert_eq!(key_set(&j), key_set(&g));
    }

    #[test]
    fn rerun_on_hull_is_stable(pts in integer_cloud()) {
        let (j, g) = both(&pts);
        prop_assert_eq!(key_set(&compute_hull_gift_wrap(&j).unwrap()), key_set(&j));
        prop_assert_eq!(key_set(&compute_hull_angular_sweep(&g).unwrap()), key_set(&g));
    }

    #[test]
    fn no_input_point_outside(pts in integer_cloud()) {
        let (j, g) = both(&pts);
        if j.len() >= 3 {
            for k in 0..j.len() {
                let (a, b) = (j[k], j[(k + 1) % j.len()]);
                // Jarvis walks clockwise: nothing may lie to the left.
                prop_assert!(pts.iter().all(|p| orientation(a, b, *p) != Orientation::CounterClockwise));
            }
        }
        if g.len() >= 3 {
            for k in 0..g.len() {
                let (a, b) = (g[k], g[(k + 1) % g.len()]);
                prop_assert!(pts.iter().all(|p| orientation(a, b, *p) != Orientation::Clockwise));
            }
        }
    }

    #[test]
    fn boundary_round_trip(pts in integer_cloud()) {
        let (j, g) = both(&pts);
        for hull in [j, g] {
            let ext = extend_with_boundary_points(&hull, &pts);
            prop_assert_eq!(vertices_only(&ext), hull);
        }
    }
}
