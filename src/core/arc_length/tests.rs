use super::*;
use crate::core::Bspline2;
use approx::assert_abs_diff_eq;
use glam::Vec2;

fn curve(topology: Topology, set: PointSet, points: Vec<Vec2>) -> Bspline2 {
    let mut curve = Bspline2::with_topology(topology);
    curve
        .set_points(set, points)
        .expect("Punkte müssen synchronisierbar sein");
    curve
}

fn square() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(0.0, 100.0),
    ]
}

// ── Länge ──

#[test]
fn test_length_of_unready_curve_is_zero() {
    let c = curve(Topology::Open, PointSet::Knots, square()[..3].to_vec());
    assert_eq!(curve_length(&c), 0.0);
    assert!(knot_spacings(&c).is_empty());
}

#[test]
fn test_length_of_straight_control_line() {
    let controls: Vec<Vec2> = (0..6).map(|i| Vec2::new(i as f32 * 10.0, 5.0)).collect();
    let c = curve(Topology::Open, PointSet::Controls, controls);
    assert_abs_diff_eq!(curve_length(&c), 50.0, epsilon = 1e-3);
}

#[test]
fn test_length_is_deterministic() {
    let c = curve(Topology::Open, PointSet::Knots, square());
    let first = curve_length(&c);
    let second = curve_length(&c);
    assert_eq!(first, second);
    // Tessellierung mit lod = 30: ~316.8
    assert!((first - 316.8).abs() < 0.5, "Länge {}", first);
}

#[test]
fn test_length_shrinks_as_controls_collapse() {
    let base = curve(Topology::Open, PointSet::Knots, square());
    let controls = base.control_points().to_vec();
    let centroid = controls.iter().copied().sum::<Vec2>() / controls.len() as f32;

    let lengths: Vec<f32> = [1.0f32, 0.5, 0.1, 0.0]
        .iter()
        .map(|&scale| {
            let scaled = controls.iter().map(|&p| centroid + (p - centroid) * scale);
            let c = curve(Topology::Open, PointSet::Controls, scaled.collect());
            curve_length(&c)
        })
        .collect();

    for pair in lengths.windows(2) {
        assert!(pair[1] < pair[0], "Längen nicht fallend: {:?}", lengths);
    }
    assert!(lengths[3] < 1e-3, "kollabierte Kurve: {}", lengths[3]);
}

#[test]
fn test_knot_spacings_sum_to_length() {
    for topology in [Topology::Open, Topology::Closed] {
        let c = curve(topology, PointSet::Knots, square());
        let spacings = knot_spacings(&c);
        let expected = match topology {
            Topology::Open => 3,
            Topology::Closed => 4,
        };
        assert_eq!(spacings.len(), expected);
        assert_abs_diff_eq!(
            spacings.iter().sum::<f32>(),
            curve_length(&c),
            epsilon = 1e-2
        );
    }
}

// ── Re-Knotting ──

#[test]
fn test_requantize_square_converges() {
    let knots = square();
    let mut c = curve(Topology::Open, PointSet::Knots, knots.clone());

    let report = requantize(&mut c, &ReknotOptions::default()).expect("Re-Knotting");

    assert!(report.converged(), "{:?}", report);
    assert!(report.iterations <= REKNOT_MAX_ITERATIONS);
    assert_eq!(c.knot_points().len(), 4);
    assert_eq!(c.knot_points()[0], knots[0]);
    assert_eq!(c.knot_points()[3], knots[3]);

    // Abstand entlang der Kurve, nicht die Sehnenlänge zwischen den Knoten
    let spacings = knot_spacings(&c);
    let min = spacings.iter().copied().fold(f32::INFINITY, f32::min);
    let max = spacings.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    assert!(max - min < 1.0, "Abstände {:?}", spacings);
}

#[test]
fn test_requantize_straight_line_evens_out_knots() {
    let knots = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(20.0, 0.0),
        Vec2::new(90.0, 0.0),
        Vec2::new(100.0, 0.0),
    ];
    let mut c = curve(Topology::Open, PointSet::Knots, knots);

    let report = requantize(&mut c, &ReknotOptions::default()).expect("Re-Knotting");
    assert!(report.converged());

    for (i, pair) in c.knot_points().windows(2).enumerate() {
        let d = pair[0].distance(pair[1]);
        assert!((d - 25.0).abs() < 0.5, "Abstand {}: {}", i, d);
    }
}

#[test]
fn test_requantize_reports_iteration_limit() {
    let mut c = curve(Topology::Open, PointSet::Knots, square());
    let options = ReknotOptions {
        convergence_tolerance: 0.0,
        max_iterations: 1,
        ..ReknotOptions::default()
    };

    let report = requantize(&mut c, &options).expect("Re-Knotting");

    assert_eq!(report.status, ReknotStatus::IterationLimit);
    assert_eq!(report.iterations, 1);
    assert!(!report.converged());
    assert_eq!(c.knot_points().len(), 4);
}

#[test]
fn test_requantize_skips_unready_curve() {
    let knots = square()[..3].to_vec();
    let mut c = curve(Topology::Open, PointSet::Knots, knots.clone());

    let report = requantize(&mut c, &ReknotOptions::default()).expect("Re-Knotting");

    assert_eq!(report.status, ReknotStatus::Skipped);
    assert_eq!(report.iterations, 0);
    assert_eq!(c.knot_points(), knots.as_slice());
}

#[test]
fn test_requantize_skips_zero_length_curve() {
    let mut c = curve(Topology::Open, PointSet::Knots, vec![Vec2::ZERO; 5]);
    let report = requantize(&mut c, &ReknotOptions::default()).expect("Re-Knotting");
    assert_eq!(report.status, ReknotStatus::Skipped);
    assert_eq!(c.knot_points(), vec![Vec2::ZERO; 5].as_slice());
}

#[test]
fn test_requantize_closed_keeps_count_and_start() {
    let knots = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(30.0, 5.0),
        Vec2::new(60.0, -5.0),
        Vec2::new(90.0, 0.0),
        Vec2::new(120.0, 10.0),
        Vec2::new(150.0, 0.0),
    ];
    let mut c = curve(Topology::Closed, PointSet::Knots, knots.clone());

    let report = requantize(&mut c, &ReknotOptions::default()).expect("Re-Knotting");

    assert_ne!(report.status, ReknotStatus::Skipped);
    assert_eq!(c.knot_points().len(), knots.len());
    assert_eq!(c.knot_points()[0], knots[0]);
}
