// File: crates/figure-core/tests/sampler.rs
// Purpose: Contract tests for the transfer-curve sampler.

use figure_core::curve::{levels, sample, transfer, InvalidParameter};

#[test]
fn sample_count_and_endpoints() {
    for &(gamma, steps) in &[(1.0 / 2.2, 15usize), (1.0, 100), (2.2, 500)] {
        let points = sample(gamma, steps).expect("valid parameters");
        assert_eq!(points.len(), steps + 1);
        // pow(0, g) == 0 and pow(1, g) == 1 exactly, so the endpoints are exact
        assert_eq!(points[0], (0.0, 1.0));
        assert_eq!(points[steps], (1.0, 0.0));
    }
}

#[test]
fn x_strictly_increasing_and_evenly_spaced() {
    let steps = 37;
    let points = sample(0.7, steps).unwrap();
    let h = 1.0 / steps as f64;
    for (i, w) in points.windows(2).enumerate() {
        assert!(w[1].0 > w[0].0, "x not increasing at {i}");
        let dx = w[1].0 - w[0].0;
        assert!((dx - h).abs() < 1e-12, "uneven spacing at {i}: {dx}");
    }
}

#[test]
fn idempotent() {
    let a = sample(1.0 / 2.2, 250).unwrap();
    let b = sample(1.0 / 2.2, 250).unwrap();
    assert_eq!(a, b);
}

#[test]
fn y_strictly_decreasing_for_nonunit_gamma() {
    for &gamma in &[0.3, 1.0 / 2.2, 2.2, 5.0] {
        let points = sample(gamma, 64).unwrap();
        for w in points.windows(2) {
            assert!(w[1].1 < w[0].1, "gamma {gamma}: y not strictly decreasing");
        }
    }
}

#[test]
fn unit_gamma_is_anti_diagonal() {
    let points = sample(1.0, 16).unwrap();
    for &(x, y) in &points {
        assert_eq!(y, 1.0 - x);
    }
}

#[test]
fn single_step_yields_endpoints_only() {
    let points = sample(2.2, 1).unwrap();
    assert_eq!(points, vec![(0.0, 1.0), (1.0, 0.0)]);
}

#[test]
fn rejects_bad_parameters() {
    assert_eq!(sample(0.0, 100), Err(InvalidParameter::Gamma(0.0)));
    assert_eq!(sample(-1.0, 100), Err(InvalidParameter::Gamma(-1.0)));
    assert_eq!(sample(2.2, 0), Err(InvalidParameter::StepCount(0)));
}

#[test]
fn decoding_gamma_example_values() {
    let points = sample(1.0 / 2.2, 4).unwrap();
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    for &(x, y) in &points {
        assert!((y - transfer(1.0 / 2.2, x)).abs() < 1e-12);
    }
    // Midpoint spot check: 1 - 0.5^(1/2.2)
    assert!((points[2].1 - 0.2703).abs() < 1e-4);
}

#[test]
fn levels_divide_unit_interval() {
    assert_eq!(levels(4), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(levels(1), vec![0.0, 1.0]);
}
