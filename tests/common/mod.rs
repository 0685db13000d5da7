#![allow(dead_code)]

use approx::assert_relative_eq;
use gcg_atlas::{Star, StarCatalog, ViewState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn star(name: &str, x: f64, y: f64, magnitude: f64) -> Star {
    Star {
        name: name.to_string(),
        x,
        y,
        x_err: 0.0005,
        y_err: 0.0005,
        vx: 0.0,
        vy: 0.0,
        vx_err: 0.0,
        vy_err: 0.0,
        magnitude,
        epoch_count: 8,
    }
}

/// The two-star field used throughout the scenarios: SgrA at the origin, S1 at (0.3, 0.4).
pub fn sgra_s1_catalog() -> StarCatalog {
    StarCatalog::build(vec![
        star("SgrA", 0.0, 0.0, 14.0),
        star("S1", 0.3, 0.4, 16.0),
    ])
    .unwrap()
}

/// Random field of `n` stars within ±`extent` arcsec, reproducible from `seed`.
///
/// Positions are snapped to a 1 mas grid so that exact distance ties do occur.
pub fn random_catalog(seed: u64, n: usize, extent: f64) -> StarCatalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n).map(|i| {
        let snap = |v: f64| (v * 1000.0).round() / 1000.0;
        Star {
            name: format!("S{i}-{seed}"),
            x: snap(rng.random_range(-extent..extent)),
            y: snap(rng.random_range(-extent..extent)),
            x_err: rng.random_range(0.0..0.01),
            y_err: rng.random_range(0.0..0.01),
            vx: rng.random_range(-5.0..5.0),
            vy: rng.random_range(-5.0..5.0),
            vx_err: rng.random_range(0.0..0.5),
            vy_err: rng.random_range(0.0..0.5),
            magnitude: rng.random_range(9.0..20.0),
            epoch_count: rng.random_range(0..40),
        }
    });
    StarCatalog::build(rows).unwrap()
}

pub fn assert_view_close(actual: &ViewState, expected: &ViewState, epsilon: f64) {
    assert_relative_eq!(actual.center_x(), expected.center_x(), epsilon = epsilon);
    assert_relative_eq!(actual.center_y(), expected.center_y(), epsilon = epsilon);
    assert_relative_eq!(actual.half_range(), expected.half_range(), epsilon = epsilon);
}
