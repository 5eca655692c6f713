//! Deterministic point-set generators.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

/// Returns `n` evenly spaced samples over `[start, stop]`, endpoints
/// included.
///
/// The last sample is exactly `stop` (not `start + (n-1) * step`, which
/// can drift by an ulp).
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    samples[n - 1] = stop;
    samples
}

/// Generates a staggered ring-sampled point cloud.
///
/// Points lie on `n_radii` concentric circles with radii evenly spaced
/// over `[min_radius, max_radius]`, sampled at `n_angles` evenly spaced
/// angles over a full turn (endpoint excluded). Odd-indexed radial
/// columns are rotated by half the angular step, staggering the rings so
/// that no four points are co-circular at matching angles - a pattern
/// that triangulates cleanly instead of producing slivers.
///
/// The output has `n_angles * n_radii` points: the angle varies in the
/// outer loop and the radius in the inner loop, so point `i * n_radii + j`
/// sits on circle `j` at base angle `i * 2π / n_angles`. The generator is
/// deterministic: identical parameters yield bit-identical coordinates.
#[must_use]
pub fn ring_lattice(n_angles: usize, n_radii: usize, min_radius: f64, max_radius: f64) -> Vec<DVec2> {
    let radii = linspace(min_radius, max_radius, n_radii);
    let step = TAU / n_angles as f64;
    let half_step = PI / n_angles as f64;

    let mut points = Vec::with_capacity(n_angles * n_radii);
    for i in 0..n_angles {
        let base = step * i as f64;
        for (j, &radius) in radii.iter().enumerate() {
            let angle = if j % 2 == 1 { base + half_step } else { base };
            points.push(DVec2::new(radius * angle.cos(), radius * angle.sin()));
        }
    }
    points
}
