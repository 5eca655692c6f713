//! Hand-authored mesh fixtures.
//!
//! These tables are opaque golden data: they were authored as literal
//! arrays and must be loaded verbatim, never regenerated. The estuary
//! mesh is an unstructured coastal grid section with coordinates stored
//! as radian-sized longitude/latitude values; the plate mesh is a regular
//! finite-element grid over a 5 x 10 rectangular plate.

use glam::DVec2;

/// Point coordinates of the estuary mesh, radian-sized lon/lat pairs.
pub const ESTUARY_POINTS: [[f64; 2]; 74] = [
    [-0.101, 0.872], [-0.080, 0.883], [-0.069, 0.888], [-0.054, 0.890],
    [-0.045, 0.897], [-0.057, 0.895], [-0.073, 0.900], [-0.087, 0.898],
    [-0.090, 0.904], [-0.069, 0.907], [-0.069, 0.921], [-0.080, 0.919],
    [-0.073, 0.928], [-0.052, 0.930], [-0.048, 0.942], [-0.062, 0.949],
    [-0.054, 0.958], [-0.069, 0.954], [-0.087, 0.952], [-0.087, 0.959],
    [-0.080, 0.966], [-0.085, 0.973], [-0.087, 0.965], [-0.097, 0.965],
    [-0.097, 0.975], [-0.092, 0.984], [-0.101, 0.980], [-0.108, 0.980],
    [-0.104, 0.987], [-0.102, 0.993], [-0.115, 1.001], [-0.099, 0.996],
    [-0.101, 1.007], [-0.090, 1.010], [-0.087, 1.021], [-0.069, 1.021],
    [-0.052, 1.022], [-0.052, 1.017], [-0.069, 1.010], [-0.064, 1.005],
    [-0.048, 1.005], [-0.031, 1.005], [-0.031, 0.996], [-0.040, 0.987],
    [-0.045, 0.980], [-0.052, 0.975], [-0.040, 0.973], [-0.026, 0.968],
    [-0.020, 0.954], [-0.006, 0.947], [0.003, 0.935], [0.006, 0.926],
    [0.005, 0.921], [0.022, 0.923], [0.033, 0.912], [0.029, 0.905],
    [0.017, 0.900], [0.012, 0.895], [0.027, 0.893], [0.019, 0.886],
    [0.001, 0.883], [-0.012, 0.884], [-0.029, 0.883], [-0.038, 0.879],
    [-0.057, 0.881], [-0.062, 0.876], [-0.078, 0.876], [-0.087, 0.872],
    [-0.030, 0.907], [-0.007, 0.905], [-0.057, 0.916], [-0.025, 0.933],
    [-0.077, 0.990], [-0.059, 0.993],
];

/// Connectivity table of the estuary mesh.
pub const ESTUARY_TRIANGLES: [[u32; 3]; 79] = [
    [67, 66, 1], [65, 2, 66], [1, 66, 2], [64, 2, 65], [63, 3, 64],
    [60, 59, 57], [2, 64, 3], [3, 63, 4], [0, 67, 1], [62, 4, 63],
    [57, 59, 56], [59, 58, 56], [61, 60, 69], [57, 69, 60], [4, 62, 68],
    [6, 5, 9], [61, 68, 62], [69, 68, 61], [9, 5, 70], [6, 8, 7],
    [4, 70, 5], [8, 6, 9], [56, 69, 57], [69, 56, 52], [70, 10, 9],
    [54, 53, 55], [56, 55, 53], [68, 70, 4], [52, 56, 53], [11, 10, 12],
    [69, 71, 68], [68, 13, 70], [10, 70, 13], [51, 50, 52], [13, 68, 71],
    [52, 71, 69], [12, 10, 13], [71, 52, 50], [71, 14, 13], [50, 49, 71],
    [49, 48, 71], [14, 16, 15], [14, 71, 48], [17, 19, 18], [17, 20, 19],
    [48, 16, 14], [48, 47, 16], [47, 46, 16], [16, 46, 45], [23, 22, 24],
    [21, 24, 22], [17, 16, 45], [20, 17, 45], [21, 25, 24], [27, 26, 28],
    [20, 72, 21], [25, 21, 72], [45, 72, 20], [25, 28, 26], [44, 73, 45],
    [72, 45, 73], [28, 25, 29], [29, 25, 31], [43, 73, 44], [73, 43, 40],
    [72, 73, 39], [72, 31, 25], [42, 40, 43], [31, 30, 29], [39, 73, 40],
    [42, 41, 40], [72, 33, 31], [32, 31, 33], [39, 38, 72], [33, 72, 38],
    [33, 38, 34], [37, 35, 38], [34, 38, 35], [35, 37, 36],
];

/// Node coordinates of the plate mesh: a 5x5 grid spanning x in [0, 5]
/// (1.25 spacing) and y in [0, 10] (2.5 spacing).
pub const PLATE_POINTS: [[f64; 2]; 25] = [
    [0.0, 0.0], [1.25, 0.0], [2.5, 0.0], [3.75, 0.0], [5.0, 0.0],
    [0.0, 2.5], [1.25, 2.5], [2.5, 2.5], [3.75, 2.5], [5.0, 2.5],
    [0.0, 5.0], [1.25, 5.0], [2.5, 5.0], [3.75, 5.0], [5.0, 5.0],
    [0.0, 7.5], [1.25, 7.5], [2.5, 7.5], [3.75, 7.5], [5.0, 7.5],
    [0.0, 10.0], [1.25, 10.0], [2.5, 10.0], [3.75, 10.0], [5.0, 10.0],
];

/// Element connectivity of the plate mesh: each grid cell split into two
/// triangles.
pub const PLATE_TRIANGLES: [[u32; 3]; 32] = [
    [0, 1, 6], [1, 2, 7], [2, 3, 8], [3, 4, 9],
    [0, 6, 5], [1, 7, 6], [2, 8, 7], [3, 9, 8],
    [5, 6, 11], [6, 7, 12], [7, 8, 13], [8, 9, 14],
    [5, 11, 10], [6, 12, 11], [7, 13, 12], [8, 14, 13],
    [10, 11, 16], [11, 12, 17], [12, 13, 18], [13, 14, 19],
    [10, 16, 15], [11, 17, 16], [12, 18, 17], [13, 19, 18],
    [15, 16, 21], [16, 17, 22], [17, 18, 23], [18, 19, 24],
    [15, 21, 20], [16, 22, 21], [17, 23, 22], [18, 24, 23],
];

/// Returns the estuary mesh points converted to degrees.
///
/// The stored values are radian-sized; conversion is the exact unit
/// reinterpretation `value * (180 / π)`.
#[must_use]
pub fn estuary_points_degrees() -> Vec<DVec2> {
    ESTUARY_POINTS
        .iter()
        .map(|&[x, y]| DVec2::new(x.to_degrees(), y.to_degrees()))
        .collect()
}

/// Returns the estuary mesh points in their stored radian-sized units.
#[must_use]
pub fn estuary_points_radians() -> Vec<DVec2> {
    ESTUARY_POINTS.iter().map(|&[x, y]| DVec2::new(x, y)).collect()
}

/// Returns the estuary connectivity table as a vector.
#[must_use]
pub fn estuary_triangles() -> Vec<[u32; 3]> {
    ESTUARY_TRIANGLES.to_vec()
}

/// Returns the plate mesh node coordinates.
#[must_use]
pub fn plate_points() -> Vec<DVec2> {
    PLATE_POINTS.iter().map(|&[x, y]| DVec2::new(x, y)).collect()
}

/// Returns the plate mesh element table as a vector.
#[must_use]
pub fn plate_triangles() -> Vec<[u32; 3]> {
    PLATE_TRIANGLES.to_vec()
}
