//! Delaunay ring lattice demonstration.
//!
//! This demo shows:
//! - Staggered ring lattices at several densities
//! - Delaunay triangulation via the default backend
//! - Masking triangles by centroid distance to cut out the center hole
//! - Saving individual figures under custom names
//!
//! Run with: cargo run --example `delaunay_ring_demo`

use triplot::{colors, figure, render_to_file, Aspect, PlotStyle, Triangulation};

/// Builds one masked ring triangulation.
fn ring_mesh(n_angles: usize, n_radii: usize, hole_radius: f64) -> Triangulation {
    let points = triplot::ring_lattice(n_angles, n_radii, hole_radius, 0.95);
    let mut triangulation =
        Triangulation::delaunay(points).expect("Delaunay triangulation failed");
    triangulation.mask_inside_radius(hole_radius);
    triangulation
}

fn main() {
    env_logger::init();
    triplot::init().expect("Failed to initialize triplot");

    let configs = [
        ("ring_coarse.png", 12, 4, colors::BLUE),
        ("ring_medium.png", 24, 6, colors::GREEN),
        ("ring_fine.png", 36, 8, colors::BLACK),
    ];

    println!("Delaunay Ring Demo");
    println!("==================");
    println!();

    for (filename, n_angles, n_radii, color) in configs {
        let mesh = ring_mesh(n_angles, n_radii, 0.25);
        let num_points = mesh.num_points();
        let num_masked = mesh.num_triangles() - mesh.num_unmasked();

        let fig = figure(format!("ring lattice {n_angles}x{n_radii}"))
            .expect("figure creation failed");
        fig.set_aspect(Aspect::Equal);
        fig.triplot(mesh, PlotStyle::with_color(color))
            .expect("plot failed");

        render_to_file(fig.id(), filename).expect("saving figure failed");
        println!("  - {filename}: {num_points} points, {num_masked} triangles masked out");
    }
}
