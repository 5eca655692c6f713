//! Delaunay triangulation backend.
//!
//! Computing a Delaunay triangulation is delegated to an external
//! implementation behind the [`DelaunayBackend`] trait. The default
//! binding is the `spade` crate.

use glam::DVec2;
use spade::{DelaunayTriangulation, Point2, Triangulation as _};
use triplot_core::error::{Result, TriplotError};

/// A capability that triangulates a 2D point set.
///
/// Implementations must return triangles whose indices refer to the input
/// point order. The choice among equally valid Delaunay triangulations
/// (tie-breaking of co-circular points) is implementation-defined.
pub trait DelaunayBackend: Send + Sync {
    /// Computes a triangulation of `points`.
    ///
    /// # Errors
    ///
    /// Returns [`TriplotError::TriangulationError`] if the point set is
    /// rejected, e.g. for non-finite coordinates.
    fn triangulate(&self, points: &[DVec2]) -> Result<Vec<[u32; 3]>>;
}

/// The default backend, binding the `spade` crate.
///
/// Uses `bulk_load_stable`, which preserves insertion order, so output
/// indices refer to input positions.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpadeBackend;

impl DelaunayBackend for SpadeBackend {
    fn triangulate(&self, points: &[DVec2]) -> Result<Vec<[u32; 3]>> {
        let vertices: Vec<Point2<f64>> = points.iter().map(|p| Point2::new(p.x, p.y)).collect();

        let triangulation = DelaunayTriangulation::<Point2<f64>>::bulk_load_stable(vertices)
            .map_err(|e| TriplotError::TriangulationError(e.to_string()))?;

        let mut triangles = Vec::with_capacity(triangulation.num_inner_faces());
        for face in triangulation.inner_faces() {
            let [a, b, c] = face.vertices();
            triangles.push([a.index() as u32, b.index() as u32, c.index() as u32]);
        }
        Ok(triangles)
    }
}

/// Computes the Delaunay triangulation of `points` with the default
/// backend.
pub fn compute_delaunay(points: &[DVec2]) -> Result<Vec<[u32; 3]>> {
    SpadeBackend.triangulate(points)
}
