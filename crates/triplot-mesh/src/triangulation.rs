//! Unstructured triangular grid data structure.

use glam::DVec2;
use triplot_core::error::{Result, TriplotError};

use crate::delaunay::{self, DelaunayBackend};

/// An unstructured grid of triangles over a 2D point set.
///
/// A triangulation is a point set plus a connectivity table of index
/// triples, optionally carrying a per-triangle mask. Masked triangles are
/// excluded from edge extraction and rendering; the points themselves are
/// unaffected. Points and connectivity are immutable once constructed.
#[derive(Debug, Clone)]
pub struct Triangulation {
    points: Vec<DVec2>,
    triangles: Vec<[u32; 3]>,
    mask: Option<Vec<bool>>,
}

impl Triangulation {
    /// Creates a triangulation from an explicit connectivity table.
    ///
    /// Triangle orientation (clockwise or counterclockwise) is accepted as
    /// given and not enforced.
    ///
    /// # Errors
    ///
    /// Returns [`TriplotError::IndexOutOfBounds`] if any triangle refers to
    /// a point index outside `[0, points.len())`.
    pub fn with_triangles(points: Vec<DVec2>, triangles: Vec<[u32; 3]>) -> Result<Self> {
        validate_indices(points.len(), &triangles)?;
        Ok(Self {
            points,
            triangles,
            mask: None,
        })
    }

    /// Creates a triangulation by computing the Delaunay triangulation of
    /// the points with the default backend.
    ///
    /// Point indices in the resulting connectivity table refer to the input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`TriplotError::TriangulationError`] if the backend rejects
    /// the point set (e.g. non-finite coordinates).
    pub fn delaunay(points: Vec<DVec2>) -> Result<Self> {
        Self::delaunay_with(points, &delaunay::SpadeBackend)
    }

    /// Creates a Delaunay triangulation using a specific backend.
    pub fn delaunay_with(points: Vec<DVec2>, backend: &dyn DelaunayBackend) -> Result<Self> {
        let triangles = backend.triangulate(&points)?;
        log::debug!(
            "Delaunay triangulation: {} points -> {} triangles",
            points.len(),
            triangles.len()
        );
        // Backend output indexes the input points; validation guards
        // against a misbehaving backend implementation.
        validate_indices(points.len(), &triangles)?;
        Ok(Self {
            points,
            triangles,
            mask: None,
        })
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of triangles, masked or not.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of unmasked triangles.
    #[must_use]
    pub fn num_unmasked(&self) -> usize {
        match &self.mask {
            Some(mask) => mask.iter().filter(|&&m| !m).count(),
            None => self.triangles.len(),
        }
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the connectivity table.
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the mask, if one is attached.
    #[must_use]
    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    /// Returns whether triangle `i` is masked.
    ///
    /// Triangles are unmasked when no mask is attached.
    #[must_use]
    pub fn is_masked(&self, i: usize) -> bool {
        self.mask.as_ref().is_some_and(|mask| mask[i])
    }

    /// Attaches a mask, or removes it with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TriplotError::SizeMismatch`] if the mask length differs
    /// from the triangle count.
    pub fn set_mask(&mut self, mask: Option<Vec<bool>>) -> Result<()> {
        if let Some(mask) = &mask {
            if mask.len() != self.triangles.len() {
                return Err(TriplotError::SizeMismatch {
                    expected: self.triangles.len(),
                    actual: mask.len(),
                });
            }
        }
        self.mask = mask;
        Ok(())
    }

    /// Masks every triangle whose centroid lies strictly inside the disc of
    /// the given radius around the origin.
    ///
    /// The strict `<` comparison is part of the contract: a triangle whose
    /// centroid sits exactly on the circle stays unmasked. Any previously
    /// attached mask is replaced.
    pub fn mask_inside_radius(&mut self, radius: f64) {
        let mask: Vec<bool> = (0..self.triangles.len())
            .map(|i| {
                let c = self.centroid(i);
                c.x.hypot(c.y) < radius
            })
            .collect();
        let masked = mask.iter().filter(|&&m| m).count();
        log::debug!(
            "masked {masked} of {} triangles inside radius {radius}",
            self.triangles.len()
        );
        self.mask = Some(mask);
    }

    /// Returns the centroid of triangle `i`: the mean of its three
    /// vertices.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn centroid(&self, i: usize) -> DVec2 {
        let [a, b, c] = self.triangles[i];
        (self.points[a as usize] + self.points[b as usize] + self.points[c as usize]) / 3.0
    }

    /// Returns an iterator over `(index, triangle)` pairs of the unmasked
    /// triangles.
    pub fn unmasked_triangles(&self) -> impl Iterator<Item = (usize, [u32; 3])> + '_ {
        self.triangles
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.is_masked(i))
            .map(|(i, tri)| (i, *tri))
    }

    /// Returns an iterator over the edge segments of all unmasked
    /// triangles, three per triangle.
    ///
    /// Edges shared between adjacent triangles appear once per triangle;
    /// no deduplication is performed.
    pub fn edge_segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.unmasked_triangles().flat_map(move |(_, [a, b, c])| {
            let pa = self.points[a as usize];
            let pb = self.points[b as usize];
            let pc = self.points[c as usize];
            [(pa, pb), (pb, pc), (pc, pa)]
        })
    }

    /// Returns the axis-aligned bounding box of all points as `(min, max)`.
    ///
    /// All points participate, whether or not they belong to an unmasked
    /// triangle, because markers are drawn at every point.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(DVec2, DVec2)> {
        if self.points.is_empty() {
            return None;
        }
        let mut min = DVec2::splat(f64::MAX);
        let mut max = DVec2::splat(f64::MIN);
        for p in &self.points {
            min = min.min(*p);
            max = max.max(*p);
        }
        Some((min, max))
    }
}

/// Checks every index of every triangle against the point count.
fn validate_indices(num_points: usize, triangles: &[[u32; 3]]) -> Result<()> {
    for (triangle, tri) in triangles.iter().enumerate() {
        for &index in tri {
            if index as usize >= num_points {
                return Err(TriplotError::IndexOutOfBounds {
                    triangle,
                    index,
                    num_points,
                });
            }
        }
    }
    Ok(())
}
