//! Mesh data types for triplot-rs.
//!
//! This crate provides the triangular-grid building blocks:
//! - [`Triangulation`]: points + connectivity + optional mask
//! - [`DelaunayBackend`]: the external triangulation capability, bound to `spade`
//! - [`ring_lattice`]: the staggered ring point-cloud generator
//! - [`fixtures`]: hand-authored golden meshes
//! - [`TriMeshPlot`]: the figure artist pairing a triangulation with a style

// Mesh code intentionally uses casts between index types and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod delaunay;
pub mod fixtures;
pub mod lattice;
pub mod plot;
pub mod triangulation;

pub use delaunay::{compute_delaunay, DelaunayBackend, SpadeBackend};
pub use lattice::{linspace, ring_lattice};
pub use plot::TriMeshPlot;
pub use triangulation::Triangulation;
