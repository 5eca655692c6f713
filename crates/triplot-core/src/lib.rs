//! Core abstractions for triplot-rs.
//!
//! This crate provides the fundamental traits and types used throughout triplot-rs:
//! - [`Artist`] trait for drawable plot payloads
//! - [`Figure`] model and the global figure [`Registry`]
//! - Global state management
//! - Configuration options and plot styling
//!
//! Triangulation data types live in `triplot-mesh`; rasterization lives in
//! `triplot-render`.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod artist;
pub mod error;
pub mod figure;
pub mod options;
pub mod registry;
pub mod state;
pub mod style;

pub use artist::Artist;
pub use error::{Result, TriplotError};
pub use figure::{Aspect, Figure, FigureId};
pub use options::Options;
pub use registry::Registry;
pub use state::{with_context, with_context_mut, Context};
pub use style::{colors, LineStyle, MarkerShape, PlotStyle};

// Re-export glam types for convenience
pub use glam::{DVec2, Vec3};
