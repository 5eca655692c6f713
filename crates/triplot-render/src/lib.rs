//! Rendering backend for triplot-rs.
//!
//! This crate provides the CPU rasterization pipeline, including:
//! - A [`Canvas`] of drawing primitives over `tiny-skia`
//! - Data-to-pixel projection via [`Viewport`]
//! - Axes frames and tick placement
//! - PNG encoding with embedded figure metadata

// Pixel math mixes f32, f64, u32, and usize throughout
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod axes;
pub mod canvas;
pub mod error;
pub mod screenshot;
pub mod viewport;

pub use axes::{draw_axes, nice_ticks};
pub use canvas::{Canvas, Segment};
pub use error::{RenderError, RenderResult};
pub use screenshot::{
    encode_png, read_text_chunks, save_png, PngMetadata, SOFTWARE_KEYWORD, TITLE_KEYWORD,
    X_LABEL_KEYWORD, Y_LABEL_KEYWORD,
};
pub use viewport::{PlotRect, Viewport};
