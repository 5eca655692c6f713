//! Rendering error types.

use thiserror::Error;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Canvas dimensions were zero or too large for the rasterizer.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Pixel buffer allocation failed.
    #[error("pixel buffer allocation failed for {width}x{height}")]
    AllocationFailed {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Pixel buffer length does not match the stated dimensions.
    #[error("pixel buffer does not match {width}x{height} RGBA")]
    InvalidImageData {
        /// Stated width in pixels.
        width: u32,
        /// Stated height in pixels.
        height: u32,
    },

    /// PNG encoding failed.
    #[error("image encoding failed: {0}")]
    EncodingFailed(#[from] png::EncodingError),

    /// PNG decoding failed.
    #[error("image decoding failed: {0}")]
    DecodingFailed(#[from] png::DecodingError),

    /// Writing the output file failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
