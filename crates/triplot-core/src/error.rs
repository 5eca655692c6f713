//! Error types for triplot-rs.

use thiserror::Error;

/// The main error type for triplot-rs operations.
#[derive(Error, Debug)]
pub enum TriplotError {
    /// Triplot has not been initialized.
    #[error("triplot not initialized - call triplot::init() first")]
    NotInitialized,

    /// Triplot has already been initialized.
    #[error("triplot already initialized")]
    AlreadyInitialized,

    /// A figure with the given id was not found.
    #[error("figure {0} not found")]
    FigureNotFound(u32),

    /// A triangle refers to a point index outside the point set.
    #[error("triangle {triangle} refers to point {index}, but only {num_points} points exist")]
    IndexOutOfBounds {
        triangle: usize,
        index: u32,
        num_points: usize,
    },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The Delaunay backend rejected the point set.
    #[error("triangulation error: {0}")]
    TriangulationError(String),

    /// Rendering error.
    #[error("render error: {0}")]
    RenderError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for triplot-rs operations.
pub type Result<T> = std::result::Result<T, TriplotError>;
