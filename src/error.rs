//! Error types for isorender
//!
//! This module provides error types for the two places the engine fails
//! loudly rather than degrading:
//! - Geometry errors (invalid builder parameters)
//! - Frame errors (invalid viewport or spatial-index dimensions)
//!
//! Malformed geometry that reaches the pipeline (degenerate faces, zero
//! normals) never errors; it resolves to neutral outcomes instead.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.

use thiserror::Error;

/// Result type alias for isorender operations
///
/// # Examples
///
/// ```
/// use isorender::Result;
///
/// fn build_scene() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for isorender
///
/// Each variant wraps a more specific error type for that subsystem.
///
/// # Examples
///
/// ```
/// use isorender::Error;
/// use isorender::error::FrameError;
///
/// fn prepare() -> Result<(), Error> {
///     Err(Error::Frame(FrameError::InvalidViewport {
///         width: 0,
///         height: 600,
///     }))
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
  /// Invalid solid-builder parameters
  #[error("Geometry error: {0}")]
  Geometry(#[from] GeometryError),

  /// Invalid viewport or spatial-index dimensions
  #[error("Frame error: {0}")]
  Frame(#[from] FrameError),
}

/// Errors raised by the parametrized solid builders
///
/// These indicate a contract violation in the caller-supplied parameters,
/// not a runtime geometry failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
  /// A round solid needs at least three perimeter segments
  #[error("Invalid segment count: {segments} (need at least 3)")]
  InvalidSegmentCount { segments: usize },

  /// A staircase needs at least one step
  #[error("Invalid step count: {steps} (need at least 1)")]
  InvalidStepCount { steps: usize },

  /// Extrusion requires a face with at least one point
  #[error("Cannot extrude an empty face")]
  EmptyFace,
}

/// Errors raised when preparing frames or building spatial indexes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
  /// Viewport dimensions must both be non-zero
  #[error("Invalid viewport: {width}x{height}")]
  InvalidViewport { width: u32, height: u32 },

  /// Spatial-index dimensions must both be non-zero
  #[error("Invalid spatial index size: {width}x{height}")]
  InvalidIndexSize { width: u32, height: u32 },

  /// Spatial-index cell size must be strictly positive
  #[error("Invalid spatial index cell size: {cell_size}")]
  InvalidCellSize { cell_size: f64 },
}
