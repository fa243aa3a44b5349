//! Error types for the processing pipeline.

use thiserror::Error;

/// Unified error type for the dither-fx public API.
///
/// Returned by [`process()`](crate::process), [`PixelBuffer::new()`](crate::PixelBuffer::new)
/// and the `FromStr` implementations of the parameter enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Image dimensions must both be non-zero.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// Sample array length does not match `width * height * 4`.
    #[error("buffer length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    InvalidBuffer {
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
        /// Expected sample count (`width * height * 4`)
        expected: usize,
        /// Actual sample count
        actual: usize,
    },

    /// Dithering algorithm tag not recognized.
    #[error("unsupported dithering algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Color palette tag not recognized.
    #[error("unknown color palette: {0}")]
    UnknownPalette(String),

    /// Effect tag not recognized.
    #[error("unknown effect: {0}")]
    UnknownEffect(String),
}
