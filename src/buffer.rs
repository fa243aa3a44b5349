//! RGBA pixel buffer and luminance.
//!
//! [`PixelBuffer`] is the canonical in-memory image representation used by
//! every pipeline stage: interleaved 8-bit R,G,B,A samples in row-major
//! order. Stages operate on a private working copy, so a caller's source
//! buffer is never aliased or mutated.

use crate::error::PipelineError;

/// BT.601 luminance of an RGB triple.
///
/// Computed as `(299·r + 587·g + 114·b) / 1000`, which is the decimal-exact
/// form of the `0.299/0.587/0.114` weights. Integer scaling keeps the edge
/// cases deterministic: `luminance(128, 128, 128)` is exactly `128.0`, so a
/// strict `>` threshold at 128 maps mid-gray to black.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (299 * r as u32 + 587 * g as u32 + 114 * b as u32) as f64 / 1000.0
}

/// Clamp a channel value to [0, 255] and round to the nearest sample.
///
/// Every store into a buffer goes through this, mirroring the saturating
/// behavior of 8-bit clamped sample arrays.
#[inline]
pub(crate) fn clamp_sample(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

/// An RGBA image buffer.
///
/// Invariant: `data.len() == width * height * 4` with both dimensions
/// non-zero. [`PixelBuffer::new`] enforces this at construction; because the
/// fields are public (decode glue fills them directly), the pipeline
/// re-validates on entry and fails fast with
/// [`PipelineError::InvalidBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Interleaved R,G,B,A samples, row-major, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw RGBA samples, validating dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyDimensions`] if either dimension is
    /// zero, or [`PipelineError::InvalidBuffer`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PipelineError> {
        if width == 0 || height == 0 {
            return Err(PipelineError::EmptyDimensions { width, height });
        }
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(PipelineError::InvalidBuffer {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer with every pixel set to the given RGBA value.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, PipelineError> {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Self::new(width, height, data)
    }

    /// Re-assert the buffer invariant.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::EmptyDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width * self.height * 4;
        if self.data.len() != expected {
            return Err(PipelineError::InvalidBuffer {
                width: self.width,
                height: self.height,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    /// Luminance of the pixel starting at byte offset `idx`.
    #[inline]
    pub(crate) fn luma_at(&self, idx: usize) -> f64 {
        luminance(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Write a gray value to R, G and B, leaving alpha untouched.
    #[inline]
    pub(crate) fn set_gray(&mut self, idx: usize, value: u8) {
        self.data[idx] = value;
        self.data[idx + 1] = value;
        self.data[idx + 2] = value;
    }

    /// Add a (possibly negative) delta to R, G and B with saturation.
    ///
    /// Used by error diffusion: writes land directly in the working buffer
    /// so later pixels in the same pass read already-diffused values.
    #[inline]
    pub(crate) fn add_rgb(&mut self, idx: usize, delta: f64) {
        for c in 0..3 {
            self.data[idx + c] = clamp_sample(self.data[idx + c] as f64 + delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance(255, 255, 255), 255.0);
        assert_eq!(luminance(0, 0, 0), 0.0);
        // Exact decimal weights: mid-gray is exactly 128
        assert_eq!(luminance(128, 128, 128), 128.0);
        // Green dominates
        assert!(luminance(0, 255, 0) > luminance(255, 0, 0));
        assert!(luminance(255, 0, 0) > luminance(0, 0, 255));
    }

    #[test]
    fn test_new_validates_dimensions() {
        assert_eq!(
            PixelBuffer::new(0, 4, vec![]),
            Err(PipelineError::EmptyDimensions {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            PixelBuffer::new(2, 2, vec![0; 12]),
            Err(PipelineError::InvalidBuffer {
                width: 2,
                height: 2,
                expected: 16,
                actual: 12
            })
        );
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_filled() {
        let buf = PixelBuffer::filled(3, 2, [10, 20, 30, 255]).unwrap();
        assert_eq!(buf.data.len(), 24);
        assert_eq!(&buf.data[..4], &[10, 20, 30, 255]);
        assert_eq!(&buf.data[20..], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_add_rgb_saturates() {
        let mut buf = PixelBuffer::filled(1, 1, [250, 5, 128, 255]).unwrap();
        buf.add_rgb(0, 10.0);
        assert_eq!(&buf.data[..4], &[255, 15, 138, 255]);
        buf.add_rgb(0, -100.0);
        assert_eq!(&buf.data[..4], &[155, 0, 38, 255]);
    }

    #[test]
    fn test_clamp_sample_rounds() {
        assert_eq!(clamp_sample(-3.0), 0);
        assert_eq!(clamp_sample(300.0), 255);
        assert_eq!(clamp_sample(127.4), 127);
        assert_eq!(clamp_sample(127.6), 128);
    }
}
