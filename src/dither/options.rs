//! Tuning knobs shared by the dithering algorithms.

/// Per-algorithm tuning for a dithering pass.
///
/// Not every algorithm reads every field: the pixel-wise error diffusion
/// family ignores all three, ordered dithering reads `scale` and `size`,
/// the pattern family reads `size` (and sometimes `scale`), and the noise
/// family reads `intensity` or `scale`. Unused fields are simply ignored.
///
/// # Example
///
/// ```
/// use dither_fx::DitherOptions;
///
/// let opts = DitherOptions::new().scale(1.5).size(4.0);
/// assert_eq!(opts.intensity, 1.0);
/// assert_eq!(opts.size, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherOptions {
    /// Noise strength for the random-dither algorithm. Non-negative.
    pub intensity: f64,
    /// Threshold scale. Must be strictly positive; several algorithms
    /// divide by it.
    pub scale: f64,
    /// Cell or pattern size in pixels. At least 1.
    pub size: f64,
}

impl DitherOptions {
    /// Options with all knobs at their neutral value.
    pub fn new() -> Self {
        Self {
            intensity: 1.0,
            scale: 1.0,
            size: 1.0,
        }
    }

    /// Set the noise intensity.
    pub fn intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the threshold scale.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the cell/pattern size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Cell step in whole pixels: `max(1, ⌊size⌋)`.
    pub(crate) fn cell_step(&self) -> usize {
        (self.size.floor() as i64).max(1) as usize
    }
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self::new()
    }
}
