//! Processing parameters.
//!
//! [`ProcessingParams`] is the single knob bundle for a pipeline run. It
//! deserializes from the camelCase JSON shape used by preset files and
//! front ends; every field falls back to its neutral default when absent,
//! so partial parameter objects are valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dither::DitherAlgorithm;
use crate::error::PipelineError;
use crate::palette::ColorPalette;

/// The main effect applied after tone adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Effect {
    /// Tone adjustments and palette only.
    #[default]
    None,
    /// One of the [`DitherAlgorithm`]s, with the extended tone stages.
    Dithering,
    /// Global luminance threshold.
    Threshold,
    /// Sobel edge detection.
    EdgeDetect,
}

impl Effect {
    /// The effect's wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dithering => "dithering",
            Self::Threshold => "threshold",
            Self::EdgeDetect => "edge-detect",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effect {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "dithering" => Ok(Self::Dithering),
            "threshold" => Ok(Self::Threshold),
            "edge-detect" => Ok(Self::EdgeDetect),
            _ => Err(PipelineError::UnknownEffect(s.to_string())),
        }
    }
}

/// Full parameter set for one pipeline run.
///
/// Field ranges are enforced by [`ProcessingParams::sanitized`], which the
/// pipeline applies on entry; out-of-range or non-finite values are clamped
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingParams {
    /// Brightness shift in percent, [-255, 255]. 0 is neutral.
    pub brightness: i32,
    /// Contrast adjustment, [-255, 255]. 0 is neutral.
    pub contrast: i32,
    /// Cutoff for the threshold effect. 128 is neutral mid-gray.
    pub threshold: u8,
    /// Error diffusion strength. 1.0 is neutral, 0 disables diffusion.
    pub dither_intensity: f64,
    /// The main effect.
    pub effect: Effect,
    /// Algorithm used when `effect` is [`Effect::Dithering`].
    pub dithering_algorithm: DitherAlgorithm,
    /// Invert the dithered result before palette mapping.
    pub invert: bool,
    /// Output palette.
    pub color_palette: ColorPalette,
    /// Pre-dither contrast boost in percent, [50, 500]. 100 is neutral.
    pub dither_contrast: i32,
    /// Midtone expansion in percent. 100 is neutral.
    pub midtones: i32,
    /// Highlight expansion in percent. 100 is neutral.
    pub highlights: i32,
    /// Pre-dither shadow cutoff, 0-255. 128 disables the stage.
    pub luminance_threshold: u8,
    /// Pre-dither box blur radius in pixels, [0, 20]. 0 disables.
    pub blur: f64,
    /// Posterization depth in percent, [2, 100]. 100 disables.
    pub depth: i32,
    /// Per-algorithm threshold/response scale. Strictly positive.
    pub effect_scale: f64,
    /// Per-algorithm cell or pattern size in pixels. At least 1.
    pub effect_size: f64,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 0,
            threshold: 128,
            dither_intensity: 1.0,
            effect: Effect::None,
            dithering_algorithm: DitherAlgorithm::FloydSteinberg,
            invert: false,
            color_palette: ColorPalette::FullColor,
            dither_contrast: 100,
            midtones: 100,
            highlights: 100,
            luminance_threshold: 128,
            blur: 0.0,
            depth: 100,
            effect_scale: 1.0,
            effect_size: 1.0,
        }
    }
}

impl ProcessingParams {
    /// A copy with every field forced into its documented range.
    ///
    /// Non-finite floats fall back to their neutral value first, then the
    /// range clamps apply. `effect_scale` is used as a divisor, so values
    /// at or below zero become the smallest positive double instead.
    pub fn sanitized(&self) -> Self {
        let mut params = self.clone();
        params.brightness = params.brightness.clamp(-255, 255);
        params.contrast = params.contrast.clamp(-255, 255);
        params.dither_contrast = params.dither_contrast.clamp(50, 500);
        params.depth = params.depth.clamp(2, 100);

        if !params.blur.is_finite() {
            params.blur = 0.0;
        }
        params.blur = params.blur.clamp(0.0, 20.0);

        if !params.dither_intensity.is_finite() {
            params.dither_intensity = 1.0;
        }
        params.dither_intensity = params.dither_intensity.max(0.0);

        if !params.effect_scale.is_finite() || params.effect_scale <= 0.0 {
            params.effect_scale = f64::MIN_POSITIVE;
        }

        if !params.effect_size.is_finite() {
            params.effect_size = 1.0;
        }
        params.effect_size = params.effect_size.max(1.0);

        params
    }
}
