//! Dithering and halftoning algorithms.
//!
//! [`DitherAlgorithm`] enumerates every supported algorithm and dispatches
//! into one of five families:
//!
//! * pixel-wise error diffusion (Jarvis-Judice-Ninke through Sierra Lite),
//! * cell-based error diffusion (Floyd-Steinberg, Atkinson, variable-error),
//! * ordered matrix thresholding (Bayer, blue-noise, clustered-dot),
//! * procedural patterns (crosshatch, halftone dots, lines, spiral, ...),
//! * stochastic thresholding (random, white-noise) and the Riemersma
//!   space-filling-curve walk.
//!
//! All algorithms binarize luminance in place and leave alpha alone.

mod diffusion;
pub mod kernel;
mod noise;
mod options;
pub mod ordered;
mod pattern;
mod riemersma;

pub use options::DitherOptions;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;

/// A dithering or halftoning algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (cell-based).
    #[default]
    FloydSteinberg,
    /// Atkinson error diffusion; propagates 75% of the error.
    Atkinson,
    /// Jarvis-Judice-Ninke 12-neighbor diffusion.
    JarvisJudiceNinke,
    /// Stucki diffusion.
    Stucki,
    /// Burkes diffusion.
    Burkes,
    /// Full Sierra diffusion.
    Sierra,
    /// Sierra Lite diffusion.
    SierraLite,
    /// Two-row Sierra diffusion.
    TwoRowSierra,
    /// 2x2 Bayer matrix.
    #[serde(rename = "bayer-2x2")]
    Bayer2x2,
    /// 4x4 Bayer matrix.
    #[serde(rename = "bayer-4x4")]
    Bayer4x4,
    /// 8x8 Bayer matrix.
    #[serde(rename = "bayer-8x8")]
    Bayer8x8,
    /// Alias for the 4x4 Bayer matrix.
    Ordered,
    /// Random threshold jitter around mid-gray.
    Random,
    /// Crosshatch pattern.
    Crosshatch,
    /// Cell-based halftone dots.
    HalftoneDots,
    /// Newspaper dot screen.
    Newspaper,
    /// Stipple dots.
    Stipple,
    /// Horizontal line screen.
    HorizontalLines,
    /// Vertical line screen.
    VerticalLines,
    /// Diagonal line screen.
    DiagonalLines,
    /// Grid lines with density fill.
    GridPattern,
    /// Tiled spiral arms.
    Spiral,
    /// Procedural noise texture.
    NoiseTexture,
    /// 8x8 blue-noise matrix.
    BlueNoise,
    /// 8x8 clustered-dot matrix.
    ClusteredDot,
    /// Uniform random threshold per pixel.
    WhiteNoise,
    /// Riemersma space-filling-curve diffusion.
    Riemersma,
    /// Tone-adaptive variable-coefficient diffusion (cell-based).
    VariableError,
}

impl DitherAlgorithm {
    /// Every supported algorithm, in wire-tag order.
    pub const ALL: [DitherAlgorithm; 28] = [
        Self::FloydSteinberg,
        Self::Atkinson,
        Self::JarvisJudiceNinke,
        Self::Stucki,
        Self::Burkes,
        Self::Sierra,
        Self::SierraLite,
        Self::TwoRowSierra,
        Self::Bayer2x2,
        Self::Bayer4x4,
        Self::Bayer8x8,
        Self::Ordered,
        Self::Random,
        Self::Crosshatch,
        Self::HalftoneDots,
        Self::Newspaper,
        Self::Stipple,
        Self::HorizontalLines,
        Self::VerticalLines,
        Self::DiagonalLines,
        Self::GridPattern,
        Self::Spiral,
        Self::NoiseTexture,
        Self::BlueNoise,
        Self::ClusteredDot,
        Self::WhiteNoise,
        Self::Riemersma,
        Self::VariableError,
    ];

    /// The algorithm's wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FloydSteinberg => "floyd-steinberg",
            Self::Atkinson => "atkinson",
            Self::JarvisJudiceNinke => "jarvis-judice-ninke",
            Self::Stucki => "stucki",
            Self::Burkes => "burkes",
            Self::Sierra => "sierra",
            Self::SierraLite => "sierra-lite",
            Self::TwoRowSierra => "two-row-sierra",
            Self::Bayer2x2 => "bayer-2x2",
            Self::Bayer4x4 => "bayer-4x4",
            Self::Bayer8x8 => "bayer-8x8",
            Self::Ordered => "ordered",
            Self::Random => "random",
            Self::Crosshatch => "crosshatch",
            Self::HalftoneDots => "halftone-dots",
            Self::Newspaper => "newspaper",
            Self::Stipple => "stipple",
            Self::HorizontalLines => "horizontal-lines",
            Self::VerticalLines => "vertical-lines",
            Self::DiagonalLines => "diagonal-lines",
            Self::GridPattern => "grid-pattern",
            Self::Spiral => "spiral",
            Self::NoiseTexture => "noise-texture",
            Self::BlueNoise => "blue-noise",
            Self::ClusteredDot => "clustered-dot",
            Self::WhiteNoise => "white-noise",
            Self::Riemersma => "riemersma",
            Self::VariableError => "variable-error",
        }
    }

    /// Whether the algorithm produces the same output for the same input.
    ///
    /// Only the random and white-noise algorithms draw fresh randomness;
    /// everything else, Riemersma included, is a pure function of the
    /// input frame and options.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Self::Random | Self::WhiteNoise)
    }

    /// Run the algorithm over `frame` in place.
    ///
    /// `rng` is only consulted by the non-deterministic algorithms; pass a
    /// seeded generator for reproducible output.
    pub fn apply<R: Rng>(&self, frame: &mut PixelBuffer, opts: &DitherOptions, rng: &mut R) {
        use kernel::*;
        match self {
            Self::FloydSteinberg => diffusion::diffuse_cells(frame, &FLOYD_STEINBERG, opts),
            Self::Atkinson => diffusion::diffuse_cells(frame, &ATKINSON, opts),
            Self::VariableError => diffusion::diffuse_cells_adaptive(frame, opts),
            Self::JarvisJudiceNinke => diffusion::diffuse_pixels(frame, &JARVIS_JUDICE_NINKE, opts),
            Self::Stucki => diffusion::diffuse_pixels(frame, &STUCKI, opts),
            Self::Burkes => diffusion::diffuse_pixels(frame, &BURKES, opts),
            Self::Sierra => diffusion::diffuse_pixels(frame, &SIERRA, opts),
            Self::SierraLite => diffusion::diffuse_pixels(frame, &SIERRA_LITE, opts),
            Self::TwoRowSierra => diffusion::diffuse_pixels(frame, &TWO_ROW_SIERRA, opts),
            Self::Bayer2x2 => ordered::ordered_dither(frame, &ordered::BAYER_2X2, opts),
            Self::Bayer4x4 | Self::Ordered => {
                ordered::ordered_dither(frame, &ordered::BAYER_4X4, opts)
            }
            Self::Bayer8x8 => ordered::ordered_dither(frame, &ordered::BAYER_8X8, opts),
            Self::BlueNoise => ordered::ordered_dither(frame, &ordered::BLUE_NOISE_8X8, opts),
            Self::ClusteredDot => ordered::ordered_dither(frame, &ordered::CLUSTERED_DOT_8X8, opts),
            Self::Crosshatch => pattern::crosshatch(frame, opts),
            Self::HalftoneDots => pattern::halftone_dots(frame, opts),
            Self::Newspaper => pattern::newspaper(frame, opts),
            Self::Stipple => pattern::stipple(frame, opts),
            Self::HorizontalLines => pattern::horizontal_lines(frame, opts),
            Self::VerticalLines => pattern::vertical_lines(frame, opts),
            Self::DiagonalLines => pattern::diagonal_lines(frame, opts),
            Self::GridPattern => pattern::grid_pattern(frame, opts),
            Self::Spiral => pattern::spiral(frame, opts),
            Self::NoiseTexture => pattern::noise_texture(frame, opts),
            Self::Random => noise::random_dither(frame, opts, rng),
            Self::WhiteNoise => noise::white_noise(frame, opts, rng),
            Self::Riemersma => riemersma::riemersma(frame, opts),
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DitherAlgorithm {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|algorithm| algorithm.as_str() == s)
            .copied()
            .ok_or_else(|| PipelineError::UnsupportedAlgorithm(s.to_string()))
    }
}
