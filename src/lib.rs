//! Image effects pipeline: tone adjustment, dithering and duotone
//! palette mapping over RGBA pixel buffers.
//!
//! The crate is built around a single entry point, [`process`], which runs
//! a fixed stage order over a [`PixelBuffer`]:
//!
//! 1. brightness and contrast;
//! 2. for the dithering effect, the extended tone stages (box blur,
//!    pre-dither contrast, midtone/highlight curve, shadow cutoff,
//!    posterization);
//! 3. the main [`Effect`]: one of 28 [`DitherAlgorithm`]s, a global
//!    luminance [`threshold`](effects::threshold), Sobel
//!    [`edge detection`](effects::edge_detect), or nothing;
//! 4. optional inversion (dithering only);
//! 5. [`ColorPalette`] mapping.
//!
//! Every stage is skipped at its neutral parameter value, so
//! `ProcessingParams::default()` is the identity transform.
//!
//! # Example
//!
//! ```
//! use dither_fx::{process, DitherAlgorithm, Effect, PixelBuffer, ProcessingParams};
//!
//! let source = PixelBuffer::filled(16, 16, [128, 128, 128, 255])?;
//! let params = ProcessingParams {
//!     effect: Effect::Dithering,
//!     dithering_algorithm: DitherAlgorithm::Bayer4x4,
//!     ..Default::default()
//! };
//! let dithered = process(&source, &params)?;
//! assert!(dithered.data.chunks_exact(4).all(|px| px[0] == 0 || px[0] == 255));
//! # Ok::<(), dither_fx::PipelineError>(())
//! ```
//!
//! Randomized algorithms ([`DitherAlgorithm::Random`],
//! [`DitherAlgorithm::WhiteNoise`]) draw from the thread-local generator in
//! [`process`]; pass a seeded generator to [`process_with_rng`] for
//! reproducible output.

pub mod buffer;
pub mod dither;
pub mod effects;
pub mod error;
pub mod palette;
pub mod params;
pub mod pipeline;
pub mod presets;
pub mod tone;

#[cfg(test)]
mod domain_tests;

pub use buffer::{luminance, PixelBuffer};
pub use dither::{DitherAlgorithm, DitherOptions};
pub use error::PipelineError;
pub use palette::{ColorPalette, PalettePair};
pub use params::{Effect, ProcessingParams};
pub use pipeline::{process, process_with_rng};
pub use presets::Preset;
