//! The processing pipeline.
//!
//! Stage order is fixed: brightness and contrast first, then (for the
//! dithering effect only) blur, pre-dither contrast, the tone curve, the
//! shadow cutoff and posterization, then the main effect, then optional
//! inversion, and finally palette mapping. Neutral parameter values skip
//! their stage entirely.

use rand::Rng;
use tracing::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::dither::DitherOptions;
use crate::effects;
use crate::error::PipelineError;
use crate::palette::apply_palette;
use crate::params::{Effect, ProcessingParams};
use crate::tone;

/// Run the pipeline over `source`, returning a new frame.
///
/// The source buffer is never mutated. Parameters are sanitized on entry,
/// so out-of-range values clamp instead of failing; the only error paths
/// are the buffer invariants.
///
/// Non-deterministic algorithms draw from the thread-local generator; use
/// [`process_with_rng`] to seed them.
///
/// # Example
///
/// ```
/// use dither_fx::{process, Effect, PixelBuffer, ProcessingParams};
///
/// let source = PixelBuffer::filled(4, 4, [200, 200, 200, 255])?;
/// let params = ProcessingParams {
///     effect: Effect::Threshold,
///     threshold: 128,
///     ..Default::default()
/// };
/// let result = process(&source, &params)?;
/// assert_eq!(&result.data[..4], &[255, 255, 255, 255]);
/// # Ok::<(), dither_fx::PipelineError>(())
/// ```
pub fn process(
    source: &PixelBuffer,
    params: &ProcessingParams,
) -> Result<PixelBuffer, PipelineError> {
    process_with_rng(source, params, &mut rand::thread_rng())
}

/// [`process`] with a caller-supplied random source.
pub fn process_with_rng<R: Rng>(
    source: &PixelBuffer,
    params: &ProcessingParams,
    rng: &mut R,
) -> Result<PixelBuffer, PipelineError> {
    source.validate()?;
    let params = params.sanitized();

    debug!(
        width = source.width,
        height = source.height,
        effect = %params.effect,
        algorithm = %params.dithering_algorithm,
        palette = %params.color_palette,
        "processing frame"
    );

    let mut frame = source.clone();

    if params.brightness != 0 {
        trace!(brightness = params.brightness, "brightness");
        tone::brightness(&mut frame, params.brightness);
    }
    if params.contrast != 0 {
        trace!(contrast = params.contrast, "contrast");
        tone::contrast(&mut frame, params.contrast as f64);
    }

    // The extended tone stages only run ahead of dithering.
    if params.effect == Effect::Dithering {
        if params.blur > 0.0 {
            trace!(radius = params.blur, "box blur");
            tone::box_blur(&mut frame, params.blur);
        }
        if params.dither_contrast != 100 {
            // 1.5x response, kept clear of the formula's pole at 259
            let adjust = ((params.dither_contrast - 100) as f64 * 1.5).clamp(-255.0, 255.0);
            trace!(adjust, "pre-dither contrast");
            tone::contrast(&mut frame, adjust);
        }
        if params.midtones != 100 || params.highlights != 100 {
            let midtones = (params.midtones - 100) as f64 * 0.5;
            let highlights = (params.highlights - 100) as f64 * 0.5;
            trace!(midtones, highlights, "tone curve");
            tone::adjust_tones(&mut frame, midtones, highlights);
        }
        if params.luminance_threshold != 128 {
            let percent = params.luminance_threshold as f64 / 255.0 * 100.0;
            trace!(percent, "shadow cutoff");
            tone::luminance_threshold(&mut frame, percent);
        }
        if params.depth < 100 {
            trace!(depth = params.depth, "posterize");
            tone::posterize(&mut frame, params.depth);
        }
    }

    match params.effect {
        Effect::Dithering => {
            let opts = DitherOptions::new()
                .intensity(params.dither_intensity)
                .scale(params.effect_scale)
                .size(params.effect_size);
            params.dithering_algorithm.apply(&mut frame, &opts, rng);
            if params.invert {
                tone::invert(&mut frame);
            }
        }
        Effect::Threshold => effects::threshold(&mut frame, params.threshold),
        Effect::EdgeDetect => effects::edge_detect(&mut frame),
        Effect::None => {}
    }

    apply_palette(&mut frame, params.color_palette);

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0xD17_4E5)
    }

    #[test]
    fn test_neutral_params_are_identity() {
        let source = PixelBuffer::filled(3, 3, [17, 170, 99, 200]).unwrap();
        let result = process(&source, &ProcessingParams::default()).unwrap();
        assert_eq!(result, source);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let source = PixelBuffer::filled(4, 4, [120, 120, 120, 255]).unwrap();
        let snapshot = source.clone();
        let params = ProcessingParams {
            effect: Effect::Dithering,
            ..Default::default()
        };
        let result = process(&source, &params).unwrap();
        assert_eq!(source, snapshot);
        assert_ne!(result, source);
    }

    #[test]
    fn test_invalid_buffer_is_rejected() {
        let frame = PixelBuffer {
            width: 2,
            height: 2,
            data: vec![0; 10],
        };
        let err = process(&frame, &ProcessingParams::default()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::InvalidBuffer {
                width: 2,
                height: 2,
                expected: 16,
                actual: 10
            }
        );

        let empty = PixelBuffer {
            width: 0,
            height: 3,
            data: vec![],
        };
        assert_eq!(
            process(&empty, &ProcessingParams::default()).unwrap_err(),
            PipelineError::EmptyDimensions {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn test_tone_stages_skip_outside_dithering() {
        // blur and posterize must not run for the threshold effect
        let source = PixelBuffer::filled(3, 3, [100, 100, 100, 255]).unwrap();
        let params = ProcessingParams {
            effect: Effect::Threshold,
            threshold: 128,
            blur: 5.0,
            depth: 2,
            dither_contrast: 300,
            ..Default::default()
        };
        let result = process(&source, &params).unwrap();
        // 100 <= 128 everywhere: plain black, no posterize banding
        assert!(result.data.chunks_exact(4).all(|px| px[0] == 0));
    }

    #[test]
    fn test_invert_applies_after_dithering() {
        let source = PixelBuffer::filled(2, 2, [200, 200, 200, 255]).unwrap();
        let params = ProcessingParams {
            effect: Effect::Dithering,
            dithering_algorithm: crate::dither::DitherAlgorithm::FloydSteinberg,
            invert: true,
            ..Default::default()
        };
        // 200 quantizes to solid white, inverted to solid black
        let result = process_with_rng(&source, &params, &mut seeded()).unwrap();
        assert!(result.data.chunks_exact(4).all(|px| px[0] == 0));
    }

    #[test]
    fn test_palette_runs_for_every_effect() {
        let source = PixelBuffer::filled(2, 2, [255, 255, 255, 255]).unwrap();
        for effect in [Effect::None, Effect::Threshold, Effect::Dithering] {
            let params = ProcessingParams {
                effect,
                color_palette: crate::palette::ColorPalette::Gameboy,
                ..Default::default()
            };
            let result = process_with_rng(&source, &params, &mut seeded()).unwrap();
            assert_eq!(
                &result.data[..3],
                &[155, 188, 15],
                "white maps to the light endpoint under {effect}"
            );
        }
    }

    #[test]
    fn test_dimensions_are_preserved() {
        let source = PixelBuffer::filled(7, 3, [90, 90, 90, 255]).unwrap();
        let params = ProcessingParams {
            effect: Effect::EdgeDetect,
            ..Default::default()
        };
        let result = process(&source, &params).unwrap();
        assert_eq!(result.width, 7);
        assert_eq!(result.height, 3);
        assert_eq!(result.data.len(), source.data.len());
    }
}
