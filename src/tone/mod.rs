//! Tone adjustment stages.
//!
//! Independent, composable pixel and neighborhood transforms applied before
//! the main effect: brightness, contrast, the midtone/highlight curve,
//! luminance thresholding, posterization, box blur and inversion. Each
//! function mutates the pipeline's working buffer in place; every written
//! sample is clamped to [0, 255].
//!
//! All of these are identity at their neutral parameter value (the pipeline
//! skips them there, but the math degenerates to a near no-op anyway).

mod blur;

pub use blur::box_blur;

use crate::buffer::{clamp_sample, luminance, PixelBuffer};

/// Apply a function to the R, G and B samples of every pixel, clamping the
/// result. Alpha is left untouched.
fn for_each_rgb(frame: &mut PixelBuffer, mut f: impl FnMut(f64) -> f64) {
    for px in frame.data.chunks_exact_mut(4) {
        for c in px.iter_mut().take(3) {
            *c = clamp_sample(f(*c as f64));
        }
    }
}

/// Brightness adjustment: `out = in + brightness · 2.55`.
///
/// `brightness` is a percent-like value in [-255, 255]; 0 is a no-op.
pub fn brightness(frame: &mut PixelBuffer, brightness: i32) {
    let adjust = brightness as f64 * 2.55;
    for_each_rgb(frame, |v| v + adjust);
}

/// Contrast adjustment around the mid-gray pivot.
///
/// `factor = 259·(c + 255) / (255·(259 − c))`, `out = factor·(in − 128) + 128`.
/// The formula has a singularity at `c = 259`; callers must keep `c` within
/// [-255, 255] (the pipeline clamps both the user contrast and the
/// dither-contrast derived adjustment before calling).
pub fn contrast(frame: &mut PixelBuffer, contrast: f64) {
    let factor = (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast));
    for_each_rgb(frame, |v| factor * (v - 128.0) + 128.0);
}

/// Midtone/highlight curve.
///
/// Channels are normalized to [0, 1]. Values in the open (0.3, 0.7) band
/// have their deviation from 0.3 scaled by `1 + midtones/100`; any value
/// ending up above 0.7 then has its deviation from 0.7 scaled by
/// `1 + highlights/100`. Both arguments are percents where 0 is neutral.
pub fn adjust_tones(frame: &mut PixelBuffer, midtones: f64, highlights: f64) {
    let mid_factor = 1.0 + midtones / 100.0;
    let highlight_factor = 1.0 + highlights / 100.0;
    for_each_rgb(frame, |v| {
        let normalized = v / 255.0;
        let mut adjusted = normalized;
        if normalized > 0.3 && normalized < 0.7 {
            adjusted = 0.3 + (normalized - 0.3) * mid_factor;
        }
        if adjusted > 0.7 {
            adjusted = 0.7 + (adjusted - 0.7) * highlight_factor;
        }
        adjusted * 255.0
    });
}

/// Darken pixels whose luminance falls below a threshold.
///
/// `threshold_percent` is mapped to `(threshold_percent / 100) · 255`;
/// pixels below it have R, G and B halved, pixels at or above it are
/// unchanged.
pub fn luminance_threshold(frame: &mut PixelBuffer, threshold_percent: f64) {
    let threshold_value = (threshold_percent / 100.0) * 255.0;
    for px in frame.data.chunks_exact_mut(4) {
        let lum = luminance(px[0], px[1], px[2]);
        if lum < threshold_value {
            for c in px.iter_mut().take(3) {
                *c = clamp_sample(*c as f64 * 0.5);
            }
        }
    }
}

/// Posterization driven by a depth percent.
///
/// `levels = max(2, ⌊depth/100 · 256⌋)`, `step = 256 / levels`; each channel
/// snaps to `⌊channel / step⌋ · step`. A depth of 100 or more is a no-op
/// (the pipeline skips the stage there).
pub fn posterize(frame: &mut PixelBuffer, depth: i32) {
    if depth >= 100 {
        return;
    }
    let levels = ((depth as f64 / 100.0 * 256.0).floor() as i64).max(2);
    let step = 256.0 / levels as f64;
    for_each_rgb(frame, |v| (v / step).floor() * step);
}

/// Invert R, G and B; alpha untouched.
pub fn invert(frame: &mut PixelBuffer) {
    for px in frame.data.chunks_exact_mut(4) {
        for c in px.iter_mut().take(3) {
            *c = 255 - *c;
        }
    }
}
