//! Separable box blur.

use crate::buffer::{clamp_sample, PixelBuffer};

/// Two-pass separable box blur.
///
/// The radius is `clamp(⌊blur⌋, 1, 20)` pixels; the box window
/// `[x − r, x + r]` is clamped to the image bounds and each channel takes
/// the arithmetic mean of the window. The horizontal pass writes a rounded
/// intermediate which the vertical pass reads, so the result matches a
/// stage-by-stage 8-bit pipeline rather than a fused float one. Alpha is
/// forced to 255.
pub fn box_blur(frame: &mut PixelBuffer, radius: f64) {
    if radius == 0.0 {
        return;
    }
    let width = frame.width;
    let height = frame.height;
    let r = (radius.floor() as i64).clamp(1, 20) as usize;

    // Horizontal pass
    let src = frame.data.clone();
    let mut temp = vec![0u8; src.len()];
    for y in 0..height {
        for x in 0..width {
            let x_start = x.saturating_sub(r);
            let x_end = (x + r).min(width - 1);
            let (mut sum_r, mut sum_g, mut sum_b) = (0u64, 0u64, 0u64);
            for xi in x_start..=x_end {
                let idx = (y * width + xi) * 4;
                sum_r += src[idx] as u64;
                sum_g += src[idx + 1] as u64;
                sum_b += src[idx + 2] as u64;
            }
            let count = (x_end - x_start + 1) as f64;
            let idx = (y * width + x) * 4;
            temp[idx] = clamp_sample(sum_r as f64 / count);
            temp[idx + 1] = clamp_sample(sum_g as f64 / count);
            temp[idx + 2] = clamp_sample(sum_b as f64 / count);
            temp[idx + 3] = 255;
        }
    }

    // Vertical pass
    for y in 0..height {
        let y_start = y.saturating_sub(r);
        let y_end = (y + r).min(height - 1);
        for x in 0..width {
            let (mut sum_r, mut sum_g, mut sum_b) = (0u64, 0u64, 0u64);
            for yi in y_start..=y_end {
                let idx = (yi * width + x) * 4;
                sum_r += temp[idx] as u64;
                sum_g += temp[idx + 1] as u64;
                sum_b += temp[idx + 2] as u64;
            }
            let count = (y_end - y_start + 1) as f64;
            let idx = (y * width + x) * 4;
            frame.data[idx] = clamp_sample(sum_r as f64 / count);
            frame.data[idx + 1] = clamp_sample(sum_g as f64 / count);
            frame.data[idx + 2] = clamp_sample(sum_b as f64 / count);
            frame.data[idx + 3] = 255;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_uniform_image_is_stable() {
        let mut frame = PixelBuffer::filled(5, 5, [90, 120, 200, 255]).unwrap();
        let original = frame.clone();
        box_blur(&mut frame, 2.0);
        assert_eq!(frame, original, "uniform image blurs to itself");
    }

    #[test]
    fn test_blur_forces_alpha_opaque() {
        let mut frame = PixelBuffer::filled(3, 3, [100, 100, 100, 40]).unwrap();
        box_blur(&mut frame, 1.0);
        assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_blur_averages_neighbors() {
        // 3x1 image: black, white, black with radius 1
        let mut frame = PixelBuffer::new(
            3,
            1,
            vec![
                0, 0, 0, 255, //
                255, 255, 255, 255, //
                0, 0, 0, 255,
            ],
        )
        .unwrap();
        box_blur(&mut frame, 1.0);
        // x=0: mean(0, 255) = 127.5 -> 128; x=1: mean(0, 255, 0) = 85
        assert_eq!(frame.data[0], 128);
        assert_eq!(frame.data[4], 85);
        assert_eq!(frame.data[8], 128);
    }

    #[test]
    fn test_blur_fractional_radius_uses_minimum_window() {
        // floor(0.5) = 0 clamps up to radius 1
        let mut frame = PixelBuffer::new(
            2,
            1,
            vec![
                0, 0, 0, 255, //
                200, 200, 200, 255,
            ],
        )
        .unwrap();
        box_blur(&mut frame, 0.5);
        assert_eq!(frame.data[0], 100);
    }
}
