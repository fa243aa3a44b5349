//! Random threshold dithering.
//!
//! Both algorithms draw a fresh uniform sample per pixel, so output is
//! only reproducible when the caller supplies a seeded generator.

use rand::Rng;

use super::options::DitherOptions;
use crate::buffer::PixelBuffer;

/// Jitter the mid-gray threshold by `±64 · intensity` per pixel.
pub(crate) fn random_dither<R: Rng>(frame: &mut PixelBuffer, opts: &DitherOptions, rng: &mut R) {
    let width = frame.width;
    let height = frame.height;

    for y in 0..height {
        for x in 0..width {
            let idx = frame.offset(x, y);
            let gray = frame.luma_at(idx);
            let threshold = 128.0 + (rng.gen::<f64>() - 0.5) * 128.0 * opts.intensity;
            let new_gray = if gray > threshold { 255 } else { 0 };
            frame.set_gray(idx, new_gray);
        }
    }
}

/// Compare every pixel against an independent uniform threshold in
/// `[0, 255 · scale)`.
pub(crate) fn white_noise<R: Rng>(frame: &mut PixelBuffer, opts: &DitherOptions, rng: &mut R) {
    let width = frame.width;
    let height = frame.height;

    for y in 0..height {
        for x in 0..width {
            let idx = frame.offset(x, y);
            let gray = frame.luma_at(idx);
            let threshold = rng.gen::<f64>() * 255.0 * opts.scale;
            let new_gray = if gray > threshold { 255 } else { 0 };
            frame.set_gray(idx, new_gray);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_dither_extremes_are_stable() {
        // The jittered threshold stays within [64, 192] at intensity 1,
        // so pure black and pure white never flip.
        let mut rng = StdRng::seed_from_u64(7);
        let mut white = PixelBuffer::filled(8, 8, [255, 255, 255, 255]).unwrap();
        random_dither(&mut white, &DitherOptions::new(), &mut rng);
        assert!(white.data.chunks_exact(4).all(|px| px[0] == 255));

        let mut black = PixelBuffer::filled(8, 8, [0, 0, 0, 255]).unwrap();
        random_dither(&mut black, &DitherOptions::new(), &mut rng);
        assert!(black.data.chunks_exact(4).all(|px| px[0] == 0));
    }

    #[test]
    fn test_same_seed_same_output() {
        let source = PixelBuffer::filled(16, 16, [128, 128, 128, 255]).unwrap();

        let mut a = source.clone();
        random_dither(&mut a, &DitherOptions::new(), &mut StdRng::seed_from_u64(42));
        let mut b = source.clone();
        random_dither(&mut b, &DitherOptions::new(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let mut c = source.clone();
        white_noise(&mut c, &DitherOptions::new(), &mut StdRng::seed_from_u64(42));
        let mut d = source;
        white_noise(&mut d, &DitherOptions::new(), &mut StdRng::seed_from_u64(42));
        assert_eq!(c, d);
    }

    #[test]
    fn test_white_noise_density_tracks_luminance() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut frame = PixelBuffer::filled(32, 32, [128, 128, 128, 255]).unwrap();
        white_noise(&mut frame, &DitherOptions::new(), &mut rng);
        let white = frame.data.chunks_exact(4).filter(|px| px[0] == 255).count();
        let ratio = white as f64 / (32.0 * 32.0);
        assert!(
            (ratio - 0.5).abs() < 0.15,
            "mid-gray should come out roughly half white, got {ratio}"
        );
    }

    #[test]
    fn test_zero_intensity_collapses_to_fixed_threshold() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut frame = PixelBuffer::filled(4, 4, [129, 129, 129, 255]).unwrap();
        random_dither(&mut frame, &DitherOptions::new().intensity(0.0), &mut rng);
        assert!(frame.data.chunks_exact(4).all(|px| px[0] == 255));
    }
}
