//! Non-dithering effects: global threshold and Sobel edge detection.

use crate::buffer::{clamp_sample, PixelBuffer};

/// Binarize on luminance: strictly above `threshold` goes white, everything
/// else black. Alpha is untouched.
pub fn threshold(frame: &mut PixelBuffer, threshold: u8) {
    let cutoff = threshold as f64;
    for px in frame.data.chunks_exact_mut(4) {
        let gray = crate::buffer::luminance(px[0], px[1], px[2]);
        let value = if gray > cutoff { 255 } else { 0 };
        px[0] = value;
        px[1] = value;
        px[2] = value;
    }
}

const SOBEL_X: [[f64; 3]; 3] = [
    [-1.0, 0.0, 1.0], //
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];
const SOBEL_Y: [[f64; 3]; 3] = [
    [-1.0, -2.0, -1.0],
    [0.0, 0.0, 0.0],
    [1.0, 2.0, 1.0],
];

/// Sobel gradient magnitude on luminance.
///
/// The result replaces the frame: interior pixels hold the clamped
/// magnitude with alpha 255, while the one-pixel border is left fully
/// zeroed, alpha included.
pub fn edge_detect(frame: &mut PixelBuffer) {
    let width = frame.width;
    let height = frame.height;
    let mut result = vec![0u8; frame.data.len()];

    if width > 2 && height > 2 {
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let mut gx = 0.0;
                let mut gy = 0.0;
                for ky in 0..3 {
                    for kx in 0..3 {
                        let idx = frame.offset(x + kx - 1, y + ky - 1);
                        let gray = frame.luma_at(idx);
                        gx += gray * SOBEL_X[ky][kx];
                        gy += gray * SOBEL_Y[ky][kx];
                    }
                }
                let magnitude = (gx * gx + gy * gy).sqrt();
                let idx = frame.offset(x, y);
                let value = clamp_sample(magnitude);
                result[idx] = value;
                result[idx + 1] = value;
                result[idx + 2] = value;
                result[idx + 3] = 255;
            }
        }
    }

    frame.data = result;
}
