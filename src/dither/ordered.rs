//! Ordered (matrix threshold) dithering.
//!
//! A threshold matrix is tiled across the image; every pixel compares its
//! luminance against `(matrix[y][x] + 1) · 256/N² · scale` and snaps to
//! black or white. The cell size option coarsens the tiling by sampling
//! the matrix at `⌊x / size⌋, ⌊y / size⌋`.

use super::options::DitherOptions;
use crate::buffer::PixelBuffer;

/// 2x2 Bayer matrix.
pub const BAYER_2X2: [[u8; 2]; 2] = [
    [0, 2], //
    [3, 1],
];

/// 4x4 Bayer matrix.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// 8x8 Bayer matrix.
pub const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// 8x8 blue-noise threshold matrix. Nearby entries differ strongly, which
/// pushes the quantization noise into high spatial frequencies.
pub const BLUE_NOISE_8X8: [[u8; 8]; 8] = [
    [32, 8, 48, 24, 36, 12, 52, 28],
    [16, 56, 0, 40, 20, 60, 4, 44],
    [50, 26, 34, 10, 54, 30, 38, 14],
    [2, 42, 18, 58, 6, 46, 22, 62],
    [35, 11, 51, 27, 33, 9, 49, 25],
    [19, 59, 3, 43, 17, 57, 1, 41],
    [53, 29, 37, 13, 55, 31, 39, 15],
    [5, 45, 21, 61, 7, 47, 23, 63],
];

/// 8x8 clustered-dot matrix. Low thresholds cluster toward the quadrant
/// centers so dots grow from the middle, like halftone print screens.
pub const CLUSTERED_DOT_8X8: [[u8; 8]; 8] = [
    [24, 10, 12, 26, 35, 47, 49, 37],
    [8, 0, 2, 14, 45, 59, 61, 51],
    [6, 4, 1, 16, 43, 57, 63, 53],
    [22, 18, 20, 28, 33, 41, 55, 39],
    [34, 46, 48, 36, 25, 11, 13, 27],
    [44, 58, 60, 50, 9, 1, 3, 15],
    [42, 56, 62, 52, 7, 5, 2, 17],
    [32, 40, 54, 38, 23, 19, 21, 29],
];

/// Threshold every pixel against a tiled N x N matrix.
pub(crate) fn ordered_dither<const N: usize>(
    frame: &mut PixelBuffer,
    matrix: &[[u8; N]; N],
    opts: &DitherOptions,
) {
    let width = frame.width;
    let height = frame.height;
    let cell = opts.cell_step();
    let factor = 256.0 / (N * N) as f64;

    for y in 0..height {
        for x in 0..width {
            let idx = frame.offset(x, y);
            let gray = frame.luma_at(idx);
            let cell_x = x / cell;
            let cell_y = y / cell;
            let threshold = (matrix[cell_y % N][cell_x % N] + 1) as f64 * factor * opts.scale;
            let new_gray = if gray > threshold { 255 } else { 0 };
            frame.set_gray(idx, new_gray);
        }
    }
}
