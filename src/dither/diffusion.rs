//! Error diffusion scan loops.
//!
//! Two traversal shapes share the kernels in [`super::kernel`]:
//!
//! * a pixel-wise scan with a fixed threshold of 128, used by the
//!   Jarvis-Judice-Ninke/Stucki/Burkes/Sierra family, and
//! * a cell-based scan whose step is the configured cell size and whose
//!   threshold is `128 / scale`, used by Floyd-Steinberg, Atkinson and the
//!   adaptive variable-coefficient algorithm.
//!
//! The cell scan quantizes the cell's origin pixel, floods the verdict
//! across the whole cell, and pushes the error to the origin pixels of the
//! neighboring cells.

use super::kernel::{variable_kernel, Kernel};
use super::options::DitherOptions;
use crate::buffer::{clamp_sample, PixelBuffer};

/// Pixel-wise error diffusion with a fixed mid-gray threshold.
///
/// `intensity` scales the diffused error; the scale and size options have
/// no effect on this family. Error is added per channel, so chroma bleeds
/// into not-yet-visited pixels exactly as far as the kernel reaches.
pub(crate) fn diffuse_pixels(frame: &mut PixelBuffer, kernel: &Kernel, opts: &DitherOptions) {
    let width = frame.width;
    let height = frame.height;
    let divisor = kernel.divisor as f64;

    for y in 0..height {
        for x in 0..width {
            let idx = frame.offset(x, y);
            let gray = frame.luma_at(idx);
            let new_gray = if gray < 128.0 { 0.0 } else { 255.0 };
            let error = (gray - new_gray) * opts.intensity;

            frame.set_gray(idx, new_gray as u8);

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let nidx = frame.offset(nx as usize, ny as usize);
                frame.add_rgb(nidx, error * weight as f64 / divisor);
            }
        }
    }
}

/// Cell-based error diffusion with a fixed kernel.
///
/// The scan visits cell origins at multiples of the cell step, thresholds
/// the origin pixel at `128 / scale`, fills the cell with the verdict and
/// diffuses the scaled error per channel to neighbor cell origins at
/// `(dx·step, dy·step)` offsets.
pub(crate) fn diffuse_cells(frame: &mut PixelBuffer, kernel: &Kernel, opts: &DitherOptions) {
    scan_cells(frame, opts, |_| kernel, false);
}

/// Cell-based diffusion with tone-adaptive kernels.
///
/// The kernel is chosen per cell from the origin pixel's normalized
/// luminance; neighbor writes anchor all three channels to the red sample,
/// collapsing diffused neighborhoods to gray.
pub(crate) fn diffuse_cells_adaptive(frame: &mut PixelBuffer, opts: &DitherOptions) {
    scan_cells(frame, opts, |normalized| variable_kernel(normalized), true);
}

fn scan_cells<'k>(
    frame: &mut PixelBuffer,
    opts: &DitherOptions,
    select: impl Fn(f64) -> &'k Kernel,
    anchor_red: bool,
) {
    let width = frame.width;
    let height = frame.height;
    let step = opts.cell_step();
    let threshold = 128.0 / opts.scale;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let idx = frame.offset(x, y);
            let gray = frame.luma_at(idx);
            let kernel = select(gray / 255.0);
            let new_gray = if gray < threshold { 0.0 } else { 255.0 };
            let error = (gray - new_gray) * opts.intensity;

            for dy in 0..step.min(height - y) {
                for dx in 0..step.min(width - x) {
                    let cell_idx = frame.offset(x + dx, y + dy);
                    frame.set_gray(cell_idx, new_gray as u8);
                }
            }

            let divisor = kernel.divisor as f64;
            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64 * step as i64;
                let ny = y as i64 + dy as i64 * step as i64;
                if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let nidx = frame.offset(nx as usize, ny as usize);
                let delta = error * weight as f64 / divisor;
                if anchor_red {
                    let value = clamp_sample(frame.data[nidx] as f64 + delta);
                    frame.set_gray(nidx, value);
                } else {
                    frame.add_rgb(nidx, delta);
                }
            }

            x += step;
        }
        y += step;
    }
}
