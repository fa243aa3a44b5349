//! Procedural pattern halftones.
//!
//! These algorithms replace the image with a deterministic geometric
//! pattern (lines, dots, grids, spirals) whose local density tracks the
//! source luminance. They are pattern generators rather than quantizers:
//! re-running one on its own output generally produces a different
//! pattern, unlike the error diffusion and ordered families.
//!
//! The size option sets the pattern pitch in pixels and the scale option
//! stretches the luminance response; each function clamps size to its own
//! minimum pitch.

use std::f64::consts::PI;

use super::options::DitherOptions;
use crate::buffer::PixelBuffer;

/// Black/white verdict for every pixel from its coordinates and luminance.
fn for_each_pattern(frame: &mut PixelBuffer, mut verdict: impl FnMut(usize, usize, f64) -> u8) {
    let width = frame.width;
    let height = frame.height;
    for y in 0..height {
        for x in 0..width {
            let idx = frame.offset(x, y);
            let gray = frame.luma_at(idx);
            let value = verdict(x, y, gray);
            frame.set_gray(idx, value);
        }
    }
}

/// Crosshatch: darker tones accumulate horizontal/vertical hatching, then
/// diagonals, then solid fill, at luminance cutoffs 192, 128 and 64
/// (stretched by scale).
pub(crate) fn crosshatch(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let spacing = (opts.size.floor() as i64).max(1);
    let diagonal = ((opts.size * 1.5).floor() as i64).max(1);
    let t1 = 192.0 * opts.scale;
    let t2 = 128.0 * opts.scale;
    let t3 = 64.0 * opts.scale;

    for_each_pattern(frame, |x, y, gray| {
        let (x, y) = (x as i64, y as i64);
        let horizontal = y % spacing == 0;
        let vertical = x % spacing == 0;
        let diagonal1 = (x + y) % diagonal == 0;
        let diagonal2 = (x - y) % diagonal == 0;

        let mut value = 255;
        if gray < t1 && (horizontal || vertical) {
            value = 0;
        }
        if gray < t2 && (diagonal1 || diagonal2) {
            value = 0;
        }
        if gray < t3 {
            value = 0;
        }
        value
    });
}

/// Halftone dots: each cell gets a round dot whose radius grows as the
/// cell center's luminance drops.
pub(crate) fn halftone_dots(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let width = frame.width;
    let height = frame.height;
    let dot = (opts.size.floor() as i64).max(2) as usize;
    let half = dot as f64 / 2.0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let center_x = (x as f64 + half).min(width as f64 - 1.0).floor() as usize;
            let center_y = (y as f64 + half).min(height as f64 - 1.0).floor() as usize;
            let gray = frame.luma_at(frame.offset(center_x, center_y));
            let radius = (1.0 - gray / 255.0) * half * opts.scale;

            for dy in 0..dot.min(height - y) {
                for dx in 0..dot.min(width - x) {
                    let dist = ((dx as f64 - half).powi(2) + (dy as f64 - half).powi(2)).sqrt();
                    let value = if dist < radius { 0 } else { 255 };
                    let idx = frame.offset(x + dx, y + dy);
                    frame.set_gray(idx, value);
                }
            }
            x += dot;
        }
        y += dot;
    }
}

/// Newspaper print: per-pixel dot screen where the dot radius follows the
/// pixel's own luminance (brighter pixels sit inside larger dark dots).
pub(crate) fn newspaper(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let cell = (opts.size.floor() as i64).max(2) as usize;
    let half = cell as f64 / 2.0;

    for_each_pattern(frame, |x, y, gray| {
        let cell_x = (x % cell) as f64;
        let cell_y = (y % cell) as f64;
        let center_dist = ((cell_x - half).powi(2) + (cell_y - half).powi(2)).sqrt();
        let threshold = (gray / 255.0) * (cell as f64 * 0.6) * opts.scale;
        if center_dist < threshold {
            0
        } else {
            255
        }
    });
}

/// Stipple: dark tones raise the chance that a pixel lands inside the
/// `(x + 7y) mod spacing` dot band.
pub(crate) fn stipple(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let spacing = (opts.size.floor() as i64).max(2) as usize;

    for_each_pattern(frame, |x, y, gray| {
        let dot_chance = (1.0 - gray / 255.0) * 0.6 * opts.scale;
        let in_dot = (((x + y * 7) % spacing) as f64) < dot_chance * spacing as f64;
        if in_dot {
            0
        } else {
            255
        }
    });
}

/// Horizontal lines whose thickness grows in darker areas.
pub(crate) fn horizontal_lines(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let spacing = (opts.size.floor() as i64).max(2) as usize;

    for_each_pattern(frame, |_x, y, gray| {
        let thickness = ((1.0 - gray / 255.0) * 4.0 * opts.scale).floor() + 1.0;
        if ((y % spacing) as f64) < thickness {
            0
        } else {
            255
        }
    });
}

/// Vertical lines whose thickness grows in darker areas.
pub(crate) fn vertical_lines(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let spacing = (opts.size.floor() as i64).max(2) as usize;

    for_each_pattern(frame, |x, _y, gray| {
        let thickness = ((1.0 - gray / 255.0) * 4.0 * opts.scale).floor() + 1.0;
        if ((x % spacing) as f64) < thickness {
            0
        } else {
            255
        }
    });
}

/// Diagonal lines along `x + y` with luminance-driven thickness.
pub(crate) fn diagonal_lines(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let spacing = (opts.size.floor() as i64).max(2) as usize;

    for_each_pattern(frame, |x, y, gray| {
        let thickness = ((1.0 - gray / 255.0) * 5.0 * opts.scale).floor() + 1.0;
        if (((x + y) % spacing) as f64) < thickness {
            0
        } else {
            255
        }
    });
}

/// Grid lines plus a density fill inside the cells.
pub(crate) fn grid_pattern(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let grid = (opts.size.floor() as i64).max(2) as usize;

    for_each_pattern(frame, |x, y, gray| {
        let is_grid_line = x % grid == 0 || y % grid == 0;
        let fill_density = (1.0 - gray / 255.0) * opts.scale;
        let should_fill = (((x + y) % 4) as f64) < fill_density * 4.0;
        if is_grid_line || should_fill {
            0
        } else {
            255
        }
    });
}

/// Spiral arms: each tile winds an Archimedean spiral and the luminance
/// sets how much of a turn is inked.
pub(crate) fn spiral(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let tile = (opts.size.floor() as i64).max(4) as usize;
    let half = tile as f64 / 2.0;

    for_each_pattern(frame, |x, y, gray| {
        let center_x = (x % tile) as f64 - half;
        let center_y = (y % tile) as f64 - half;
        let angle = center_y.atan2(center_x);
        let radius = (center_x.powi(2) + center_y.powi(2)).sqrt();
        // f64 remainder keeps the dividend's sign, so values reached from
        // a negative angle stay negative and always count as inked.
        let spiral_value = (angle + radius * 0.5 * opts.scale) % (2.0 * PI);
        let threshold = (gray / 255.0) * 2.0 * PI;
        if spiral_value < threshold {
            0
        } else {
            255
        }
    });
}

/// Procedural noise texture from a coordinate hash; brighter pixels win
/// the comparison more often.
pub(crate) fn noise_texture(frame: &mut PixelBuffer, opts: &DitherOptions) {
    let noise_scale = opts.size.max(0.1);

    for_each_pattern(frame, |x, y, gray| {
        let noise =
            ((x as f64 * 12.9898 * noise_scale + y as f64 * 78.233 * noise_scale).sin() * 43758.5453)
                .abs()
                % 1.0;
        let threshold = (gray / 255.0) * opts.scale;
        if noise < threshold {
            255
        } else {
            0
        }
    });
}
