//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how quantization error is distributed to
//! neighboring pixels (or neighboring cells, for the cell-based
//! algorithms). Offsets are in scan units: the diffusion loops multiply
//! them by the cell step where applicable.

/// An error diffusion kernel.
///
/// Each entry is an `(dx, dy, weight)` neighbor offset; a neighbor receives
/// `error · weight / divisor`. Neighbors outside the buffer are skipped;
/// their share of the error is lost, not wrapped or reflected.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries. `dy` is always ≥ 0 so diffusion only
    /// reaches pixels not yet visited in row-major order.
    pub entries: &'static [(i32, i32, u8)],
    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

/// Floyd-Steinberg kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Atkinson kernel.
///
/// Six unit weights over a divisor of 8: only 75% of the error propagates,
/// which keeps highlights and shadows crisp.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Jarvis-Judice-Ninke kernel (12 neighbors over 3 rows).
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

/// Stucki kernel: JJN's shape with sharper center weights.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};

/// Burkes kernel: Stucki reduced to 2 rows.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
};

/// Sierra (full) kernel.
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
};

/// Two-row Sierra kernel.
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const TWO_ROW_SIERRA: Kernel = Kernel {
    entries: &[
        (1, 0, 4),
        (2, 0, 3),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 3),
        (1, 1, 2),
        (2, 1, 1),
    ],
    divisor: 16,
};

/// Sierra Lite kernel, the minimal three-neighbor variant.
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
};

// Variable-coefficient kernels, selected per block by luminance quartile.
// Dark tones diffuse more to the right, light tones more downward; each
// divisor is the sum of its weights.

/// Variable-error kernel for dark tones (normalized luminance < 0.25).
pub const VARIABLE_DARK: Kernel = Kernel {
    entries: &[(1, 0, 9), (-1, 1, 2), (0, 1, 4), (1, 1, 1)],
    divisor: 16,
};

/// Variable-error kernel for mid-dark tones (< 0.5).
pub const VARIABLE_MID_DARK: Kernel = Kernel {
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
};

/// Variable-error kernel for mid-light tones (< 0.75).
pub const VARIABLE_MID_LIGHT: Kernel = Kernel {
    entries: &[(1, 0, 7), (-1, 1, 1), (0, 1, 5), (1, 1, 3)],
    divisor: 16,
};

/// Variable-error kernel for light tones (≥ 0.75).
pub const VARIABLE_LIGHT: Kernel = Kernel {
    entries: &[(1, 0, 4), (-1, 1, 1), (0, 1, 9), (1, 1, 2)],
    divisor: 16,
};

/// Select the variable-error kernel for a block's normalized luminance.
pub(crate) fn variable_kernel(normalized: f64) -> &'static Kernel {
    if normalized < 0.25 {
        &VARIABLE_DARK
    } else if normalized < 0.5 {
        &VARIABLE_MID_DARK
    } else if normalized < 0.75 {
        &VARIABLE_MID_LIGHT
    } else {
        &VARIABLE_LIGHT
    }
}
