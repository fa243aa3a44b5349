//! Duotone palette mapping.
//!
//! The final pipeline stage recolors the frame by interpolating every pixel
//! between a palette's dark and light endpoint on its luminance. The
//! full-color palette is the identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::{clamp_sample, luminance, PixelBuffer};
use crate::error::PipelineError;

/// Dark and light RGB endpoints of a duotone palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalettePair {
    /// Color mapped to zero luminance.
    pub dark: [u8; 3],
    /// Color mapped to full luminance.
    pub light: [u8; 3],
}

const fn pair(dark: [u8; 3], light: [u8; 3]) -> PalettePair {
    PalettePair { dark, light }
}

/// An output color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorPalette {
    /// Identity; leaves the frame's colors untouched.
    #[default]
    FullColor,
    // Basic
    BlackWhite,
    RedBlack,
    BlueWhite,
    GreenBlack,
    // Retro
    Sepia,
    Gameboy,
    Commodore64,
    AmberCrt,
    GreenTerminal,
    // Neon
    CyanMagenta,
    NeonPink,
    ElectricBlue,
    LimePurple,
    HotPinkCyan,
    // Vintage
    OrangeBlue,
    PurpleYellow,
    TealOrange,
    BurgundyCream,
    // Nature
    ForestGreen,
    OceanBlue,
    SunsetRed,
    LavenderSage,
}

impl ColorPalette {
    /// Every palette, identity first.
    pub const ALL: [ColorPalette; 23] = [
        Self::FullColor,
        Self::BlackWhite,
        Self::RedBlack,
        Self::BlueWhite,
        Self::GreenBlack,
        Self::Sepia,
        Self::Gameboy,
        Self::Commodore64,
        Self::AmberCrt,
        Self::GreenTerminal,
        Self::CyanMagenta,
        Self::NeonPink,
        Self::ElectricBlue,
        Self::LimePurple,
        Self::HotPinkCyan,
        Self::OrangeBlue,
        Self::PurpleYellow,
        Self::TealOrange,
        Self::BurgundyCream,
        Self::ForestGreen,
        Self::OceanBlue,
        Self::SunsetRed,
        Self::LavenderSage,
    ];

    /// The palette's wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullColor => "full-color",
            Self::BlackWhite => "black-white",
            Self::RedBlack => "red-black",
            Self::BlueWhite => "blue-white",
            Self::GreenBlack => "green-black",
            Self::Sepia => "sepia",
            Self::Gameboy => "gameboy",
            Self::Commodore64 => "commodore64",
            Self::AmberCrt => "amber-crt",
            Self::GreenTerminal => "green-terminal",
            Self::CyanMagenta => "cyan-magenta",
            Self::NeonPink => "neon-pink",
            Self::ElectricBlue => "electric-blue",
            Self::LimePurple => "lime-purple",
            Self::HotPinkCyan => "hot-pink-cyan",
            Self::OrangeBlue => "orange-blue",
            Self::PurpleYellow => "purple-yellow",
            Self::TealOrange => "teal-orange",
            Self::BurgundyCream => "burgundy-cream",
            Self::ForestGreen => "forest-green",
            Self::OceanBlue => "ocean-blue",
            Self::SunsetRed => "sunset-red",
            Self::LavenderSage => "lavender-sage",
        }
    }

    /// The palette's endpoints, or `None` for the full-color identity.
    pub fn pair(&self) -> Option<PalettePair> {
        let pair = match self {
            Self::FullColor => return None,
            Self::BlackWhite => pair([0, 0, 0], [255, 255, 255]),
            Self::RedBlack => pair([0, 0, 0], [255, 0, 0]),
            Self::BlueWhite => pair([0, 50, 100], [255, 255, 255]),
            Self::GreenBlack => pair([0, 0, 0], [0, 255, 0]),
            Self::Sepia => pair([64, 32, 16], [255, 240, 200]),
            Self::Gameboy => pair([15, 56, 15], [155, 188, 15]),
            Self::Commodore64 => pair([64, 50, 133], [120, 105, 196]),
            Self::AmberCrt => pair([20, 10, 0], [255, 176, 0]),
            Self::GreenTerminal => pair([0, 20, 0], [0, 255, 65]),
            Self::CyanMagenta => pair([0, 150, 150], [255, 0, 150]),
            Self::NeonPink => pair([20, 0, 40], [255, 16, 240]),
            Self::ElectricBlue => pair([0, 0, 50], [0, 242, 255]),
            Self::LimePurple => pair([80, 0, 120], [200, 255, 0]),
            Self::HotPinkCyan => pair([0, 230, 255], [255, 20, 147]),
            Self::OrangeBlue => pair([0, 50, 100], [255, 150, 0]),
            Self::PurpleYellow => pair([80, 0, 120], [255, 255, 100]),
            Self::TealOrange => pair([0, 128, 128], [255, 127, 80]),
            Self::BurgundyCream => pair([80, 0, 32], [255, 253, 208]),
            Self::ForestGreen => pair([13, 27, 42], [34, 139, 34]),
            Self::OceanBlue => pair([0, 47, 75], [64, 224, 208]),
            Self::SunsetRed => pair([139, 0, 139], [255, 99, 71]),
            Self::LavenderSage => pair([85, 107, 47], [230, 230, 250]),
        };
        Some(pair)
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorPalette {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|palette| palette.as_str() == s)
            .copied()
            .ok_or_else(|| PipelineError::UnknownPalette(s.to_string()))
    }
}

/// Recolor the frame by lerping each pixel's luminance between the
/// palette endpoints. Alpha is untouched; the full-color palette is a
/// no-op.
pub fn apply_palette(frame: &mut PixelBuffer, palette: ColorPalette) {
    let Some(colors) = palette.pair() else {
        return;
    };
    for px in frame.data.chunks_exact_mut(4) {
        let t = luminance(px[0], px[1], px[2]) / 255.0;
        for c in 0..3 {
            px[c] = clamp_sample(colors.dark[c] as f64 * (1.0 - t) + colors.light[c] as f64 * t);
        }
    }
}
