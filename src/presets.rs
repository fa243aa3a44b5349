//! Built-in parameter presets.
//!
//! Curated looks layered on top of [`ProcessingParams::default`]; fields a
//! preset does not mention stay at their neutral values.

use crate::dither::DitherAlgorithm;
use crate::palette::ColorPalette;
use crate::params::{Effect, ProcessingParams};

/// A named parameter bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Display name, unique within [`builtin`].
    pub name: &'static str,
    /// The full parameter set the preset selects.
    pub params: ProcessingParams,
}

/// Look up a built-in preset by its display name.
pub fn find(name: &str) -> Option<Preset> {
    builtin().into_iter().find(|preset| preset.name == name)
}

/// The built-in preset catalog.
pub fn builtin() -> Vec<Preset> {
    let dithering = ProcessingParams {
        effect: Effect::Dithering,
        ..Default::default()
    };

    vec![
        Preset {
            name: "Classic Newspaper",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::FloydSteinberg,
                color_palette: ColorPalette::BlackWhite,
                dither_contrast: 140,
                brightness: 10,
                contrast: 20,
                depth: 50,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Retro Game Boy",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::Bayer8x8,
                color_palette: ColorPalette::Gameboy,
                dither_contrast: 110,
                effect_scale: 1.2,
                effect_size: 2.0,
                brightness: 5,
                contrast: 15,
                depth: 25,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Neon Dreams",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::HalftoneDots,
                color_palette: ColorPalette::HotPinkCyan,
                dither_contrast: 150,
                effect_scale: 1.8,
                effect_size: 8.0,
                brightness: 15,
                contrast: 30,
                blur: 0.5,
                depth: 40,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Vintage Poster",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::Crosshatch,
                color_palette: ColorPalette::TealOrange,
                dither_contrast: 160,
                effect_scale: 1.5,
                effect_size: 6.0,
                brightness: 5,
                contrast: 25,
                depth: 35,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Old Terminal",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::Bayer8x8,
                color_palette: ColorPalette::GreenTerminal,
                dither_contrast: 130,
                effect_scale: 1.3,
                effect_size: 3.0,
                brightness: -5,
                contrast: 20,
                depth: 30,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Sunset Comic",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::Stipple,
                color_palette: ColorPalette::SunsetRed,
                dither_contrast: 145,
                effect_scale: 1.6,
                effect_size: 12.0,
                brightness: 10,
                contrast: 25,
                depth: 45,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Electric Pop Art",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::Newspaper,
                color_palette: ColorPalette::ElectricBlue,
                dither_contrast: 170,
                effect_scale: 1.4,
                effect_size: 10.0,
                brightness: 20,
                contrast: 40,
                depth: 50,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Sepia Memories",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::JarvisJudiceNinke,
                color_palette: ColorPalette::Sepia,
                contrast: 10,
                blur: 1.0,
                depth: 40,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Forest Lines",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::HorizontalLines,
                color_palette: ColorPalette::ForestGreen,
                dither_contrast: 135,
                effect_scale: 1.5,
                effect_size: 5.0,
                contrast: 20,
                depth: 40,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Purple Matrix",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::GridPattern,
                color_palette: ColorPalette::LimePurple,
                dither_contrast: 150,
                effect_scale: 2.0,
                effect_size: 10.0,
                brightness: 10,
                contrast: 30,
                depth: 55,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Blue Noise Pro",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::BlueNoise,
                color_palette: ColorPalette::BlackWhite,
                dither_contrast: 120,
                brightness: 5,
                contrast: 15,
                depth: 50,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Print Halftone",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::ClusteredDot,
                color_palette: ColorPalette::CyanMagenta,
                dither_contrast: 135,
                effect_scale: 1.4,
                effect_size: 3.0,
                brightness: 10,
                contrast: 25,
                depth: 45,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Static TV",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::WhiteNoise,
                color_palette: ColorPalette::BlackWhite,
                dither_contrast: 155,
                contrast: 30,
                blur: 0.5,
                depth: 50,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Organic Curves",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::Riemersma,
                color_palette: ColorPalette::BurgundyCream,
                dither_contrast: 125,
                effect_scale: 1.2,
                brightness: 5,
                contrast: 20,
                depth: 42,
                ..dithering.clone()
            },
        },
        Preset {
            name: "Adaptive Dream",
            params: ProcessingParams {
                dithering_algorithm: DitherAlgorithm::VariableError,
                color_palette: ColorPalette::LavenderSage,
                dither_contrast: 115,
                effect_scale: 1.1,
                effect_size: 2.0,
                brightness: 8,
                contrast: 18,
                blur: 0.5,
                depth: 38,
                ..dithering
            },
        },
    ]
}
