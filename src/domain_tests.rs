//! End-to-end pipeline behavior tests.
//!
//! These run the public API the way a caller would: build a frame, pick
//! parameters, process, and check pixels.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    process, process_with_rng, ColorPalette, DitherAlgorithm, Effect, PixelBuffer,
    ProcessingParams,
};

fn seeded() -> StdRng {
    StdRng::seed_from_u64(0x0D17)
}

fn dithering(algorithm: DitherAlgorithm) -> ProcessingParams {
    ProcessingParams {
        effect: Effect::Dithering,
        dithering_algorithm: algorithm,
        ..Default::default()
    }
}

fn is_bitonal(frame: &PixelBuffer) -> bool {
    frame
        .data
        .chunks_exact(4)
        .all(|px| (px[0] == 0 || px[0] == 255) && px[0] == px[1] && px[1] == px[2])
}

#[test]
fn test_mid_gray_at_the_threshold_goes_black() {
    // Luminance of (128,128,128) is exactly 128, and the comparison is
    // strict, so the pixel fails it.
    let source = PixelBuffer::filled(2, 2, [128, 128, 128, 255]).unwrap();
    let params = ProcessingParams {
        effect: Effect::Threshold,
        threshold: 128,
        ..Default::default()
    };
    let result = process(&source, &params).unwrap();
    assert!(result
        .data
        .chunks_exact(4)
        .all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn test_white_clears_every_bayer_threshold() {
    // A lone white pixel reads matrix cell (0,0) = 0, threshold 64
    let source = PixelBuffer::filled(1, 1, [255, 255, 255, 255]).unwrap();
    let result = process(&source, &dithering(DitherAlgorithm::Bayer2x2)).unwrap();
    assert_eq!(&result.data[..4], &[255, 255, 255, 255]);
}

#[test]
fn test_black_maps_to_the_palette_dark_endpoint() {
    let source = PixelBuffer::filled(4, 4, [0, 0, 0, 255]).unwrap();
    let params = ProcessingParams {
        color_palette: ColorPalette::Gameboy,
        ..Default::default()
    };
    let result = process(&source, &params).unwrap();
    assert!(result
        .data
        .chunks_exact(4)
        .all(|px| px == [15, 56, 15, 255]));
}

#[test]
fn test_floyd_steinberg_propagates_forward_only() {
    // Black, white, black: every pixel already sits on a quantizer
    // endpoint, no error flows, and the first pixel cannot be influenced
    // by anything to its right.
    let source = PixelBuffer::new(
        3,
        1,
        vec![
            0, 0, 0, 255, //
            255, 255, 255, 255, //
            0, 0, 0, 255,
        ],
    )
    .unwrap();
    let result = process(&source, &dithering(DitherAlgorithm::FloydSteinberg)).unwrap();
    assert_eq!(result, source);
}

#[test]
fn test_floyd_steinberg_alternates_on_a_near_gray_row() {
    // 3x1 row of 120s: black, then the diffused error tips the second
    // pixel white, whose negative error tips the third back to black.
    let source = PixelBuffer::filled(3, 1, [120, 120, 120, 255]).unwrap();
    let result = process(&source, &dithering(DitherAlgorithm::FloydSteinberg)).unwrap();
    assert_eq!(result.data[0], 0);
    assert_eq!(result.data[4], 255);
    assert_eq!(result.data[8], 0);
}

#[test]
fn test_default_params_are_the_identity() {
    let mut data = Vec::new();
    for i in 0..64u32 {
        data.extend_from_slice(&[(i * 3) as u8, (i * 5) as u8, (i * 7) as u8, 255]);
    }
    let source = PixelBuffer::new(8, 8, data).unwrap();
    let result = process(&source, &ProcessingParams::default()).unwrap();
    assert_eq!(result, source);
}

#[test]
fn test_every_algorithm_preserves_dimensions() {
    // Deliberately non-square and not a power of two
    let source = PixelBuffer::filled(13, 7, [97, 141, 188, 255]).unwrap();
    for algorithm in DitherAlgorithm::ALL {
        let result = process_with_rng(&source, &dithering(algorithm), &mut seeded()).unwrap();
        assert_eq!(result.width, 13, "{algorithm}");
        assert_eq!(result.height, 7, "{algorithm}");
        assert_eq!(result.data.len(), source.data.len(), "{algorithm}");
    }
}

#[test]
fn test_every_effect_preserves_dimensions() {
    let source = PixelBuffer::filled(9, 5, [120, 60, 30, 255]).unwrap();
    for effect in [
        Effect::None,
        Effect::Dithering,
        Effect::Threshold,
        Effect::EdgeDetect,
    ] {
        let params = ProcessingParams {
            effect,
            ..Default::default()
        };
        let result = process_with_rng(&source, &params, &mut seeded()).unwrap();
        assert_eq!((result.width, result.height), (9, 5), "{effect}");
        assert!(result.validate().is_ok(), "{effect}");
    }
}

#[test]
fn test_every_algorithm_is_bitonal_on_a_square_frame() {
    // 8x8 keeps the Riemersma curve fully inside the image, so every
    // algorithm quantizes every pixel.
    let source = PixelBuffer::filled(8, 8, [97, 141, 188, 255]).unwrap();
    for algorithm in DitherAlgorithm::ALL {
        let result = process_with_rng(&source, &dithering(algorithm), &mut seeded()).unwrap();
        assert!(is_bitonal(&result), "{algorithm} output must be bitonal");
    }
}

#[test]
fn test_quantizers_are_idempotent() {
    // The error diffusion, ordered and curve families are fixpoints on
    // their own output: a bitonal frame diffuses zero error and sits on
    // the right side of every matrix threshold. The pattern family is
    // excluded on purpose; it redraws its pattern regardless of input.
    let quantizers = [
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Atkinson,
        DitherAlgorithm::JarvisJudiceNinke,
        DitherAlgorithm::Stucki,
        DitherAlgorithm::Burkes,
        DitherAlgorithm::Sierra,
        DitherAlgorithm::SierraLite,
        DitherAlgorithm::TwoRowSierra,
        DitherAlgorithm::Bayer2x2,
        DitherAlgorithm::Bayer4x4,
        DitherAlgorithm::Bayer8x8,
        DitherAlgorithm::Ordered,
        DitherAlgorithm::BlueNoise,
        DitherAlgorithm::ClusteredDot,
        DitherAlgorithm::Riemersma,
        DitherAlgorithm::VariableError,
    ];
    let source = PixelBuffer::filled(16, 16, [113, 150, 90, 255]).unwrap();
    for algorithm in quantizers {
        let once = process(&source, &dithering(algorithm)).unwrap();
        let twice = process(&once, &dithering(algorithm)).unwrap();
        assert_eq!(twice, once, "{algorithm} must be stable on its own output");
    }
}

#[test]
fn test_threshold_effect_is_idempotent() {
    let source = PixelBuffer::filled(4, 4, [77, 200, 140, 255]).unwrap();
    let params = ProcessingParams {
        effect: Effect::Threshold,
        threshold: 100,
        ..Default::default()
    };
    let once = process(&source, &params).unwrap();
    let twice = process(&once, &params).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn test_invert_flips_the_dithered_verdict() {
    let source = PixelBuffer::filled(4, 4, [220, 220, 220, 255]).unwrap();
    let plain = process(&source, &dithering(DitherAlgorithm::Bayer2x2)).unwrap();
    let mut params = dithering(DitherAlgorithm::Bayer2x2);
    params.invert = true;
    let inverted = process(&source, &params).unwrap();
    for (a, b) in plain.data.chunks_exact(4).zip(inverted.data.chunks_exact(4)) {
        assert_eq!(a[0], 255 - b[0]);
        assert_eq!(a[3], b[3]);
    }
}

#[test]
fn test_seeded_noise_reproduces_and_balances() {
    let source = PixelBuffer::filled(32, 32, [128, 128, 128, 255]).unwrap();
    for algorithm in [DitherAlgorithm::Random, DitherAlgorithm::WhiteNoise] {
        let a = process_with_rng(&source, &dithering(algorithm), &mut seeded()).unwrap();
        let b = process_with_rng(&source, &dithering(algorithm), &mut seeded()).unwrap();
        assert_eq!(a, b, "{algorithm} with equal seeds must agree");

        let white = a.data.chunks_exact(4).filter(|px| px[0] == 255).count();
        let ratio = white as f64 / 1024.0;
        assert!(
            (ratio - 0.5).abs() < 0.15,
            "{algorithm} on mid-gray should be near half white, got {ratio}"
        );
    }
}

#[test]
fn test_dithering_then_palette_yields_only_the_two_endpoints() {
    let source = PixelBuffer::filled(8, 8, [97, 141, 188, 255]).unwrap();
    let mut params = dithering(DitherAlgorithm::Atkinson);
    params.color_palette = ColorPalette::AmberCrt;
    let result = process(&source, &params).unwrap();
    for px in result.data.chunks_exact(4) {
        assert!(
            &px[..3] == &[20, 10, 0] || &px[..3] == &[255, 176, 0],
            "unexpected color {:?}",
            &px[..3]
        );
    }
}

#[test]
fn test_edge_detect_output_shape() {
    let mut data = Vec::new();
    for _y in 0..6 {
        for x in 0..6 {
            let v = if x < 3 { 0 } else { 255 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    let source = PixelBuffer::new(6, 6, data).unwrap();
    let params = ProcessingParams {
        effect: Effect::EdgeDetect,
        ..Default::default()
    };
    let result = process(&source, &params).unwrap();
    // Border is cleared to transparent black
    assert_eq!(&result.data[..4], &[0, 0, 0, 0]);
    // The seam column lights up
    assert_eq!(result.data[(2 * 6 + 2) * 4], 255);
    assert_eq!(result.data[(2 * 6 + 3) * 4], 255);
}

#[test]
fn test_presets_run_end_to_end() {
    let source = PixelBuffer::filled(16, 16, [97, 141, 188, 255]).unwrap();
    for preset in crate::presets::builtin() {
        let result = process_with_rng(&source, &preset.params, &mut seeded()).unwrap();
        assert_eq!(result.data.len(), source.data.len(), "{}", preset.name);
        if preset.params.color_palette.pair().is_some() {
            // Duotone presets may only emit endpoint colors after a
            // bitonal dither
            let pair = preset.params.color_palette.pair().unwrap();
            assert!(
                result
                    .data
                    .chunks_exact(4)
                    .all(|px| &px[..3] == &pair.dark[..] || &px[..3] == &pair.light[..]),
                "{} emitted off-palette colors",
                preset.name
            );
        }
    }
}

#[test]
fn test_params_deserialize_from_preset_style_json() {
    let json = r#"{
        "effect": "dithering",
        "ditheringAlgorithm": "variable-error",
        "colorPalette": "lavender-sage",
        "ditherContrast": 115,
        "effectScale": 1.1,
        "effectSize": 2,
        "brightness": 8,
        "contrast": 18,
        "blur": 0.5,
        "depth": 38,
        "invert": false
    }"#;
    let params: ProcessingParams = serde_json::from_str(json).unwrap();
    let expected = crate::presets::find("Adaptive Dream").unwrap().params;
    assert_eq!(params, expected);
}

#[test]
fn test_extreme_params_still_produce_a_valid_frame() {
    let source = PixelBuffer::filled(5, 5, [140, 70, 30, 255]).unwrap();
    let params = ProcessingParams {
        effect: Effect::Dithering,
        dithering_algorithm: DitherAlgorithm::FloydSteinberg,
        brightness: 10_000,
        contrast: -10_000,
        dither_contrast: 0,
        blur: f64::NAN,
        depth: -5,
        effect_scale: 0.0,
        effect_size: f64::INFINITY,
        dither_intensity: f64::NAN,
        ..Default::default()
    };
    let result = process(&source, &params).unwrap();
    assert_eq!(result.data.len(), source.data.len());
    assert!(result.validate().is_ok());
}
