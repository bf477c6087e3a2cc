//! Integration tests for the complete segmentation-to-season pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Mask and buffer validation
//! - Per-category color extraction with shadow rejection
//! - Seasonal classification with both classifier strategies
//! - Landmark-anchored face sampling
//! - Error handling for malformed frames

use color_season::color::{ColorAnalysis, ColorSpace, Hsl};
use color_season::landmarks::{LEFT_IRIS, LIPS, RIGHT_IRIS};
use color_season::season::{Characteristics, HueCategory, ValueLevel};
use color_season::{
    analyze_categories, analyze_categories_with_config, analyze_face_colors, analyze_face_colors_with_config,
    analyze_image, classify_with_config, determine_seasonal_palette, AnalysisError, CategoryColors,
    ClassifierStrategy, NormalizedLandmark, PipelineConfig, Rgb, Season, SubSeason,
};
use image::{Rgba, RgbaImage};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const HAIR: [u8; 3] = [60, 40, 30];
const FACE: [u8; 3] = [220, 180, 150];
const CLOTHES: [u8; 3] = [30, 60, 150];
const OTHERS: [u8; 3] = [100, 100, 100];

/// 10x10 frame: 3 rows hair, 4 rows face skin, 2 rows clothes,
/// then 5 "others" pixels and 5 background pixels
fn portrait_frame() -> (Vec<u8>, Vec<u8>) {
    let mut mask = Vec::with_capacity(100);
    let mut rgba = Vec::with_capacity(400);

    for i in 0..100 {
        let (id, color) = match i / 10 {
            0..=2 => (1, HAIR),
            3..=6 => (3, FACE),
            7..=8 => (4, CLOTHES),
            _ if i % 10 < 5 => (5, OTHERS),
            _ => (0, [255, 255, 255]),
        };
        mask.push(id);
        rgba.extend_from_slice(&[color[0], color[1], color[2], 255]);
    }

    (mask, rgba)
}

fn with_hsl(h: f32, s: f32, l: f32) -> ColorAnalysis {
    ColorAnalysis {
        confidence: 1.0,
        color_space: ColorSpace {
            hsl: Hsl { h, s, l },
            ..ColorSpace::default()
        },
        ..ColorAnalysis::empty()
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_buffer_not_rgba() {
    let result = analyze_categories(&[1, 1], &[0u8; 7]);
    assert!(matches!(result, Err(AnalysisError::BufferNotRgba { len: 7 })));
}

#[test]
fn test_mask_length_mismatch() {
    let result = analyze_categories(&[1, 1, 1], &[0u8; 8]);
    match result {
        Err(AnalysisError::MaskLengthMismatch { mask_len, pixel_count }) => {
            assert_eq!(mask_len, 3);
            assert_eq!(pixel_count, 2);
        }
        other => panic!("Expected MaskLengthMismatch, got: {:?}", other),
    }
}

#[test]
fn test_invalid_category_id() {
    let result = analyze_categories(&[0, 9], &[0u8; 8]);
    assert!(matches!(
        result,
        Err(AnalysisError::InvalidCategory { index: 1, value: 9 })
    ));
}

#[test]
fn test_invalid_config_rejected() {
    let (mask, rgba) = portrait_frame();
    let mut config = PipelineConfig::default();
    config.clustering.k = 0;

    let err = analyze_categories_with_config(&mask, &rgba, &config).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidParameter { .. }));
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_portrait_frame_colors() {
    init_tracing();
    let (mask, rgba) = portrait_frame();
    let colors = analyze_categories(&mask, &rgba).unwrap();

    assert_eq!(colors.hair.color, Rgb::from(HAIR));
    assert_eq!(colors.face_skin.color, Rgb::from(FACE));
    assert_eq!(colors.clothes.color, Rgb::from(CLOTHES));
    assert_eq!(colors.others.color, Rgb::from(OTHERS));

    // Uniform regions have nothing darker than their average
    assert_eq!(colors.face_skin.shadow_percentage, 0.0);
    assert_eq!(colors.hair.shadow_percentage, 0.0);

    assert!((colors.face_skin.confidence - 1.0).abs() < 1e-6);
    assert!(colors.hair.confidence > 0.0);
    assert_eq!(colors.others.confidence, 0.5);
}

#[test]
fn test_missing_category_yields_zero_result() {
    let (mask, rgba) = portrait_frame();
    let colors = analyze_categories(&mask, &rgba).unwrap();

    assert_eq!(colors.body_skin.color, Rgb::new(0, 0, 0));
    assert_eq!(colors.body_skin.confidence, 0.0);
    assert_eq!(colors.body_skin.shadow_percentage, 0.0);
}

#[test]
fn test_all_background_frame() {
    let mask = vec![0u8; 16];
    let rgba = vec![0u8; 64];
    let colors = analyze_categories(&mask, &rgba).unwrap();
    assert_eq!(colors, CategoryColors::default());
}

#[test]
fn test_analyze_image_matches_raw_buffer() {
    let (mask, rgba) = portrait_frame();
    let image = RgbaImage::from_raw(10, 10, rgba.clone()).unwrap();

    let from_image = analyze_image(&mask, &image).unwrap();
    let from_buffer = analyze_categories(&mask, &rgba).unwrap();
    assert_eq!(from_image, from_buffer);
}

#[test]
fn test_shadowed_face_reports_shadow() {
    init_tracing();
    let (mut mask, mut rgba) = portrait_frame();
    // Darken the last face row into a shadow
    for i in 60..70 {
        mask[i] = 3;
        rgba[i * 4..i * 4 + 3].copy_from_slice(&[90, 60, 45]);
    }

    let colors = analyze_categories(&mask, &rgba).unwrap();
    assert!((colors.face_skin.shadow_percentage - 25.0).abs() < 1e-3);
    assert_eq!(colors.face_skin.color, Rgb::from(FACE));
}

// ============================================================================
// Classification Tests
// ============================================================================

#[test]
fn test_golden_warm_medium_classification() {
    let colors = CategoryColors {
        face_skin: with_hsl(30.0, 0.25, 0.75),
        hair: with_hsl(35.0, 0.45, 0.30),
        ..CategoryColors::default()
    };

    let result = determine_seasonal_palette(&colors);

    let Characteristics::Profile(profile) = result.characteristics else {
        panic!("expected value/hue/chroma characteristics");
    };
    assert!((profile.value.score - 61.5).abs() < 1e-3);
    assert_eq!(profile.value.category, ValueLevel::Medium);
    assert!(profile.hue.score > 33.0);
    assert_eq!(profile.hue.category, HueCategory::Warm);
    assert!((profile.chroma.score - 31.0).abs() < 1e-3);

    assert_eq!(result.season, Season::Spring);
    assert_eq!(result.sub_season, SubSeason::WarmSpring);
    assert!((result.confidence - 1.0).abs() < 1e-6);
}

#[test]
fn test_classification_is_total() {
    for h in (0..360).step_by(15) {
        for s in [0.0, 0.2, 0.5, 0.9, 1.0] {
            for l in [0.0, 0.1, 0.45, 0.8, 1.0] {
                let colors = CategoryColors {
                    face_skin: with_hsl(h as f32, s, l),
                    hair: with_hsl(((h + 40) % 360) as f32, 1.0 - s, 1.0 - l),
                    ..CategoryColors::default()
                };
                let result = determine_seasonal_palette(&colors);
                assert_eq!(result.sub_season.season(), result.season);
                assert!((0.0..=1.0).contains(&result.confidence));
            }
        }
    }
}

#[test]
fn test_pipeline_to_season_both_strategies() {
    init_tracing();
    let (mask, rgba) = portrait_frame();
    let colors = analyze_categories(&mask, &rgba).unwrap();

    let mut config = PipelineConfig::default();
    let profile = classify_with_config(&colors, &config).unwrap();
    assert_eq!(profile, determine_seasonal_palette(&colors));

    config.classifier.strategy = ClassifierStrategy::Undertone;
    let undertone = classify_with_config(&colors, &config).unwrap();
    assert!(matches!(undertone.characteristics, Characteristics::Undertone(_)));
    assert_eq!(undertone.sub_season.season(), undertone.season);
    assert!((0.0..=1.0).contains(&undertone.confidence));
}

#[test]
fn test_config_from_json_drives_pipeline() {
    let config = PipelineConfig::from_json_str(r#"{ "classifier": { "strategy": "undertone" } }"#).unwrap();
    assert_eq!(config.classifier.strategy, ClassifierStrategy::Undertone);
    assert_eq!(config.clustering.k, 3);

    let (mask, rgba) = portrait_frame();
    let colors = analyze_categories_with_config(&mask, &rgba, &config).unwrap();
    let result = classify_with_config(&colors, &config).unwrap();
    assert!(matches!(result.characteristics, Characteristics::Undertone(_)));
}

// ============================================================================
// Face Sampling Tests
// ============================================================================

/// 100x100 skin frame with an iris square, a lip rectangle and a 478-point
/// mesh whose landmarks sit on them
fn face_frame() -> (RgbaImage, Vec<NormalizedLandmark>) {
    let skin = Rgba([210, 160, 130, 255]);
    let iris = Rgba([70, 110, 170, 255]);
    let lips = Rgba([180, 90, 100, 255]);

    let mut image = RgbaImage::from_pixel(100, 100, skin);
    for x in 10..40 {
        for y in 10..40 {
            image.put_pixel(x, y, iris);
        }
    }
    for x in 35..65 {
        for y in 65..85 {
            image.put_pixel(x, y, lips);
        }
    }

    let mut landmarks = vec![NormalizedLandmark { x: 0.5, y: 0.4 }; 478];
    for &i in LEFT_IRIS.iter().chain(&RIGHT_IRIS) {
        landmarks[i] = NormalizedLandmark { x: 0.25, y: 0.25 };
    }
    for &i in &LIPS {
        landmarks[i] = NormalizedLandmark { x: 0.5, y: 0.75 };
    }
    // Right pupil at (25, 25) with an iris boundary 5 px out
    landmarks[473] = NormalizedLandmark { x: 0.25, y: 0.25 };
    landmarks[474] = NormalizedLandmark { x: 0.30, y: 0.25 };
    landmarks[475] = NormalizedLandmark { x: 0.25, y: 0.20 };
    landmarks[476] = NormalizedLandmark { x: 0.20, y: 0.25 };
    landmarks[477] = NormalizedLandmark { x: 0.25, y: 0.30 };

    (image, landmarks)
}

#[test]
fn test_face_feature_colors() {
    init_tracing();
    let (image, landmarks) = face_frame();

    let colors = analyze_face_colors(&image, &landmarks).unwrap();
    assert_eq!(colors.left_iris, Rgb::new(70, 110, 170));
    assert_eq!(colors.right_iris, Rgb::new(70, 110, 170));
    assert_eq!(colors.lips, Rgb::new(180, 90, 100));
    assert_eq!(colors.skin, Rgb::new(210, 160, 130));
    assert_eq!(colors.eye_color, Rgb::new(70, 110, 170));
}

#[test]
fn test_face_colors_with_config() {
    init_tracing();
    let (image, landmarks) = face_frame();

    let mut config = PipelineConfig::default();
    config.sampling.lips_radius = 2;
    let colors = analyze_face_colors_with_config(&image, &landmarks, &config).unwrap();
    assert_eq!(colors, analyze_face_colors(&image, &landmarks).unwrap());

    config.sampling.iris_radius = u32::MAX;
    let err = analyze_face_colors_with_config(&image, &landmarks, &config).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidParameter { .. }));
}

#[test]
fn test_face_sampling_needs_full_mesh() {
    let image = RgbaImage::from_pixel(10, 10, Rgba([210, 160, 130, 255]));
    // Basic mesh without the iris refinement points
    let landmarks = vec![NormalizedLandmark { x: 0.5, y: 0.5 }; 468];

    let err = analyze_face_colors(&image, &landmarks).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::LandmarkOutOfRange { index: 469, available: 468 }
    ));
}
