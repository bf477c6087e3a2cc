//! # Color Season
//!
//! A Rust crate for seasonal color analysis of segmented portrait frames.
//!
//! This library turns a per-pixel category mask and the matching RGBA frame
//! into a seasonal palette by:
//! - Aggregating pixels per category (hair, body skin, face skin, clothes, others)
//! - Rejecting shadowed pixels relative to each category's average
//! - Clustering the lit pixels and selecting a representative color per category
//! - Scoring confidence and classifying the face into a season and sub-season
//!
//! ## Example
//!
//! ```rust,no_run
//! use color_season::{analyze_categories, determine_seasonal_palette};
//!
//! # let (mask, rgba): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
//! let colors = analyze_categories(&mask, &rgba)?;
//! let palette = determine_seasonal_palette(&colors);
//! println!("{} ({}), confidence {:.2}", palette.season, palette.sub_season, palette.confidence);
//! # Ok::<(), color_season::AnalysisError>(())
//! ```

use image::RgbaImage;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod detection;
pub mod segmentation;
pub mod landmarks;
pub mod season;

pub use color::{ColorAnalysis, ColorAnalyzer, ColorSpace, Hsl, Hsv, Lab, Rgb};
pub use config::PipelineConfig;
pub use error::{AnalysisError, Result};
pub use landmarks::{FaceColors, FeatureKind, FeatureSampler, NormalizedLandmark};
pub use season::{
    ClassifierStrategy, ProfileClassifier, Season, SeasonClassifier, SeasonalCharacteristics, SubSeason,
    UndertoneClassifier,
};
pub use segmentation::{Category, CategoryPixels, PixelAggregator};

/// Representative color analysis of every category in a frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColors {
    pub hair: ColorAnalysis,
    pub body_skin: ColorAnalysis,
    pub face_skin: ColorAnalysis,
    pub clothes: ColorAnalysis,
    pub others: ColorAnalysis,
}

impl CategoryColors {
    pub fn get(&self, category: Category) -> &ColorAnalysis {
        match category {
            Category::Hair => &self.hair,
            Category::BodySkin => &self.body_skin,
            Category::FaceSkin => &self.face_skin,
            Category::Clothes => &self.clothes,
            Category::Others => &self.others,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut ColorAnalysis {
        match category {
            Category::Hair => &mut self.hair,
            Category::BodySkin => &mut self.body_skin,
            Category::FaceSkin => &mut self.face_skin,
            Category::Clothes => &mut self.clothes,
            Category::Others => &mut self.others,
        }
    }
}

/// Analyze every category of a segmented frame with default settings
///
/// `mask` holds one category id per pixel (0 = background, 1..=5 =
/// hair, body skin, face skin, clothes, others) and `rgba` the frame as
/// 4 bytes per pixel in the same order.
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The buffer length is not a multiple of 4
/// - The mask and buffer describe different pixel counts
/// - The mask contains an unknown category id
pub fn analyze_categories(mask: &[u8], rgba: &[u8]) -> Result<CategoryColors> {
    analyze_categories_with_config(mask, rgba, &PipelineConfig::default())
}

/// Analyze every category of a segmented frame with custom settings
pub fn analyze_categories_with_config(mask: &[u8], rgba: &[u8], config: &PipelineConfig) -> Result<CategoryColors> {
    config.validate()?;
    let pixels = PixelAggregator::new().aggregate(mask, rgba)?;
    Ok(ColorAnalyzer::from_config(config).analyze_all(&pixels))
}

/// Analyze a decoded frame against its category mask
pub fn analyze_image(mask: &[u8], image: &RgbaImage) -> Result<CategoryColors> {
    let pixels = PixelAggregator::new().aggregate_image(mask, image)?;
    Ok(ColorAnalyzer::new().analyze_all(&pixels))
}

/// Classify category colors into a season with the value/hue/chroma model
///
/// Total for any input: always one of four seasons and twelve sub-seasons,
/// with confidence in `[0, 1]`.
pub fn determine_seasonal_palette(colors: &CategoryColors) -> SeasonalCharacteristics {
    ProfileClassifier::new().classify(colors)
}

/// Classify category colors with the classifier selected in `config`
pub fn classify_with_config(colors: &CategoryColors, config: &PipelineConfig) -> Result<SeasonalCharacteristics> {
    config.validate()?;
    Ok(season::classifier_for(&config.classifier).classify(colors))
}

/// Sample iris, lip and skin colors around face mesh landmarks
///
/// # Errors
///
/// Returns `AnalysisError::LandmarkOutOfRange` if the mesh has fewer
/// landmarks than the sampled indices require.
pub fn analyze_face_colors(image: &RgbaImage, landmarks: &[NormalizedLandmark]) -> Result<FaceColors> {
    FeatureSampler::new().analyze_face(image, landmarks)
}

/// Sample face feature colors with the radii from `config`
///
/// # Errors
///
/// Returns `AnalysisError::InvalidParameter` if the configuration fails
/// validation, or `AnalysisError::LandmarkOutOfRange` for a short mesh.
pub fn analyze_face_colors_with_config(
    image: &RgbaImage,
    landmarks: &[NormalizedLandmark],
    config: &PipelineConfig,
) -> Result<FaceColors> {
    FeatureSampler::from_config(config)?.analyze_face(image, landmarks)
}
