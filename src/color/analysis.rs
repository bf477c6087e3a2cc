//! Per-category color extraction
//!
//! Extracts one representative color per segmented category with:
//! - Shadow rejection relative to the category average
//! - K-means clustering of the remaining pixels
//! - Category-specific cluster selection
//! - Confidence scoring and multi-space representation
//!
//! Degenerate inputs never fail: an empty category yields a zero color with
//! zero confidence.

use tracing::{debug, warn};

use crate::color::cluster::DominantColorClusterer;
use crate::color::confidence::ConfidenceScorer;
use crate::color::conversion::ColorConverter;
use crate::color::selection::CategoryColorSelector;
use crate::color::types::{ColorAnalysis, ColorSpace, Rgb};
use crate::config::PipelineConfig;
use crate::detection::{ShadowDetector, ShadowMode};
use crate::segmentation::{Category, CategoryPixels};
use crate::CategoryColors;

/// Color analyzer running the per-category extraction pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorAnalyzer {
    converter: ColorConverter,
    shadow_detector: ShadowDetector,
    clusterer: DominantColorClusterer,
    selector: CategoryColorSelector,
    scorer: ConfidenceScorer,
}

impl ColorAnalyzer {
    /// Create a color analyzer with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a color analyzer from a pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            shadow_detector: ShadowDetector::from_config(&config.shadow),
            clusterer: DominantColorClusterer::from_config(&config.clustering),
            selector: CategoryColorSelector::from_config(&config.selection),
            scorer: ConfidenceScorer::new(),
        }
    }

    /// Extract the representative color of one category
    pub fn analyze(&self, category: Category, pixels: &[Rgb]) -> ColorAnalysis {
        let Some(average) = Rgb::average(pixels) else {
            warn!(%category, "no pixels in category, using empty result");
            return ColorAnalysis::empty();
        };

        let split = self.shadow_detector.detect(pixels, average);

        let selected = if category == Category::Others {
            average
        } else {
            let basis: &[Rgb] = if split.non_shadow_pixels.is_empty() {
                warn!(%category, "every pixel classified as shadow, selecting from all pixels");
                pixels
            } else {
                &split.non_shadow_pixels
            };
            let clusters = self.clusterer.cluster(basis);
            self.selector.select(category, basis, &clusters)
        };

        let confidence = self.scorer.score(category, selected, split.shadow_percentage);

        debug!(
            %category,
            pixels = pixels.len(),
            shadow_percentage = split.shadow_percentage,
            color = %selected.to_hex(),
            confidence,
            "category color selected"
        );

        ColorAnalysis {
            color: selected,
            confidence,
            shadow_percentage: split.shadow_percentage,
            color_space: self.color_space(selected),
        }
    }

    /// Analyze every category of an aggregated frame
    pub fn analyze_all(&self, pixels: &CategoryPixels) -> CategoryColors {
        let mut colors = CategoryColors::default();
        for (category, list) in pixels.iter() {
            *colors.get_mut(category) = self.analyze(category, list);
        }
        colors
    }

    /// Representations of `color` in RGB, HSL and Lab
    pub fn color_space(&self, color: Rgb) -> ColorSpace {
        ColorSpace {
            rgb: color,
            hsl: self.converter.rgb_to_hsl(color),
            lab: self.converter.rgb_to_lab(color),
        }
    }

    pub fn shadow_mode(&self) -> ShadowMode {
        self.shadow_detector.mode()
    }
}
