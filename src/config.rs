//! Configuration structures for the seasonal color analysis pipeline.
//!
//! This module defines all tunable parameters, grouped by pipeline stage.
//! Defaults reproduce the reference constants in [`crate::constants`].
//!
//! # Configuration Loading
//!
//! ```no_run
//! use color_season::PipelineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PipelineConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = PipelineConfig::default();
//! # Ok::<(), color_season::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ShadowConfig`]: shadow rejection mode and tolerances
//! - [`ClusteringConfig`]: k-means parameters
//! - [`SelectionConfig`]: category color selection thresholds
//! - [`ClassifierConfig`]: season classifier strategy and weights
//! - [`SamplingConfig`]: landmark sampling radii

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{clustering, sampling, season, selection, shadow};
use crate::detection::ShadowMode;
use crate::season::ClassifierStrategy;
use crate::{AnalysisError, Result};

/// Complete pipeline configuration.
///
/// Can be serialized to/from JSON for reproducible experiments. Missing
/// sections fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub shadow: ShadowConfig,
    pub clustering: ClusteringConfig,
    pub selection: SelectionConfig,
    pub classifier: ClassifierConfig,
    pub sampling: SamplingConfig,
}

/// Shadow rejection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Brightness-only or full criteria
    pub mode: ShadowMode,

    /// Fractional drop below the average counted as shadow (0.0-1.0)
    pub brightness_tolerance: f32,

    /// Fractional saturation excess counted as suspicious (0.0-1.0)
    pub saturation_tolerance: f32,

    /// Hue window around the category average, in degrees
    pub hue_window_degrees: f32,
}

/// K-means parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Number of clusters
    pub k: usize,

    /// Fixed iteration count
    pub max_iterations: usize,

    /// Inputs smaller than this are not clustered
    pub min_samples: usize,
}

/// Category color selection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Hair clusters at or below this brightness (0-255) are ignored
    pub hair_min_brightness: f32,
}

/// Season classifier parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub strategy: ClassifierStrategy,

    /// Face skin weight for value and chroma
    pub skin_weight: f32,

    /// Hair weight for value and chroma
    pub hair_weight: f32,
}

/// Landmark sampling radii in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub iris_radius: u32,
    pub lips_radius: u32,
    pub skin_radius: u32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            mode: ShadowMode::Enhanced,
            brightness_tolerance: shadow::BRIGHTNESS_TOLERANCE,
            saturation_tolerance: shadow::SATURATION_TOLERANCE,
            hue_window_degrees: shadow::HUE_WINDOW_DEGREES,
        }
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            k: clustering::DEFAULT_K,
            max_iterations: clustering::MAX_ITERATIONS,
            min_samples: clustering::MIN_SAMPLES,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            hair_min_brightness: selection::HAIR_MIN_BRIGHTNESS,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            strategy: ClassifierStrategy::Profile,
            skin_weight: season::SKIN_WEIGHT,
            hair_weight: season::HAIR_WEIGHT,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            iris_radius: sampling::IRIS_RADIUS,
            lips_radius: sampling::LIPS_RADIUS,
            skin_radius: sampling::SKIN_RADIUS,
        }
    }
}

impl PipelineConfig {
    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        let unit = 0.0..=1.0;

        if !unit.contains(&self.shadow.brightness_tolerance) {
            return Err(AnalysisError::invalid_parameter(
                "shadow.brightness_tolerance",
                self.shadow.brightness_tolerance,
            ));
        }
        if !unit.contains(&self.shadow.saturation_tolerance) {
            return Err(AnalysisError::invalid_parameter(
                "shadow.saturation_tolerance",
                self.shadow.saturation_tolerance,
            ));
        }
        if !(0.0..=180.0).contains(&self.shadow.hue_window_degrees) {
            return Err(AnalysisError::invalid_parameter(
                "shadow.hue_window_degrees",
                self.shadow.hue_window_degrees,
            ));
        }
        if self.clustering.k == 0 {
            return Err(AnalysisError::invalid_parameter("clustering.k", self.clustering.k));
        }
        if self.clustering.max_iterations == 0 {
            return Err(AnalysisError::invalid_parameter(
                "clustering.max_iterations",
                self.clustering.max_iterations,
            ));
        }
        if !(0.0..=255.0).contains(&self.selection.hair_min_brightness) {
            return Err(AnalysisError::invalid_parameter(
                "selection.hair_min_brightness",
                self.selection.hair_min_brightness,
            ));
        }

        for (parameter, radius) in [
            ("sampling.iris_radius", self.sampling.iris_radius),
            ("sampling.lips_radius", self.sampling.lips_radius),
            ("sampling.skin_radius", self.sampling.skin_radius),
        ] {
            if radius > sampling::MAX_RADIUS {
                return Err(AnalysisError::invalid_parameter(parameter, radius));
            }
        }

        let weights = self.classifier.skin_weight + self.classifier.hair_weight;
        if self.classifier.skin_weight < 0.0
            || self.classifier.hair_weight < 0.0
            || (weights - 1.0).abs() > 1e-3
        {
            return Err(AnalysisError::invalid_parameter("classifier weights", weights));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AnalysisError::config_parse("invalid pipeline configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::config_io(format!("cannot read {}", path.display()), e))?;
        let config = Self::from_json_str(&content)?;
        info!("Loaded pipeline configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config_parse("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| AnalysisError::config_io(format!("cannot write {}", path.display()), e))?;
        Ok(())
    }
}
