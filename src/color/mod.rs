//! Color analysis and conversion module
//!
//! This module handles color space conversions, dominant color clustering,
//! category color selection and confidence scoring.

pub mod analysis;
pub mod cluster;
pub mod confidence;
pub mod conversion;
pub mod selection;
pub mod types;

pub use analysis::ColorAnalyzer;
pub use cluster::{ColorCluster, DominantColorClusterer};
pub use confidence::ConfidenceScorer;
pub use conversion::ColorConverter;
pub use selection::CategoryColorSelector;
pub use types::{ColorAnalysis, ColorSpace, Hsl, Hsv, Lab, Rgb};
