//! Shadow pixel rejection
//!
//! Splits a category's pixels into shadow and non-shadow sets relative to
//! the category average. A pixel is a shadow when any of these hold:
//! - brightness is more than `brightness_tolerance` below the average
//! - saturation is more than `saturation_tolerance` above the average and
//!   lightness more than `brightness_tolerance` below it (enhanced mode)
//! - hue is within `hue_window` of the average and lightness more than
//!   `brightness_tolerance` below it (enhanced mode)

use serde::{Deserialize, Serialize};

use crate::color::conversion::{hue_distance, ColorConverter};
use crate::color::types::Rgb;
use crate::config::ShadowConfig;
use crate::constants::shadow::{BRIGHTNESS_TOLERANCE, HUE_WINDOW_DEGREES, SATURATION_TOLERANCE};

/// Which shadow criteria apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowMode {
    /// Brightness rule only
    Basic,
    /// Brightness, saturation and hue rules
    #[default]
    Enhanced,
}

/// Result of splitting a pixel list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShadowSplit {
    pub shadow_pixels: Vec<Rgb>,
    pub non_shadow_pixels: Vec<Rgb>,
    /// `100 * shadow / total`, 0 for an empty input
    pub shadow_percentage: f32,
}

/// Shadow detector comparing pixels against their category average
#[derive(Debug, Clone, Copy)]
pub struct ShadowDetector {
    converter: ColorConverter,
    mode: ShadowMode,
    brightness_tolerance: f32,
    saturation_tolerance: f32,
    hue_window: f32,
}

impl Default for ShadowDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadowDetector {
    /// Create an enhanced detector with the default tolerances
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
            mode: ShadowMode::Enhanced,
            brightness_tolerance: BRIGHTNESS_TOLERANCE,
            saturation_tolerance: SATURATION_TOLERANCE,
            hue_window: HUE_WINDOW_DEGREES,
        }
    }

    /// Create a brightness-only detector
    pub fn basic() -> Self {
        Self {
            mode: ShadowMode::Basic,
            ..Self::new()
        }
    }

    pub fn from_config(config: &ShadowConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            mode: config.mode,
            brightness_tolerance: config.brightness_tolerance,
            saturation_tolerance: config.saturation_tolerance,
            hue_window: config.hue_window_degrees,
        }
    }

    pub fn mode(&self) -> ShadowMode {
        self.mode
    }

    /// Split `pixels` given their already computed average color
    pub fn detect(&self, pixels: &[Rgb], average: Rgb) -> ShadowSplit {
        if pixels.is_empty() {
            return ShadowSplit::default();
        }

        let (shadow_pixels, non_shadow_pixels): (Vec<Rgb>, Vec<Rgb>) =
            pixels.iter().copied().partition(|pixel| self.is_shadow(pixel, average));

        let shadow_percentage = 100.0 * shadow_pixels.len() as f32 / pixels.len() as f32;

        ShadowSplit {
            shadow_pixels,
            non_shadow_pixels,
            shadow_percentage,
        }
    }

    fn is_shadow(&self, pixel: &Rgb, average: Rgb) -> bool {
        let darker = 1.0 - self.brightness_tolerance;
        if pixel.brightness() < average.brightness() * darker {
            return true;
        }

        if self.mode == ShadowMode::Basic {
            return false;
        }

        let avg_hsl = self.converter.rgb_to_hsl(average);
        let hsl = self.converter.rgb_to_hsl(*pixel);
        if hsl.l >= avg_hsl.l * darker {
            return false;
        }

        let oversaturated = hsl.s > avg_hsl.s * (1.0 + self.saturation_tolerance);
        let same_hue = hue_distance(hsl.h, avg_hsl.h) < self.hue_window;
        oversaturated || same_hue
    }
}
