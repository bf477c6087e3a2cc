//! Facial feature color filters
//!
//! Each feature accepts a pixel on mean channel brightness, HSV saturation
//! and HSV hue. Pixels outside the window are glare, pupil, shadow or
//! surrounding tissue.

use serde::{Deserialize, Serialize};

use crate::color::conversion::ColorConverter;
use crate::color::types::Rgb;
use crate::config::SamplingConfig;
use crate::constants::sampling::*;

/// A sampled facial feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Iris,
    Lip,
    Skin,
}

impl FeatureKind {
    /// Sampling radius in pixels around each landmark
    pub fn radius(self, config: &SamplingConfig) -> u32 {
        match self {
            FeatureKind::Iris => config.iris_radius,
            FeatureKind::Lip => config.lips_radius,
            FeatureKind::Skin => config.skin_radius,
        }
    }

    /// Whether `color` is plausible for this feature
    pub fn accepts(self, color: Rgb) -> bool {
        let brightness = color.brightness();
        let hsv = ColorConverter::new().rgb_to_hsv(color);
        let (h, s) = (hsv.h, hsv.s);

        match self {
            FeatureKind::Iris => {
                brightness > PUPIL_BRIGHTNESS
                    && brightness < BRIGHTNESS_MAX
                    && s > IRIS_SATURATION_MIN
                    && s < IRIS_SATURATION_MAX
                    // blue, green, brown/hazel
                    && ((180.0..=240.0).contains(&h) || (60.0..=140.0).contains(&h) || (20.0..=40.0).contains(&h))
            }
            FeatureKind::Lip => {
                brightness > BRIGHTNESS_MIN
                    && brightness < BRIGHTNESS_MAX
                    && (LIPS_SATURATION_MIN..=LIPS_SATURATION_MAX).contains(&s)
                    && (h >= 350.0 || h <= 40.0)
            }
            FeatureKind::Skin => {
                brightness > BRIGHTNESS_MIN
                    && brightness < BRIGHTNESS_MAX
                    && (SKIN_SATURATION_MIN..=SKIN_SATURATION_MAX).contains(&s)
                    && (h <= 50.0 || h >= 340.0)
            }
        }
    }
}
