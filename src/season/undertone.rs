//! Undertone/contrast/intensity/value season rules
//!
//! Alternative to [`super::ProfileClassifier`]. The skin undertone is scored
//! from Lab a*/b* and the HSL hue, contrast from the hair/skin L* gap,
//! intensity from mean HSL saturation and value from mean L*. The base
//! season follows from undertone and value; neutral undertones fall back on
//! contrast and intensity.

use tracing::debug;

use super::types::*;
use super::{seasonal_confidence, sub_season, ClassifierStrategy, SeasonClassifier};
use crate::color::ColorAnalysis;
use crate::constants::undertone::*;
use crate::CategoryColors;

/// Rule-based classifier over undertone, contrast, intensity and value
#[derive(Debug, Clone, Copy, Default)]
pub struct UndertoneClassifier;

impl UndertoneClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Signed warmth of a skin color; positive is warm
    pub fn undertone_score(skin: &ColorAnalysis) -> f32 {
        let lab = skin.color_space.lab;
        let hue = skin.color_space.hsl.h;
        let lab_score = lab.a * 0.5 + lab.b;
        let hue_score = (hue - WARM_HUE_PEAK).to_radians().cos();
        lab_score * LAB_WEIGHT + hue_score * HUE_SCALE * HUE_WEIGHT
    }

    pub fn characteristics(&self, colors: &CategoryColors) -> UndertoneCharacteristics {
        let skin = &colors.face_skin.color_space;
        let hair = &colors.hair.color_space;

        let score = Self::undertone_score(&colors.face_skin);
        let undertone = if score.abs() < NEUTRAL_BAND {
            Undertone::Neutral
        } else if score > 0.0 {
            Undertone::Warm
        } else {
            Undertone::Cool
        };

        let gap = (hair.lab.l - skin.lab.l).abs();
        let contrast = if gap < LOW_CONTRAST {
            Contrast::Low
        } else if gap > HIGH_CONTRAST {
            Contrast::High
        } else {
            Contrast::Medium
        };

        let saturation = (skin.hsl.s + hair.hsl.s) / 2.0;
        let intensity = if saturation < SOFT_SATURATION {
            Intensity::Soft
        } else if saturation > BRIGHT_SATURATION {
            Intensity::Bright
        } else {
            Intensity::Medium
        };

        let lightness = (skin.lab.l + hair.lab.l) / 2.0;
        let value = if lightness > LIGHT_LIGHTNESS {
            ValueLevel::Light
        } else if lightness < DEEP_LIGHTNESS {
            ValueLevel::Deep
        } else {
            ValueLevel::Medium
        };

        UndertoneCharacteristics {
            contrast,
            undertone,
            intensity,
            value,
        }
    }

    pub fn base_season(characteristics: &UndertoneCharacteristics) -> Season {
        let light = characteristics.value == ValueLevel::Light;
        match characteristics.undertone {
            Undertone::Warm if light => Season::Spring,
            Undertone::Warm => Season::Autumn,
            Undertone::Cool if light => Season::Summer,
            Undertone::Cool => Season::Winter,
            Undertone::Neutral => {
                let vivid = characteristics.contrast == Contrast::High
                    || characteristics.intensity == Intensity::Bright;
                match (vivid, light) {
                    (true, true) => Season::Spring,
                    (true, false) => Season::Winter,
                    (false, true) => Season::Summer,
                    (false, false) => Season::Autumn,
                }
            }
        }
    }
}

impl SeasonClassifier for UndertoneClassifier {
    fn strategy(&self) -> ClassifierStrategy {
        ClassifierStrategy::Undertone
    }

    fn classify(&self, colors: &CategoryColors) -> SeasonalCharacteristics {
        let c = self.characteristics(colors);
        let season = Self::base_season(&c);
        let sub_season = sub_season(season, c.undertone, c.intensity, c.value);
        let confidence = seasonal_confidence(colors, season, c.undertone);

        debug!(%season, %sub_season, confidence, "undertone classification");

        SeasonalCharacteristics {
            season,
            sub_season,
            characteristics: Characteristics::Undertone(c),
            confidence,
        }
    }
}
