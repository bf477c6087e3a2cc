//! Value/hue/chroma season scoring
//!
//! Face skin and hair are reduced to three axes:
//! - value: weighted HSL lightness (0-100)
//! - hue: face skin hue mapped to a temperature in [-100, 100]
//! - chroma: weighted HSL saturation (0-100)
//!
//! Each season has a `{min, ideal}` profile per axis. An axis scores 0 below
//! its minimum and `1 - |x - ideal| / |min - ideal|` otherwise; the score is
//! left unclamped so far-off axes pull a season down. The highest weighted
//! total wins, earlier seasons winning ties.

use tracing::debug;

use super::types::*;
use super::{seasonal_confidence, sub_season, ClassifierStrategy, SeasonClassifier};
use crate::config::ClassifierConfig;
use crate::constants::season::{CHROMA_WEIGHT, HAIR_WEIGHT, HUE_WEIGHT, SKIN_WEIGHT, VALUE_WEIGHT};
use crate::CategoryColors;

/// Lower bound and ideal point of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisProfile {
    pub min: f32,
    pub ideal: f32,
}

/// Ideal characteristics of a season
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonProfile {
    pub value: AxisProfile,
    pub hue: AxisProfile,
    pub chroma: AxisProfile,
}

const fn axis(min: f32, ideal: f32) -> AxisProfile {
    AxisProfile { min, ideal }
}

impl SeasonProfile {
    pub const fn of(season: Season) -> SeasonProfile {
        match season {
            // Light to medium-light, warm, clear
            Season::Spring => SeasonProfile {
                value: axis(60.0, 75.0),
                hue: axis(33.0, 60.0),
                chroma: axis(60.0, 80.0),
            },
            // Light to medium, cool, soft to medium
            Season::Summer => SeasonProfile {
                value: axis(55.0, 70.0),
                hue: axis(-60.0, -40.0),
                chroma: axis(30.0, 45.0),
            },
            // Medium to deep, warm, medium
            Season::Autumn => SeasonProfile {
                value: axis(35.0, 50.0),
                hue: axis(33.0, 50.0),
                chroma: axis(40.0, 55.0),
            },
            // Deep, cool, clear
            Season::Winter => SeasonProfile {
                value: axis(25.0, 40.0),
                hue: axis(-70.0, -50.0),
                chroma: axis(60.0, 75.0),
            },
        }
    }
}

/// Axis match score
pub fn match_score(value: f32, profile: AxisProfile) -> f32 {
    if value < profile.min {
        return 0.0;
    }
    1.0 - (value - profile.ideal).abs() / (profile.min - profile.ideal).abs()
}

/// Map a hue in degrees to a temperature score in [-100, 100]
///
/// 70-280 is cool (-100 to -33), 45-70 neutral-warm (0 to 33), 280-345
/// neutral-cool (-33 to 0) and 345-360/0-45 warm (33 to 100).
pub fn hue_temperature(hue: f32) -> f32 {
    if (70.0..=280.0).contains(&hue) {
        -100.0 + (hue - 70.0) * (67.0 / 210.0)
    } else if (45.0..=70.0).contains(&hue) {
        (hue - 45.0) * (33.0 / 25.0)
    } else if (280.0..=345.0).contains(&hue) {
        -33.0 + (hue - 280.0) * (33.0 / 65.0)
    } else {
        let offset = if hue > 345.0 { hue - 345.0 } else { hue + 15.0 };
        33.0 + offset * (67.0 / 60.0)
    }
}

/// Value/hue/chroma classifier
#[derive(Debug, Clone, Copy)]
pub struct ProfileClassifier {
    skin_weight: f32,
    hair_weight: f32,
}

impl Default for ProfileClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileClassifier {
    pub fn new() -> Self {
        Self {
            skin_weight: SKIN_WEIGHT,
            hair_weight: HAIR_WEIGHT,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            skin_weight: config.skin_weight,
            hair_weight: config.hair_weight,
        }
    }

    /// Reduce face skin and hair to value, hue and chroma
    pub fn characteristics(&self, colors: &CategoryColors) -> ProfileCharacteristics {
        let skin = colors.face_skin.color_space.hsl;
        let hair = colors.hair.color_space.hsl;

        let value = 100.0 * (skin.l * self.skin_weight + hair.l * self.hair_weight);
        let value_level = if value >= 70.0 {
            ValueLevel::Light
        } else if value >= 40.0 {
            ValueLevel::Medium
        } else {
            ValueLevel::Deep
        };

        let hue = hue_temperature(skin.h);
        let hue_category = if hue <= -33.0 {
            HueCategory::Cool
        } else if hue >= 33.0 {
            HueCategory::Warm
        } else {
            HueCategory::CoolWarm
        };

        let chroma = 100.0 * (skin.s * self.skin_weight + hair.s * self.hair_weight);
        let chroma_category = if chroma <= 30.0 {
            ChromaCategory::Soft
        } else if chroma >= 60.0 {
            ChromaCategory::Clear
        } else {
            ChromaCategory::Medium
        };

        ProfileCharacteristics {
            value: Scored { score: value, category: value_level },
            hue: Scored { score: hue, category: hue_category },
            chroma: Scored { score: chroma, category: chroma_category },
        }
    }

    /// Weighted profile match of every season, in tie-break order
    pub fn season_scores(&self, characteristics: &ProfileCharacteristics) -> [(Season, f32); 4] {
        Season::ALL.map(|season| {
            let profile = SeasonProfile::of(season);
            let total = VALUE_WEIGHT * match_score(characteristics.value.score, profile.value)
                + HUE_WEIGHT * match_score(characteristics.hue.score, profile.hue)
                + CHROMA_WEIGHT * match_score(characteristics.chroma.score, profile.chroma);
            (season, total)
        })
    }

    /// Best matching season; earlier seasons win ties
    pub fn best_season(&self, characteristics: &ProfileCharacteristics) -> Season {
        let scores = self.season_scores(characteristics);
        let mut best = scores[0];
        for candidate in &scores[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        best.0
    }
}

impl SeasonClassifier for ProfileClassifier {
    fn strategy(&self) -> ClassifierStrategy {
        ClassifierStrategy::Profile
    }

    fn classify(&self, colors: &CategoryColors) -> SeasonalCharacteristics {
        let characteristics = self.characteristics(colors);
        let season = self.best_season(&characteristics);
        let characteristics = Characteristics::Profile(characteristics);

        let undertone = characteristics.undertone();
        let sub_season = sub_season(season, undertone, characteristics.intensity(), characteristics.value());
        let confidence = seasonal_confidence(colors, season, undertone);

        debug!(%season, %sub_season, confidence, "profile classification");

        SeasonalCharacteristics {
            season,
            sub_season,
            characteristics,
            confidence,
        }
    }
}
