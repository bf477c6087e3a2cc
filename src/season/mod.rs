//! Seasonal classification module
//!
//! Combines per-category color analyses into a season, a sub-season and a
//! confidence score. Two strategies exist behind [`SeasonClassifier`]:
//! - [`ProfileClassifier`]: value/hue/chroma scored against season profiles
//!   (the default)
//! - [`UndertoneClassifier`]: undertone/contrast/intensity/value decision
//!   rules
//!
//! Both share the sub-season table and the confidence formula.

pub mod profile;
pub mod types;
pub mod undertone;

use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::constants::season::{UNDERTONE_MATCH, UNDERTONE_MISMATCH, UNDERTONE_NEUTRAL};
use crate::CategoryColors;

pub use profile::ProfileClassifier;
pub use types::*;
pub use undertone::UndertoneClassifier;

/// Which classifier a pipeline uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierStrategy {
    #[default]
    Profile,
    Undertone,
}

/// Maps category colors to a seasonal classification
pub trait SeasonClassifier: Send + Sync {
    fn strategy(&self) -> ClassifierStrategy;

    /// Classify a frame; total for any input
    fn classify(&self, colors: &CategoryColors) -> SeasonalCharacteristics;
}

/// Build the classifier selected by `config`
pub fn classifier_for(config: &ClassifierConfig) -> Box<dyn SeasonClassifier> {
    match config.strategy {
        ClassifierStrategy::Profile => Box::new(ProfileClassifier::from_config(config)),
        ClassifierStrategy::Undertone => Box::new(UndertoneClassifier::new()),
    }
}

/// Three-way sub-season decision table
pub fn sub_season(season: Season, undertone: Undertone, intensity: Intensity, value: ValueLevel) -> SubSeason {
    match season {
        Season::Spring => {
            if value == ValueLevel::Light {
                SubSeason::LightSpring
            } else if undertone == Undertone::Warm {
                SubSeason::WarmSpring
            } else {
                SubSeason::BrightSpring
            }
        }
        Season::Summer => {
            if value == ValueLevel::Light {
                SubSeason::LightSummer
            } else if intensity == Intensity::Soft {
                SubSeason::SoftSummer
            } else {
                SubSeason::CoolSummer
            }
        }
        Season::Autumn => {
            if intensity == Intensity::Soft {
                SubSeason::SoftAutumn
            } else if undertone == Undertone::Warm {
                SubSeason::WarmAutumn
            } else {
                SubSeason::DeepAutumn
            }
        }
        Season::Winter => {
            if value == ValueLevel::Deep {
                SubSeason::DeepWinter
            } else if undertone == Undertone::Cool {
                SubSeason::CoolWinter
            } else {
                SubSeason::BrightWinter
            }
        }
    }
}

/// How well an undertone fits a season's palette
pub fn characteristic_match(season: Season, undertone: Undertone) -> f32 {
    if undertone == season.expected_undertone() {
        UNDERTONE_MATCH
    } else if undertone == Undertone::Neutral {
        UNDERTONE_NEUTRAL
    } else {
        UNDERTONE_MISMATCH
    }
}

/// Input confidence scaled by undertone fit and face shadowing
pub fn seasonal_confidence(colors: &CategoryColors, season: Season, undertone: Undertone) -> f32 {
    let input_confidence = (colors.hair.confidence + colors.face_skin.confidence) / 2.0;
    let shadow_impact = (1.0 - colors.face_skin.shadow_percentage / 100.0).max(0.0);
    (input_confidence * characteristic_match(season, undertone) * shadow_impact).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorAnalysis;

    #[test]
    fn test_sub_season_table() {
        use Intensity as I;
        use Undertone as U;
        use ValueLevel as V;

        assert_eq!(sub_season(Season::Spring, U::Warm, I::Medium, V::Light), SubSeason::LightSpring);
        assert_eq!(sub_season(Season::Spring, U::Warm, I::Medium, V::Medium), SubSeason::WarmSpring);
        assert_eq!(sub_season(Season::Spring, U::Neutral, I::Bright, V::Deep), SubSeason::BrightSpring);

        assert_eq!(sub_season(Season::Summer, U::Cool, I::Soft, V::Light), SubSeason::LightSummer);
        assert_eq!(sub_season(Season::Summer, U::Cool, I::Soft, V::Medium), SubSeason::SoftSummer);
        assert_eq!(sub_season(Season::Summer, U::Cool, I::Bright, V::Medium), SubSeason::CoolSummer);

        assert_eq!(sub_season(Season::Autumn, U::Warm, I::Soft, V::Deep), SubSeason::SoftAutumn);
        assert_eq!(sub_season(Season::Autumn, U::Warm, I::Medium, V::Deep), SubSeason::WarmAutumn);
        assert_eq!(sub_season(Season::Autumn, U::Neutral, I::Medium, V::Deep), SubSeason::DeepAutumn);

        assert_eq!(sub_season(Season::Winter, U::Cool, I::Bright, V::Deep), SubSeason::DeepWinter);
        assert_eq!(sub_season(Season::Winter, U::Cool, I::Bright, V::Medium), SubSeason::CoolWinter);
        assert_eq!(sub_season(Season::Winter, U::Neutral, I::Bright, V::Light), SubSeason::BrightWinter);
    }

    #[test]
    fn test_sub_season_belongs_to_season() {
        for season in Season::ALL {
            for undertone in [Undertone::Warm, Undertone::Cool, Undertone::Neutral] {
                for intensity in [Intensity::Soft, Intensity::Medium, Intensity::Bright] {
                    for value in [ValueLevel::Light, ValueLevel::Medium, ValueLevel::Deep] {
                        assert_eq!(sub_season(season, undertone, intensity, value).season(), season);
                    }
                }
            }
        }
    }

    #[test]
    fn test_characteristic_match() {
        assert_eq!(characteristic_match(Season::Autumn, Undertone::Warm), 1.0);
        assert_eq!(characteristic_match(Season::Winter, Undertone::Neutral), 0.7);
        assert_eq!(characteristic_match(Season::Summer, Undertone::Warm), 0.5);
    }

    #[test]
    fn test_seasonal_confidence() {
        let mut colors = CategoryColors::default();
        colors.hair = ColorAnalysis { confidence: 0.9, ..ColorAnalysis::empty() };
        colors.face_skin = ColorAnalysis {
            confidence: 0.7,
            shadow_percentage: 50.0,
            ..ColorAnalysis::empty()
        };

        let c = seasonal_confidence(&colors, Season::Spring, Undertone::Warm);
        assert!((c - 0.4).abs() < 1e-6);

        let c = seasonal_confidence(&colors, Season::Spring, Undertone::Cool);
        assert!((c - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_classifier_for_strategy() {
        let mut config = ClassifierConfig::default();
        assert_eq!(classifier_for(&config).strategy(), ClassifierStrategy::Profile);
        config.strategy = ClassifierStrategy::Undertone;
        assert_eq!(classifier_for(&config).strategy(), ClassifierStrategy::Undertone);
    }
}
