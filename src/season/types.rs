//! Seasonal taxonomy and classification results

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four base seasons, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Undertone a season's palette is built around
    pub fn expected_undertone(self) -> Undertone {
        match self {
            Season::Spring | Season::Autumn => Undertone::Warm,
            Season::Summer | Season::Winter => Undertone::Cool,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The twelve sub-seasons, three per season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubSeason {
    #[serde(rename = "Light Spring")]
    LightSpring,
    #[serde(rename = "Warm Spring")]
    WarmSpring,
    #[serde(rename = "Bright Spring")]
    BrightSpring,
    #[serde(rename = "Light Summer")]
    LightSummer,
    #[serde(rename = "Cool Summer")]
    CoolSummer,
    #[serde(rename = "Soft Summer")]
    SoftSummer,
    #[serde(rename = "Soft Autumn")]
    SoftAutumn,
    #[serde(rename = "Warm Autumn")]
    WarmAutumn,
    #[serde(rename = "Deep Autumn")]
    DeepAutumn,
    #[serde(rename = "Deep Winter")]
    DeepWinter,
    #[serde(rename = "Cool Winter")]
    CoolWinter,
    #[serde(rename = "Bright Winter")]
    BrightWinter,
}

impl SubSeason {
    pub const ALL: [SubSeason; 12] = [
        SubSeason::LightSpring,
        SubSeason::WarmSpring,
        SubSeason::BrightSpring,
        SubSeason::LightSummer,
        SubSeason::CoolSummer,
        SubSeason::SoftSummer,
        SubSeason::SoftAutumn,
        SubSeason::WarmAutumn,
        SubSeason::DeepAutumn,
        SubSeason::DeepWinter,
        SubSeason::CoolWinter,
        SubSeason::BrightWinter,
    ];

    pub fn season(self) -> Season {
        match self {
            SubSeason::LightSpring | SubSeason::WarmSpring | SubSeason::BrightSpring => Season::Spring,
            SubSeason::LightSummer | SubSeason::CoolSummer | SubSeason::SoftSummer => Season::Summer,
            SubSeason::SoftAutumn | SubSeason::WarmAutumn | SubSeason::DeepAutumn => Season::Autumn,
            SubSeason::DeepWinter | SubSeason::CoolWinter | SubSeason::BrightWinter => Season::Winter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SubSeason::LightSpring => "Light Spring",
            SubSeason::WarmSpring => "Warm Spring",
            SubSeason::BrightSpring => "Bright Spring",
            SubSeason::LightSummer => "Light Summer",
            SubSeason::CoolSummer => "Cool Summer",
            SubSeason::SoftSummer => "Soft Summer",
            SubSeason::SoftAutumn => "Soft Autumn",
            SubSeason::WarmAutumn => "Warm Autumn",
            SubSeason::DeepAutumn => "Deep Autumn",
            SubSeason::DeepWinter => "Deep Winter",
            SubSeason::CoolWinter => "Cool Winter",
            SubSeason::BrightWinter => "Bright Winter",
        }
    }
}

impl fmt::Display for SubSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Warm/cool bias of the skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

/// Overall lightness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueLevel {
    Light,
    Medium,
    Deep,
}

/// Color intensity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Soft,
    Medium,
    Bright,
}

/// Hair against skin lightness contrast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Low,
    Medium,
    High,
}

/// Temperature band of the skin hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HueCategory {
    Cool,
    CoolWarm,
    Warm,
}

impl HueCategory {
    pub fn undertone(self) -> Undertone {
        match self {
            HueCategory::Cool => Undertone::Cool,
            HueCategory::CoolWarm => Undertone::Neutral,
            HueCategory::Warm => Undertone::Warm,
        }
    }
}

/// Saturation band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromaCategory {
    Soft,
    Medium,
    Clear,
}

impl ChromaCategory {
    pub fn intensity(self) -> Intensity {
        match self {
            ChromaCategory::Soft => Intensity::Soft,
            ChromaCategory::Medium => Intensity::Medium,
            ChromaCategory::Clear => Intensity::Bright,
        }
    }
}

/// A numeric axis score with its band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scored<C> {
    pub score: f32,
    pub category: C,
}

/// Value/hue/chroma characteristics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileCharacteristics {
    /// Weighted HSL lightness, 0-100
    pub value: Scored<ValueLevel>,
    /// Skin hue temperature, -100 (cool) to 100 (warm)
    pub hue: Scored<HueCategory>,
    /// Weighted HSL saturation, 0-100
    pub chroma: Scored<ChromaCategory>,
}

/// Undertone/contrast/intensity/value characteristics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UndertoneCharacteristics {
    pub contrast: Contrast,
    pub undertone: Undertone,
    pub intensity: Intensity,
    pub value: ValueLevel,
}

/// Characteristics reported by whichever classifier ran
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "camelCase")]
pub enum Characteristics {
    Profile(ProfileCharacteristics),
    Undertone(UndertoneCharacteristics),
}

impl Characteristics {
    pub fn undertone(&self) -> Undertone {
        match self {
            Characteristics::Profile(c) => c.hue.category.undertone(),
            Characteristics::Undertone(c) => c.undertone,
        }
    }

    pub fn value(&self) -> ValueLevel {
        match self {
            Characteristics::Profile(c) => c.value.category,
            Characteristics::Undertone(c) => c.value,
        }
    }

    pub fn intensity(&self) -> Intensity {
        match self {
            Characteristics::Profile(c) => c.chroma.category.intensity(),
            Characteristics::Undertone(c) => c.intensity,
        }
    }
}

/// Seasonal classification of one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalCharacteristics {
    pub season: Season,
    pub sub_season: SubSeason,
    pub characteristics: Characteristics,
    /// Overall confidence in [0, 1]
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_seasons_cover_each_season_three_times() {
        for season in Season::ALL {
            let count = SubSeason::ALL.iter().filter(|s| s.season() == season).count();
            assert_eq!(count, 3, "{season}");
        }
    }

    #[test]
    fn test_names_serialize() {
        assert_eq!(serde_json::to_string(&SubSeason::WarmAutumn).unwrap(), "\"Warm Autumn\"");
        assert_eq!(serde_json::to_string(&HueCategory::CoolWarm).unwrap(), "\"cool-warm\"");
        assert_eq!(SubSeason::BrightWinter.to_string(), "Bright Winter");
    }

    #[test]
    fn test_characteristics_accessors() {
        let c = Characteristics::Undertone(UndertoneCharacteristics {
            contrast: Contrast::High,
            undertone: Undertone::Neutral,
            intensity: Intensity::Bright,
            value: ValueLevel::Deep,
        });
        assert_eq!(c.undertone(), Undertone::Neutral);
        assert_eq!(c.value(), ValueLevel::Deep);
        assert_eq!(c.intensity(), Intensity::Bright);
    }
}
