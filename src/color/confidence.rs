//! Per-category confidence heuristics
//!
//! Scores how plausible a selected color is for its category, penalized by
//! the share of pixels rejected as shadow. All scores lie in [0, 1].

use crate::color::conversion::ColorConverter;
use crate::color::types::Rgb;
use crate::constants::confidence::*;
use crate::segmentation::Category;

/// Confidence scorer for selected category colors
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceScorer {
    converter: ColorConverter,
}

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `color` as the representative of `category`
    pub fn score(&self, category: Category, color: Rgb, shadow_percentage: f32) -> f32 {
        let confidence = match category {
            Category::FaceSkin | Category::BodySkin => self.skin(color, shadow_percentage),
            Category::Hair => self.hair(color, shadow_percentage),
            Category::Clothes => self.clothes(color, shadow_percentage),
            Category::Others => NEUTRAL,
        };
        confidence.clamp(0.0, 1.0)
    }

    fn skin(&self, color: Rgb, shadow_percentage: f32) -> f32 {
        let hsl = self.converter.rgb_to_hsl(color);
        let in_skin_range = (0.0..=50.0).contains(&hsl.h)
            && (0.2..=0.6).contains(&hsl.s)
            && (0.4..=0.8).contains(&hsl.l);

        if !in_skin_range {
            return NEUTRAL;
        }
        1.0 - penalty(shadow_percentage, SKIN_SHADOW_LIMIT, SKIN_SHADOW_PENALTY)
    }

    fn hair(&self, color: Rgb, shadow_percentage: f32) -> f32 {
        let hue = self.converter.rgb_to_hsl(color).h;
        let natural = (0.0..=60.0).contains(&hue) || (330.0..=360.0).contains(&hue);

        if !natural {
            return HAIR_UNNATURAL;
        }
        HAIR_NATURAL - penalty(shadow_percentage, HAIR_SHADOW_LIMIT, HAIR_SHADOW_PENALTY)
    }

    fn clothes(&self, color: Rgb, shadow_percentage: f32) -> f32 {
        let lab = self.converter.rgb_to_lab(color);
        let neutral = lab.a.abs() < CLOTHES_NEUTRAL_AB && lab.b.abs() < CLOTHES_NEUTRAL_AB;
        let base = if neutral { CLOTHES_NEUTRAL } else { CLOTHES_CHROMATIC };
        base - penalty(shadow_percentage, CLOTHES_SHADOW_LIMIT, CLOTHES_SHADOW_PENALTY)
    }
}

fn penalty(shadow_percentage: f32, limit: f32, amount: f32) -> f32 {
    if shadow_percentage > limit {
        amount
    } else {
        0.0
    }
}
