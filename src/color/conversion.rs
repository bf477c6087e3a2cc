//! Color space conversion utilities
//!
//! Provides the conversions the pipeline relies on, all through `palette`:
//! - RGB to HSL (category statistics, classifiers)
//! - RGB to HSV (per-pixel feature filters)
//! - RGB to CIE L*a*b* under D65 (neutrality checks, undertone)
//! - Lab to LCh for display consumers

use palette::{FromColor, Lch, Srgb};

use crate::color::types::{Hsl, Hsv, Lab, Rgb};

/// Color converter targeting the D65 illuminant
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB (0-255) to HSL
    ///
    /// Hue is in positive degrees; saturation and lightness in [0, 1].
    /// Achromatic colors get hue 0 and saturation 0.
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> Hsl {
        let hsl: palette::Hsl = palette::Hsl::from_color(srgb(rgb));
        Hsl {
            h: hsl.hue.into_positive_degrees(),
            s: hsl.saturation,
            l: hsl.lightness,
        }
    }

    /// Convert RGB (0-255) to HSV
    ///
    /// Hue is in positive degrees; saturation and value in [0, 1].
    pub fn rgb_to_hsv(&self, rgb: Rgb) -> Hsv {
        let hsv: palette::Hsv = palette::Hsv::from_color(srgb(rgb));
        Hsv {
            h: hsv.hue.into_positive_degrees(),
            s: hsv.saturation,
            v: hsv.value,
        }
    }

    /// Convert RGB (0-255) to Lab color space (D65)
    pub fn rgb_to_lab(&self, rgb: Rgb) -> Lab {
        let lab: palette::Lab = palette::Lab::from_color(srgb(rgb));
        lab.into()
    }

    /// Convert Lab to LCh (cylindrical representation)
    pub fn lab_to_lch(&self, color: Lab) -> Lch {
        Lch::from_color(palette::Lab::from(color))
    }

    /// Compute Delta E (CIE76) between two Lab colors
    pub fn delta_e(&self, lab1: Lab, lab2: Lab) -> f32 {
        let dl = lab1.l - lab2.l;
        let da = lab1.a - lab2.a;
        let db = lab1.b - lab2.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

fn srgb(rgb: Rgb) -> Srgb {
    Srgb::new(rgb.r as f32 / 255.0, rgb.g as f32 / 255.0, rgb.b as f32 / 255.0)
}

/// Smallest angle between two hues, in degrees [0, 180]
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}
