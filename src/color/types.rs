//! Color value types shared across the pipeline
//!
//! All types are plain `Copy` values. HSL saturation and lightness are stored
//! normalized to [0, 1]; consumers that reason in percent scale at their own
//! boundary.

use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// HSV color: hue in degrees [0, 360), saturation and value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// CIE L*a*b* color under D65
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mean of the three channels, in [0, 255]
    pub fn brightness(&self) -> f32 {
        (self.r as f32 + self.g as f32 + self.b as f32) / 3.0
    }

    /// HSV-style saturation `(max - min) / max`, 0 for black
    pub fn saturation(&self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        if max == 0 {
            0.0
        } else {
            (max - min) as f32 / max as f32
        }
    }

    /// Euclidean distance in RGB space
    pub fn distance(&self, other: &Rgb) -> f32 {
        let dr = self.r as f32 - other.r as f32;
        let dg = self.g as f32 - other.g as f32;
        let db = self.b as f32 - other.b as f32;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Channel-wise rounded mean, `None` for an empty slice
    pub fn average(pixels: &[Rgb]) -> Option<Rgb> {
        if pixels.is_empty() {
            return None;
        }

        let (r, g, b) = pixels.iter().fold((0u64, 0u64, 0u64), |(r, g, b), p| {
            (r + p.r as u64, g + p.g as u64, b + p.b as u64)
        });
        let n = pixels.len() as f64;

        Some(Rgb {
            r: (r as f64 / n).round() as u8,
            g: (g as f64 / n).round() as u8,
            b: (b as f64 / n).round() as u8,
        })
    }

    /// Hexadecimal color string (e.g., "#FF0000")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse "#RRGGBB" or "RRGGBB"
    pub fn from_hex(hex: &str) -> Result<Rgb> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(AnalysisError::invalid_parameter("hex", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AnalysisError::invalid_parameter("hex", hex))
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<image::Rgba<u8>> for Rgb {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Self { r, g, b }
    }
}

impl From<Lab> for palette::Lab {
    fn from(color: Lab) -> Self {
        palette::Lab::new(color.l, color.a, color.b)
    }
}

impl From<palette::Lab> for Lab {
    fn from(color: palette::Lab) -> Self {
        Lab {
            l: color.l,
            a: color.a,
            b: color.b,
        }
    }
}

/// The same color in every representation the classifiers consume
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorSpace {
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub lab: Lab,
}

/// Representative color of one category with diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysis {
    /// Selected representative color
    pub color: Rgb,
    /// Selection confidence (0.0 = low, 1.0 = high)
    pub confidence: f32,
    /// Share of the category's pixels rejected as shadow, in percent
    pub shadow_percentage: f32,
    /// `color` in RGB, HSL and Lab
    pub color_space: ColorSpace,
}

impl ColorAnalysis {
    /// Result for a category with no pixels
    pub fn empty() -> Self {
        Self::default()
    }

    /// Hex string of the selected color
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}
