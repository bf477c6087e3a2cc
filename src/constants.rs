//! Reference values and thresholds for seasonal color analysis
//!
//! This module contains compile-time constants for shadow rejection,
//! clustering, landmark sampling and the seasonal classifiers.

/// Shadow rejection parameters
pub mod shadow {
    /// Brightness below `avg * (1 - tolerance)` marks a shadow
    pub const BRIGHTNESS_TOLERANCE: f32 = 0.3;

    /// Saturation above `avg * (1 + tolerance)` is suspicious
    pub const SATURATION_TOLERANCE: f32 = 0.2;

    /// Hue window (degrees) around the category average
    pub const HUE_WINDOW_DEGREES: f32 = 15.0;
}

/// K-means clustering parameters
pub mod clustering {
    /// Number of representative colors per category
    pub const DEFAULT_K: usize = 3;

    /// Fixed iteration count
    pub const MAX_ITERATIONS: usize = 10;

    /// Below this many pixels the whole input is a single cluster
    pub const MIN_SAMPLES: usize = 5;
}

/// Category color selection
pub mod selection {
    /// Hair clusters at or below this brightness are treated as noise
    pub const HAIR_MIN_BRIGHTNESS: f32 = 30.0;
}

/// Confidence heuristics
pub mod confidence {
    /// Confidence of categories without a dedicated heuristic
    pub const NEUTRAL: f32 = 0.5;

    pub const SKIN_SHADOW_LIMIT: f32 = 30.0;
    pub const SKIN_SHADOW_PENALTY: f32 = 0.2;

    pub const HAIR_NATURAL: f32 = 0.9;
    pub const HAIR_UNNATURAL: f32 = 0.7;
    pub const HAIR_SHADOW_LIMIT: f32 = 40.0;
    pub const HAIR_SHADOW_PENALTY: f32 = 0.3;

    pub const CLOTHES_NEUTRAL: f32 = 0.8;
    pub const CLOTHES_CHROMATIC: f32 = 0.95;
    pub const CLOTHES_SHADOW_LIMIT: f32 = 50.0;
    pub const CLOTHES_SHADOW_PENALTY: f32 = 0.4;

    /// |a*| and |b*| below this value count as a neutral garment
    pub const CLOTHES_NEUTRAL_AB: f32 = 5.0;
}

/// Landmark-anchored feature sampling
pub mod sampling {
    pub const IRIS_RADIUS: u32 = 3;
    pub const LIPS_RADIUS: u32 = 4;
    pub const SKIN_RADIUS: u32 = 5;

    /// Largest accepted sampling radius in pixels
    pub const MAX_RADIUS: u32 = 64;

    /// Pupil radius as a fraction of the iris radius
    pub const PUPIL_RATIO: f32 = 0.4;

    /// Channel bucket width of the eye color histogram
    pub const EYE_QUANTIZATION: u8 = 8;

    pub const BRIGHTNESS_MIN: f32 = 25.0;
    pub const BRIGHTNESS_MAX: f32 = 245.0;
    pub const PUPIL_BRIGHTNESS: f32 = 45.0;

    pub const IRIS_SATURATION_MIN: f32 = 0.08;
    pub const IRIS_SATURATION_MAX: f32 = 0.85;
    pub const LIPS_SATURATION_MIN: f32 = 0.12;
    pub const LIPS_SATURATION_MAX: f32 = 0.95;
    pub const SKIN_SATURATION_MIN: f32 = 0.05;
    pub const SKIN_SATURATION_MAX: f32 = 0.65;
}

/// Season classifier weights
pub mod season {
    /// Face skin weight for value and chroma
    pub const SKIN_WEIGHT: f32 = 0.7;

    /// Hair weight for value and chroma
    pub const HAIR_WEIGHT: f32 = 0.3;

    pub const VALUE_WEIGHT: f32 = 0.3;
    pub const HUE_WEIGHT: f32 = 0.4;
    pub const CHROMA_WEIGHT: f32 = 0.3;

    /// Undertone agreement factors for the confidence score
    pub const UNDERTONE_MATCH: f32 = 1.0;
    pub const UNDERTONE_NEUTRAL: f32 = 0.7;
    pub const UNDERTONE_MISMATCH: f32 = 0.5;
}

/// Undertone/contrast/intensity/value classifier thresholds
pub mod undertone {
    /// Weight of the Lab `a * 0.5 + b` warmth term
    pub const LAB_WEIGHT: f32 = 0.7;

    /// Weight of the hue warmth term
    pub const HUE_WEIGHT: f32 = 0.3;

    /// Hue of peak warmth, in degrees
    pub const WARM_HUE_PEAK: f32 = 30.0;

    /// Scale applied to `cos(hue - peak)` before weighting
    pub const HUE_SCALE: f32 = 30.0;

    /// Scores with magnitude below this are neutral
    pub const NEUTRAL_BAND: f32 = 5.0;

    /// Hair/skin L* gap bounds for low and high contrast
    pub const LOW_CONTRAST: f32 = 30.0;
    pub const HIGH_CONTRAST: f32 = 50.0;

    /// Mean HSL saturation bounds (0-1) for soft and bright
    pub const SOFT_SATURATION: f32 = 0.3;
    pub const BRIGHT_SATURATION: f32 = 0.6;

    /// Mean L* bounds for light and deep
    pub const LIGHT_LIGHTNESS: f32 = 65.0;
    pub const DEEP_LIGHTNESS: f32 = 45.0;
}
