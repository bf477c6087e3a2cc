//! Landmark-anchored face color sampling
//!
//! Given a face mesh of normalized landmarks, samples small discs around
//! fixed landmark indices for each facial feature and reduces the accepted
//! pixels to one dominant color per feature. The eye color comes from the
//! iris ring of the refined mesh with the pupil cut away.

pub mod feature;
pub mod sampler;

use serde::{Deserialize, Serialize};

use crate::color::types::Rgb;

pub use feature::FeatureKind;
pub use sampler::FeatureSampler;

/// A landmark in image-relative coordinates, `[0, 1]` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
}

/// Outer edge of the left iris
pub const LEFT_IRIS: [usize; 4] = [145, 153, 469, 158];

/// Outer edge of the right iris
pub const RIGHT_IRIS: [usize; 4] = [384, 380, 374, 385];

/// Center of the right pupil
pub const RIGHT_PUPIL: usize = 473;

/// Iris boundary around [`RIGHT_PUPIL`]
pub const RIGHT_IRIS_RING: [usize; 4] = [474, 475, 477, 476];

/// Right eyelid points; the highest one clips the eye color region
pub const RIGHT_EYELID: [usize; 4] = [385, 386, 380, 374];

/// Outer and inner lip contours
pub const LIPS: [usize; 28] = [
    0, 267, 269, 270, 409, 291, 375, 321, 405, 314, 17, 84, 181, 91, 146, 61, 185, 40, 39, 37, 87, 13, 14, 317,
    402, 318, 324, 308,
];

/// Cheeks, forehead and nose
pub const SKIN: [usize; 28] = [
    // left cheek
    118, 119, 100, 100, 36, 50,
    // right cheek
    329, 348, 347, 280, 266, 330, 329,
    // forehead
    151, 108, 69, 67, 109, 10, 338, 297, 299, 337,
    // nose
    4, 51, 195, 281, 5,
];

/// Dominant color of each sampled facial feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceColors {
    pub left_iris: Rgb,
    pub right_iris: Rgb,
    pub lips: Rgb,
    pub skin: Rgb,
    /// Iris color with the pupil and upper lid cut away
    pub eye_color: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_tables() {
        let max = LEFT_IRIS.iter().chain(&RIGHT_IRIS).chain(&LIPS).chain(&SKIN).max();
        assert_eq!(max, Some(&469));

        // Iris refinement landmarks extend the mesh to 478 points
        let eye = RIGHT_IRIS_RING.iter().chain(&RIGHT_EYELID).chain([&RIGHT_PUPIL]).max();
        assert_eq!(eye, Some(&477));
    }

    #[test]
    fn test_face_colors_serialization() {
        let colors = FaceColors {
            left_iris: Rgb::new(70, 110, 170),
            ..FaceColors::default()
        };
        let json = serde_json::to_string(&colors).unwrap();
        assert!(json.contains("leftIris"));
        assert!(json.contains("eyeColor"));
        let back: FaceColors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, colors);
    }
}
