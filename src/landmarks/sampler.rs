//! Circular neighbourhood sampling around face landmarks

use std::collections::HashMap;

use image::RgbaImage;
use tracing::{debug, warn};

use super::feature::FeatureKind;
use super::{
    FaceColors, NormalizedLandmark, LEFT_IRIS, LIPS, RIGHT_EYELID, RIGHT_IRIS, RIGHT_IRIS_RING, RIGHT_PUPIL, SKIN,
};
use crate::color::cluster::DominantColorClusterer;
use crate::color::types::Rgb;
use crate::config::{PipelineConfig, SamplingConfig};
use crate::constants::sampling::{EYE_QUANTIZATION, MAX_RADIUS, PUPIL_RATIO};
use crate::{AnalysisError, Result};

/// Samples feature colors from an image at landmark positions
#[derive(Debug, Clone, Default)]
pub struct FeatureSampler {
    radii: SamplingConfig,
    clusterer: DominantColorClusterer,
}

impl FeatureSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler from a pipeline configuration
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` if the configuration does
    /// not validate, including sampling radii above the supported maximum.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            radii: config.sampling.clone(),
            clusterer: DominantColorClusterer::from_config(&config.clustering),
        })
    }

    /// Collect accepted pixels around every landmark in `indices`
    ///
    /// Each landmark is scaled to pixel coordinates and every pixel within
    /// the feature radius that lies inside the image and passes the feature
    /// filter is kept. Fails if an index is not present in `landmarks`.
    pub fn sample(
        &self,
        image: &RgbaImage,
        landmarks: &[NormalizedLandmark],
        indices: &[usize],
        kind: FeatureKind,
    ) -> Result<Vec<Rgb>> {
        let radius = kind.radius(&self.radii) as i64;
        let (width, height) = image.dimensions();
        let mut colors = Vec::new();

        for &index in indices {
            let point = landmarks.get(index).ok_or(AnalysisError::LandmarkOutOfRange {
                index,
                available: landmarks.len(),
            })?;
            let cx = point.x * width as f32;
            let cy = point.y * height as f32;

            for dx in -radius..=radius {
                for dy in -radius..=radius {
                    if dx * dx + dy * dy > radius * radius {
                        continue;
                    }
                    let x = (cx + dx as f32).floor();
                    let y = (cy + dy as f32).floor();
                    if x < 0.0 || y < 0.0 || x >= width as f32 || y >= height as f32 {
                        continue;
                    }

                    let color = Rgb::from(*image.get_pixel(x as u32, y as u32));
                    if kind.accepts(color) {
                        colors.push(color);
                    }
                }
            }
        }

        Ok(colors)
    }

    /// Dominant accepted color of a feature, black when nothing passes
    pub fn feature_color(
        &self,
        image: &RgbaImage,
        landmarks: &[NormalizedLandmark],
        indices: &[usize],
        kind: FeatureKind,
    ) -> Result<Rgb> {
        let samples = self.sample(image, landmarks, indices, kind)?;
        match self.clusterer.dominant_color(&samples) {
            Some(color) => {
                debug!(?kind, samples = samples.len(), color = %color.to_hex(), "feature color sampled");
                Ok(color)
            }
            None => {
                warn!(?kind, "no pixels passed the feature filter");
                Ok(Rgb::BLACK)
            }
        }
    }

    /// Eye color from the iris ring of the right eye
    ///
    /// Pixels between the pupil and the iris boundary, at or below the
    /// highest eyelid point, are bucketed by channel into steps of
    /// [`EYE_QUANTIZATION`]. The result is the rounded mean of the most
    /// populated bucket; the first bucket reached wins ties. The pupil is
    /// taken as [`PUPIL_RATIO`] of the iris radius.
    pub fn eye_color(&self, image: &RgbaImage, landmarks: &[NormalizedLandmark]) -> Result<Rgb> {
        let (width, height) = image.dimensions();
        let to_pixel = |index: usize| -> Result<(f32, f32)> {
            let point = landmarks.get(index).ok_or(AnalysisError::LandmarkOutOfRange {
                index,
                available: landmarks.len(),
            })?;
            Ok(((point.x * width as f32).round(), (point.y * height as f32).round()))
        };

        let (px, py) = to_pixel(RIGHT_PUPIL)?;
        let mut iris_radius = 0.0f32;
        for index in RIGHT_IRIS_RING {
            let (x, y) = to_pixel(index)?;
            iris_radius = iris_radius.max((x - px).hypot(y - py));
        }
        let mut upper_lid = f32::INFINITY;
        for index in RIGHT_EYELID {
            upper_lid = upper_lid.min(to_pixel(index)?.1);
        }

        let iris_radius = iris_radius.min(MAX_RADIUS as f32);
        let pupil_radius = iris_radius * PUPIL_RATIO;
        let reach = iris_radius.ceil() as i64;

        let mut pixels = Vec::new();
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let distance = (dx as f32).hypot(dy as f32);
                if distance < pupil_radius || distance > iris_radius {
                    continue;
                }
                let x = px + dx as f32;
                let y = py + dy as f32;
                if y < upper_lid || x < 0.0 || y < 0.0 || x >= width as f32 || y >= height as f32 {
                    continue;
                }
                pixels.push(Rgb::from(*image.get_pixel(x as u32, y as u32)));
            }
        }

        let bucket = |c: &Rgb| (c.r / EYE_QUANTIZATION, c.g / EYE_QUANTIZATION, c.b / EYE_QUANTIZATION);
        let mut counts: HashMap<(u8, u8, u8), usize> = HashMap::new();
        for pixel in &pixels {
            *counts.entry(bucket(pixel)).or_default() += 1;
        }

        let mut dominant = None;
        let mut best = 0;
        for pixel in &pixels {
            let count = counts[&bucket(pixel)];
            if count > best {
                best = count;
                dominant = Some(bucket(pixel));
            }
        }

        let Some(dominant) = dominant else {
            warn!("no iris pixels around the right pupil");
            return Ok(Rgb::BLACK);
        };
        let members: Vec<Rgb> = pixels.into_iter().filter(|p| bucket(p) == dominant).collect();
        let color = Rgb::average(&members).unwrap_or(Rgb::BLACK);
        debug!(iris_radius, samples = members.len(), color = %color.to_hex(), "eye color sampled");
        Ok(color)
    }

    /// Sample irises, lips, skin and the eye color
    pub fn analyze_face(&self, image: &RgbaImage, landmarks: &[NormalizedLandmark]) -> Result<FaceColors> {
        Ok(FaceColors {
            left_iris: self.feature_color(image, landmarks, &LEFT_IRIS, FeatureKind::Iris)?,
            right_iris: self.feature_color(image, landmarks, &RIGHT_IRIS, FeatureKind::Iris)?,
            lips: self.feature_color(image, landmarks, &LIPS, FeatureKind::Lip)?,
            skin: self.feature_color(image, landmarks, &SKIN, FeatureKind::Skin)?,
            eye_color: self.eye_color(image, landmarks)?,
        })
    }
}
