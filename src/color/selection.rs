//! Category-specific representative color selection
//!
//! Picks one color per category from the non-shadow cluster centroids:
//! - Skin: the middle cluster by brightness, skipping highlights and shadows
//! - Hair: the darkest cluster that is not near-black noise
//! - Clothes: the most saturated cluster
//!
//! Every rule falls back to the plain average of its input pixels.

use crate::color::cluster::ColorCluster;
use crate::color::types::Rgb;
use crate::config::SelectionConfig;
use crate::constants::selection::HAIR_MIN_BRIGHTNESS;
use crate::segmentation::Category;

/// Heuristic selector mapping clusters to one color per category
#[derive(Debug, Clone, Copy)]
pub struct CategoryColorSelector {
    hair_min_brightness: f32,
}

impl Default for CategoryColorSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryColorSelector {
    pub fn new() -> Self {
        Self {
            hair_min_brightness: HAIR_MIN_BRIGHTNESS,
        }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            hair_min_brightness: config.hair_min_brightness,
        }
    }

    /// Select the representative color of `category`
    ///
    /// `pixels` are the pixels the clusters were built from. Only populated
    /// clusters take part in the selection.
    pub fn select(&self, category: Category, pixels: &[Rgb], clusters: &[ColorCluster]) -> Rgb {
        let centroids: Vec<Rgb> = clusters
            .iter()
            .filter(|c| c.is_populated())
            .map(|c| c.centroid)
            .collect();

        let selected = match category {
            Category::FaceSkin | Category::BodySkin => self.skin(&centroids),
            Category::Hair => self.hair(&centroids),
            Category::Clothes => self.clothes(&centroids),
            Category::Others => None,
        };

        selected.unwrap_or_else(|| Rgb::average(pixels).unwrap_or_default())
    }

    fn skin(&self, centroids: &[Rgb]) -> Option<Rgb> {
        let mut sorted = centroids.to_vec();
        sorted.sort_by(|a, b| b.brightness().total_cmp(&a.brightness()));
        sorted.get(1).copied()
    }

    fn hair(&self, centroids: &[Rgb]) -> Option<Rgb> {
        centroids
            .iter()
            .filter(|c| c.brightness() > self.hair_min_brightness)
            .min_by(|a, b| a.brightness().total_cmp(&b.brightness()))
            .copied()
    }

    fn clothes(&self, centroids: &[Rgb]) -> Option<Rgb> {
        let mut sorted = centroids.to_vec();
        sorted.sort_by(|a, b| b.saturation().total_cmp(&a.saturation()));
        sorted.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(centroids: &[Rgb]) -> Vec<ColorCluster> {
        centroids
            .iter()
            .map(|&centroid| ColorCluster {
                members: vec![centroid],
                centroid,
            })
            .collect()
    }

    #[test]
    fn test_skin_picks_middle_brightness() {
        let selector = CategoryColorSelector::new();
        let light = Rgb::new(240, 210, 190);
        let mid = Rgb::new(200, 160, 130);
        let dark = Rgb::new(120, 80, 60);
        let picked = selector.select(Category::FaceSkin, &[mid], &clusters(&[dark, light, mid]));
        assert_eq!(picked, mid);
    }

    #[test]
    fn test_skin_falls_back_to_average() {
        let selector = CategoryColorSelector::new();
        let pixels = [Rgb::new(200, 150, 100), Rgb::new(100, 50, 0)];
        let picked = selector.select(Category::BodySkin, &pixels, &clusters(&[Rgb::new(1, 2, 3)]));
        assert_eq!(picked, Rgb::new(150, 100, 50));
    }

    #[test]
    fn test_hair_skips_near_black() {
        let selector = CategoryColorSelector::new();
        let noise = Rgb::new(10, 10, 10);
        let brown = Rgb::new(90, 60, 40);
        let blonde = Rgb::new(200, 170, 120);
        let picked = selector.select(Category::Hair, &[brown], &clusters(&[blonde, noise, brown]));
        assert_eq!(picked, brown);
    }

    #[test]
    fn test_hair_all_noise_falls_back() {
        let selector = CategoryColorSelector::new();
        let noise = Rgb::new(5, 5, 5);
        let picked = selector.select(Category::Hair, &[noise, Rgb::new(15, 15, 15)], &clusters(&[noise]));
        assert_eq!(picked, Rgb::new(10, 10, 10));
    }

    #[test]
    fn test_clothes_picks_most_saturated() {
        let selector = CategoryColorSelector::new();
        let gray = Rgb::new(128, 128, 128);
        let red = Rgb::new(200, 20, 20);
        let beige = Rgb::new(200, 180, 150);
        let picked = selector.select(Category::Clothes, &[gray], &clusters(&[gray, beige, red]));
        assert_eq!(picked, red);
    }

    #[test]
    fn test_single_pixel_inputs_always_defined() {
        let selector = CategoryColorSelector::new();
        let pixel = Rgb::new(77, 66, 55);
        for category in Category::ALL {
            let picked = selector.select(category, &[pixel], &clusters(&[pixel]));
            assert_eq!(picked, pixel);
        }
    }

    #[test]
    fn test_empty_clusters_ignored() {
        let selector = CategoryColorSelector::new();
        let red = Rgb::new(200, 20, 20);
        let empty = ColorCluster {
            members: Vec::new(),
            centroid: Rgb::new(0, 0, 255),
        };
        let mut all = clusters(&[red]);
        all.push(empty);
        assert_eq!(selector.select(Category::Clothes, &[red], &all), red);
    }
}
