//! Dominant color clustering
//!
//! Fixed-k k-means in RGB space with Euclidean distance. Seeding takes the
//! first `k` pixels of the input so repeated runs on the same pixels produce
//! identical centroids. The iteration count is fixed; convergence is not
//! checked.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::types::Rgb;
use crate::config::ClusteringConfig;
use crate::constants::clustering::{DEFAULT_K, MAX_ITERATIONS, MIN_SAMPLES};

/// A group of pixels and their channel-wise rounded mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCluster {
    pub members: Vec<Rgb>,
    pub centroid: Rgb,
}

impl ColorCluster {
    pub fn population(&self) -> usize {
        self.members.len()
    }

    pub fn is_populated(&self) -> bool {
        !self.members.is_empty()
    }
}

/// K-means clusterer producing representative colors
#[derive(Debug, Clone, Copy)]
pub struct DominantColorClusterer {
    k: usize,
    max_iterations: usize,
    min_samples: usize,
}

impl Default for DominantColorClusterer {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantColorClusterer {
    /// Create a clusterer with k = 3, 10 iterations and a 5 pixel minimum
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            max_iterations: MAX_ITERATIONS,
            min_samples: MIN_SAMPLES,
        }
    }

    /// Create a clusterer with custom parameters
    pub fn with_params(k: usize, max_iterations: usize, min_samples: usize) -> Self {
        Self {
            k: k.max(1),
            max_iterations,
            min_samples,
        }
    }

    pub fn from_config(config: &ClusteringConfig) -> Self {
        Self::with_params(config.k, config.max_iterations, config.min_samples)
    }

    /// Cluster pixels into at most `k` groups
    ///
    /// Returns every cluster, including ones that ended up empty; an empty
    /// cluster keeps the centroid it had before losing its members. Inputs
    /// below the sample minimum come back as one cluster holding everything,
    /// and an empty input yields no clusters.
    pub fn cluster(&self, pixels: &[Rgb]) -> Vec<ColorCluster> {
        if pixels.is_empty() {
            return Vec::new();
        }

        if pixels.len() < self.min_samples {
            let centroid = Rgb::average(pixels).unwrap_or_default();
            return vec![ColorCluster {
                members: pixels.to_vec(),
                centroid,
            }];
        }

        let mut centroids: Vec<Rgb> = pixels.iter().take(self.k).copied().collect();
        let mut assignments: Vec<Vec<Rgb>> = vec![Vec::new(); centroids.len()];

        for iteration in 0..self.max_iterations {
            for bucket in assignments.iter_mut() {
                bucket.clear();
            }

            for pixel in pixels {
                assignments[nearest(pixel, &centroids)].push(*pixel);
            }

            for (centroid, bucket) in centroids.iter_mut().zip(&assignments) {
                if let Some(mean) = Rgb::average(bucket) {
                    *centroid = mean;
                }
            }

            trace!(
                iteration,
                populations = ?assignments.iter().map(Vec::len).collect::<Vec<_>>(),
                "k-means iteration"
            );
        }

        if self.max_iterations == 0 {
            for pixel in pixels {
                assignments[nearest(pixel, &centroids)].push(*pixel);
            }
        }

        centroids
            .into_iter()
            .zip(assignments)
            .map(|(centroid, members)| ColorCluster { members, centroid })
            .collect()
    }

    /// Centroid of the most populated cluster, first cluster winning ties
    pub fn dominant_color(&self, pixels: &[Rgb]) -> Option<Rgb> {
        let clusters = self.cluster(pixels);
        let mut best: Option<&ColorCluster> = None;
        for cluster in clusters.iter().filter(|c| c.is_populated()) {
            if best.map_or(true, |b| cluster.population() > b.population()) {
                best = Some(cluster);
            }
        }
        best.map(|c| c.centroid)
    }
}

/// Index of the closest centroid; the earliest wins on equal distance
fn nearest(pixel: &Rgb, centroids: &[Rgb]) -> usize {
    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = pixel.distance(centroid);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}
