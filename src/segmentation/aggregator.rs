//! Per-category pixel aggregation
//!
//! Partitions an RGBA buffer into one pixel list per category using the
//! segmenter's category mask. Background pixels are discarded. The mask and
//! buffer are validated up front; a mismatch is a malformed frame, not an
//! empty result.

use tracing::debug;

use super::category::Category;
use crate::color::types::Rgb;
use crate::{AnalysisError, Result};

/// Highest category id a mask may contain
pub const MAX_CATEGORY_ID: u8 = 5;

const CHANNELS: usize = 4;

/// One segmented pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    pub color: Rgb,
    pub category: Category,
}

/// Pixel lists for every category, in mask order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPixels {
    lists: [Vec<Rgb>; MAX_CATEGORY_ID as usize],
}

impl CategoryPixels {
    pub fn get(&self, category: Category) -> &[Rgb] {
        &self.lists[category.index()]
    }

    pub fn push(&mut self, sample: PixelSample) {
        self.lists[sample.category.index()].push(sample.color);
    }

    /// Total number of categorized pixels
    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Rgb])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Extend<PixelSample> for CategoryPixels {
    fn extend<I: IntoIterator<Item = PixelSample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

/// Mask-driven pixel aggregator
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelAggregator;

impl PixelAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a mask/buffer pair without collecting pixels
    pub fn validate(&self, mask: &[u8], rgba: &[u8]) -> Result<()> {
        if rgba.len() % CHANNELS != 0 {
            return Err(AnalysisError::BufferNotRgba { len: rgba.len() });
        }

        let pixel_count = rgba.len() / CHANNELS;
        if mask.len() != pixel_count {
            return Err(AnalysisError::MaskLengthMismatch {
                mask_len: mask.len(),
                pixel_count,
            });
        }

        if let Some((index, &value)) = mask.iter().enumerate().find(|&(_, &v)| v > MAX_CATEGORY_ID) {
            return Err(AnalysisError::InvalidCategory { index, value });
        }

        Ok(())
    }

    /// Iterate over the categorized (non-background) pixels of a frame
    pub fn samples<'a>(
        &self,
        mask: &'a [u8],
        rgba: &'a [u8],
    ) -> Result<impl Iterator<Item = PixelSample> + 'a> {
        self.validate(mask, rgba)?;

        Ok(mask
            .iter()
            .zip(rgba.chunks_exact(CHANNELS))
            .filter_map(|(&id, px)| {
                Category::from_id(id).map(|category| PixelSample {
                    color: Rgb::new(px[0], px[1], px[2]),
                    category,
                })
            }))
    }

    /// Collect the pixels of every category
    pub fn aggregate(&self, mask: &[u8], rgba: &[u8]) -> Result<CategoryPixels> {
        let mut pixels = CategoryPixels::default();
        pixels.extend(self.samples(mask, rgba)?);

        debug!(
            total = mask.len(),
            categorized = pixels.len(),
            hair = pixels.get(Category::Hair).len(),
            face_skin = pixels.get(Category::FaceSkin).len(),
            body_skin = pixels.get(Category::BodySkin).len(),
            clothes = pixels.get(Category::Clothes).len(),
            others = pixels.get(Category::Others).len(),
            "aggregated category pixels"
        );

        Ok(pixels)
    }

    /// Collect the pixels of every category from a decoded frame
    pub fn aggregate_image(&self, mask: &[u8], image: &image::RgbaImage) -> Result<CategoryPixels> {
        self.aggregate(mask, image.as_raw())
    }
}
