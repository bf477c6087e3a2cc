//! Category mask handling
//!
//! Turns the segmenter's per-pixel category mask and the matching RGBA
//! buffer into per-category pixel lists.

pub mod aggregator;
pub mod category;

pub use aggregator::{CategoryPixels, PixelAggregator, PixelSample};
pub use category::Category;
