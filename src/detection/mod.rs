//! Shadow detection module
//!
//! Separates shadowed pixels from the lit pixels of a segmented region so
//! representative colors are chosen from evenly lit skin, hair and fabric.

pub mod shadow;

pub use shadow::{ShadowDetector, ShadowMode, ShadowSplit};
