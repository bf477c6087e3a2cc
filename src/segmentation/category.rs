//! Segmentation categories
//!
//! Ids follow the multiclass selfie segmentation contract: 0 is background,
//! 1..=5 are hair, body skin, face skin, clothes and others.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::aggregator::MAX_CATEGORY_ID;

/// Region class of a segmented pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Hair = 1,
    BodySkin = 2,
    FaceSkin = 3,
    Clothes = 4,
    Others = 5,
}

impl Category {
    /// All categories in mask id order
    pub const ALL: [Category; MAX_CATEGORY_ID as usize] = [
        Category::Hair,
        Category::BodySkin,
        Category::FaceSkin,
        Category::Clothes,
        Category::Others,
    ];

    /// Category for a mask id; background (0) and unknown ids map to `None`
    pub fn from_id(id: u8) -> Option<Category> {
        match id {
            1 => Some(Category::Hair),
            2 => Some(Category::BodySkin),
            3 => Some(Category::FaceSkin),
            4 => Some(Category::Clothes),
            5 => Some(Category::Others),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based slot for per-category arrays
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Hair => "hair",
            Category::BodySkin => "bodySkin",
            Category::FaceSkin => "faceSkin",
            Category::Clothes => "clothes",
            Category::Others => "others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id(0), None);
        assert_eq!(Category::from_id(6), None);
    }

    #[test]
    fn test_index_is_dense() {
        let indices: Vec<usize> = Category::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::FaceSkin.to_string(), "faceSkin");
    }
}
