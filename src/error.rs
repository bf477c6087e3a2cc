//! Error types for the color_season library

use thiserror::Error;

/// Result type alias for color_season operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors surfaced at the input boundary of the analysis pipeline.
///
/// Degenerate inputs (empty categories, all-shadow regions, empty sample
/// sets) are not errors; they resolve to fallback values inside the pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Category mask and pixel buffer describe different pixel counts
    #[error("Category mask has {mask_len} entries but pixel buffer holds {pixel_count} pixels")]
    MaskLengthMismatch { mask_len: usize, pixel_count: usize },

    /// Pixel buffer is not a whole number of RGBA pixels
    #[error("Pixel buffer length {len} is not a multiple of 4 (RGBA)")]
    BufferNotRgba { len: usize },

    /// Mask references a category id outside 0..=5
    #[error("Invalid category id {value} at mask index {index}")]
    InvalidCategory { index: usize, value: u8 },

    /// Landmark table references an index the landmark list does not contain
    #[error("Landmark index {index} out of range ({available} landmarks supplied)")]
    LandmarkOutOfRange { index: usize, available: usize },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration I/O error: {message}")]
    ConfigIo {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed or serialized
    #[error("Configuration format error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AnalysisError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration I/O error with context
    pub fn config_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration parse error with context
    pub fn config_parse(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source,
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Recoverable errors come from a single bad frame; the caller can drop it
    /// and wait for the next segmentation result.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::MaskLengthMismatch { .. }
                | AnalysisError::BufferNotRgba { .. }
                | AnalysisError::InvalidCategory { .. }
                | AnalysisError::LandmarkOutOfRange { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::MaskLengthMismatch { .. } | AnalysisError::BufferNotRgba { .. } => {
                "The photo and its segmentation do not match. Please capture the photo again.".to_string()
            }
            AnalysisError::InvalidCategory { .. } => {
                "The segmentation result was not understood. Please try again.".to_string()
            }
            AnalysisError::LandmarkOutOfRange { .. } => {
                "Could not locate all facial features. Please face the camera directly.".to_string()
            }
            AnalysisError::ConfigIo { .. } | AnalysisError::ConfigParse { .. } => {
                "The analysis settings could not be loaded.".to_string()
            }
            _ => "Color analysis failed. Please try with a different photo.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::MaskLengthMismatch {
            mask_len: 10,
            pixel_count: 9,
        };
        assert_eq!(
            err.to_string(),
            "Category mask has 10 entries but pixel buffer holds 9 pixels"
        );

        let err = AnalysisError::InvalidCategory { index: 3, value: 7 };
        assert_eq!(err.to_string(), "Invalid category id 7 at mask index 3");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(AnalysisError::BufferNotRgba { len: 7 }.is_recoverable());
        assert!(!AnalysisError::invalid_parameter("k", 0).is_recoverable());
    }

    #[test]
    fn test_user_message_for_landmarks() {
        let err = AnalysisError::LandmarkOutOfRange {
            index: 469,
            available: 10,
        };
        assert!(err.user_message().contains("facial features"));
    }
}
