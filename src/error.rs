//! Error types for the ryb_channels library

use thiserror::Error;

/// Result type alias for ryb_channels operations
pub type Result<T> = std::result::Result<T, ChannelError>;

/// Error types for color conversion and channel decomposition
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image file could not be encoded or written
    #[error("Failed to save image: {message}")]
    ImageSave {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Input image does not have the channel count the operation requires
    #[error("Invalid image shape: expected {expected} channels, found {found}")]
    InvalidShape { expected: u8, found: u8 },

    /// Channel tag outside the enumerated {R, Y, B} set
    #[error("Invalid channel tag: {tag:?}")]
    InvalidChannel { tag: String },

    /// Channel value outside the declared representable range
    #[error("Channel value {value} exceeds limit {limit}")]
    NumericRange { value: f64, limit: f64 },

    /// Generic processing error
    #[error("Processing error: {0}")]
    Processing(String),
}

impl ChannelError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image save error with context
    pub fn image_save<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageSave {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ChannelError::ImageLoad { .. } => {
                "Could not load the image. Please check the file path and format.".to_string()
            }
            ChannelError::ImageSave { .. } => {
                "Could not write the output image. Please check the output directory.".to_string()
            }
            ChannelError::InvalidShape { expected, found } => {
                format!(
                    "The image has {} color channels but {} are required. Use a full-color image.",
                    found, expected
                )
            }
            ChannelError::InvalidChannel { tag } => {
                format!("Unknown channel {:?}. Valid channels are R, Y and B.", tag)
            }
            ChannelError::NumericRange { value, limit } => {
                format!("Channel value {} is outside the valid range 0..={}.", value, limit)
            }
            _ => "Channel decomposition failed.".to_string(),
        }
    }
}
