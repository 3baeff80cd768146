//! Error types for bubble_image

use thiserror::Error;

/// Errors that can occur while loading an image
#[derive(Error, Debug)]
pub enum ImageError {
    /// Failed to read the file
    #[error("failed to load {path}: {source}")]
    FileLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the bytes
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Pixel buffer does not match the stated dimensions
    #[error("invalid pixel data length: expected {expected}, got {actual}")]
    InvalidPixels { expected: usize, actual: usize },

    /// The loading task panicked or was cancelled
    #[error("load task failed: {0}")]
    Task(String),
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
