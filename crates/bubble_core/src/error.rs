//! Error types for bubble_core

use thiserror::Error;

/// Errors raised while building an item catalog
///
/// Catalog construction is the only fallible step in the core. Gesture
/// handling never fails: out-of-range input is clamped or ignored.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog has no items
    #[error("catalog must contain at least one item")]
    Empty,

    /// Display width is zero, negative or not finite
    #[error("invalid display width: {0}")]
    InvalidWidth(f32),

    /// An item has a zero intrinsic dimension
    #[error("item {index} ({label}) has invalid intrinsic size {width}x{height}")]
    InvalidItemSize {
        index: usize,
        label: String,
        width: u32,
        height: u32,
    },
}

/// Result type for bubble_core operations
pub type Result<T> = std::result::Result<T, CatalogError>;
