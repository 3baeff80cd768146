//! Error types for bubble_app

use thiserror::Error;

use bubble_core::CatalogError;

/// Errors that can occur while configuring or mounting a widget
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to read the configuration file
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has unknown keys
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The compiled-in catalog could not be built for this configuration
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type for bubble_app operations
pub type Result<T> = std::result::Result<T, AppError>;
