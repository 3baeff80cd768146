//! Mount-time preloading
//!
//! One blocking decode per image is spawned up front, then the caller joins
//! on all of them. There is no cancellation and no retry. A failed image is
//! logged and listed in the report; it never stops the others or the widget.

use crate::error::ImageError;
use crate::loader::ImageData;
use crate::source::ImageSource;

/// An image that could not be preloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadFailure {
    pub label: String,
    pub error: String,
}

/// Outcome of a preload pass
#[derive(Debug, Default)]
pub struct PreloadReport {
    pub loaded: Vec<(String, ImageData)>,
    pub failed: Vec<PreloadFailure>,
}

impl PreloadReport {
    pub fn total(&self) -> usize {
        self.loaded.len() + self.failed.len()
    }

    /// True when every image loaded
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&ImageData> {
        self.loaded
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, data)| data)
    }
}

/// Preload every `(label, source)` pair concurrently and wait for all of them
pub async fn preload_all(sources: Vec<(String, ImageSource)>) -> PreloadReport {
    let handles: Vec<_> = sources
        .into_iter()
        .map(|(label, source)| {
            let handle = tokio::task::spawn_blocking(move || ImageData::load(&source));
            (label, handle)
        })
        .collect();

    let mut report = PreloadReport::default();
    for (label, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_error) => Err(ImageError::Task(join_error.to_string())),
        };

        match result {
            Ok(data) => {
                tracing::debug!("Preloaded {} ({}x{})", label, data.width(), data.height());
                report.loaded.push((label, data));
            }
            Err(e) => {
                tracing::warn!("Error loading image {}: {}", label, e);
                report.failed.push(PreloadFailure {
                    label,
                    error: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Preload finished: {} loaded, {} failed",
        report.loaded.len(),
        report.failed.len()
    );
    report
}
