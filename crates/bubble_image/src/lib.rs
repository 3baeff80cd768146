//! SuperBubble image loading
//!
//! Decodes item images and preloads a whole catalog before the widget is
//! allowed to render. Preloading is best effort: every image is requested
//! concurrently, the caller waits for all of them to settle, and failures are
//! logged and reported rather than returned as errors.

pub mod error;
pub mod loader;
pub mod preload;
pub mod source;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use preload::{preload_all, PreloadFailure, PreloadReport};
pub use source::ImageSource;
