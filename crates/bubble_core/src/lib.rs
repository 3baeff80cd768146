//! SuperBubble Core
//!
//! The mutable heart of the chat-bubble media carousel:
//!
//! - **Item Catalog**: ordered, immutable items with natural heights and strip offsets
//! - **Carousel State Machine**: drag-driven height interpolation and threshold-based index commits
//! - **Gesture Primitives**: drag samples and elastic constraint boxes
//! - **Zoom State**: at most one zoomed item, forced closed while a swipe is in progress
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use bubble_core::{Catalog, CarouselState, ItemSpec, ItemKind};
//!
//! let catalog = Catalog::build(
//!     375.0,
//!     vec![
//!         ItemSpec::image("a.png", 800, 600),
//!         ItemSpec::image("b.png", 600, 800),
//!     ],
//! )
//! .unwrap();
//!
//! let mut carousel = CarouselState::new(Arc::new(catalog));
//!
//! // Drag halfway towards the second item
//! carousel.on_drag_update(-187.5);
//! assert!(carousel.is_dragging());
//!
//! // Release past the distance threshold
//! carousel.on_drag_end(-200.0, 0.0);
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(carousel.current_height(), carousel.catalog().height(1));
//! # let _ = ItemKind::Image { url: String::new() };
//! ```

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod gesture;
pub mod zoom;

pub use carousel::{interpolate_height, CarouselState, DragOutcome, Swipe, Thresholds};
pub use catalog::{Catalog, DeviceClass, Item, ItemKind, ItemSpec};
pub use error::{CatalogError, Result};
pub use gesture::{apply_elastic, DragConstraints, DragSample};
pub use zoom::ZoomState;
