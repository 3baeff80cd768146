//! SuperBubble Application Shell
//!
//! Mounts one of the bubble widgets and turns host input into animator
//! instructions and frame snapshots.
//!
//! # Widgets
//!
//! - **Bubble**: chat text with inline item pills, a swipeable image strip,
//!   tap-to-zoom and a draggable card
//! - **Carousel**: the bare strip under a title row, with an optional debug line
//! - **Expand**: a bubble that grows to reveal an image when its pill is clicked
//!
//! # Example
//!
//! ```ignore
//! use bubble_app::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = BubbleConfig::load_or_default(None)?;
//!     let mut app = BubbleApp::mount_headless(config).await?;
//!
//!     app.dispatch(InputEvent::Drag(DragSample::horizontal(-200.0, -80.0)));
//!     app.dispatch(InputEvent::Release(DragSample::horizontal(-240.0, -90.0)));
//!     app.animator_mut().settle(2.0);
//!
//!     println!("{:?}", app.frame());
//!     Ok(())
//! }
//! ```

mod app;
pub mod catalogs;
mod config;
mod error;
mod events;
pub mod expand;
mod frame;
pub mod shell;
mod zoom_overlay;


pub use app::{BubbleApp, Widget};
pub use config::{BubbleConfig, ThresholdConfig, Variant, Viewport};
pub use error::{AppError, Result};
pub use events::InputEvent;
pub use expand::ExpandShell;
pub use frame::{
    CardView, CarouselFrame, Color, ExpandFrame, Frame, ItemView, PillView, StripView, TextBlock,
};
pub use shell::{CarouselShell, VariantStyle};
pub use zoom_overlay::{HeadlessZoomOverlay, OverlayEvent, ZoomOverlay};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::BubbleApp;
    pub use crate::config::{BubbleConfig, Variant};
    pub use crate::error::{AppError, Result};
    pub use crate::events::InputEvent;
    pub use crate::frame::Frame;

    // Core types
    pub use bubble_core::{DeviceClass, DragOutcome, DragSample};

    // Animation
    pub use bubble_animation::{Animator, HeadlessAnimator, SpringConfig};
}
