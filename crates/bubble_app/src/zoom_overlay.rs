//! Zoom overlay seam
//!
//! The overlay that shows a full-screen image lives outside the widget. The
//! shell only tells it which item to present or that it should go away.

/// Full-screen image presenter
pub trait ZoomOverlay {
    /// Show the image of item `index`
    fn present(&mut self, index: usize, image_url: &str);

    /// Hide whatever is shown
    fn dismiss(&mut self);
}

/// Overlay request as received
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayEvent {
    Presented { index: usize, image_url: String },
    Dismissed,
}

/// Overlay stand-in that records what it was asked to do
#[derive(Debug, Default)]
pub struct HeadlessZoomOverlay {
    showing: Option<usize>,
    events: Vec<OverlayEvent>,
}

impl HeadlessZoomOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn showing(&self) -> Option<usize> {
        self.showing
    }

    pub fn events(&self) -> &[OverlayEvent] {
        &self.events
    }
}

impl ZoomOverlay for HeadlessZoomOverlay {
    fn present(&mut self, index: usize, image_url: &str) {
        tracing::debug!("Zoom overlay presenting item {} ({})", index, image_url);
        self.showing = Some(index);
        self.events.push(OverlayEvent::Presented {
            index,
            image_url: image_url.to_string(),
        });
    }

    fn dismiss(&mut self) {
        tracing::debug!("Zoom overlay dismissed");
        self.showing = None;
        self.events.push(OverlayEvent::Dismissed);
    }
}
