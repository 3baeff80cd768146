//! Tap-to-zoom state
//!
//! Tapping an image and dragging the strip start with the same pointer-down,
//! so zoom requests that arrive while a swipe is in progress close every
//! item instead of opening one. At most one item is zoomed at a time.

/// Which item, if any, is shown in the zoom overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoomState {
    zoomed: Option<usize>,
}

impl ZoomState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoomed(&self) -> Option<usize> {
        self.zoomed
    }

    pub fn is_zoomed(&self, index: usize) -> bool {
        self.zoomed == Some(index)
    }

    /// Handle a zoom change request from the overlay of item `index`
    ///
    /// Returns true when the zoomed item changed.
    pub fn request(&mut self, index: usize, should_zoom: bool, dragging: bool) -> bool {
        let next = if dragging {
            None
        } else if should_zoom {
            Some(index)
        } else if self.zoomed == Some(index) {
            None
        } else {
            self.zoomed
        };

        let changed = next != self.zoomed;
        self.zoomed = next;
        changed
    }

    /// Close whatever is open
    pub fn close(&mut self) -> bool {
        self.zoomed.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut zoom = ZoomState::new();
        assert!(zoom.request(2, true, false));
        assert!(zoom.is_zoomed(2));
        assert!(!zoom.is_zoomed(1));

        assert!(zoom.request(2, false, false));
        assert_eq!(zoom.zoomed(), None);
    }

    #[test]
    fn test_only_one_item_zoomed() {
        let mut zoom = ZoomState::new();
        zoom.request(0, true, false);
        zoom.request(3, true, false);
        assert_eq!(zoom.zoomed(), Some(3));
        assert!(!zoom.is_zoomed(0));
    }

    #[test]
    fn test_closing_other_item_keeps_current() {
        let mut zoom = ZoomState::new();
        zoom.request(1, true, false);
        assert!(!zoom.request(4, false, false));
        assert_eq!(zoom.zoomed(), Some(1));
    }

    #[test]
    fn test_request_while_dragging_forces_closed() {
        let mut zoom = ZoomState::new();
        zoom.request(1, true, false);

        assert!(zoom.request(2, true, true));
        assert_eq!(zoom.zoomed(), None);

        assert!(!zoom.request(1, true, true));
        assert_eq!(zoom.zoomed(), None);
    }

    #[test]
    fn test_close() {
        let mut zoom = ZoomState::new();
        assert!(!zoom.close());
        zoom.request(0, true, false);
        assert!(zoom.close());
        assert_eq!(zoom.zoomed(), None);
    }
}
