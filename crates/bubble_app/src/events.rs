//! Host input events
//!
//! Everything a host can feed into a mounted widget. Events are plain data so
//! recorded sessions can be replayed from JSON:
//!
//! ```json
//! [
//!   { "event": "drag", "offset_x": -120, "velocity_x": -300 },
//!   { "event": "release", "offset_x": -240, "velocity_x": -310 },
//!   { "event": "pill", "index": 3 },
//!   { "event": "tick", "ms": 16 }
//! ]
//! ```

use bubble_core::DragSample;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// Strip drag in progress
    Drag(DragSample),
    /// Strip released
    Release(DragSample),
    /// Pill clicked
    Pill { index: usize },
    /// Zoom overlay of an item asked to open or close
    Zoom { index: usize, open: bool },
    /// Whole card dragged
    CardDrag(DragSample),
    /// Whole card released
    CardRelease,
    /// Time passed
    Tick { ms: f32 },
    /// Text block measured after layout
    TextLayout { height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let events: Vec<InputEvent> = serde_json::from_str(
            r#"[
                { "event": "drag", "offset_x": -120, "velocity_x": -300 },
                { "event": "release", "offset_x": -240 },
                { "event": "pill", "index": 3 },
                { "event": "zoom", "index": 1, "open": true },
                { "event": "card_release" },
                { "event": "tick", "ms": 16 }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                InputEvent::Drag(DragSample::horizontal(-120.0, -300.0)),
                InputEvent::Release(DragSample::horizontal(-240.0, 0.0)),
                InputEvent::Pill { index: 3 },
                InputEvent::Zoom {
                    index: 1,
                    open: true
                },
                InputEvent::CardRelease,
                InputEvent::Tick { ms: 16.0 },
            ]
        );
    }

    #[test]
    fn test_unknown_event_rejected() {
        assert!(serde_json::from_str::<InputEvent>(r#"{ "event": "pinch" }"#).is_err());
    }
}
