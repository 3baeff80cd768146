//! Drag gesture primitives
//!
//! The pointer-capture layer reports [`DragSample`]s continuously while a
//! pointer is down and once more at release. Offsets are measured from the
//! drag start, velocities are in logical pixels per second.
//!
//! [`DragConstraints`] is the elastic box the host applies to the dragged
//! element's raw translation. Positions past a bound are not cut off but
//! scaled down by the elastic factor, so the element can overshoot slightly
//! before snapping back.

use serde::{Deserialize, Serialize};

/// A single report from the drag recognizer
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DragSample {
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default)]
    pub velocity_x: f32,
    #[serde(default)]
    pub velocity_y: f32,
}

impl DragSample {
    /// Horizontal-only sample
    pub fn horizontal(offset_x: f32, velocity_x: f32) -> Self {
        Self {
            offset_x,
            velocity_x,
            ..Default::default()
        }
    }
}

/// Elastic bounds for a dragged element's translation
///
/// `left`/`top` are the minimum translations, `right`/`bottom` the maximum.
/// `None` leaves that side unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DragConstraints {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
}

impl DragConstraints {
    /// Horizontal bounds only
    pub fn horizontal(left: f32, right: f32) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            top: None,
            bottom: None,
        }
    }

    /// A zero-sized box: the element always returns to where it started
    pub fn pinned() -> Self {
        Self {
            left: Some(0.0),
            right: Some(0.0),
            top: Some(0.0),
            bottom: Some(0.0),
        }
    }

    /// Constrain a raw `(x, y)` translation with the given elasticity
    pub fn constrain(&self, x: f32, y: f32, elastic: f32) -> (f32, f32) {
        (
            apply_elastic(x, self.left, self.right, elastic),
            apply_elastic(y, self.top, self.bottom, elastic),
        )
    }
}

/// Apply an elastic bound to a single axis
///
/// Inside `[min, max]` the value passes through unchanged. Past a bound, only
/// `elastic` of the overshoot is kept: `0.0` is a hard clamp, `1.0` lets the
/// element follow the pointer freely.
pub fn apply_elastic(value: f32, min: Option<f32>, max: Option<f32>, elastic: f32) -> f32 {
    if let Some(min) = min {
        if value < min {
            return min + (value - min) * elastic;
        }
    }
    if let Some(max) = max {
        if value > max {
            return max + (value - max) * elastic;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_bounds_passes_through() {
        let box_ = DragConstraints::horizontal(-750.0, 0.0);
        assert_eq!(box_.constrain(-300.0, 12.0, 0.1), (-300.0, 12.0));
    }

    #[test]
    fn test_overshoot_scaled_by_elastic() {
        let box_ = DragConstraints::horizontal(-750.0, 0.0);
        let (x, _) = box_.constrain(100.0, 0.0, 0.1);
        assert!((x - 10.0).abs() < 1e-4);

        let (x, _) = box_.constrain(-850.0, 0.0, 0.1);
        assert!((x + 760.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_elastic_is_hard_clamp() {
        let box_ = DragConstraints::horizontal(-750.0, -375.0);
        assert_eq!(box_.constrain(0.0, 0.0, 0.0).0, -375.0);
        assert_eq!(box_.constrain(-1000.0, 0.0, 0.0).0, -750.0);
    }

    #[test]
    fn test_pinned_box_with_full_elastic_follows_pointer() {
        let box_ = DragConstraints::pinned();
        assert_eq!(box_.constrain(40.0, -25.0, 1.0), (40.0, -25.0));
        assert_eq!(box_.constrain(40.0, -25.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_sample_deserializes_with_defaults() {
        let sample: DragSample = serde_json::from_str(r#"{"offset_x": -120.0}"#).unwrap();
        assert_eq!(sample, DragSample::horizontal(-120.0, 0.0));
    }
}
