//! Transition profiles
//!
//! A profile says *how* a property moves towards its new target: either
//! physically, with a spring, or on a fixed clock with a [`Tween`].

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::spring::SpringConfig;
use crate::values::Interpolate;

/// How a transition reaches its targets
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionProfile {
    /// Physics-driven, no fixed duration
    Spring(SpringConfig),
    /// Fixed duration with an easing curve
    Tween {
        duration_ms: u32,
        #[serde(default)]
        easing: Easing,
        #[serde(default)]
        delay_ms: u32,
    },
}

impl TransitionProfile {
    /// Tween with the default ease-out curve and no delay
    pub fn tween(duration_ms: u32) -> Self {
        TransitionProfile::Tween {
            duration_ms,
            easing: Easing::EaseOut,
            delay_ms: 0,
        }
    }
}

impl Default for TransitionProfile {
    fn default() -> Self {
        TransitionProfile::Spring(SpringConfig::carousel())
    }
}

/// A running fixed-duration transition
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    delay_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms as f32,
            delay_ms: 0.0,
            elapsed_ms: 0.0,
            easing,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms as f32;
        self
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Normalized progress in `[0, 1]`, not counting the delay
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return if self.elapsed_ms >= self.delay_ms { 1.0 } else { 0.0 };
        }
        ((self.elapsed_ms - self.delay_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.delay_ms + self.duration_ms
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.elapsed_ms += dt * 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_tween_progresses() {
        let mut tween = Tween::new(137.0, 449.0, 500, Easing::Linear);
        assert_eq!(tween.value(), 137.0);

        tween.step(0.25);
        assert!((tween.value() - 293.0).abs() < 1e-3);
        assert!(!tween.is_finished());

        tween.step(0.25);
        assert_eq!(tween.value(), 449.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut tween = Tween::new(1.0, 0.0, 100, Easing::Linear).with_delay(450);
        tween.step(0.4);
        assert_eq!(tween.value(), 1.0);
        tween.step(0.2);
        assert_eq!(tween.value(), 0.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut tween = Tween::new(0.0, 10.0, 0, Easing::EaseOut);
        tween.step(0.0);
        assert_eq!(tween.value(), 10.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_profile_from_toml_like_json() {
        let profile: TransitionProfile =
            serde_json::from_str(r#"{"type": "tween", "duration_ms": 500}"#).unwrap();
        assert_eq!(profile, TransitionProfile::tween(500));
    }
}
