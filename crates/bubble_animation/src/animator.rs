//! Animator seam
//!
//! The widget never animates anything itself. It tells an [`Animator`] where a
//! named channel (the strip, the image container, the outer mask...) should end
//! up and how to get there, then forgets about it. No completion callback is
//! ever consumed.
//!
//! [`HeadlessAnimator`] is the reference engine: it keeps one spring or tween
//! per channel property, steps them on `tick`, and records every issued
//! transition so hosts and tests can inspect what was asked of it.

use rustc_hash::FxHashMap;

use crate::properties::{Property, PropertySet};
use crate::spring::Spring;
use crate::transition::{TransitionProfile, Tween};

/// Fire-and-forget property interpolation
pub trait Animator {
    /// Animate `channel` towards `targets` using `profile`
    fn apply_transition(&mut self, channel: &str, targets: &PropertySet, profile: TransitionProfile);

    /// Set values without animating (live drag following, initial state)
    fn set_immediate(&mut self, channel: &str, values: &PropertySet);
}

/// A transition request as it was issued
#[derive(Clone, Debug, PartialEq)]
pub struct IssuedTransition {
    pub channel: String,
    pub targets: PropertySet,
    pub profile: TransitionProfile,
}

#[derive(Clone, Copy, Debug)]
enum Driver {
    Still(f32),
    Spring(Spring),
    Tween(Tween),
}

impl Driver {
    fn value(&self) -> f32 {
        match self {
            Driver::Still(value) => *value,
            Driver::Spring(spring) => spring.value(),
            Driver::Tween(tween) => tween.value(),
        }
    }

    fn target(&self) -> f32 {
        match self {
            Driver::Still(value) => *value,
            Driver::Spring(spring) => spring.target(),
            Driver::Tween(tween) => tween.target(),
        }
    }

    fn is_settled(&self) -> bool {
        match self {
            Driver::Still(_) => true,
            Driver::Spring(spring) => spring.is_settled(),
            Driver::Tween(tween) => tween.is_finished(),
        }
    }

    fn step(&mut self, dt: f32) {
        match self {
            Driver::Still(_) => {}
            Driver::Spring(spring) => spring.step(dt),
            Driver::Tween(tween) => tween.step(dt),
        }
        if self.is_settled() {
            *self = Driver::Still(self.target());
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Channel {
    drivers: [Option<Driver>; Property::COUNT],
}

/// In-process animation engine without a renderer
#[derive(Debug, Default)]
pub struct HeadlessAnimator {
    channels: FxHashMap<String, Channel>,
    issued: Vec<IssuedTransition>,
}

impl HeadlessAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current animated value of a channel property
    pub fn value(&self, channel: &str, property: Property) -> Option<f32> {
        self.driver(channel, property).map(Driver::value)
    }

    /// Where a channel property is heading
    pub fn target(&self, channel: &str, property: Property) -> Option<f32> {
        self.driver(channel, property).map(Driver::target)
    }

    fn driver(&self, channel: &str, property: Property) -> Option<&Driver> {
        self.channels
            .get(channel)
            .and_then(|c| c.drivers[property.index()].as_ref())
    }

    /// True when no property is still moving
    pub fn is_settled(&self) -> bool {
        self.channels
            .values()
            .flat_map(|c| c.drivers.iter().flatten())
            .all(Driver::is_settled)
    }

    /// Advance every running transition by `dt` seconds
    ///
    /// Returns true while anything is still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        for channel in self.channels.values_mut() {
            for driver in channel.drivers.iter_mut().flatten() {
                driver.step(dt);
            }
        }
        !self.is_settled()
    }

    /// Tick at 60fps until settled or `max_seconds` elapsed
    pub fn settle(&mut self, max_seconds: f32) {
        let frame = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < max_seconds && self.tick(frame) {
            elapsed += frame;
        }
    }

    /// Transitions issued so far
    pub fn issued(&self) -> &[IssuedTransition] {
        &self.issued
    }

    /// Drain the issued-transition log
    pub fn take_issued(&mut self) -> Vec<IssuedTransition> {
        std::mem::take(&mut self.issued)
    }
}

impl Animator for HeadlessAnimator {
    fn apply_transition(&mut self, channel: &str, targets: &PropertySet, profile: TransitionProfile) {
        tracing::trace!("Transition on {}: {:?} via {:?}", channel, targets, profile);

        let slots = &mut self.channels.entry(channel.to_string()).or_default().drivers;
        for (property, target) in targets.iter() {
            let slot = &mut slots[property.index()];
            let current = slot.as_ref().map_or(target, Driver::value);

            *slot = Some(match (profile, slot.take()) {
                (TransitionProfile::Spring(config), Some(Driver::Spring(mut spring))) => {
                    spring.set_config(config);
                    spring.set_target(target);
                    Driver::Spring(spring)
                }
                (TransitionProfile::Spring(config), _) => {
                    let mut spring = Spring::new(config, current)
                        .with_rest(property.rest_delta(), property.rest_delta() * 10.0);
                    spring.set_target(target);
                    Driver::Spring(spring)
                }
                (
                    TransitionProfile::Tween {
                        duration_ms,
                        easing,
                        delay_ms,
                    },
                    _,
                ) => Driver::Tween(
                    Tween::new(current, target, duration_ms, easing).with_delay(delay_ms),
                ),
            });
        }

        self.issued.push(IssuedTransition {
            channel: channel.to_string(),
            targets: *targets,
            profile,
        });
    }

    fn set_immediate(&mut self, channel: &str, values: &PropertySet) {
        let slots = &mut self.channels.entry(channel.to_string()).or_default().drivers;
        for (property, value) in values.iter() {
            slots[property.index()] = Some(Driver::Still(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::spring::SpringConfig;

    #[test]
    fn test_unknown_channel_has_no_value() {
        let animator = HeadlessAnimator::new();
        assert_eq!(animator.value("strip", Property::TranslateX), None);
        assert!(animator.is_settled());
    }

    #[test]
    fn test_spring_transition_reaches_target() {
        let mut animator = HeadlessAnimator::new();
        animator.set_immediate("strip", &PropertySet::new().translate_x(0.0));
        animator.apply_transition(
            "strip",
            &PropertySet::new().translate_x(-375.0),
            TransitionProfile::Spring(SpringConfig::carousel()),
        );

        assert!(animator.tick(1.0 / 60.0));
        let mid = animator.value("strip", Property::TranslateX).unwrap();
        assert!(mid < 0.0 && mid > -375.0);

        animator.settle(3.0);
        assert!(animator.is_settled());
        assert_eq!(animator.value("strip", Property::TranslateX), Some(-375.0));
    }

    #[test]
    fn test_first_transition_starts_at_target() {
        let mut animator = HeadlessAnimator::new();
        animator.apply_transition(
            "mask",
            &PropertySet::new().height(300.0),
            TransitionProfile::default(),
        );
        assert_eq!(animator.value("mask", Property::Height), Some(300.0));
    }

    #[test]
    fn test_tween_transition() {
        let mut animator = HeadlessAnimator::new();
        animator.set_immediate("bubble", &PropertySet::new().opacity(0.2).blur(4.0));
        animator.apply_transition(
            "bubble",
            &PropertySet::new().opacity(1.0).blur(0.0),
            TransitionProfile::Tween {
                duration_ms: 1000,
                easing: Easing::Linear,
                delay_ms: 0,
            },
        );

        animator.tick(0.5);
        let opacity = animator.value("bubble", Property::Opacity).unwrap();
        assert!((opacity - 0.6).abs() < 1e-4);
        assert!((animator.value("bubble", Property::Blur).unwrap() - 2.0).abs() < 1e-4);

        animator.tick(0.5);
        assert_eq!(animator.value("bubble", Property::Opacity), Some(1.0));
        assert!(animator.is_settled());
    }

    #[test]
    fn test_interrupted_spring_keeps_velocity() {
        let mut animator = HeadlessAnimator::new();
        animator.set_immediate("strip", &PropertySet::new().translate_x(0.0));
        let profile = TransitionProfile::Spring(SpringConfig::carousel());
        animator.apply_transition("strip", &PropertySet::new().translate_x(-375.0), profile);
        for _ in 0..5 {
            animator.tick(1.0 / 60.0);
        }
        let before = animator.value("strip", Property::TranslateX).unwrap();

        // Retarget back to the start; the strip keeps moving left for a moment
        animator.apply_transition("strip", &PropertySet::new().translate_x(0.0), profile);
        animator.tick(1.0 / 60.0);
        assert!(animator.value("strip", Property::TranslateX).unwrap() < before);
    }

    #[test]
    fn test_untouched_properties_keep_animating() {
        let mut animator = HeadlessAnimator::new();
        animator.set_immediate("card", &PropertySet::new().height(100.0).scale(1.0));
        animator.apply_transition(
            "card",
            &PropertySet::new().height(200.0),
            TransitionProfile::tween(100),
        );
        animator.apply_transition(
            "card",
            &PropertySet::new().scale(1.05),
            TransitionProfile::tween(100),
        );
        assert_eq!(animator.target("card", Property::Height), Some(200.0));
        assert_eq!(animator.target("card", Property::Scale), Some(1.05));
    }

    #[test]
    fn test_issued_log() {
        let mut animator = HeadlessAnimator::new();
        animator.apply_transition("a", &PropertySet::new().height(1.0), TransitionProfile::default());
        animator.apply_transition("b", &PropertySet::new().height(2.0), TransitionProfile::default());
        assert_eq!(animator.issued().len(), 2);

        let drained = animator.take_issued();
        assert_eq!(drained[1].channel, "b");
        assert!(animator.issued().is_empty());
    }
}
