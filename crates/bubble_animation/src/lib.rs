//! SuperBubble Animation
//!
//! Property transitions for the bubble widget.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Tweens**: Fixed-duration transitions with easing and delay
//! - **Property Sets**: Height, translation, opacity, blur and scale targets
//! - **Interruptible**: Springs keep their velocity when retargeted mid-flight
//! - **Animator trait**: Fire-and-forget `apply_transition` seam for hosts

pub mod animator;
pub mod easing;
pub mod properties;
pub mod spring;
pub mod transition;
pub mod values;

pub use animator::{Animator, HeadlessAnimator, IssuedTransition};
pub use easing::Easing;
pub use properties::{Property, PropertySet};
pub use spring::{Spring, SpringConfig};
pub use transition::{TransitionProfile, Tween};
pub use values::Interpolate;
