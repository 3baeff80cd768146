//! Expand bubble shell
//!
//! A text bubble with no carousel. Clicking the first pill grows the bubble to
//! reveal its image; clicking again shrinks it back. The image fades in at
//! once when expanding but only disappears after the collapse is well under
//! way, so it is never clipped while still visible.

use std::sync::Arc;

use bubble_animation::{Animator, PropertySet, TransitionProfile};
use bubble_core::{Catalog, DeviceClass};

use crate::config::{BubbleConfig, Variant};
use crate::frame::ExpandFrame;
use crate::shell::{text_blocks, VariantStyle};

/// Animator channel names
pub mod channels {
    /// The bubble itself (height, opacity, blur)
    pub const BUBBLE: &str = "bubble";
    /// The revealed image (opacity)
    pub const REVEAL: &str = "reveal";
}

/// Height of the bubble with only its text showing
pub const COLLAPSED_HEIGHT: f32 = 137.0;
/// Extra height the revealed image takes, the same on every device
pub const REVEAL_HEIGHT: f32 = 312.0;

const ENTER_DURATION_MS: u32 = 1000;
const TOGGLE_DURATION_MS: u32 = 500;
const HIDE_DELAY_MS: f32 = 450.0;
/// Not quite zero so the image stays decoded
const HIDDEN_OPACITY: f32 = 0.01;

/// Catalog index of the image the first pill reveals
const REVEAL_INDEX: usize = 0;

pub struct ExpandShell<A: Animator> {
    catalog: Arc<Catalog>,
    device: DeviceClass,
    style: VariantStyle,
    animator: A,
    expanded: bool,
    reveal_opacity: f32,
    /// Time left before the revealed image is hidden
    hide_in_ms: Option<f32>,
}

impl<A: Animator> ExpandShell<A> {
    /// Mount collapsed and fade the bubble in
    pub fn new(config: &BubbleConfig, catalog: Arc<Catalog>, mut animator: A) -> Self {
        animator.set_immediate(
            channels::BUBBLE,
            &PropertySet::new()
                .height(COLLAPSED_HEIGHT)
                .opacity(0.2)
                .blur(4.0),
        );
        animator.apply_transition(
            channels::BUBBLE,
            &PropertySet::new().opacity(1.0).blur(0.0),
            TransitionProfile::tween(ENTER_DURATION_MS),
        );
        animator.set_immediate(channels::REVEAL, &PropertySet::new().opacity(HIDDEN_OPACITY));

        tracing::info!("Mounted expand bubble at width {}", catalog.display_width());

        Self {
            catalog,
            device: config.device,
            style: VariantStyle::for_config(config),
            animator,
            expanded: false,
            reveal_opacity: HIDDEN_OPACITY,
            hide_in_ms: None,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn reveal_opacity(&self) -> f32 {
        self.reveal_opacity
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Bubble height the current toggle state is heading to
    pub fn target_height(&self) -> f32 {
        if self.expanded {
            COLLAPSED_HEIGHT + REVEAL_HEIGHT
        } else {
            COLLAPSED_HEIGHT
        }
    }

    /// Pill click; only the reveal pill does anything
    pub fn on_pill(&mut self, index: usize) {
        if index == REVEAL_INDEX {
            self.toggle();
        }
    }

    /// Expand or collapse
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;

        self.animator.apply_transition(
            channels::BUBBLE,
            &PropertySet::new().height(self.target_height()),
            TransitionProfile::tween(TOGGLE_DURATION_MS),
        );

        if self.expanded {
            // A collapse that has not hidden the image yet is abandoned
            self.hide_in_ms = None;
            self.set_reveal_opacity(1.0);
        } else {
            self.hide_in_ms = Some(HIDE_DELAY_MS);
        }

        tracing::debug!(
            "Expand bubble {} to height {}",
            if self.expanded { "opening" } else { "closing" },
            self.target_height()
        );
    }

    /// Advance the delayed hide by `ms` milliseconds
    pub fn advance(&mut self, ms: f32) {
        let Some(remaining) = self.hide_in_ms else {
            return;
        };

        let remaining = remaining - ms;
        if remaining > 0.0 {
            self.hide_in_ms = Some(remaining);
        } else {
            self.hide_in_ms = None;
            self.set_reveal_opacity(HIDDEN_OPACITY);
        }
    }

    fn set_reveal_opacity(&mut self, opacity: f32) {
        self.reveal_opacity = opacity;
        self.animator
            .set_immediate(channels::REVEAL, &PropertySet::new().opacity(opacity));
    }

    pub fn frame(&self) -> ExpandFrame {
        ExpandFrame {
            width: self.catalog.display_width(),
            height: self.target_height(),
            expanded: self.expanded,
            reveal_opacity: self.reveal_opacity,
            text: text_blocks(
                Variant::Expand,
                &self.catalog,
                self.device,
                &self.style,
                self.expanded.then_some(REVEAL_INDEX),
            ),
        }
    }
}
