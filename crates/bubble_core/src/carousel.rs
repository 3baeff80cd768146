//! Swipe carousel state machine
//!
//! Owns the committed index, the live container height and the dragging
//! flag. The pointer layer drives it with three entry points:
//!
//! ```text
//!            on_drag_update(dx)            on_drag_end(dx, vx)
//!   Idle ─────────────────────────▶ Dragging ─────────────────────▶ Idle
//!    │  ▲                              │  ▲ (height interpolates       (index committed,
//!    │  │ select_index(k)              └──┘  between neighbors)         height snapped)
//!    └──┘ (jump, bumps selection_trigger)
//! ```
//!
//! Every drag resolves to exactly one [`DragOutcome`]. None of the operations
//! fail: out-of-range input is clamped or ignored.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::gesture::DragConstraints;

/// Swipe direction derived from the sign of the drag offset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Content moves left; the next item slides in
    ToLeft,
    /// Content moves right; the previous item slides in
    ToRight,
}

impl Swipe {
    /// Negative offsets swipe towards the next item
    pub fn from_offset(offset_x: f32) -> Self {
        if offset_x < 0.0 {
            Swipe::ToLeft
        } else {
            Swipe::ToRight
        }
    }
}

/// How a finished drag was resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Committed to the next item
    Advance,
    /// Committed to the previous item
    Retreat,
    /// Returned to the item the drag started on
    SnapBack,
}

/// Commit thresholds for a released drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Release velocity (px/s) that commits regardless of distance
    pub velocity: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { velocity: 40.0 }
    }
}

/// Height of the container while dragging from an item of height `from`
/// towards a neighbor of height `to`
///
/// The height moves linearly with `|offset_x| / width` and is clamped to the
/// two endpoints, so elastic overshoot in the raw drag never leaks outside
/// `[min(from, to), max(from, to)]`.
pub fn interpolate_height(from: f32, to: f32, offset_x: f32, width: f32) -> f32 {
    let delta = (offset_x * ((from - to).abs() / width)).abs();
    let height = if from > to { from - delta } else { from + delta };
    height.max(from.min(to)).min(from.max(to))
}

/// Gesture/index state for one mounted widget
#[derive(Clone, Debug)]
pub struct CarouselState {
    catalog: Arc<Catalog>,
    thresholds: Thresholds,
    current_index: usize,
    current_height: f32,
    is_dragging: bool,
    selection_trigger: u64,
}

impl CarouselState {
    /// Mount on the first item
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_thresholds(catalog, Thresholds::default())
    }

    pub fn with_thresholds(catalog: Arc<Catalog>, thresholds: Thresholds) -> Self {
        let current_height = catalog.height(0);
        Self {
            catalog,
            thresholds,
            current_index: 0,
            current_height,
            is_dragging: false,
            selection_trigger: 0,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Counter bumped by every external selection, even a repeated one
    pub fn selection_trigger(&self) -> u64 {
        self.selection_trigger
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Neighbor the drag is heading to, if there is one
    fn neighbor(&self, swipe: Swipe) -> Option<usize> {
        match swipe {
            Swipe::ToLeft => {
                let next = self.current_index + 1;
                (next < self.catalog.len()).then_some(next)
            }
            Swipe::ToRight => self.current_index.checked_sub(1),
        }
    }

    /// Live drag report; recomputes the height from the latest offset
    pub fn on_drag_update(&mut self, offset_x: f32) {
        self.is_dragging = true;

        let Some(neighbor) = self.neighbor(Swipe::from_offset(offset_x)) else {
            return;
        };

        self.current_height = interpolate_height(
            self.catalog.height(self.current_index),
            self.catalog.height(neighbor),
            offset_x,
            self.catalog.display_width(),
        );
    }

    /// Pointer released: commit to one item and snap the height to it
    pub fn on_drag_end(&mut self, offset_x: f32, velocity_x: f32) -> DragOutcome {
        let half_width = self.catalog.display_width() / 2.0;
        let velocity = self.thresholds.velocity;
        let from = self.current_index;

        let new_index = if offset_x < -half_width || velocity_x < -velocity {
            (from + 1).min(self.catalog.last_index())
        } else if offset_x > half_width || velocity_x > velocity {
            from.saturating_sub(1)
        } else {
            from
        };

        let outcome = match new_index.cmp(&from) {
            std::cmp::Ordering::Greater => DragOutcome::Advance,
            std::cmp::Ordering::Less => DragOutcome::Retreat,
            std::cmp::Ordering::Equal => DragOutcome::SnapBack,
        };

        tracing::debug!(
            "Drag released at offset {:.1}, velocity {:.1}: {:?} {} -> {}",
            offset_x,
            velocity_x,
            outcome,
            from,
            new_index
        );

        self.current_index = new_index;
        self.current_height = self.catalog.height(new_index);
        self.is_dragging = false;
        outcome
    }

    /// Jump straight to an item (pill click). Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) {
        if index >= self.catalog.len() {
            tracing::debug!(
                "Ignoring selection of item {} in a catalog of {}",
                index,
                self.catalog.len()
            );
            return;
        }

        self.current_index = index;
        self.current_height = self.catalog.height(index);
        self.selection_trigger += 1;
    }

    /// Bounds for the strip's raw translation during the next drag
    ///
    /// Derived from the committed index, so one gesture can move at most one
    /// item in either direction.
    pub fn drag_constraints(&self) -> DragConstraints {
        let width = self.catalog.display_width();
        let last = self.catalog.last_index();
        let left = -(((self.current_index + 1).min(last)) as f32 * width);
        let right = -((self.current_index.saturating_sub(1)) as f32 * width);
        DragConstraints::horizontal(left, right)
    }
}
