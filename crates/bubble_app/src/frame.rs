//! Frame snapshots
//!
//! A frame is what the shell wants on screen after the last event: layout
//! targets, not animated values. The host renderer reads it and lets the
//! animator carry the actual properties there.

use bubble_core::DragConstraints;
use serde::Serialize;
use smallvec::SmallVec;

use crate::config::Variant;

/// RGBA color, components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// Active pill label blue (#3076ff)
    pub const ACCENT: Color = Color::rgba(48.0 / 255.0, 118.0 / 255.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn white(alpha: f32) -> Self {
        Self::rgba(1.0, 1.0, 1.0, alpha)
    }
}

/// Outer card placement
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CardView {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    /// Visible media height, including any text padding of the variant
    pub height: f32,
    /// Live card drag translation
    pub translate: (f32, f32),
    pub scale: f32,
}

/// The horizontal strip holding every item side by side
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StripView {
    pub translate_x: f32,
    pub width: f32,
    pub constraints: DragConstraints,
    pub elastic: f32,
}

/// An item rendered in the strip
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemView {
    pub index: usize,
    /// Left edge within the strip
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
    pub zoomable: bool,
    pub zoomed: bool,
}

/// A selector pill
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PillView {
    pub index: usize,
    pub label: String,
    pub thumbnail: String,
    pub thumbnail_height: f32,
    pub active: bool,
    pub background: Color,
    pub label_color: Color,
}

/// Bubble text in reading order
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextBlock {
    Paragraph { text: String },
    Pill(PillView),
}

/// Snapshot of a swipe carousel widget
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselFrame {
    pub variant: Variant,
    pub current_index: usize,
    pub dragging: bool,
    pub card: CardView,
    pub strip: StripView,
    /// Current item and its immediate neighbors
    pub items: SmallVec<[ItemView; 3]>,
    pub text: Vec<TextBlock>,
    pub font_size: f32,
    pub debug: Option<String>,
}

/// Snapshot of the expand bubble
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpandFrame {
    pub width: f32,
    pub height: f32,
    pub expanded: bool,
    /// Opacity of the revealed image
    pub reveal_opacity: f32,
    pub text: Vec<TextBlock>,
}

/// Whatever the mounted widget renders
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Frame {
    Carousel(CarouselFrame),
    Expand(ExpandFrame),
}
