//! Carousel presentation shell
//!
//! Wires pointer and pill events into the [`CarouselState`] machine and turns
//! its outputs into animator instructions and frames. The shell owns no
//! gesture logic of its own; it only decides *how* each state change is shown:
//!
//! - while dragging, heights and the strip follow the pointer immediately
//! - on release or pill selection, everything springs to the committed item
//!
//! Used by both the bubble and the plain carousel variants, which differ only
//! in their [`VariantStyle`].

use std::sync::Arc;

use bubble_animation::{Animator, PropertySet, SpringConfig, TransitionProfile};
use bubble_core::{
    Catalog, CarouselState, DeviceClass, DragConstraints, DragOutcome, DragSample, ZoomState,
};
use smallvec::SmallVec;

use crate::catalogs::{self, Block};
use crate::config::{BubbleConfig, Variant, Viewport};
use crate::frame::{CardView, CarouselFrame, Color, ItemView, PillView, StripView, TextBlock};
use crate::zoom_overlay::ZoomOverlay;

/// Animator channel names
pub mod channels {
    /// The item strip (translate_x)
    pub const STRIP: &str = "strip";
    /// The rounded image container (height)
    pub const CONTAINER: &str = "container";
    /// The outer mask, container plus text padding (height)
    pub const MASK: &str = "mask";
    /// The whole card when dragged around (translate, scale)
    pub const CARD: &str = "card";
}

/// Overshoot allowed past the strip's drag constraints
const STRIP_ELASTIC: f32 = 0.1;

const CARD_DRAG_SCALE: f32 = 1.05;

/// Per-variant presentation settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantStyle {
    /// Extra mask height for the title strip above the media
    pub text_padding: f32,
    pub zoom_enabled: bool,
    pub card_draggable: bool,
    pub card_elastic: f32,
    /// Fixed distance from the top of the viewport; centered when `None`
    pub fixed_top: Option<f32>,
    pub debug_overlay: bool,
    pub pill_active: Color,
    pub pill_inactive: Color,
    pub label_active: Color,
    pub label_inactive: Color,
}

impl VariantStyle {
    pub fn for_config(config: &BubbleConfig) -> Self {
        match config.variant {
            Variant::Carousel => Self {
                text_padding: 38.0,
                zoom_enabled: false,
                card_draggable: true,
                card_elastic: 0.5,
                fixed_top: Some(200.0),
                debug_overlay: config.debug,
                pill_active: Color::white(0.2),
                pill_inactive: Color::white(0.1),
                label_active: Color::WHITE,
                label_inactive: Color::WHITE,
            },
            Variant::Bubble | Variant::Expand => Self {
                text_padding: 0.0,
                zoom_enabled: true,
                card_draggable: !config.device.is_mobile(),
                card_elastic: 1.0,
                fixed_top: None,
                debug_overlay: false,
                pill_active: Color::WHITE,
                pill_inactive: Color::white(0.18),
                label_active: Color::ACCENT,
                label_inactive: Color::WHITE,
            },
        }
    }
}

/// State-machine outputs last pushed to the animator
#[derive(Clone, Copy, Debug, PartialEq)]
struct Synced {
    index: usize,
    height: f32,
    trigger: u64,
    dragging: bool,
}

/// Presentation shell for the swipe carousel
pub struct CarouselShell<A: Animator, Z: ZoomOverlay> {
    variant: Variant,
    device: DeviceClass,
    viewport: Viewport,
    style: VariantStyle,
    spring: SpringConfig,
    state: CarouselState,
    zoom: ZoomState,
    animator: A,
    overlay: Z,
    last_sample: DragSample,
    card_offset: (f32, f32),
    card_dragging: bool,
    text_height: f32,
    /// Strip position last pushed to the animator
    strip_x: f32,
    synced: Synced,
}

impl<A: Animator, Z: ZoomOverlay> CarouselShell<A, Z> {
    /// Mount on the first item and place every channel without animating
    pub fn new(config: &BubbleConfig, catalog: Arc<Catalog>, mut animator: A, overlay: Z) -> Self {
        let style = VariantStyle::for_config(config);
        let state = CarouselState::with_thresholds(catalog, config.thresholds());

        let height = state.current_height();
        let strip_x = state.catalog().offset(0);
        animator.set_immediate(channels::STRIP, &PropertySet::new().translate_x(strip_x));
        animator.set_immediate(channels::CONTAINER, &PropertySet::new().height(height));
        animator.set_immediate(
            channels::MASK,
            &PropertySet::new().height(height + style.text_padding),
        );
        animator.set_immediate(
            channels::CARD,
            &PropertySet::new().translate_x(0.0).translate_y(0.0).scale(1.0),
        );

        let synced = Synced {
            index: state.current_index(),
            height,
            trigger: state.selection_trigger(),
            dragging: false,
        };

        tracing::info!(
            "Mounted {:?} carousel: {} items at width {}",
            config.variant,
            state.catalog().len(),
            state.catalog().display_width()
        );

        Self {
            variant: config.variant,
            device: config.device,
            viewport: config.viewport,
            style,
            spring: config.spring,
            state,
            zoom: ZoomState::new(),
            animator,
            overlay,
            last_sample: DragSample::default(),
            card_offset: (0.0, 0.0),
            card_dragging: false,
            text_height: 0.0,
            strip_x,
            synced,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn style(&self) -> &VariantStyle {
        &self.style
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn overlay(&self) -> &Z {
        &self.overlay
    }

    /// Last drag report, shown by the debug overlay
    pub fn last_sample(&self) -> DragSample {
        self.last_sample
    }

    /// Measured height of the text block above the media
    pub fn set_text_height(&mut self, height: f32) {
        self.text_height = height.max(0.0);
    }

    /// Strip drag in progress
    pub fn on_drag(&mut self, sample: DragSample) {
        self.state.on_drag_update(sample.offset_x);
        self.last_sample = sample;

        // Tap and swipe share a pointer-down: an open zoom never survives a swipe
        if self.zoom.close() {
            tracing::debug!("Drag started; closing zoom overlay");
            self.overlay.dismiss();
        }

        self.strip_x = self.live_strip_x();
        self.animator
            .set_immediate(channels::STRIP, &PropertySet::new().translate_x(self.strip_x));
        self.sync();
    }

    /// Strip released
    pub fn on_release(&mut self, sample: DragSample) -> DragOutcome {
        let outcome = self.state.on_drag_end(sample.offset_x, sample.velocity_x);
        self.last_sample = sample;
        self.sync();
        outcome
    }

    /// Pill click
    pub fn select(&mut self, index: usize) {
        self.state.select_index(index);
        self.sync();
    }

    /// Zoom change request coming from item `index`'s overlay wrapper
    pub fn request_zoom(&mut self, index: usize, open: bool) {
        if !self.style.zoom_enabled {
            return;
        }
        let Some(item) = self.state.catalog().get(index) else {
            return;
        };
        if !item.kind.is_image() {
            tracing::debug!("Item {} is not an image; ignoring zoom request", index);
            return;
        }

        if self.zoom.request(index, open, self.state.is_dragging()) {
            match self.zoom.zoomed() {
                Some(zoomed) => {
                    let url = self.state.catalog().get(zoomed).map(|i| i.kind.image_url());
                    self.overlay.present(zoomed, url.unwrap_or_default());
                }
                None => self.overlay.dismiss(),
            }
        }
    }

    /// The whole card is being dragged around
    pub fn on_card_drag(&mut self, sample: DragSample) {
        if !self.style.card_draggable {
            return;
        }

        if !self.card_dragging {
            self.card_dragging = true;
            self.animator.apply_transition(
                channels::CARD,
                &PropertySet::new().scale(CARD_DRAG_SCALE),
                TransitionProfile::Spring(self.spring),
            );
        }

        self.card_offset = DragConstraints::pinned().constrain(
            sample.offset_x,
            sample.offset_y,
            self.style.card_elastic,
        );
        self.animator.set_immediate(
            channels::CARD,
            &PropertySet::new()
                .translate_x(self.card_offset.0)
                .translate_y(self.card_offset.1),
        );
    }

    /// Card let go: bounce back to its resting place
    pub fn on_card_release(&mut self) {
        if !self.card_dragging {
            return;
        }
        self.card_dragging = false;
        self.card_offset = (0.0, 0.0);
        self.animator.apply_transition(
            channels::CARD,
            &PropertySet::new().translate_x(0.0).translate_y(0.0).scale(1.0),
            TransitionProfile::Spring(SpringConfig::bounce()),
        );
    }

    /// Strip position while the pointer is down
    fn live_strip_x(&self) -> f32 {
        let base = self.state.catalog().offset(self.state.current_index());
        let (x, _) =
            self.state
                .drag_constraints()
                .constrain(base + self.last_sample.offset_x, 0.0, STRIP_ELASTIC);
        x
    }

    /// Push state-machine outputs to the animator if they changed
    ///
    /// Heights follow a live drag immediately. Anything else, including a pill
    /// selection that lands mid-drag, springs all three channels to the item.
    fn sync(&mut self) {
        let now = Synced {
            index: self.state.current_index(),
            height: self.state.current_height(),
            trigger: self.state.selection_trigger(),
            dragging: self.state.is_dragging(),
        };
        if now == self.synced {
            return;
        }
        let selected = now.trigger != self.synced.trigger;
        self.synced = now;

        let container = PropertySet::new().height(now.height);
        let mask = PropertySet::new().height(now.height + self.style.text_padding);

        if now.dragging && !selected {
            self.animator.set_immediate(channels::CONTAINER, &container);
            self.animator.set_immediate(channels::MASK, &mask);
            return;
        }

        let profile = TransitionProfile::Spring(self.spring);
        self.strip_x = self.state.catalog().offset(now.index);
        let strip = PropertySet::new().translate_x(self.strip_x);
        self.animator
            .apply_transition(channels::STRIP, &strip, profile);
        self.animator
            .apply_transition(channels::CONTAINER, &container, profile);
        self.animator.apply_transition(channels::MASK, &mask, profile);

        tracing::debug!(
            "Settling on item {} at height {:.1}",
            now.index,
            now.height
        );
    }

    /// Current layout snapshot
    pub fn frame(&self) -> CarouselFrame {
        let catalog = self.state.catalog();
        let width = catalog.display_width();
        let index = self.state.current_index();
        let dragging = self.state.is_dragging();

        let top = self.style.fixed_top.unwrap_or_else(|| {
            (self.viewport.height - catalog.max_height() - self.text_height) / 2.0
        });

        let first = index.saturating_sub(1);
        let last = (index + 1).min(catalog.last_index());
        let items: SmallVec<[ItemView; 3]> = (first..=last)
            .filter_map(|i| {
                let item = catalog.get(i)?;
                Some(ItemView {
                    index: i,
                    x: -item.offset,
                    width,
                    height: item.height,
                    label: item.kind.label().to_string(),
                    zoomable: self.style.zoom_enabled && item.kind.is_image() && !dragging,
                    zoomed: self.zoom.is_zoomed(i),
                })
            })
            .collect();

        let debug = self.style.debug_overlay.then(|| {
            format!(
                "velocityX: {:.0}, offsetX: {:.0}, image: {}",
                self.last_sample.velocity_x,
                self.last_sample.offset_x,
                index + 1
            )
        });

        CarouselFrame {
            variant: self.variant,
            current_index: index,
            dragging,
            card: CardView {
                left: (self.viewport.width - width) / 2.0,
                top,
                width,
                height: self.state.current_height() + self.style.text_padding,
                translate: self.card_offset,
                scale: if self.card_dragging {
                    CARD_DRAG_SCALE
                } else {
                    1.0
                },
            },
            strip: StripView {
                translate_x: self.strip_x,
                width: catalog.strip_width(),
                constraints: self.state.drag_constraints(),
                elastic: STRIP_ELASTIC,
            },
            items,
            text: text_blocks(
                self.variant,
                catalog,
                self.device,
                &self.style,
                Some(index),
            ),
            font_size: self.device.font_size(),
            debug,
        }
    }
}

/// Pill for catalog item `index`
pub(crate) fn pill_view(
    catalog: &Catalog,
    index: usize,
    active: bool,
    device: DeviceClass,
    style: &VariantStyle,
) -> Option<PillView> {
    let item = catalog.get(index)?;
    Some(PillView {
        index,
        label: item.kind.label().to_string(),
        thumbnail: item.kind.image_url().to_string(),
        thumbnail_height: device.thumbnail_height(),
        active,
        background: if active {
            style.pill_active
        } else {
            style.pill_inactive
        },
        label_color: if active {
            style.label_active
        } else {
            style.label_inactive
        },
    })
}

/// Bubble text for a variant with the pill of `active` highlighted
pub(crate) fn text_blocks(
    variant: Variant,
    catalog: &Catalog,
    device: DeviceClass,
    style: &VariantStyle,
    active: Option<usize>,
) -> Vec<TextBlock> {
    let pill = |index: usize| pill_view(catalog, index, active == Some(index), device, style);

    let mut text: Vec<TextBlock> = catalogs::text_for(variant)
        .iter()
        .filter_map(|block| match *block {
            Block::Paragraph(text) => Some(TextBlock::Paragraph {
                text: text.to_string(),
            }),
            Block::Pill(index) => pill(index).map(TextBlock::Pill),
        })
        .collect();

    // The plain carousel lists every item in a pill row under its title
    if variant == Variant::Carousel {
        text.extend((0..catalog.len()).filter_map(|i| pill(i).map(TextBlock::Pill)));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_animation::{HeadlessAnimator, Property};

    use crate::zoom_overlay::{HeadlessZoomOverlay, OverlayEvent};

    type Shell = CarouselShell<HeadlessAnimator, HeadlessZoomOverlay>;

    fn shell(config: BubbleConfig) -> Shell {
        let catalog = catalogs::catalog_for(config.variant, config.display_width()).unwrap();
        CarouselShell::new(
            &config,
            Arc::new(catalog),
            HeadlessAnimator::new(),
            HeadlessZoomOverlay::new(),
        )
    }

    fn bubble() -> Shell {
        shell(BubbleConfig::default())
    }

    fn carousel(debug: bool) -> Shell {
        shell(BubbleConfig {
            variant: Variant::Carousel,
            debug,
            ..Default::default()
        })
    }

    #[test]
    fn test_mount_places_channels_without_animating() {
        let shell = bubble();
        let animator = shell.animator();
        assert!(animator.issued().is_empty());
        assert!(animator.is_settled());
        assert_eq!(animator.value(channels::STRIP, Property::TranslateX), Some(0.0));
        assert_eq!(
            animator.value(channels::CONTAINER, Property::Height),
            Some(shell.state().catalog().height(0))
        );
    }

    #[test]
    fn test_drag_follows_pointer_immediately() {
        let mut shell = bubble();
        shell.on_drag(DragSample::horizontal(-100.0, -20.0));

        let animator = shell.animator();
        assert!(animator.issued().is_empty());
        assert_eq!(animator.value(channels::STRIP, Property::TranslateX), Some(-100.0));
        assert_eq!(
            animator.value(channels::CONTAINER, Property::Height),
            Some(shell.state().current_height())
        );
    }

    #[test]
    fn test_strip_overshoot_is_elastic() {
        let mut shell = bubble();
        // Dragging right on the first item: right bound is 0
        shell.on_drag(DragSample::horizontal(50.0, 0.0));
        let x = shell
            .animator()
            .value(channels::STRIP, Property::TranslateX)
            .unwrap();
        assert!((x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_release_springs_to_committed_item() {
        let mut shell = bubble();
        shell.on_drag(DragSample::horizontal(-250.0, -10.0));
        let outcome = shell.on_release(DragSample::horizontal(-250.0, -10.0));
        assert_eq!(outcome, DragOutcome::Advance);

        let issued = shell.animator_mut().take_issued();
        let channels_hit: Vec<_> = issued.iter().map(|t| t.channel.as_str()).collect();
        assert_eq!(
            channels_hit,
            vec![channels::STRIP, channels::CONTAINER, channels::MASK]
        );
        assert_eq!(issued[0].targets.translate_x, Some(-375.0));
        assert_eq!(
            issued[1].targets.height,
            Some(shell.state().catalog().height(1))
        );
        assert!(matches!(issued[0].profile, TransitionProfile::Spring(_)));

        shell.animator_mut().settle(3.0);
        assert_eq!(
            shell.animator().value(channels::STRIP, Property::TranslateX),
            Some(-375.0)
        );
    }

    #[test]
    fn test_snap_back_still_animates_home() {
        let mut shell = bubble();
        shell.on_drag(DragSample::horizontal(-60.0, 0.0));
        assert_eq!(
            shell.on_release(DragSample::horizontal(-60.0, 5.0)),
            DragOutcome::SnapBack
        );
        let issued = shell.animator().issued();
        assert_eq!(issued.len(), 3);
        assert_eq!(issued[0].targets.translate_x, Some(0.0));
    }

    #[test]
    fn test_pill_reselect_resyncs() {
        let mut shell = bubble();
        shell.select(2);
        assert_eq!(shell.animator().issued().len(), 3);

        // Same pill again: index unchanged but the trigger forces a re-sync
        shell.select(2);
        assert_eq!(shell.animator().issued().len(), 6);
        assert_eq!(shell.state().selection_trigger(), 2);
    }

    #[test]
    fn test_pill_during_drag_moves_strip() {
        let mut shell = bubble();
        shell.on_drag(DragSample::horizontal(-50.0, 0.0));
        shell.select(3);

        let issued = shell.animator().issued();
        let strip = issued.iter().find(|t| t.channel == channels::STRIP).unwrap();
        assert_eq!(strip.targets.translate_x, Some(-1125.0));
        assert!(issued.iter().any(|t| t.channel == channels::CONTAINER));
        assert!(issued.iter().any(|t| t.channel == channels::MASK));

        shell.animator_mut().settle(3.0);
        assert_eq!(
            shell.animator().value(channels::STRIP, Property::TranslateX),
            Some(-1125.0)
        );
        assert_eq!(shell.frame().strip.translate_x, -1125.0);
        assert_eq!(
            shell.animator().value(channels::CONTAINER, Property::Height),
            Some(shell.state().catalog().height(3))
        );
    }

    #[test]
    fn test_mask_includes_text_padding() {
        let mut shell = carousel(false);
        shell.select(1);
        let issued = shell.animator().issued();
        let mask = issued.iter().find(|t| t.channel == channels::MASK).unwrap();
        assert_eq!(
            mask.targets.height,
            Some(shell.state().catalog().height(1) + 38.0)
        );
        assert_eq!(shell.frame().card.height, shell.state().current_height() + 38.0);
    }

    #[test]
    fn test_zoom_open_and_close() {
        let mut shell = bubble();
        shell.request_zoom(1, true);
        assert_eq!(shell.zoom().zoomed(), Some(1));
        assert_eq!(shell.overlay().showing(), Some(1));

        shell.request_zoom(1, false);
        assert_eq!(shell.overlay().showing(), None);
        assert_eq!(
            shell.overlay().events(),
            &[
                OverlayEvent::Presented {
                    index: 1,
                    image_url: "showa_town_sauna.png".to_string()
                },
                OverlayEvent::Dismissed
            ]
        );
    }

    #[test]
    fn test_zoom_while_dragging_forces_closed() {
        let mut shell = bubble();
        shell.request_zoom(0, true);
        shell.on_drag(DragSample::horizontal(-30.0, 0.0));

        shell.request_zoom(0, true);
        assert_eq!(shell.zoom().zoomed(), None);
        assert_eq!(shell.overlay().showing(), None);
        assert!(shell.frame().items.iter().all(|item| !item.zoomable));
    }

    #[test]
    fn test_drag_closes_open_zoom() {
        let mut shell = bubble();
        shell.request_zoom(1, true);
        assert!(shell.frame().items.iter().any(|item| item.zoomed));

        shell.on_drag(DragSample::horizontal(-20.0, 0.0));
        assert_eq!(shell.zoom().zoomed(), None);
        assert_eq!(shell.overlay().showing(), None);
        assert_eq!(shell.overlay().events().last(), Some(&OverlayEvent::Dismissed));
        assert!(shell.frame().items.iter().all(|item| !item.zoomed));

        // Further drag updates do not dismiss again
        shell.on_drag(DragSample::horizontal(-40.0, 0.0));
        assert_eq!(shell.overlay().events().len(), 2);
    }

    #[test]
    fn test_link_preview_is_not_zoomable() {
        let mut shell = bubble();
        let last = shell.state().catalog().last_index();
        shell.select(last);
        shell.request_zoom(last, true);
        assert_eq!(shell.zoom().zoomed(), None);

        let frame = shell.frame();
        let preview = frame.items.iter().find(|i| i.index == last).unwrap();
        assert!(!preview.zoomable);
    }

    #[test]
    fn test_carousel_variant_has_no_zoom() {
        let mut shell = carousel(false);
        shell.request_zoom(0, true);
        assert_eq!(shell.zoom().zoomed(), None);
        assert!(shell.overlay().events().is_empty());
    }

    #[test]
    fn test_frame_shows_neighbors_only() {
        let mut shell = bubble();
        assert_eq!(
            shell.frame().items.iter().map(|i| i.index).collect::<Vec<_>>(),
            vec![0, 1]
        );

        shell.select(3);
        let frame = shell.frame();
        assert_eq!(
            frame.items.iter().map(|i| i.index).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
        assert_eq!(frame.items[1].x, 3.0 * 375.0);
        assert_eq!(frame.strip.translate_x, -3.0 * 375.0);
    }

    #[test]
    fn test_pills_highlight_current_item() {
        let mut shell = bubble();
        shell.select(1);
        let pills: Vec<_> = shell
            .frame()
            .text
            .into_iter()
            .filter_map(|block| match block {
                TextBlock::Pill(pill) => Some(pill),
                TextBlock::Paragraph { .. } => None,
            })
            .collect();

        assert_eq!(pills.len(), 6);
        for pill in &pills {
            assert_eq!(pill.active, pill.index == 1);
        }
        assert_eq!(pills[1].background, Color::WHITE);
        assert_eq!(pills[1].label_color, Color::ACCENT);
        assert_eq!(pills[0].background, Color::white(0.18));
    }

    #[test]
    fn test_debug_overlay() {
        let mut shell = carousel(true);
        shell.on_drag(DragSample::horizontal(-120.4, -33.3));
        assert_eq!(
            shell.frame().debug.as_deref(),
            Some("velocityX: -33, offsetX: -120, image: 1")
        );
        assert_eq!(carousel(false).frame().debug, None);
    }

    #[test]
    fn test_card_drag_and_bounce_back() {
        let mut shell = bubble();
        shell.on_card_drag(DragSample {
            offset_x: 40.0,
            offset_y: -20.0,
            ..Default::default()
        });
        let frame = shell.frame();
        assert_eq!(frame.card.translate, (40.0, -20.0));
        assert_eq!(frame.card.scale, CARD_DRAG_SCALE);

        shell.on_card_release();
        let last = shell.animator().issued().last().cloned().unwrap();
        assert_eq!(last.channel, channels::CARD);
        assert_eq!(last.profile, TransitionProfile::Spring(SpringConfig::bounce()));
        assert_eq!(shell.frame().card.translate, (0.0, 0.0));

        shell.animator_mut().settle(5.0);
        assert_eq!(
            shell.animator().value(channels::CARD, Property::TranslateX),
            Some(0.0)
        );
    }

    #[test]
    fn test_card_not_draggable_on_mobile() {
        let mut shell = shell(BubbleConfig {
            device: DeviceClass::Mobile,
            ..Default::default()
        });
        shell.on_card_drag(DragSample::horizontal(40.0, 0.0));
        assert_eq!(shell.frame().card.translate, (0.0, 0.0));
        assert!(shell.animator().issued().is_empty());
    }

    #[test]
    fn test_bubble_is_centered() {
        let mut shell = bubble();
        shell.set_text_height(200.0);
        let frame = shell.frame();
        let max = shell.state().catalog().max_height();
        assert_eq!(frame.card.left, (1280.0 - 375.0) / 2.0);
        assert_eq!(frame.card.top, (800.0 - max - 200.0) / 2.0);
        assert_eq!(carousel(false).frame().card.top, 200.0);
    }
}
