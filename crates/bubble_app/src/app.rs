//! Mounted widget
//!
//! [`BubbleApp`] is what a host holds on to: it builds the catalog for the
//! configured variant, preloads every image, then routes [`InputEvent`]s to the
//! right shell. Nothing is rendered until the preload has settled, so the first
//! frame never shows an item without its image.

use std::sync::Arc;

use bubble_animation::{Animator, HeadlessAnimator};
use bubble_core::Catalog;
use bubble_image::{preload_all, ImageSource, PreloadReport};

use crate::catalogs;
use crate::config::{BubbleConfig, Variant};
use crate::error::Result;
use crate::events::InputEvent;
use crate::expand::ExpandShell;
use crate::frame::Frame;
use crate::shell::CarouselShell;
use crate::zoom_overlay::{HeadlessZoomOverlay, ZoomOverlay};

/// The shell behind a mounted widget
pub enum Widget<A: Animator, Z: ZoomOverlay> {
    Carousel(CarouselShell<A, Z>),
    Expand(ExpandShell<A>),
}

pub struct BubbleApp<A: Animator = HeadlessAnimator, Z: ZoomOverlay = HeadlessZoomOverlay> {
    config: BubbleConfig,
    catalog: Arc<Catalog>,
    preload: PreloadReport,
    widget: Widget<A, Z>,
}

impl BubbleApp {
    /// Mount with the headless animator and overlay
    pub async fn mount_headless(config: BubbleConfig) -> Result<Self> {
        Self::mount(config, HeadlessAnimator::new(), HeadlessZoomOverlay::new()).await
    }
}

impl<A: Animator, Z: ZoomOverlay> BubbleApp<A, Z> {
    /// Build the catalog, preload its images and mount the widget
    ///
    /// Images that fail to load are logged and listed in
    /// [`preload_report`](Self::preload_report); they never stop the mount.
    pub async fn mount(config: BubbleConfig, animator: A, overlay: Z) -> Result<Self> {
        let catalog = Arc::new(catalogs::catalog_for(
            config.variant,
            config.display_width(),
        )?);

        let sources = catalog
            .iter()
            .map(|item| {
                let url = item.kind.image_url();
                (
                    url.to_string(),
                    ImageSource::resolve(&config.assets_dir, url),
                )
            })
            .collect();

        tracing::debug!(
            "Preloading {} images from {}",
            catalog.len(),
            config.assets_dir.display()
        );
        let preload = preload_all(sources).await;

        Ok(Self::mount_preloaded(config, catalog, preload, animator, overlay))
    }

    /// Mount around a catalog whose images are already loaded
    pub fn mount_preloaded(
        config: BubbleConfig,
        catalog: Arc<Catalog>,
        preload: PreloadReport,
        animator: A,
        overlay: Z,
    ) -> Self {
        let widget = match config.variant {
            Variant::Bubble | Variant::Carousel => Widget::Carousel(CarouselShell::new(
                &config,
                catalog.clone(),
                animator,
                overlay,
            )),
            Variant::Expand => Widget::Expand(ExpandShell::new(&config, catalog.clone(), animator)),
        };

        Self {
            config,
            catalog,
            preload,
            widget,
        }
    }

    pub fn config(&self) -> &BubbleConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn preload_report(&self) -> &PreloadReport {
        &self.preload
    }

    pub fn widget(&self) -> &Widget<A, Z> {
        &self.widget
    }

    pub fn animator(&self) -> &A {
        match &self.widget {
            Widget::Carousel(shell) => shell.animator(),
            Widget::Expand(shell) => shell.animator(),
        }
    }

    pub fn animator_mut(&mut self) -> &mut A {
        match &mut self.widget {
            Widget::Carousel(shell) => shell.animator_mut(),
            Widget::Expand(shell) => shell.animator_mut(),
        }
    }

    /// Route one input event to the mounted shell
    pub fn dispatch(&mut self, event: InputEvent) {
        tracing::trace!("Dispatching {:?}", event);

        match &mut self.widget {
            Widget::Carousel(shell) => match event {
                InputEvent::Drag(sample) => shell.on_drag(sample),
                InputEvent::Release(sample) => {
                    shell.on_release(sample);
                }
                InputEvent::Pill { index } => shell.select(index),
                InputEvent::Zoom { index, open } => shell.request_zoom(index, open),
                InputEvent::CardDrag(sample) => shell.on_card_drag(sample),
                InputEvent::CardRelease => shell.on_card_release(),
                InputEvent::TextLayout { height } => shell.set_text_height(height),
                InputEvent::Tick { .. } => {}
            },
            Widget::Expand(shell) => match event {
                InputEvent::Pill { index } => shell.on_pill(index),
                InputEvent::Tick { ms } => shell.advance(ms),
                _ => {}
            },
        }
    }

    pub fn frame(&self) -> Frame {
        match &self.widget {
            Widget::Carousel(shell) => Frame::Carousel(shell.frame()),
            Widget::Expand(shell) => Frame::Expand(shell.frame()),
        }
    }
}
