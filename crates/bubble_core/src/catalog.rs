//! Item catalog
//!
//! The catalog is built once from a resolved display width and a list of
//! item specs. Every item's natural height is its aspect ratio scaled to the
//! display width, and its strip offset is `-(width * index)`. Nothing in the
//! catalog changes after construction; consumers share it through `Arc`.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Device class used to resolve the display width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Width of the bubble card in logical pixels
    pub fn display_width(self) -> f32 {
        match self {
            DeviceClass::Desktop => 375.0,
            DeviceClass::Mobile => 300.0,
        }
    }

    /// Pill thumbnail height in logical pixels
    pub fn thumbnail_height(self) -> f32 {
        match self {
            DeviceClass::Desktop => 18.0,
            DeviceClass::Mobile => 14.0,
        }
    }

    /// Body font size for the bubble text
    pub fn font_size(self) -> f32 {
        match self {
            DeviceClass::Desktop => 16.0,
            DeviceClass::Mobile => 12.0,
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// What an item displays
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    /// A plain image
    Image { url: String },
    /// A link preview card
    LinkPreview {
        title: String,
        description: String,
        url: String,
        thumbnail: String,
    },
}

impl ItemKind {
    /// Text shown on the item's pill
    pub fn label(&self) -> &str {
        match self {
            ItemKind::Image { url } => url,
            ItemKind::LinkPreview { title, .. } => title,
        }
    }

    /// Image that has to be loaded before the item can render
    pub fn image_url(&self) -> &str {
        match self {
            ItemKind::Image { url } => url,
            ItemKind::LinkPreview { thumbnail, .. } => thumbnail,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ItemKind::Image { .. })
    }
}

/// Catalog input: an item and its intrinsic pixel size
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub kind: ItemKind,
    pub intrinsic_width: u32,
    pub intrinsic_height: u32,
}

impl ItemSpec {
    /// Image item with the given intrinsic size
    pub fn image(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            kind: ItemKind::Image { url: url.into() },
            intrinsic_width: width,
            intrinsic_height: height,
        }
    }

    /// Link preview item; the size is that of the rendered card at its design width
    pub fn link_preview(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            kind: ItemKind::LinkPreview {
                title: title.into(),
                description: description.into(),
                url: url.into(),
                thumbnail: thumbnail.into(),
            },
            intrinsic_width: width,
            intrinsic_height: height,
        }
    }
}

/// A catalog entry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Item {
    pub kind: ItemKind,
    /// Natural display height at the catalog's display width
    pub height: f32,
    /// Horizontal strip offset, `-(display_width * index)`
    pub offset: f32,
}

/// Ordered, immutable item list
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Catalog {
    display_width: f32,
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog for the given display width
    pub fn build(display_width: f32, specs: Vec<ItemSpec>) -> Result<Self> {
        if !display_width.is_finite() || display_width <= 0.0 {
            return Err(CatalogError::InvalidWidth(display_width));
        }
        if specs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let items = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                if spec.intrinsic_width == 0 || spec.intrinsic_height == 0 {
                    return Err(CatalogError::InvalidItemSize {
                        index,
                        label: spec.kind.label().to_string(),
                        width: spec.intrinsic_width,
                        height: spec.intrinsic_height,
                    });
                }
                let height =
                    display_width / spec.intrinsic_width as f32 * spec.intrinsic_height as f32;
                Ok(Item {
                    kind: spec.kind,
                    height,
                    offset: -(display_width * index as f32),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Built catalog: {} items at width {}",
            items.len(),
            display_width
        );

        Ok(Self {
            display_width,
            items,
        })
    }

    pub fn display_width(&self) -> f32 {
        self.display_width
    }

    /// Number of items (always at least one)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Natural height of the item at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers inside the crate only pass
    /// indices already clamped to the catalog.
    pub fn height(&self, index: usize) -> f32 {
        self.items[index].height
    }

    /// Strip offset of the item at `index`
    pub fn offset(&self, index: usize) -> f32 {
        self.items[index].offset
    }

    /// Tallest item height, used to vertically center the bubble
    pub fn max_height(&self) -> f32 {
        self.items
            .iter()
            .map(|item| item.height)
            .fold(f32::MIN, f32::max)
    }

    /// Width of the full strip holding every item side by side
    pub fn strip_width(&self) -> f32 {
        self.display_width * self.items.len() as f32
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<ItemSpec> {
        vec![
            ItemSpec::image("magic_library.png", 679, 720),
            ItemSpec::image("showa_town_sauna.png", 838, 517),
            ItemSpec::image("magic_booster.gif", 217, 219),
        ]
    }

    #[test]
    fn test_heights_follow_aspect_ratio() {
        let catalog = Catalog::build(375.0, specs()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!((catalog.height(0) - 375.0 / 679.0 * 720.0).abs() < 1e-3);
        assert!((catalog.height(1) - 375.0 / 838.0 * 517.0).abs() < 1e-3);
    }

    #[test]
    fn test_offsets_are_negative_multiples_of_width() {
        let catalog = Catalog::build(300.0, specs()).unwrap();
        assert_eq!(catalog.offset(0), 0.0);
        assert_eq!(catalog.offset(1), -300.0);
        assert_eq!(catalog.offset(2), -600.0);
        assert_eq!(catalog.strip_width(), 900.0);
    }

    #[test]
    fn test_rejects_empty_and_bad_width() {
        assert_eq!(Catalog::build(375.0, vec![]), Err(CatalogError::Empty));
        assert_eq!(
            Catalog::build(0.0, specs()),
            Err(CatalogError::InvalidWidth(0.0))
        );
        assert!(matches!(
            Catalog::build(f32::NAN, specs()),
            Err(CatalogError::InvalidWidth(_))
        ));
    }

    #[test]
    fn test_rejects_zero_sized_item() {
        let err = Catalog::build(375.0, vec![ItemSpec::image("broken.png", 0, 10)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidItemSize { index: 0, .. }));
    }

    #[test]
    fn test_labels_and_lookup() {
        let mut all = specs();
        all.push(ItemSpec::link_preview(
            "Blog post",
            "A short description",
            "https://example.com/post",
            "post_thumb.png",
            375,
            120,
        ));
        let catalog = Catalog::build(375.0, all).unwrap();

        let labels: Vec<_> = catalog.iter().map(|item| item.kind.label()).collect();
        assert_eq!(labels[2], "magic_booster.gif");
        assert_eq!(labels[3], "Blog post");

        let preview = &catalog.get(3).unwrap().kind;
        assert!(!preview.is_image());
        assert_eq!(preview.image_url(), "post_thumb.png");
    }

    #[test]
    fn test_max_height() {
        let catalog = Catalog::build(375.0, specs()).unwrap();
        let tallest = (0..catalog.len())
            .map(|i| catalog.height(i))
            .fold(0.0_f32, f32::max);
        assert_eq!(catalog.max_height(), tallest);
    }

    #[test]
    fn test_device_widths() {
        assert_eq!(DeviceClass::Desktop.display_width(), 375.0);
        assert_eq!(DeviceClass::Mobile.display_width(), 300.0);
        assert!(DeviceClass::Mobile.is_mobile());
    }
}
