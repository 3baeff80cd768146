//! Compiled-in content for each widget variant
//!
//! Item sizes are the intrinsic pixel sizes of the shipped assets; heights are
//! derived from them when the catalog is built for a display width.

use bubble_core::{Catalog, ItemSpec};

use crate::config::Variant;
use crate::error::Result;

/// One block of bubble text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    /// Pill for the item at this catalog index
    Pill(usize),
}

fn bubble_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec::image("magic_library.png", 679, 720),
        ItemSpec::image("showa_town_sauna.png", 838, 517),
        ItemSpec::image("magic_booster.gif", 217, 219),
        ItemSpec::image("free_market.jpeg", 960, 856),
        ItemSpec::image("remnant_of_the_goddess.png", 800, 600),
        ItemSpec::link_preview(
            "Maplestory",
            "The free-to-play 2D side-scrolling MMORPG.",
            "https://maplestory.nexon.net",
            "maplestory_logo.png",
            375,
            196,
        ),
    ]
}

const BUBBLE_TEXT: &[Block] = &[
    Block::Paragraph("I spent my childhood on Maplestory."),
    Block::Paragraph("Here are some images that remind me"),
    Block::Paragraph("of those times."),
    Block::Pill(0),
    Block::Pill(1),
    Block::Pill(2),
    Block::Paragraph("Also this meme is "),
    Block::Paragraph("pretty funny lol"),
    Block::Pill(3),
    Block::Pill(4),
    Block::Paragraph("Still playing, sometimes:"),
    Block::Pill(5),
];

fn carousel_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec::image("kitasavi.jpeg", 3276, 4096),
        ItemSpec::image("nizo_yamamoto.png", 790, 474),
        ItemSpec::image("gerard_richter.jpeg", 673, 469),
        ItemSpec::image("too_close_jacques_greene.jpeg", 1200, 1200),
    ]
}

const CAROUSEL_TEXT: &[Block] = &[Block::Paragraph("This is some text")];

/// The expand bubble has no carousel; index 0 is the revealed image
fn expand_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec::image("kirby.jpeg", 375, 312),
        ItemSpec::image("too_close_jacques_greene.jpeg", 1200, 1200),
        ItemSpec::image("gerard_richter.jpeg", 673, 469),
    ]
}

const EXPAND_TEXT: &[Block] = &[
    Block::Paragraph("These are just some images I like."),
    Block::Paragraph("Say hello to Kirby."),
    Block::Pill(0),
    Block::Pill(1),
    Block::Paragraph("This is by Eric Hu."),
    Block::Pill(2),
    Block::Paragraph("A painting by Gerard Richter."),
];

/// Build the catalog for a variant at the given display width
pub fn catalog_for(variant: Variant, display_width: f32) -> Result<Catalog> {
    let specs = match variant {
        Variant::Bubble => bubble_items(),
        Variant::Carousel => carousel_items(),
        Variant::Expand => expand_items(),
    };
    Ok(Catalog::build(display_width, specs)?)
}

/// Text blocks shown around the media for a variant
pub fn text_for(variant: Variant) -> &'static [Block] {
    match variant {
        Variant::Bubble => BUBBLE_TEXT,
        Variant::Carousel => CAROUSEL_TEXT,
        Variant::Expand => EXPAND_TEXT,
    }
}
