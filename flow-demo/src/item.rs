//! Demo items: fixed-height boxes with random widths.

use flow_layout::Size;
use rand::Rng;

/// Height every demo box renders at.
pub const ITEM_HEIGHT: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub id: u32,
    pub width: f32,
}

impl Item {
    /// Create an item with a random width in `100..=150`.
    pub fn random(id: u32, rng: &mut impl Rng) -> Self {
        Self {
            id,
            width: rng.gen_range(100..=150) as f32,
        }
    }

    /// The size this item reports once "rendered".
    pub fn size(&self) -> Size {
        Size::new(self.width, ITEM_HEIGHT)
    }
}

/// Generate `count` items with ids `0..count`.
pub fn generate(count: u32, rng: &mut impl Rng) -> Vec<Item> {
    (0..count).map(|id| Item::random(id, rng)).collect()
}
