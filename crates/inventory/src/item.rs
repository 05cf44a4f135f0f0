use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

use crate::rules::{next_quality, next_sell_in};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const CONJURED: &str = "Conjured";

/// Upper bound that rising quality is held to (see [`crate::rules`] for which
/// categories actually honor it).
pub const MAX_QUALITY: i32 = 50;

/// Rule category, selected by exact item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AgedBrie,
    BackstagePasses,
    /// Legendary: neither quality nor sell-in ever change.
    Sulfuras,
    Conjured,
    Normal,
}

impl Category {
    /// Category for an item name. Unknown names are `Normal`.
    pub fn of(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            BACKSTAGE_PASSES => Category::BackstagePasses,
            SULFURAS => Category::Sulfuras,
            CONJURED => Category::Conjured,
            _ => Category::Normal,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Sulfuras)
    }
}

impl ValueObject for Category {}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(alias = "sellIn")]
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }

    /// The item as it will be one day from now.
    pub fn advanced(&self) -> Item {
        let mut next = self.clone();
        next.advance();
        next
    }

    /// Move this item forward one day.
    ///
    /// Quality is computed from the sell-in value *before* it is decremented.
    pub fn advance(&mut self) {
        let category = self.category();
        self.quality = next_quality(category, self.sell_in, self.quality);
        self.sell_in = next_sell_in(category, self.sell_in);
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
