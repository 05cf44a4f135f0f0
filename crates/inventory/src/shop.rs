//! The quality update engine.

use crate::item::Item;

/// Advance every item in `items` by one day, in order.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        item.advance();
    }
}

/// A shop holding its inventory.
///
/// Each call to [`GildedRose::advance_one_day`] is a single step: every item is
/// updated independently, quality first, then sell-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn advance_one_day(&mut self) {
        advance_one_day(&mut self.items);
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
