//! Inventory sources and the daily report.

use std::io::Read;

use gildedrose_core::{DomainError, DomainResult};

use crate::item::{Item, AGED_BRIE, BACKSTAGE_PASSES, CONJURED, SULFURAS};

/// The classic shop inventory used for golden-master runs.
pub fn default_catalog() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}

/// Read a JSON array of items.
///
/// Values are taken as given; out-of-range quality is not corrected.
pub fn load_items<R: Read>(reader: R) -> DomainResult<Vec<Item>> {
    serde_json::from_reader(reader).map_err(|e| DomainError::malformed(e.to_string()))
}

/// Render one day of the report.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = format!("-------- day {day} --------\nname, sellIn, quality\n");
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}
