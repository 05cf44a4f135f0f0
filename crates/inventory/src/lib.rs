//! Shop inventory domain: item categories and the daily quality update.
//!
//! The update rules are deterministic domain logic (no IO, no logging). Reading
//! inventories and rendering reports lives in [`catalog`].

pub mod catalog;
pub mod item;
pub mod rules;
pub mod shop;

pub use catalog::{default_catalog, load_items, render_day};
pub use item::{Category, Item, AGED_BRIE, BACKSTAGE_PASSES, CONJURED, MAX_QUALITY, SULFURAS};
pub use rules::{next_quality, next_sell_in};
pub use shop::{advance_one_day, GildedRose};
