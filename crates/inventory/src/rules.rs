//! Per-category rule table for one day of aging.
//!
//! Both functions are pure. Quality rules that branch on sell-in must be given
//! the value from *before* that day's sell-in decrement.
//!
//! | Category         | Condition                  | New quality          |
//! |------------------|----------------------------|----------------------|
//! | Aged Brie        | quality >= 50              | unchanged            |
//! | Aged Brie        | otherwise                  | quality + 1          |
//! | Backstage passes | sell-in > 10               | quality + 1          |
//! | Backstage passes | 5 < sell-in <= 10          | quality + 2          |
//! | Backstage passes | 0 < sell-in <= 5           | quality + 3          |
//! | Backstage passes | sell-in <= 0               | 0                    |
//! | Sulfuras         | any                        | unchanged            |
//! | Conjured, Normal | quality <= 0               | unchanged            |
//! | Conjured         | quality > 0                | max(0, quality - 2)  |
//! | Normal           | quality > 0, sell-in <= 0  | max(0, quality - 2)  |
//! | Normal           | quality > 0, sell-in > 0   | max(0, quality - 1)  |
//!
//! Backstage passes have no ceiling: a pass at 49 with five days left reaches 52.

use crate::item::{Category, MAX_QUALITY};

/// Quality after one day, given the pre-decrement sell-in.
pub fn next_quality(category: Category, sell_in: i32, quality: i32) -> i32 {
    match category {
        Category::AgedBrie if quality >= MAX_QUALITY => quality,
        Category::AgedBrie => quality.saturating_add(1),
        Category::BackstagePasses if sell_in > 10 => quality.saturating_add(1),
        Category::BackstagePasses if sell_in > 5 => quality.saturating_add(2),
        Category::BackstagePasses if sell_in > 0 => quality.saturating_add(3),
        Category::BackstagePasses => 0,
        Category::Sulfuras => quality,
        // Already at or below the floor: left where it is, even if negative.
        Category::Conjured | Category::Normal if quality <= 0 => quality,
        Category::Conjured => degrade(quality, 2),
        Category::Normal if sell_in <= 0 => degrade(quality, 2),
        Category::Normal => degrade(quality, 1),
    }
}

/// Sell-in after one day.
pub fn next_sell_in(category: Category, sell_in: i32) -> i32 {
    if category.is_legendary() {
        sell_in
    } else {
        sell_in.saturating_sub(1)
    }
}

fn degrade(quality: i32, amount: i32) -> i32 {
    quality.saturating_sub(amount).max(0)
}
