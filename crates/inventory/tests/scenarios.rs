//! End-to-end runs of the shop through its public API.

use gildedrose_inventory::{
    default_catalog, render_day, GildedRose, Item, AGED_BRIE, BACKSTAGE_PASSES, CONJURED,
    MAX_QUALITY, SULFURAS,
};

fn run_one(item: Item) -> Item {
    let mut shop = GildedRose::new(vec![item]);
    shop.advance_one_day();
    shop.into_items().remove(0)
}

#[test]
fn normal_item_loses_one_a_day() {
    assert_eq!(run_one(Item::new("foo", 2, 10)), Item::new("foo", 1, 9));
}

#[test]
fn aged_brie_reaches_cap_then_holds() {
    let mut shop = GildedRose::new(vec![Item::new(AGED_BRIE, 2, 49)]);

    shop.advance_one_day();
    assert_eq!(shop.items()[0], Item::new(AGED_BRIE, 1, 50));

    shop.advance_one_day();
    assert_eq!(shop.items()[0], Item::new(AGED_BRIE, 0, 50));
}

#[test]
fn sulfuras_is_untouched_by_any_number_of_days() {
    let mut shop = GildedRose::new(vec![Item::new(SULFURAS, -1, -2)]);
    shop.advance_days(25);
    assert_eq!(shop.items()[0], Item::new(SULFURAS, -1, -2));
}

#[test]
fn backstage_pass_five_days_out_gains_three() {
    assert_eq!(
        run_one(Item::new(BACKSTAGE_PASSES, 5, 5)),
        Item::new(BACKSTAGE_PASSES, 4, 8)
    );
}

#[test]
fn backstage_pass_is_worthless_after_the_concert() {
    assert_eq!(
        run_one(Item::new(BACKSTAGE_PASSES, 0, 5)),
        Item::new(BACKSTAGE_PASSES, -1, 0)
    );
}

#[test]
fn conjured_item_loses_two_a_day() {
    assert_eq!(run_one(Item::new(CONJURED, 2, 10)), Item::new(CONJURED, 1, 8));
}

#[test]
fn default_catalog_thirty_day_run() {
    let mut shop = GildedRose::new(default_catalog());
    let mut report = String::new();
    for day in 0..=30 {
        report.push_str(&render_day(day, shop.items()));
        shop.advance_one_day();
    }
    assert!(report.starts_with("-------- day 0 --------\nname, sellIn, quality\n"));
    assert!(report.contains("-------- day 30 --------"));

    let after_31_days = shop.into_items();
    for (before, after) in default_catalog().iter().zip(&after_31_days) {
        assert_eq!(before.name, after.name);
        if before.name == SULFURAS {
            assert_eq!(before, after);
        } else {
            assert_eq!(after.sell_in, before.sell_in - 31);
            assert!(after.quality >= 0, "{after}");
        }
    }

    // Every pass is long past its concert.
    for pass in after_31_days.iter().filter(|i| i.name == BACKSTAGE_PASSES) {
        assert_eq!(pass.quality, 0);
    }
    // Brie gains one a day from zero and has not reached the cap yet.
    let brie = after_31_days.iter().find(|i| i.name == AGED_BRIE).unwrap();
    assert_eq!(brie.quality, 31);
    assert!(brie.quality < MAX_QUALITY);
}

#[test]
fn backstage_pass_overshoots_cap_before_the_concert() {
    let mut shop = GildedRose::new(vec![Item::new(BACKSTAGE_PASSES, 5, 49)]);
    shop.advance_one_day();
    assert_eq!(shop.items()[0], Item::new(BACKSTAGE_PASSES, 4, 52));
}
