use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use gildedrose_inventory::{default_catalog, load_items, render_day, GildedRose, Item};

/// Starting inventory: the given JSON file, or the built-in catalog.
pub fn starting_items(path: Option<&Path>) -> Result<Vec<Item>> {
    let Some(path) = path else {
        tracing::info!("using built-in catalog");
        return Ok(default_catalog());
    };

    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let items = load_items(BufReader::new(file))
        .with_context(|| format!("failed to read inventory from {}", path.display()))?;
    tracing::info!(path = %path.display(), items = items.len(), "loaded inventory");
    Ok(items)
}

/// Write day 0 plus `days` updated days to `out`.
pub fn simulate<W: Write>(items: Vec<Item>, days: u32, out: &mut W) -> Result<()> {
    let mut shop = GildedRose::new(items);

    out.write_all(render_day(0, shop.items()).as_bytes())?;
    for day in 1..=days {
        shop.advance_one_day();
        out.write_all(render_day(day, shop.items()).as_bytes())?;
    }
    out.flush()?;

    tracing::info!(days, items = shop.items().len(), "simulation finished");
    Ok(())
}
