use std::path::PathBuf;

use clap::Parser;
use gildedrose_observability::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "gildedrose",
    about = "Run the shop's daily quality update and print the inventory for each day",
    version
)]
pub struct Cli {
    /// Number of days to simulate after day 0
    #[arg(short, long, default_value_t = 2, env = "GILDEDROSE_DAYS")]
    pub days: u32,

    /// JSON file with the starting inventory (defaults to the built-in catalog)
    #[arg(short, long, value_name = "PATH", env = "GILDEDROSE_ITEMS")]
    pub items: Option<PathBuf>,

    /// Log output format: json or pretty
    #[arg(long, default_value = "pretty", env = "GILDEDROSE_LOG_FORMAT")]
    pub log_format: LogFormat,
}
