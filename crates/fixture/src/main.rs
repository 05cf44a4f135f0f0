mod cli;
mod run;

use std::io;
use std::process;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    gildedrose_observability::init(cli.log_format);

    let result = run::starting_items(cli.items.as_deref())
        .and_then(|items| run::simulate(items, cli.days, &mut io::stdout().lock()));

    if let Err(e) = result {
        tracing::error!(error = %e, "run failed");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
