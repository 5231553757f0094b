mod analytics;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // All state is in memory; every run starts from the sample data.
    let mut store = store::Store::with_sample_data();

    if args.len() > 1 {
        run::as_cli(&args, &mut store)
    } else {
        run::as_tui(&mut store)
    }
}
