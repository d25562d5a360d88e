use anyhow::Context;
use clap::Parser;
use coord_processor::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("coordinate processing failed")
}
