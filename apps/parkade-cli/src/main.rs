//! Parkade console entry point.

use clap::Parser;
use parkade_cli::Cli;

fn main() -> anyhow::Result<()> {
    parkade_cli::run(Cli::parse())
}
