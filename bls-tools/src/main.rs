use anyhow::Result;
use clap::Parser;

mod cli;
mod ops;

fn main() -> Result<()> {
    let cli = crate::cli::Cli::parse();
    crate::ops::run(cli.command)
}
