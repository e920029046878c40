mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    // Secrets may live in a local .env file; absence is fine.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    commands::run(cli.command)
}
