use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{BandArgs, RunArgs};

#[derive(Debug, Parser)]
#[command(name = "spotwatch")]
#[command(about = "POTA spot watcher with QRZ enrichment and Pushover delivery", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Execute one fetch-filter-enrich-notify pass.
    Run(RunArgs),
    /// Resolve configuration and report it without any network call.
    Check,
    /// Classify a single frequency into its band label.
    Band(BandArgs),
}
