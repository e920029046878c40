use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use spotwatch_core::{Config, SpotWatch, band};

use crate::cli::{BandArgs, Commands, RunArgs};

#[cfg(test)]
mod tests;

pub(crate) fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run_once(&args),
        Commands::Check => check(),
        Commands::Band(args) => classify_band(&args),
    }
}

fn run_once(args: &RunArgs) -> Result<()> {
    let app = SpotWatch::from_env().context("failed to resolve configuration")?;
    let report = app.run(Utc::now(), args.dry_run)?;
    for skipped in &report.skipped {
        eprintln!("skipped {}: {}", skipped.activator, skipped.reason);
    }
    print_json(&report)
}

fn check() -> Result<()> {
    let config = Config::from_env().context("configuration check failed")?;
    print_json(&config_summary(&config))
}

fn classify_band(args: &BandArgs) -> Result<()> {
    let label = band::classify(&args.khz);
    print_json(&serde_json::json!({
        "frequency": args.khz,
        "band": label.to_string(),
    }))
}

/// Secrets are reported by presence only, never by value.
fn config_summary(config: &Config) -> serde_json::Value {
    serde_json::json!({
        "modes": sorted(&config.modes),
        "regions": sorted(&config.regions),
        "max_age_secs": config.max_age_secs,
        "mode_filter_enabled": config.mode_filter_enabled,
        "region_filter_enabled": config.region_filter_enabled,
        "pota_url": config.pota_url,
        "qrz_url": config.qrz_url,
        "pushover_url": config.pushover_url,
        "pushover_sound": config.pushover_sound,
        "timeout_ms": config.timeout_ms,
        "qrz_credentials": "present",
        "pushover_credentials": "present",
    })
}

fn sorted(set: &std::collections::HashSet<String>) -> Vec<String> {
    let mut values: Vec<String> = set.iter().cloned().collect();
    values.sort();
    values
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
