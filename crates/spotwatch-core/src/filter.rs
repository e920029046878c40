use std::collections::HashSet;

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::Config;
use crate::models::{FilteredSpot, SkippedSpot, Spot};

/// Filter-time inputs for one run. Built once from the resolved config and
/// the clock, then applied to the whole batch.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub now: DateTime<Utc>,
    pub modes: HashSet<String>,
    pub regions: HashSet<String>,
    pub max_age: TimeDelta,
    pub mode_filter_enabled: bool,
    pub region_filter_enabled: bool,
}

impl RunContext {
    pub fn new(config: &Config, now: DateTime<Utc>) -> Self {
        Self {
            now,
            modes: config.modes.clone(),
            regions: config.regions.clone(),
            max_age: TimeDelta::seconds(config.max_age_secs as i64),
            mode_filter_enabled: config.mode_filter_enabled,
            region_filter_enabled: config.region_filter_enabled,
        }
    }
}

#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub passed: Vec<FilteredSpot>,
    pub skipped: Vec<SkippedSpot>,
}

/// Apply the predicate chain to the fetched batch, preserving feed order.
/// A record passes only when every enabled predicate holds. Records whose
/// timestamp cannot be parsed are reported and excluded rather than
/// aborting the batch.
pub fn filter_spots(spots: Vec<Spot>, ctx: &RunContext) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for spot in spots {
        if ctx.mode_filter_enabled && !ctx.modes.contains(&spot.mode) {
            continue;
        }
        if ctx.region_filter_enabled && !ctx.regions.contains(&spot.location_desc) {
            continue;
        }

        let spotted_at = match parse_spot_time(&spot.spot_time) {
            Ok(instant) => instant,
            Err(reason) => {
                outcome.skipped.push(SkippedSpot {
                    activator: spot.activator.clone(),
                    reason,
                });
                continue;
            }
        };

        let age = ctx.now - spotted_at;
        if age < TimeDelta::zero() || age >= ctx.max_age {
            continue;
        }

        outcome.passed.push(FilteredSpot { spot, age });
    }

    outcome
}

/// The feed emits ISO-8601 instants with no offset marker; they are UTC by
/// convention, so an explicit `+00:00` is appended before parsing.
pub fn parse_spot_time(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("spotTime is empty".to_string());
    }
    DateTime::parse_from_rfc3339(&format!("{trimmed}+00:00"))
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| format!("unparsable spotTime {trimmed:?}: {err}"))
}
