use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::Result;
use crate::feed::FeedClient;
use crate::filter::{RunContext, filter_spots};
use crate::models::RunReport;
use crate::pushover::PushoverClient;
use crate::qrz::QrzClient;
use crate::report;

/// One run of the watch pipeline: fetch, filter, enrich, format, notify.
/// Owns the three external-service clients and the resolved config; holds
/// no state between runs.
#[derive(Debug, Clone)]
pub struct SpotWatch {
    config: Config,
    feed: FeedClient,
    qrz: QrzClient,
    pushover: PushoverClient,
}

impl SpotWatch {
    pub fn new(config: Config) -> Result<Self> {
        let feed = FeedClient::new(&config)?;
        let qrz = QrzClient::new(&config)?;
        let pushover = PushoverClient::new(&config)?;
        Ok(Self {
            config,
            feed,
            qrz,
            pushover,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one full pass against the clock value `now`. Enrichment
    /// completes for the whole batch before anything is sent, so a failing
    /// lookup aborts the run without a partial notification. With
    /// `dry_run` the message body is built and reported but not delivered.
    pub fn run(&self, now: DateTime<Utc>, dry_run: bool) -> Result<RunReport> {
        let spots = self.feed.fetch_spots()?;
        let fetched = spots.len();

        let ctx = RunContext::new(&self.config, now);
        let outcome = filter_spots(spots, &ctx);

        // The session key is acquired at most once per run, and only when
        // there is something to look up. It is threaded explicitly into
        // each lookup; lookups never re-acquire it.
        let mut lines = Vec::with_capacity(outcome.passed.len());
        if !outcome.passed.is_empty() {
            let session = self.qrz.acquire_session()?;
            for filtered in &outcome.passed {
                let operator = self.qrz.lookup_operator(&session, &filtered.spot.activator)?;
                lines.push(report::format_line(filtered, &operator));
            }
        }

        let message = report::build_message(&lines);
        let mut notified = false;
        if let Some(body) = &message {
            if !dry_run {
                self.pushover.send(body)?;
                notified = true;
            }
        }

        Ok(RunReport {
            fetched,
            qualified: lines.len(),
            skipped: outcome.skipped,
            notified,
            message,
        })
    }
}
