use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::{Result, SpotwatchError};
use crate::models::Spot;

const SERVICE: &str = "POTA";

/// Blocking client for the public POTA activator-spot feed.
#[derive(Clone)]
pub struct FeedClient {
    http: Client,
    url: String,
}

impl std::fmt::Debug for FeedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedClient")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl FeedClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            url: config.pota_url.clone(),
        })
    }

    /// Fetch the current spot batch. The feed returns a JSON array; one
    /// batch per run, consumed once, never persisted.
    pub fn fetch_spots(&self) -> Result<Vec<Spot>> {
        let resp = self.http.get(&self.url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SpotwatchError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }
        let body = resp.text()?;
        let spots = serde_json::from_str::<Vec<Spot>>(&body)?;
        Ok(spots)
    }
}
