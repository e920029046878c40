use std::collections::HashSet;

use crate::error::{Result, SpotwatchError};

pub const QRZ_USERNAME_ENV: &str = "QRZ_USERNAME";
pub const QRZ_PASSWORD_ENV: &str = "QRZ_PASSWORD";
pub const PUSHOVER_TOKEN_ENV: &str = "PUSHOVER_TOKEN";
pub const PUSHOVER_USER_ENV: &str = "PUSHOVER_USER";

pub const MODES_ENV: &str = "SPOTWATCH_MODES";
pub const REGIONS_ENV: &str = "SPOTWATCH_REGIONS";
pub const MAX_AGE_SECS_ENV: &str = "SPOTWATCH_MAX_AGE_SECS";
pub const MODE_FILTER_ENV: &str = "SPOTWATCH_MODE_FILTER";
pub const REGION_FILTER_ENV: &str = "SPOTWATCH_REGION_FILTER";
pub const POTA_URL_ENV: &str = "SPOTWATCH_POTA_URL";
pub const QRZ_URL_ENV: &str = "SPOTWATCH_QRZ_URL";
pub const PUSHOVER_URL_ENV: &str = "SPOTWATCH_PUSHOVER_URL";
pub const PUSHOVER_SOUND_ENV: &str = "SPOTWATCH_PUSHOVER_SOUND";
pub const TIMEOUT_MS_ENV: &str = "SPOTWATCH_TIMEOUT_MS";

pub const DEFAULT_POTA_URL: &str = "https://api.pota.app/spot/activator";
pub const DEFAULT_QRZ_URL: &str = "https://online.qrz.com/bin/xml";
pub const DEFAULT_PUSHOVER_URL: &str = "https://api.pushover.net/1/messages.json";
pub const DEFAULT_MODES: &str = "FT8,FT4";
pub const DEFAULT_REGIONS: &str = "US-HI,US-RI";
pub const DEFAULT_MAX_AGE_SECS: u64 = 120;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Upper bound for the freshness window (one day). Values beyond it fall
/// back to the default instead of overflowing downstream duration math.
pub const MAX_AGE_SECS_CEILING: u64 = 86_400;

/// Everything one run needs, resolved once at startup and passed through
/// the pipeline explicitly. Secrets are required; the rest has defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub qrz_username: String,
    pub qrz_password: String,
    pub pushover_token: String,
    pub pushover_user: String,
    pub modes: HashSet<String>,
    pub regions: HashSet<String>,
    pub max_age_secs: u64,
    pub mode_filter_enabled: bool,
    pub region_filter_enabled: bool,
    pub pota_url: String,
    pub qrz_url: String,
    pub pushover_url: String,
    pub pushover_sound: Option<String>,
    pub timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolution body, parameterized over the variable source so tests do
    /// not touch process-global environment.
    pub fn resolve(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            qrz_username: require(&get, QRZ_USERNAME_ENV)?,
            qrz_password: require(&get, QRZ_PASSWORD_ENV)?,
            pushover_token: require(&get, PUSHOVER_TOKEN_ENV)?,
            pushover_user: require(&get, PUSHOVER_USER_ENV)?,
            modes: parse_token_set(non_empty(&get, MODES_ENV).as_deref().unwrap_or(DEFAULT_MODES)),
            regions: parse_token_set(
                non_empty(&get, REGIONS_ENV)
                    .as_deref()
                    .unwrap_or(DEFAULT_REGIONS),
            ),
            max_age_secs: parse_u64_bounded(
                &get,
                MAX_AGE_SECS_ENV,
                DEFAULT_MAX_AGE_SECS,
                MAX_AGE_SECS_CEILING,
            ),
            mode_filter_enabled: parse_enabled_default_true(get(MODE_FILTER_ENV).as_deref()),
            region_filter_enabled: parse_enabled_default_true(get(REGION_FILTER_ENV).as_deref()),
            pota_url: url_or_default(&get, POTA_URL_ENV, DEFAULT_POTA_URL),
            qrz_url: url_or_default(&get, QRZ_URL_ENV, DEFAULT_QRZ_URL),
            pushover_url: url_or_default(&get, PUSHOVER_URL_ENV, DEFAULT_PUSHOVER_URL),
            pushover_sound: non_empty(&get, PUSHOVER_SOUND_ENV),
            timeout_ms: parse_u64(&get, TIMEOUT_MS_ENV, DEFAULT_TIMEOUT_MS),
        })
    }
}

fn require(get: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    non_empty(get, name)
        .ok_or_else(|| SpotwatchError::Config(format!("required variable {name} is not set")))
}

fn non_empty(get: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    get(name)
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn url_or_default(get: &impl Fn(&str) -> Option<String>, name: &str, default_value: &str) -> String {
    non_empty(get, name)
        .map(|value| value.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default_value.to_string())
}

fn parse_u64(get: &impl Fn(&str) -> Option<String>, name: &str, default_value: u64) -> u64 {
    get(name)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(default_value)
}

fn parse_u64_bounded(
    get: &impl Fn(&str) -> Option<String>,
    name: &str,
    default_value: u64,
    max_value: u64,
) -> u64 {
    get(name)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|value| *value <= max_value)
        .unwrap_or(default_value)
}

/// Comma-separated token list into an exact-match set. Tokens are
/// case-sensitive on the wire, so no folding here.
fn parse_token_set(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_enabled_default_true(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(|value| value.trim().to_ascii_lowercase())
            .as_deref(),
        Some("off" | "none" | "0" | "false")
    )
}
