use serde::{Deserialize, Serialize};

/// One activator spot as reported by the POTA feed. Fields beyond these
/// exist on the wire and are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub mode: String,
    pub location_desc: String,
    /// Transmit frequency in kilohertz. The feed sends it as a numeric
    /// string; it stays raw here so an unparsable value can be surfaced
    /// verbatim in the band annotation.
    pub frequency: String,
    pub activator: String,
    pub name: String,
    /// ISO-8601 timestamp without a UTC offset marker.
    pub spot_time: String,
}

/// A spot that passed every enabled predicate, tagged with its age at
/// filter time.
#[derive(Debug, Clone)]
pub struct FilteredSpot {
    pub spot: Spot,
    pub age: chrono::TimeDelta,
}

/// A record excluded for a reason worth reporting (bad timestamp), as
/// opposed to one that simply failed a predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedSpot {
    pub activator: String,
    pub reason: String,
}

/// Summary of one full run, printed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub fetched: usize,
    pub qualified: usize,
    pub skipped: Vec<SkippedSpot>,
    pub notified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
