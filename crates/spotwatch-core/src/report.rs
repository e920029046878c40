use chrono::TimeDelta;

use crate::band::{self, Band};
use crate::models::FilteredSpot;

/// Human-readable "heard X ago" annotation from total elapsed seconds.
/// Whole-minute carry is computed from the full elapsed span, never from a
/// truncated remainder, so 65s reads as "1 minute and 5 seconds ago".
pub fn recency(age: TimeDelta) -> String {
    let total_secs = age.num_seconds().max(0);
    if total_secs < 60 {
        return format!("{total_secs} seconds ago");
    }
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    let unit = if minutes == 1 { "minute" } else { "minutes" };
    format!("{minutes} {unit} and {seconds} seconds ago")
}

/// One notification line for a qualifying spot. Degrades rather than
/// omits: an unresolved operator keeps its "Not Found" sentinel and an
/// unmapped frequency keeps its diagnostic band annotation.
pub fn format_line(filtered: &FilteredSpot, operator_name: &str) -> String {
    let spot = &filtered.spot;
    let band: Band = band::classify(&spot.frequency);
    format!(
        "[{mode}:{region}] {activator} ({operator_name}) was at {site} on {band} ({heard})",
        mode = spot.mode,
        region = spot.location_desc,
        activator = spot.activator,
        site = spot.name,
        heard = recency(filtered.age),
    )
}

/// Join lines into the single outbound message body. `None` means there is
/// nothing to send this run.
pub fn build_message(lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    Some(lines.join("\n"))
}
