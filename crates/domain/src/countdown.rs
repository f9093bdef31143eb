//! Countdown readout: elapsed and remaining race time as `HH:MM:SS`.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Placeholder shown whenever a duration cannot be displayed.
pub const PLACEHOLDER: &str = "--------";

/// Which half of the readout the dashboard should highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Elapsed,
    Remaining,
}

/// Text shown next to the race progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    /// `+HH:MM:SS` since the start; keeps counting after the finish and
    /// shows `+--------` before the start.
    pub elapsed: String,
    /// `-HH:MM:SS` until the finish while the race runs, [`PLACEHOLDER`]
    /// otherwise.
    pub remaining: String,
    /// Whether `now` lies inside `[start, end]`.
    pub within: bool,
    pub emphasis: Emphasis,
}

/// Format a millisecond duration as `HH:MM:SS`, truncating sub-second parts.
///
/// Hours are not wrapped at 24; negative durations yield [`PLACEHOLDER`].
#[must_use]
pub fn format_hms(ms: i64) -> String {
    if ms < 0 {
        return PLACEHOLDER.to_string();
    }
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Build the readout for a race running over `[start, end]` at `now`.
///
/// The emphasised half is the one the dashboard shows large: elapsed time
/// during the first half of the race, remaining time afterwards and whenever
/// the race is not running.
#[must_use]
pub fn readout(start: Timestamp, end: Timestamp, now: Timestamp) -> Readout {
    let within = start <= now && now <= end;
    let elapsed_ms = (now - start).num_milliseconds();
    let elapsed = format!("+{}", format_hms(elapsed_ms));

    if !within {
        return Readout {
            elapsed,
            remaining: PLACEHOLDER.to_string(),
            within,
            emphasis: Emphasis::Remaining,
        };
    }

    let remaining_ms = (end - now).num_milliseconds();
    let emphasis = if elapsed_ms > remaining_ms {
        Emphasis::Remaining
    } else {
        Emphasis::Elapsed
    };

    Readout {
        elapsed,
        remaining: format!("-{}", format_hms(remaining_ms)),
        within,
        emphasis,
    }
}
