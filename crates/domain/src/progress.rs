//! Race progress: how far through its window a race is.

use serde::{Deserialize, Serialize};

use crate::timeline::clamp01;
use crate::time::Timestamp;

/// Elapsed/remaining figures for an interval at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Raw `(now − start) / (end − start)`, unclamped; `None` for an empty
    /// or inverted interval.
    pub ratio: Option<f64>,
    /// `ratio` clamped into `[0, 1]`.
    pub clamped: Option<f64>,
    pub elapsed_ms: i64,
    pub total_ms: i64,
    pub remaining_ms: i64,
}

/// Compute progress of `now` through `[start, end]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_progress(start: Timestamp, end: Timestamp, now: Timestamp) -> Progress {
    let total_ms = (end - start).num_milliseconds();
    let elapsed_ms = (now - start).num_milliseconds();
    let ratio = (total_ms > 0).then(|| elapsed_ms as f64 / total_ms as f64);
    Progress {
        ratio,
        clamped: ratio.map(clamp01),
        elapsed_ms,
        total_ms,
        remaining_ms: total_ms - elapsed_ms,
    }
}

/// Render a ratio as a percentage with `digits` decimals, e.g. `"42.5%"`.
///
/// Undefined or non-finite ratios render as `"- %"`.
#[must_use]
pub fn format_percent(ratio: Option<f64>, digits: usize) -> String {
    match ratio {
        Some(x) if x.is_finite() => format!("{:.digits$}%", x * 100.0),
        _ => "- %".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_timestamp;

    fn ts(value: &str) -> Timestamp {
        parse_timestamp(value).unwrap()
    }

    #[test]
    fn should_report_quarter_progress_six_hours_in() {
        let p = compute_progress(
            ts("2025-06-14T12:00:00Z"),
            ts("2025-06-15T12:00:00Z"),
            ts("2025-06-14T18:00:00Z"),
        );
        assert_eq!(p.ratio, Some(0.25));
        assert_eq!(p.clamped, Some(0.25));
        assert_eq!(p.elapsed_ms, 6 * 3_600_000);
        assert_eq!(p.total_ms, 24 * 3_600_000);
        assert_eq!(p.remaining_ms, 18 * 3_600_000);
    }

    #[test]
    fn should_keep_raw_ratio_but_clamp_before_start() {
        let p = compute_progress(
            ts("2025-06-14T12:00:00Z"),
            ts("2025-06-15T12:00:00Z"),
            ts("2025-06-14T00:00:00Z"),
        );
        assert_eq!(p.ratio, Some(-0.5));
        assert_eq!(p.clamped, Some(0.0));
        assert!(p.elapsed_ms < 0);
    }

    #[test]
    fn should_clamp_after_finish() {
        let p = compute_progress(
            ts("2025-06-14T12:00:00Z"),
            ts("2025-06-15T12:00:00Z"),
            ts("2025-06-16T12:00:00Z"),
        );
        assert_eq!(p.ratio, Some(2.0));
        assert_eq!(p.clamped, Some(1.0));
        assert_eq!(p.remaining_ms, -24 * 3_600_000);
    }

    #[test]
    fn should_leave_ratio_undefined_for_empty_interval() {
        let t = ts("2025-06-14T12:00:00Z");
        let p = compute_progress(t, t, t);
        assert_eq!(p.ratio, None);
        assert_eq!(p.clamped, None);
    }

    #[test]
    fn should_format_percent_with_requested_digits() {
        assert_eq!(format_percent(Some(0.4251), 1), "42.5%");
        assert_eq!(format_percent(Some(1.0), 0), "100%");
        assert_eq!(format_percent(None, 1), "- %");
        assert_eq!(format_percent(Some(f64::NAN), 1), "- %");
    }
}
