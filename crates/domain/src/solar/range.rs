//! Range resolver: everything a timeline needs about one interval at one point.

use serde::{Deserialize, Serialize};

use super::event::{AltitudeThreshold, SolarEvent, StateKind};
use super::rise_set::{DayComputation, rise_set_at_altitude};
use super::scanner::{dedup_events, scan};
use crate::geo::GeoPoint;
use crate::time::{Timestamp, add_days, day_start_utc};

/// Bounds on how far around the interval the scanner looks.
///
/// Both values are floored at one day so transitions straddling the interval
/// edges are never missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeOptions {
    /// Days before `from` searched for the previous event.
    pub search_back_days: u32,
    /// Days after `to` included in the scan window.
    pub search_fwd_days: u32,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            search_back_days: 14,
            search_fwd_days: 2,
        }
    }
}

/// Solar transitions inside `[from, to]` and the context needed to color it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeResult {
    /// Sunrise/sunset events with `from <= when <= to`, ascending.
    pub events: Vec<SolarEvent>,
    /// Last event strictly before `from`, if one lies within the search window.
    pub prev_event: Option<SolarEvent>,
    /// State holding at `from`; `None` only for an inverted interval.
    pub initial_state: Option<StateKind>,
}

/// Resolve sunrise/sunset transitions over `[from, to]` at `point`.
///
/// An inverted interval (`to < from`) is not an error: it yields an empty
/// result with no previous event and no initial state.
#[must_use]
pub fn resolve_range(
    from: Timestamp,
    to: Timestamp,
    point: &GeoPoint,
    options: &RangeOptions,
) -> RangeResult {
    if to < from {
        return RangeResult::default();
    }

    let threshold = AltitudeThreshold::Horizon;
    let back = i64::from(options.search_back_days.max(1));
    let fwd = i64::from(options.search_fwd_days.max(1));

    let first_day = add_days(day_start_utc(from), -back);
    let last_day = add_days(day_start_utc(to), fwd);
    let all = scan(first_day, last_day, point, threshold);

    let prev_event = all.iter().take_while(|event| event.when < from).last().copied();

    let events = dedup_events(
        all.into_iter()
            .skip_while(|event| event.when < from)
            .take_while(|event| event.when <= to),
    );

    RangeResult {
        events,
        prev_event,
        initial_state: Some(state_at(from, point, threshold)),
    }
}

/// Solar state at `instant`, judged from the rise/set of its own UTC day.
///
/// Day covers the half-open interval `[rise, set)`: an instant exactly at
/// sunrise is day, an instant exactly at sunset is night.
#[must_use]
pub fn state_at(instant: Timestamp, point: &GeoPoint, threshold: AltitudeThreshold) -> StateKind {
    match rise_set_at_altitude(instant, point, threshold.degrees()) {
        DayComputation::SunNeverRises => StateKind::Night,
        DayComputation::SunNeverSets => StateKind::Day,
        DayComputation::Ok { rise, set } => {
            if rise <= instant && instant < set {
                StateKind::Day
            } else {
                StateKind::Night
            }
        }
    }
}
