//! Event scanner: collect every crossing over a window of UTC days.

use std::collections::HashSet;

use super::event::{AltitudeThreshold, SolarEvent};
use super::rise_set::{DayComputation, rise_set_at_altitude};
use crate::geo::GeoPoint;
use crate::time::{Timestamp, add_days, day_start_utc};

/// Scan every UTC day from `first_day` to `last_day` inclusive.
///
/// Each day that has a rise and a set contributes one rising and one setting
/// event for `threshold`; polar days contribute nothing. The result is sorted
/// by instant and holds no two events with the same kind and millisecond.
#[must_use]
pub fn scan(
    first_day: Timestamp,
    last_day: Timestamp,
    point: &GeoPoint,
    threshold: AltitudeThreshold,
) -> Vec<SolarEvent> {
    let (rising, setting) = threshold.crossing_kinds();
    let last_day = day_start_utc(last_day);

    let mut events = Vec::new();
    let mut day = day_start_utc(first_day);
    while day <= last_day {
        if let DayComputation::Ok { rise, set } =
            rise_set_at_altitude(day, point, threshold.degrees())
        {
            events.push(SolarEvent::new(rising, rise, threshold));
            events.push(SolarEvent::new(setting, set, threshold));
        }
        day = add_days(day, 1);
    }

    events.sort_by_key(|event| event.when);
    dedup_events(events)
}

/// Drop every event whose `(kind, millisecond)` key was already seen,
/// keeping the first occurrence and the original order.
#[must_use]
pub fn dedup_events(events: impl IntoIterator<Item = SolarEvent>) -> Vec<SolarEvent> {
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|event| seen.insert(event.dedup_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::{SolarEventKind, StateKind};
    use crate::time::parse_timestamp;

    fn ts(value: &str) -> Timestamp {
        parse_timestamp(value).unwrap()
    }

    fn le_mans() -> GeoPoint {
        GeoPoint::new(47.949_862_8, 0.207_354).unwrap()
    }

    #[test]
    fn should_emit_two_events_per_ordinary_day() {
        let events = scan(
            ts("2025-06-13T00:00:00Z"),
            ts("2025-06-15T00:00:00Z"),
            &le_mans(),
            AltitudeThreshold::Horizon,
        );
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].kind, SolarEventKind::Sunrise);
        assert_eq!(events[0].state, StateKind::Day);
        assert_eq!(events[1].kind, SolarEventKind::Sunset);
        assert_eq!(events[1].state, StateKind::Night);
    }

    #[test]
    fn should_return_strictly_ascending_events() {
        let events = scan(
            ts("2025-01-01T00:00:00Z"),
            ts("2025-02-01T00:00:00Z"),
            &le_mans(),
            AltitudeThreshold::Horizon,
        );
        assert!(events.windows(2).all(|w| w[0].when < w[1].when));
    }

    #[test]
    fn should_alternate_sunrise_and_sunset_at_mid_latitude() {
        let events = scan(
            ts("2025-03-01T00:00:00Z"),
            ts("2025-03-10T00:00:00Z"),
            &le_mans(),
            AltitudeThreshold::Horizon,
        );
        assert!(events.windows(2).all(|w| w[0].kind != w[1].kind));
    }

    #[test]
    fn should_ignore_time_of_day_of_window_bounds() {
        let truncated = scan(
            ts("2025-06-13T00:00:00Z"),
            ts("2025-06-15T00:00:00Z"),
            &le_mans(),
            AltitudeThreshold::Horizon,
        );
        let raw = scan(
            ts("2025-06-13T18:00:00Z"),
            ts("2025-06-15T06:00:00Z"),
            &le_mans(),
            AltitudeThreshold::Horizon,
        );
        assert_eq!(truncated, raw);
    }

    #[test]
    fn should_return_nothing_when_window_is_inverted() {
        let events = scan(
            ts("2025-06-15T00:00:00Z"),
            ts("2025-06-13T00:00:00Z"),
            &le_mans(),
            AltitudeThreshold::Horizon,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn should_emit_no_events_during_polar_night() {
        let svalbard = GeoPoint::new(78.22, 15.65).unwrap();
        let events = scan(
            ts("2025-12-10T00:00:00Z"),
            ts("2025-12-31T00:00:00Z"),
            &svalbard,
            AltitudeThreshold::Horizon,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn should_label_twilight_crossings_with_twilight_kinds() {
        let events = scan(
            ts("2025-03-20T00:00:00Z"),
            ts("2025-03-20T00:00:00Z"),
            &le_mans(),
            AltitudeThreshold::Civil,
        );
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, SolarEventKind::CivilBegin);
        assert_eq!(events[0].state, StateKind::Dawn);
        assert_eq!(events[1].kind, SolarEventKind::CivilEnd);
        assert_eq!(events[1].state, StateKind::Dusk);
        assert!((events[0].altitude_deg - AltitudeThreshold::CIVIL_DEG).abs() < f64::EPSILON);
    }

    #[test]
    fn should_drop_exact_duplicates_but_keep_different_kinds() {
        let when = ts("2025-06-14T20:00:00Z");
        let sunset = SolarEvent::new(SolarEventKind::Sunset, when, AltitudeThreshold::Horizon);
        let sunrise = SolarEvent::new(SolarEventKind::Sunrise, when, AltitudeThreshold::Horizon);
        let deduped = dedup_events([sunset, sunset, sunrise]);
        assert_eq!(deduped, vec![sunset, sunrise]);
    }
}
