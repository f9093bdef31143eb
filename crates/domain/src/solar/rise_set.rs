//! Rise/set solver: when does the sun cross a given altitude on one day.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::position::{MINUTES_PER_DEGREE, position_for};
use crate::geo::GeoPoint;
use crate::time::{Timestamp, day_start_utc};

/// Minutes from UTC midnight to solar noon at longitude 0 with no
/// equation-of-time correction.
const NOON_MINUTES: f64 = 720.0;

/// Outcome of solving one calendar day.
///
/// The polar variants are ordinary results, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayComputation {
    /// The sun climbs through the altitude at `rise` and sinks through it at `set`.
    Ok { rise: Timestamp, set: Timestamp },
    /// The sun stays below the altitude all day (polar night).
    SunNeverRises,
    /// The sun stays above the altitude all day (midnight sun).
    SunNeverSets,
}

/// Solve the crossings of `altitude_deg` for the UTC calendar day containing `day`.
///
/// Longitude is positive east. The point is used as given: out-of-range
/// coordinates produce meaningless instants rather than an error. Rise and set
/// are rounded to the nearest whole minute.
#[must_use]
pub fn rise_set_at_altitude(day: Timestamp, point: &GeoPoint, altitude_deg: f64) -> DayComputation {
    let midnight = day_start_utc(day);
    let position = position_for(midnight);

    let lat = point.latitude.to_radians();
    let decl = position.declination_deg.to_radians();
    let h0 = altitude_deg.to_radians();

    let cos_h = (h0.sin() - lat.sin() * decl.sin()) / (lat.cos() * decl.cos());
    if cos_h < -1.0 {
        return DayComputation::SunNeverSets;
    }
    if cos_h > 1.0 {
        return DayComputation::SunNeverRises;
    }

    let half_width_deg = cos_h.acos().to_degrees();
    let solar_noon = NOON_MINUTES
        - MINUTES_PER_DEGREE * point.longitude
        - position.equation_of_time_minutes;
    let rise = solar_noon - MINUTES_PER_DEGREE * half_width_deg;
    let set = solar_noon + MINUTES_PER_DEGREE * half_width_deg;

    DayComputation::Ok {
        rise: offset_minutes(midnight, rise),
        set: offset_minutes(midnight, set),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn offset_minutes(midnight: Timestamp, minutes: f64) -> Timestamp {
    midnight + TimeDelta::minutes(minutes.round() as i64)
}
