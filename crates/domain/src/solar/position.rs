//! Solar position for a calendar day: NOAA low-precision series.
//!
//! Produces the two quantities the rise/set solver needs: the sun's
//! declination and the equation of time. Coefficients are kept as named
//! groups so they can be audited against the published NOAA spreadsheet.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00 TT).
const J2000_JULIAN_DAY: f64 = 2_451_545.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Minutes of clock time per degree of Earth rotation.
pub(crate) const MINUTES_PER_DEGREE: f64 = 4.0;

/// Geometric mean longitude of the sun: `L0 = a + T·(b + c·T)`.
mod mean_longitude {
    pub const A: f64 = 280.466_46;
    pub const B: f64 = 36_000.769_83;
    pub const C: f64 = 0.000_303_2;
}

/// Geometric mean anomaly of the sun: `M = a + T·(b − c·T)`.
mod mean_anomaly {
    pub const A: f64 = 357.529_11;
    pub const B: f64 = 35_999.050_29;
    pub const C: f64 = 0.000_153_7;
}

/// Eccentricity of Earth's orbit: `e = a − T·(b + c·T)`.
mod eccentricity {
    pub const A: f64 = 0.016_708_634;
    pub const B: f64 = 0.000_042_037;
    pub const C: f64 = 0.000_000_126_7;
}

/// Equation of center, one coefficient set per harmonic of `M`.
mod equation_of_center {
    pub const SIN_M: [f64; 3] = [1.914_602, 0.004_817, 0.000_014];
    pub const SIN_2M: [f64; 2] = [0.019_993, 0.000_101];
    pub const SIN_3M: f64 = 0.000_289;
}

/// Longitude of the moon's ascending node (nutation): `Ω = a − b·T`,
/// and the apparent-longitude correction it drives.
mod nutation {
    pub const NODE_A: f64 = 125.04;
    pub const NODE_B: f64 = 1_934.136;
    pub const ABERRATION: f64 = 0.005_69;
    pub const LONGITUDE_AMPLITUDE: f64 = 0.004_78;
    pub const OBLIQUITY_AMPLITUDE: f64 = 0.002_56;
}

/// Mean obliquity of the ecliptic: `23° 26′ (21.448 − T·(b + T·(c − d·T)))″`.
mod obliquity {
    pub const DEGREES: f64 = 23.0;
    pub const ARCMINUTES: f64 = 26.0;
    pub const ARCSECONDS: f64 = 21.448;
    pub const B: f64 = 46.815;
    pub const C: f64 = 0.000_59;
    pub const D: f64 = 0.001_813;
}

/// Sun's declination and equation of time for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    /// Angular distance north (+) or south (−) of the celestial equator.
    pub declination_deg: f64,
    /// Apparent solar time minus mean solar time, in minutes.
    pub equation_of_time_minutes: f64,
}

/// Compute the solar position for the UTC calendar day of `day`.
///
/// Only the date part is used; the time of day is ignored.
#[must_use]
pub fn position_for(day: Timestamp) -> SolarPosition {
    let date = day.date_naive();
    let jd = julian_day_number(date.year(), date.month(), date.day());
    let t = julian_centuries(jd);

    let l0 = geometric_mean_longitude(t);
    let m = geometric_mean_anomaly(t);
    let e = orbit_eccentricity(t);
    let eps0 = mean_obliquity(t);

    let true_longitude = l0 + equation_of_center(t, m);
    let lambda = apparent_longitude(t, true_longitude);
    let eps = corrected_obliquity(t, eps0);

    let declination_deg = (eps.to_radians().sin() * lambda.to_radians().sin())
        .asin()
        .to_degrees();

    SolarPosition {
        declination_deg,
        equation_of_time_minutes: equation_of_time(l0, m, e, eps0),
    }
}

/// Integer Julian Day Number of a Gregorian calendar date.
///
/// This is the JD at noon of that date, which is what the series expects for
/// a day-granular computation.
pub(crate) fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

#[allow(clippy::cast_precision_loss)]
fn julian_centuries(jd: i64) -> f64 {
    (jd as f64 - J2000_JULIAN_DAY) / DAYS_PER_JULIAN_CENTURY
}

fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

fn geometric_mean_longitude(t: f64) -> f64 {
    use mean_longitude::{A, B, C};
    normalize_degrees(A + t * (B + C * t))
}

fn geometric_mean_anomaly(t: f64) -> f64 {
    use mean_anomaly::{A, B, C};
    normalize_degrees(A + t * (B - C * t))
}

fn orbit_eccentricity(t: f64) -> f64 {
    use eccentricity::{A, B, C};
    A - t * (B + C * t)
}

fn equation_of_center(t: f64, m: f64) -> f64 {
    use equation_of_center::{SIN_2M, SIN_3M, SIN_M};
    let m = m.to_radians();
    m.sin() * (SIN_M[0] - t * (SIN_M[1] + SIN_M[2] * t))
        + (2.0 * m).sin() * (SIN_2M[0] - SIN_2M[1] * t)
        + (3.0 * m).sin() * SIN_3M
}

fn ascending_node(t: f64) -> f64 {
    nutation::NODE_A - nutation::NODE_B * t
}

fn apparent_longitude(t: f64, true_longitude: f64) -> f64 {
    let omega = ascending_node(t).to_radians();
    true_longitude - nutation::ABERRATION - nutation::LONGITUDE_AMPLITUDE * omega.sin()
}

fn mean_obliquity(t: f64) -> f64 {
    use obliquity::{ARCMINUTES, ARCSECONDS, B, C, D, DEGREES};
    DEGREES + (ARCMINUTES + (ARCSECONDS - t * (B + t * (C - t * D))) / 60.0) / 60.0
}

fn corrected_obliquity(t: f64, mean: f64) -> f64 {
    let omega = ascending_node(t).to_radians();
    mean + nutation::OBLIQUITY_AMPLITUDE * omega.cos()
}

/// NOAA equation of time in minutes.
fn equation_of_time(l0: f64, m: f64, e: f64, eps0: f64) -> f64 {
    let y = (eps0.to_radians() / 2.0).tan().powi(2);
    let l0 = l0.to_radians();
    let m = m.to_radians();

    let radians = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    radians.to_degrees() * MINUTES_PER_DEGREE
}
