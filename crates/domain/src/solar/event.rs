//! Solar events, the states they lead into, and the altitudes that define them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::Timestamp;

/// Solar state holding over a stretch of the timeline.
///
/// `Dawn` and `Dusk` belong to the twilight thresholds; the range resolver
/// only ever produces `Day` and `Night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    Day,
    Night,
    Dawn,
    Dusk,
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => f.write_str("day"),
            Self::Night => f.write_str("night"),
            Self::Dawn => f.write_str("dawn"),
            Self::Dusk => f.write_str("dusk"),
        }
    }
}

/// What happened at a [`SolarEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarEventKind {
    Sunrise,
    Sunset,
    CivilBegin,
    CivilEnd,
    NauticalBegin,
    NauticalEnd,
    AstroBegin,
    AstroEnd,
}

impl SolarEventKind {
    /// The state that begins when this event happens.
    #[must_use]
    pub fn resulting_state(self) -> StateKind {
        match self {
            Self::Sunrise => StateKind::Day,
            Self::Sunset => StateKind::Night,
            Self::CivilBegin | Self::NauticalBegin | Self::AstroBegin => StateKind::Dawn,
            Self::CivilEnd | Self::NauticalEnd | Self::AstroEnd => StateKind::Dusk,
        }
    }

    /// Whether the sun is climbing through the threshold.
    #[must_use]
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilBegin | Self::NauticalBegin | Self::AstroBegin
        )
    }
}

impl std::fmt::Display for SolarEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sunrise => f.write_str("sunrise"),
            Self::Sunset => f.write_str("sunset"),
            Self::CivilBegin => f.write_str("civil_begin"),
            Self::CivilEnd => f.write_str("civil_end"),
            Self::NauticalBegin => f.write_str("nautical_begin"),
            Self::NauticalEnd => f.write_str("nautical_end"),
            Self::AstroBegin => f.write_str("astro_begin"),
            Self::AstroEnd => f.write_str("astro_end"),
        }
    }
}

/// Solar altitude whose crossing defines a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AltitudeThreshold {
    /// Upper limb on the visual horizon: −0.833° (radius + refraction).
    #[default]
    Horizon,
    /// Civil twilight, −6°.
    Civil,
    /// Nautical twilight, −12°.
    Nautical,
    /// Astronomical twilight, −18°.
    Astronomical,
}

impl AltitudeThreshold {
    pub const HORIZON_DEG: f64 = -0.833;
    pub const CIVIL_DEG: f64 = -6.0;
    pub const NAUTICAL_DEG: f64 = -12.0;
    pub const ASTRONOMICAL_DEG: f64 = -18.0;

    /// Signed solar altitude in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::Horizon => Self::HORIZON_DEG,
            Self::Civil => Self::CIVIL_DEG,
            Self::Nautical => Self::NAUTICAL_DEG,
            Self::Astronomical => Self::ASTRONOMICAL_DEG,
        }
    }

    /// Event kinds for the (rising, setting) crossings of this threshold.
    #[must_use]
    pub fn crossing_kinds(self) -> (SolarEventKind, SolarEventKind) {
        match self {
            Self::Horizon => (SolarEventKind::Sunrise, SolarEventKind::Sunset),
            Self::Civil => (SolarEventKind::CivilBegin, SolarEventKind::CivilEnd),
            Self::Nautical => (SolarEventKind::NauticalBegin, SolarEventKind::NauticalEnd),
            Self::Astronomical => (SolarEventKind::AstroBegin, SolarEventKind::AstroEnd),
        }
    }
}

impl FromStr for AltitudeThreshold {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizon" => Ok(Self::Horizon),
            "civil" => Ok(Self::Civil),
            "nautical" => Ok(Self::Nautical),
            "astronomical" => Ok(Self::Astronomical),
            _ => Err(ValidationError::InvalidParameter {
                name: "altitude",
                value: s.to_owned(),
            }),
        }
    }
}

/// A single transition of the solar state at a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarEvent {
    pub kind: SolarEventKind,
    /// State that begins at [`when`](Self::when).
    pub state: StateKind,
    pub when: Timestamp,
    pub altitude_deg: f64,
}

impl SolarEvent {
    #[must_use]
    pub fn new(kind: SolarEventKind, when: Timestamp, threshold: AltitudeThreshold) -> Self {
        Self {
            kind,
            state: kind.resulting_state(),
            when,
            altitude_deg: threshold.degrees(),
        }
    }

    /// Identity used for deduplication: kind plus instant to the millisecond.
    #[must_use]
    pub fn dedup_key(&self) -> (SolarEventKind, i64) {
        (self.kind, self.when.timestamp_millis())
    }
}
