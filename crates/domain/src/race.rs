//! Race: a fixed start/end schedule run at one place.

use serde::{Deserialize, Serialize};

use crate::error::{RaceClockError, ValidationError};
use crate::id::{PlaceId, RaceId};
use crate::time::Timestamp;

/// A race window, e.g. the 24 Hours of Le Mans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Where the race is held; its solar state colors the race timeline.
    pub place: PlaceId,
}

impl Race {
    /// Create a builder for constructing a [`Race`].
    #[must_use]
    pub fn builder() -> RaceBuilder {
        RaceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::Validation`] when `name` is empty or `end`
    /// is not strictly after `start`.
    pub fn validate(&self) -> Result<(), RaceClockError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.end <= self.start {
            return Err(ValidationError::EndNotAfterStart.into());
        }
        Ok(())
    }

    /// Whether `now` falls inside the race window, bounds included.
    #[must_use]
    pub fn is_running(&self, now: Timestamp) -> bool {
        self.start <= now && now <= self.end
    }
}

/// Step-by-step builder for [`Race`].
#[derive(Debug, Default)]
pub struct RaceBuilder {
    id: Option<RaceId>,
    name: Option<String>,
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    place: Option<PlaceId>,
}

impl RaceBuilder {
    #[must_use]
    pub fn id(mut self, id: RaceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn start(mut self, start: Timestamp) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn end(mut self, end: Timestamp) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn place(mut self, place: PlaceId) -> Self {
        self.place = Some(place);
        self
    }

    /// Consume the builder, validate, and return a [`Race`].
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::Validation`] if the id or place is missing,
    /// the name is empty, or the window is empty or inverted.
    pub fn build(self) -> Result<Race, RaceClockError> {
        let start = self.start.unwrap_or_default();
        let race = Race {
            id: self.id.ok_or(ValidationError::EmptyId)?,
            name: self.name.unwrap_or_default(),
            start,
            end: self.end.unwrap_or(start),
            place: self.place.ok_or(ValidationError::EmptyId)?,
        };
        race.validate()?;
        Ok(race)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_timestamp;

    fn ts(value: &str) -> Timestamp {
        parse_timestamp(value).unwrap()
    }

    fn lemans_2025() -> RaceBuilder {
        Race::builder()
            .id(RaceId::new("2025-lemans24").unwrap())
            .name("24 Hours of Le Mans 2025")
            .start(ts("2025-06-14T14:00:00+02:00"))
            .end(ts("2025-06-15T14:00:00+02:00"))
            .place(PlaceId::new("le-mans").unwrap())
    }

    #[test]
    fn should_build_valid_race() {
        let race = lemans_2025().build().unwrap();
        assert_eq!(race.start, ts("2025-06-14T12:00:00Z"));
        assert_eq!((race.end - race.start).num_hours(), 24);
        assert_eq!(race.place.as_str(), "le-mans");
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = lemans_2025().name("").build();
        assert!(matches!(
            result,
            Err(RaceClockError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_end_equal_to_start() {
        let result = lemans_2025().end(ts("2025-06-14T12:00:00Z")).build();
        assert!(matches!(
            result,
            Err(RaceClockError::Validation(ValidationError::EndNotAfterStart))
        ));
    }

    #[test]
    fn should_reject_inverted_window() {
        let result = lemans_2025().end(ts("2025-06-13T12:00:00Z")).build();
        assert!(matches!(
            result,
            Err(RaceClockError::Validation(ValidationError::EndNotAfterStart))
        ));
    }

    #[test]
    fn should_require_a_place() {
        let result = Race::builder()
            .id(RaceId::new("orphan").unwrap())
            .name("Orphan")
            .start(ts("2025-06-14T12:00:00Z"))
            .end(ts("2025-06-15T12:00:00Z"))
            .build();
        assert!(matches!(
            result,
            Err(RaceClockError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_report_running_inclusive_of_bounds() {
        let race = lemans_2025().build().unwrap();
        assert!(race.is_running(race.start));
        assert!(race.is_running(race.end));
        assert!(!race.is_running(ts("2025-06-15T12:00:01Z")));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let race = lemans_2025().build().unwrap();
        let json = serde_json::to_string(&race).unwrap();
        let parsed: Race = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, race);
    }
}
