//! Place: a named clock point on the map with its own time zone.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{RaceClockError, ValidationError};
use crate::geo::GeoPoint;
use crate::id::PlaceId;
use crate::time::parse_time_zone;

/// A location whose local day and solar state the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub label: String,
    /// IANA time zone name, e.g. `Europe/Paris`.
    pub time_zone: String,
    pub point: GeoPoint,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder() -> PlaceBuilder {
        PlaceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::Validation`] when `label` is empty, the time
    /// zone is unknown, or the point is out of range.
    pub fn validate(&self) -> Result<(), RaceClockError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        parse_time_zone(&self.time_zone)?;
        self.point.validate()?;
        Ok(())
    }

    /// Resolved time zone.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeZone`] when `time_zone` is unknown.
    pub fn tz(&self) -> Result<Tz, ValidationError> {
        parse_time_zone(&self.time_zone)
    }
}

/// Step-by-step builder for [`Place`].
#[derive(Debug, Default)]
pub struct PlaceBuilder {
    id: Option<PlaceId>,
    label: Option<String>,
    time_zone: Option<String>,
    point: Option<GeoPoint>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn id(mut self, id: PlaceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    #[must_use]
    pub fn point(mut self, point: GeoPoint) -> Self {
        self.point = Some(point);
        self
    }

    /// Consume the builder, validate, and return a [`Place`].
    ///
    /// The time zone defaults to `UTC` and the point to `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::Validation`] if the id or label is missing,
    /// or any field fails [`Place::validate`].
    pub fn build(self) -> Result<Place, RaceClockError> {
        let place = Place {
            id: self.id.ok_or(ValidationError::EmptyId)?,
            label: self.label.unwrap_or_default(),
            time_zone: self.time_zone.unwrap_or_else(|| "UTC".to_string()),
            point: self.point.unwrap_or(GeoPoint {
                latitude: 0.0,
                longitude: 0.0,
            }),
        };
        place.validate()?;
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_mans() -> PlaceBuilder {
        Place::builder()
            .id(PlaceId::new("le-mans").unwrap())
            .label("Le Mans")
            .time_zone("Europe/Paris")
            .point(GeoPoint::new(47.949_862_8, 0.207_354).unwrap())
    }

    #[test]
    fn should_build_valid_place_when_all_fields_provided() {
        let place = le_mans().build().unwrap();
        assert_eq!(place.id.as_str(), "le-mans");
        assert_eq!(place.label, "Le Mans");
        assert_eq!(place.tz().unwrap(), chrono_tz::Europe::Paris);
    }

    #[test]
    fn should_return_validation_error_when_id_missing() {
        let result = Place::builder().label("Nowhere").build();
        assert!(matches!(
            result,
            Err(RaceClockError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_return_validation_error_when_label_is_blank() {
        let result = le_mans().label("  ").build();
        assert!(matches!(
            result,
            Err(RaceClockError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_unknown_time_zone() {
        let result = le_mans().time_zone("Europe/Le_Mans").build();
        assert!(matches!(
            result,
            Err(RaceClockError::Validation(ValidationError::InvalidTimeZone(_)))
        ));
    }

    #[test]
    fn should_reject_out_of_range_point() {
        let result = le_mans()
            .point(GeoPoint {
                latitude: 91.0,
                longitude: 0.0,
            })
            .build();
        assert!(matches!(
            result,
            Err(RaceClockError::Validation(
                ValidationError::LatitudeOutOfRange(_)
            ))
        ));
    }

    #[test]
    fn should_default_to_utc() {
        let place = Place::builder()
            .id(PlaceId::new("null-island").unwrap())
            .label("Null Island")
            .build()
            .unwrap();
        assert_eq!(place.tz().unwrap(), chrono_tz::Tz::UTC);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let place = le_mans().build().unwrap();
        let json = serde_json::to_string(&place).unwrap();
        let parsed: Place = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, place);
    }
}
