//! Geographic point: where on Earth the sun is being watched from.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A latitude/longitude pair in degrees.
///
/// Latitude is positive north, longitude positive east. The solar engine
/// takes the fields as-is and never clamps them: range checks belong to
/// whoever builds the point ([`GeoPoint::new`] or [`GeoPoint::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point after checking both coordinates are in range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LatitudeOutOfRange`] or
    /// [`ValidationError::LongitudeOutOfRange`].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Check latitude is within `[-90, 90]` and longitude within `[-180, 180]`.
    ///
    /// NaN fails both checks.
    ///
    /// # Errors
    ///
    /// Returns the first coordinate that is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_in_range_point() {
        let p = GeoPoint::new(47.949_862_8, 0.207_354).unwrap();
        assert!((p.latitude - 47.949_862_8).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_poles_and_date_line() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn should_reject_latitude_beyond_pole() {
        assert!(matches!(
            GeoPoint::new(90.5, 0.0),
            Err(ValidationError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn should_reject_longitude_beyond_date_line() {
        assert!(matches!(
            GeoPoint::new(0.0, -181.0),
            Err(ValidationError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn should_reject_nan() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }
}
