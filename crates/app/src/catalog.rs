//! In-memory race catalog, built once at startup and read-only afterwards.

use std::collections::HashSet;
use std::future::Future;

use raceclock_domain::error::{RaceClockError, ValidationError};
use raceclock_domain::id::{PlaceId, RaceId};
use raceclock_domain::place::Place;
use raceclock_domain::race::Race;

use crate::ports::RaceCatalog;

/// Catalog holding races and places in the order they were configured.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRaceCatalog {
    places: Vec<Place>,
    races: Vec<Race>,
}

impl InMemoryRaceCatalog {
    /// Build a catalog after checking every entry and the links between them.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::Validation`] when a place or race fails its
    /// own validation, an identifier appears twice, or a race refers to a
    /// place that is not in `places`.
    pub fn new(places: Vec<Place>, races: Vec<Race>) -> Result<Self, RaceClockError> {
        let mut place_ids = HashSet::new();
        for place in &places {
            place.validate()?;
            if !place_ids.insert(&place.id) {
                return Err(ValidationError::DuplicateId(place.id.to_string()).into());
            }
        }

        let mut race_ids = HashSet::new();
        for race in &races {
            race.validate()?;
            if !race_ids.insert(&race.id) {
                return Err(ValidationError::DuplicateId(race.id.to_string()).into());
            }
            if !place_ids.contains(&race.place) {
                return Err(ValidationError::UnknownPlace(race.place.to_string()).into());
            }
        }

        Ok(Self { places, races })
    }

    /// Whether a race with `id` is in the catalog.
    #[must_use]
    pub fn contains_race(&self, id: &RaceId) -> bool {
        self.races.iter().any(|race| &race.id == id)
    }

    /// Whether a place with `id` is in the catalog.
    #[must_use]
    pub fn contains_place(&self, id: &PlaceId) -> bool {
        self.places.iter().any(|place| &place.id == id)
    }
}

impl RaceCatalog for InMemoryRaceCatalog {
    fn races(&self) -> impl Future<Output = Result<Vec<Race>, RaceClockError>> + Send {
        let result = self.races.clone();
        async { Ok(result) }
    }

    fn race(
        &self,
        id: &RaceId,
    ) -> impl Future<Output = Result<Option<Race>, RaceClockError>> + Send {
        let result = self.races.iter().find(|race| &race.id == id).cloned();
        async { Ok(result) }
    }

    fn places(&self) -> impl Future<Output = Result<Vec<Place>, RaceClockError>> + Send {
        let result = self.places.clone();
        async { Ok(result) }
    }

    fn place(
        &self,
        id: &PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, RaceClockError>> + Send {
        let result = self.places.iter().find(|place| &place.id == id).cloned();
        async { Ok(result) }
    }
}
