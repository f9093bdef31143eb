//! Catalog service: use-cases for browsing races and places.

use raceclock_domain::error::{NotFoundError, RaceClockError};
use raceclock_domain::id::{PlaceId, RaceId};
use raceclock_domain::place::Place;
use raceclock_domain::race::Race;

use crate::ports::RaceCatalog;

/// Application service for read-only catalog lookups.
pub struct CatalogService<C> {
    catalog: C,
}

impl<C: RaceCatalog> CatalogService<C> {
    /// Create a new service backed by the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// List all races.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the catalog.
    pub async fn list_races(&self) -> Result<Vec<Race>, RaceClockError> {
        self.catalog.races().await
    }

    /// Look up a race by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::NotFound`] when no race with `id` exists,
    /// or an error from the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn get_race(&self, id: &RaceId) -> Result<Race, RaceClockError> {
        find_race(&self.catalog, id).await
    }

    /// List all places.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the catalog.
    pub async fn list_places(&self) -> Result<Vec<Place>, RaceClockError> {
        self.catalog.places().await
    }

    /// Look up a place by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::NotFound`] when no place with `id` exists,
    /// or an error from the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn get_place(&self, id: &PlaceId) -> Result<Place, RaceClockError> {
        find_place(&self.catalog, id).await
    }
}

pub(crate) async fn find_race<C: RaceCatalog>(
    catalog: &C,
    id: &RaceId,
) -> Result<Race, RaceClockError> {
    catalog.race(id).await?.ok_or_else(|| {
        NotFoundError {
            entity: "Race",
            id: id.to_string(),
        }
        .into()
    })
}

pub(crate) async fn find_place<C: RaceCatalog>(
    catalog: &C,
    id: &PlaceId,
) -> Result<Place, RaceClockError> {
    catalog.place(id).await?.ok_or_else(|| {
        NotFoundError {
            entity: "Place",
            id: id.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryRaceCatalog;
    use raceclock_domain::geo::GeoPoint;
    use raceclock_domain::time::parse_timestamp;

    fn make_service() -> CatalogService<InMemoryRaceCatalog> {
        let spa = Place::builder()
            .id(PlaceId::new("spa").unwrap())
            .label("Spa-Francorchamps")
            .time_zone("Europe/Brussels")
            .point(GeoPoint::new(50.442_890_8, 5.965_283_1).unwrap())
            .build()
            .unwrap();
        let race = Race::builder()
            .id(RaceId::new("2025-spa24").unwrap())
            .name("Spa 24 Hours 2025")
            .start(parse_timestamp("2025-06-28T16:30:00+02:00").unwrap())
            .end(parse_timestamp("2025-06-29T16:30:00+02:00").unwrap())
            .place(spa.id.clone())
            .build()
            .unwrap();
        CatalogService::new(InMemoryRaceCatalog::new(vec![spa], vec![race]).unwrap())
    }

    #[tokio::test]
    async fn should_list_races_and_places() {
        let svc = make_service();
        assert_eq!(svc.list_races().await.unwrap().len(), 1);
        assert_eq!(svc.list_places().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_get_race_by_id() {
        let svc = make_service();
        let race = svc
            .get_race(&RaceId::new("2025-spa24").unwrap())
            .await
            .unwrap();
        assert_eq!(race.name, "Spa 24 Hours 2025");
    }

    #[tokio::test]
    async fn should_return_not_found_when_race_missing() {
        let svc = make_service();
        let result = svc.get_race(&RaceId::new("2025-lemans24").unwrap()).await;
        assert!(matches!(result, Err(RaceClockError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_place_missing() {
        let svc = make_service();
        let result = svc.get_place(&PlaceId::new("tokyo").unwrap()).await;
        match result {
            Err(RaceClockError::NotFound(err)) => {
                assert_eq!(err.entity, "Place");
                assert_eq!(err.id, "tokyo");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
