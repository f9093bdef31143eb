//! Race catalog port: read access to the configured races and places.

use std::future::Future;

use raceclock_domain::error::RaceClockError;
use raceclock_domain::id::{PlaceId, RaceId};
use raceclock_domain::place::Place;
use raceclock_domain::race::Race;

/// Source of [`Race`]s and [`Place`]s.
///
/// Lookups return `Ok(None)` for unknown identifiers; turning that into a
/// not-found error is the service's job.
pub trait RaceCatalog {
    /// All races, in catalog order.
    fn races(&self) -> impl Future<Output = Result<Vec<Race>, RaceClockError>> + Send;

    /// A race by its identifier.
    fn race(&self, id: &RaceId)
    -> impl Future<Output = Result<Option<Race>, RaceClockError>> + Send;

    /// All places, in catalog order.
    fn places(&self) -> impl Future<Output = Result<Vec<Place>, RaceClockError>> + Send;

    /// A place by its identifier.
    fn place(
        &self,
        id: &PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, RaceClockError>> + Send;
}

impl<T: RaceCatalog + Send + Sync> RaceCatalog for std::sync::Arc<T> {
    fn races(&self) -> impl Future<Output = Result<Vec<Race>, RaceClockError>> + Send {
        (**self).races()
    }

    fn race(
        &self,
        id: &RaceId,
    ) -> impl Future<Output = Result<Option<Race>, RaceClockError>> + Send {
        (**self).race(id)
    }

    fn places(&self) -> impl Future<Output = Result<Vec<Place>, RaceClockError>> + Send {
        (**self).places()
    }

    fn place(
        &self,
        id: &PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, RaceClockError>> + Send {
        (**self).place(id)
    }
}
