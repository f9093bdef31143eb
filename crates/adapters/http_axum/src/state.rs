//! Shared application state for axum handlers.

use std::sync::Arc;

use raceclock_app::ports::{Clock, RaceCatalog};
use raceclock_app::services::catalog_service::CatalogService;
use raceclock_app::services::timeline_service::TimelineService;
use raceclock_domain::id::{PlaceId, RaceId};

/// What `/api/dashboard` shows when the query names no race or places.
#[derive(Debug, Clone, Default)]
pub struct DashboardDefaults {
    /// Race to show; the first catalog race when `None`.
    pub race: Option<RaceId>,
    /// Places shown next to the race's own place.
    pub places: Vec<PlaceId>,
}

/// Application state shared across all axum handlers.
///
/// Generic over the catalog and clock types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<C, K> {
    /// Race and place lookups.
    pub catalog_service: Arc<CatalogService<C>>,
    /// Solar timelines.
    pub timeline_service: Arc<TimelineService<C, K>>,
    /// Fallbacks for the dashboard endpoint.
    pub dashboard: Arc<DashboardDefaults>,
}

impl<C, K> Clone for AppState<C, K> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
            timeline_service: Arc::clone(&self.timeline_service),
            dashboard: Arc::clone(&self.dashboard),
        }
    }
}

impl<C, K> AppState<C, K>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        catalog_service: CatalogService<C>,
        timeline_service: TimelineService<C, K>,
        dashboard: DashboardDefaults,
    ) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            timeline_service: Arc::new(timeline_service),
            dashboard: Arc::new(dashboard),
        }
    }
}
