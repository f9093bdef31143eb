//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use raceclock_app::ports::{Clock, RaceCatalog};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<C, K>(state: AppState<C, K>) -> Router
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, DashboardDefaults};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use raceclock_app::services::catalog_service::CatalogService;
    use raceclock_app::services::timeline_service::TimelineService;
    use raceclock_domain::error::RaceClockError;
    use raceclock_domain::geo::GeoPoint;
    use raceclock_domain::id::{PlaceId, RaceId};
    use raceclock_domain::place::Place;
    use raceclock_domain::race::Race;
    use raceclock_domain::time::{Timestamp, parse_timestamp};
    use tower::ServiceExt;

    struct StubCatalog;
    struct StubClock;

    fn le_mans() -> Place {
        Place::builder()
            .id(PlaceId::new("le-mans").unwrap())
            .label("Le Mans")
            .time_zone("Europe/Paris")
            .point(GeoPoint::new(47.949_862_8, 0.207_354).unwrap())
            .build()
            .unwrap()
    }

    fn lemans_2025() -> Race {
        Race::builder()
            .id(RaceId::new("2025-lemans24").unwrap())
            .name("2025 - 24 Heures du Mans")
            .start(parse_timestamp("2025-06-14T14:00:00+02:00").unwrap())
            .end(parse_timestamp("2025-06-15T14:00:00+02:00").unwrap())
            .place(PlaceId::new("le-mans").unwrap())
            .build()
            .unwrap()
    }

    impl RaceCatalog for StubCatalog {
        async fn races(&self) -> Result<Vec<Race>, RaceClockError> {
            Ok(vec![lemans_2025()])
        }
        async fn race(&self, id: &RaceId) -> Result<Option<Race>, RaceClockError> {
            Ok((id.as_str() == "2025-lemans24").then(lemans_2025))
        }
        async fn places(&self) -> Result<Vec<Place>, RaceClockError> {
            Ok(vec![le_mans()])
        }
        async fn place(&self, id: &PlaceId) -> Result<Option<Place>, RaceClockError> {
            Ok((id.as_str() == "le-mans").then(le_mans))
        }
    }

    impl Clock for StubClock {
        fn now(&self) -> Timestamp {
            parse_timestamp("2025-06-14T18:00:00Z").unwrap()
        }
    }

    fn test_state() -> AppState<StubCatalog, StubClock> {
        AppState::new(
            CatalogService::new(StubCatalog),
            TimelineService::new(StubCatalog, StubClock),
            DashboardDefaults::default(),
        )
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = build(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_races() {
        let (status, json) = get_json("/api/races").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["id"], "2025-lemans24");
        assert_eq!(json[0]["place"], "le-mans");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_race() {
        let (status, json) = get_json("/api/races/1923-lemans24").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Race 1923-lemans24 not found");
    }

    #[tokio::test]
    async fn should_return_race_timeline() {
        let (status, json) = get_json("/api/races/2025-lemans24/timeline").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["readout"]["elapsed"], "+06:00:00");
        assert_eq!(json["range"]["initial_state"], "day");
        assert_eq!(json["segments"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_return_place_day() {
        let (status, json) = get_json("/api/places/le-mans/day").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["day_start"], "2025-06-13T22:00:00Z");
        assert_eq!(json["state"], "day");
    }

    #[tokio::test]
    async fn should_fall_back_to_first_race_on_dashboard() {
        let (status, json) = get_json("/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["race"]["race"]["id"], "2025-lemans24");
        assert_eq!(json["places"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_dashboard_place() {
        let (status, _) = get_json("/api/dashboard?places=atlantis").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_resolve_solar_range() {
        let (status, json) = get_json(
            "/api/solar/range?from=2025-06-14T12:00:00Z&to=2025-06-15T12:00:00Z&lat=47.9498628&lon=0.207354",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let events = json["range"]["events"].as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["kind"], "sunset");
        assert_eq!(json["options"]["search_back_days"], 14);
    }

    #[tokio::test]
    async fn should_reject_solar_range_without_coordinates() {
        let (status, json) =
            get_json("/api/solar/range?from=2025-06-14T12:00:00Z&to=2025-06-15T12:00:00Z").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "missing parameter: lat");
    }

    #[tokio::test]
    async fn should_reject_out_of_range_latitude() {
        let (status, _) = get_json("/api/solar/day?date=2025-06-21&lat=100&lon=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_report_polar_day() {
        let (status, json) =
            get_json("/api/solar/day?date=2025-06-21&lat=75&lon=0&altitude=horizon").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["computation"]["status"], "sun_never_sets");
    }
}
