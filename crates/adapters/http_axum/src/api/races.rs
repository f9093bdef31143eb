//! JSON REST handlers for races.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use raceclock_app::ports::{Clock, RaceCatalog};
use raceclock_app::services::timeline_service::RaceTimeline;
use raceclock_domain::id::RaceId;
use raceclock_domain::race::Race;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Race>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Race>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the timeline endpoint.
pub enum TimelineResponse {
    Ok(Json<RaceTimeline>),
}

impl IntoResponse for TimelineResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/races`
pub async fn list<C, K>(State(state): State<AppState<C, K>>) -> Result<ListResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let races = state.catalog_service.list_races().await?;
    Ok(ListResponse::Ok(Json(races)))
}

/// `GET /api/races/{id}`
pub async fn get<C, K>(
    State(state): State<AppState<C, K>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let race_id = RaceId::new(id)?;
    let race = state.catalog_service.get_race(&race_id).await?;
    Ok(GetResponse::Ok(Json(race)))
}

/// `GET /api/races/{id}/timeline`
pub async fn timeline<C, K>(
    State(state): State<AppState<C, K>>,
    Path(id): Path<String>,
) -> Result<TimelineResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let race_id = RaceId::new(id)?;
    let timeline = state.timeline_service.race_timeline(&race_id).await?;
    Ok(TimelineResponse::Ok(Json(timeline)))
}
