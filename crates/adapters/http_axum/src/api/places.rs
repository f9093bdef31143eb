//! JSON REST handlers for places.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use raceclock_app::ports::{Clock, RaceCatalog};
use raceclock_app::services::timeline_service::PlaceTimeline;
use raceclock_domain::id::PlaceId;
use raceclock_domain::place::Place;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Place>>),
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
    Ok(Json<Place>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the local-day endpoint.
pub enum DayResponse {
    Ok(Json<PlaceTimeline>),
}

impl IntoResponse for DayResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/places`
pub async fn list<C, K>(State(state): State<AppState<C, K>>) -> Result<ListResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let places = state.catalog_service.list_places().await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `GET /api/places/{id}`
pub async fn get<C, K>(
    State(state): State<AppState<C, K>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let place_id = PlaceId::new(id)?;
    let place = state.catalog_service.get_place(&place_id).await?;
    Ok(GetResponse::Ok(Json(place)))
}

/// `GET /api/places/{id}/day`
pub async fn day<C, K>(
    State(state): State<AppState<C, K>>,
    Path(id): Path<String>,
) -> Result<DayResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let place_id = PlaceId::new(id)?;
    let timeline = state.timeline_service.place_day_timeline(&place_id).await?;
    Ok(DayResponse::Ok(Json(timeline)))
}
