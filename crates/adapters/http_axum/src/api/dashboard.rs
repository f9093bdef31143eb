//! JSON handler for the combined dashboard view.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use raceclock_app::ports::{Clock, RaceCatalog};
use raceclock_app::services::timeline_service::Dashboard;
use raceclock_domain::error::{NotFoundError, RaceClockError};
use raceclock_domain::id::{PlaceId, RaceId};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for `GET /api/dashboard`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Race identifier; falls back to the configured default.
    pub race: Option<String>,
    /// Comma-separated place identifiers; falls back to the configured list.
    pub places: Option<String>,
}

/// Possible responses from the dashboard endpoint.
pub enum ShowResponse {
    Ok(Json<Dashboard>),
}

impl IntoResponse for ShowResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/dashboard?race=..&places=a,b`
pub async fn show<C, K>(
    State(state): State<AppState<C, K>>,
    Query(query): Query<DashboardQuery>,
) -> Result<ShowResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let race_id = match query.race.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => RaceId::new(raw)?,
        None => match &state.dashboard.race {
            Some(id) => id.clone(),
            None => first_race_id(&state).await?,
        },
    };

    let place_ids = match query.places.as_deref() {
        Some(raw) => parse_place_list(raw)?,
        None => state.dashboard.places.clone(),
    };

    let dashboard = state.timeline_service.dashboard(&race_id, &place_ids).await?;
    Ok(ShowResponse::Ok(Json(dashboard)))
}

async fn first_race_id<C, K>(state: &AppState<C, K>) -> Result<RaceId, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let races = state.catalog_service.list_races().await?;
    races.into_iter().next().map(|race| race.id).ok_or_else(|| {
        ApiError::from(RaceClockError::from(NotFoundError {
            entity: "Race",
            id: "default".to_string(),
        }))
    })
}

/// Split `a,b,,c` into place identifiers, skipping empty items.
fn parse_place_list(raw: &str) -> Result<Vec<PlaceId>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| PlaceId::new(item).map_err(ApiError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_comma_separated_places() {
        let ids = parse_place_list("tokyo, spa,,").unwrap();
        let ids: Vec<_> = ids.iter().map(PlaceId::as_str).collect();
        assert_eq!(ids, vec!["tokyo", "spa"]);
    }

    #[test]
    fn should_accept_empty_place_list() {
        assert!(parse_place_list("").unwrap().is_empty());
    }
}
