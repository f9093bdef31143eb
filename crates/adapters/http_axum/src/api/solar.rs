//! JSON handlers for ad-hoc solar queries at arbitrary coordinates.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use raceclock_app::ports::{Clock, RaceCatalog};
use raceclock_app::services::timeline_service::{
    SolarDay, SolarDayQuery, SolarRange, SolarRangeQuery,
};
use raceclock_domain::solar::{AltitudeThreshold, RangeOptions};
use raceclock_domain::time::{parse_date, parse_timestamp};

use super::{parse_param, required};
use crate::error::ApiError;
use crate::state::AppState;

/// Query string for `GET /api/solar/range`.
///
/// Every field is taken as text so malformed values surface as JSON
/// validation errors rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub search_back_days: Option<String>,
    pub search_fwd_days: Option<String>,
}

/// Query string for `GET /api/solar/day`.
#[derive(Debug, Default, Deserialize)]
pub struct DayParams {
    pub date: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub altitude: Option<String>,
}

/// Possible responses from the range endpoint.
pub enum RangeResponse {
    Ok(Json<SolarRange>),
}

impl IntoResponse for RangeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the day endpoint.
pub enum DayResponse {
    Ok(Json<SolarDay>),
}

impl IntoResponse for DayResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/solar/range?from&to&lat&lon[&search_back_days&search_fwd_days]`
pub async fn range<C, K>(
    State(state): State<AppState<C, K>>,
    Query(params): Query<RangeParams>,
) -> Result<RangeResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let from = parse_timestamp(required(params.from.as_deref(), "from")?)?;
    let to = parse_timestamp(required(params.to.as_deref(), "to")?)?;
    let latitude = parse_param(required(params.lat.as_deref(), "lat")?, "lat")?;
    let longitude = parse_param(required(params.lon.as_deref(), "lon")?, "lon")?;

    let options = if params.search_back_days.is_some() || params.search_fwd_days.is_some() {
        let defaults = state.timeline_service.range_options();
        Some(RangeOptions {
            search_back_days: params
                .search_back_days
                .as_deref()
                .map(|v| parse_param(v, "search_back_days"))
                .transpose()?
                .unwrap_or(defaults.search_back_days),
            search_fwd_days: params
                .search_fwd_days
                .as_deref()
                .map(|v| parse_param(v, "search_fwd_days"))
                .transpose()?
                .unwrap_or(defaults.search_fwd_days),
        })
    } else {
        None
    };

    let result = state.timeline_service.solar_range(SolarRangeQuery {
        from,
        to,
        latitude,
        longitude,
        options,
    })?;
    Ok(RangeResponse::Ok(Json(result)))
}

/// `GET /api/solar/day?date&lat&lon[&altitude]`
pub async fn day<C, K>(
    State(state): State<AppState<C, K>>,
    Query(params): Query<DayParams>,
) -> Result<DayResponse, ApiError>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    let date = parse_date(required(params.date.as_deref(), "date")?)?;
    let latitude = parse_param(required(params.lat.as_deref(), "lat")?, "lat")?;
    let longitude = parse_param(required(params.lon.as_deref(), "lon")?, "lon")?;
    let altitude = params
        .altitude
        .as_deref()
        .map(str::parse::<AltitudeThreshold>)
        .transpose()?
        .unwrap_or_default();

    let result = state.timeline_service.solar_day(SolarDayQuery {
        date,
        latitude,
        longitude,
        altitude,
    })?;
    Ok(DayResponse::Ok(Json(result)))
}
