//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod dashboard;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod races;
#[allow(clippy::missing_errors_doc)]
pub mod solar;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use raceclock_app::ports::{Clock, RaceCatalog};
use raceclock_domain::error::ValidationError;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<C, K>() -> Router<AppState<C, K>>
where
    C: RaceCatalog + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
{
    Router::new()
        // Races
        .route("/races", get(races::list::<C, K>))
        .route("/races/{id}", get(races::get::<C, K>))
        .route("/races/{id}/timeline", get(races::timeline::<C, K>))
        // Places
        .route("/places", get(places::list::<C, K>))
        .route("/places/{id}", get(places::get::<C, K>))
        .route("/places/{id}/day", get(places::day::<C, K>))
        // Dashboard
        .route("/dashboard", get(dashboard::show::<C, K>))
        // Ad-hoc solar queries
        .route("/solar/range", get(solar::range::<C, K>))
        .route("/solar/day", get(solar::day::<C, K>))
}

/// Unwrap a query parameter that must be present.
fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ValidationError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingParameter(name))
}

/// Parse a query parameter with [`FromStr`], naming it in the error.
fn parse_param<T: FromStr>(value: &str, name: &'static str) -> Result<T, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidParameter {
            name,
            value: value.to_owned(),
        })
}
