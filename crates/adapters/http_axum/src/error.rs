//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use raceclock_domain::error::{RaceClockError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RaceClockError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RaceClockError);

impl From<RaceClockError> for ApiError {
    fn from(err: RaceClockError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RaceClockError::Validation(err) => {
                tracing::debug!(error = %err, "rejected request");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            RaceClockError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
