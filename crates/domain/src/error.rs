//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RaceClockError`] via `#[from]`.

/// Top-level error shared by the domain and application layers.
#[derive(Debug, thiserror::Error)]
pub enum RaceClockError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated by caller-supplied data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("identifier must not be empty")]
    EmptyId,

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("unknown time zone: {0}")]
    InvalidTimeZone(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("end must be after start")]
    EndNotAfterStart,

    #[error("place {0} is not defined")]
    UnknownPlace(String),

    #[error("duplicate identifier: {0}")]
    DuplicateId(String),

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("search window of {days} days exceeds the limit of {max}")]
    SearchWindowTooLarge { days: i64, max: i64 },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
