//! Clock port: where "now" comes from.

use raceclock_domain::time::Timestamp;

/// The single source of the current instant.
///
/// Everything below the application layer takes `now` as an argument, so
/// swapping the clock is enough to replay any moment of a race.
pub trait Clock {
    /// Current UTC instant.
    fn now(&self) -> Timestamp;
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
