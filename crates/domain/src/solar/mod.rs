//! Solar event engine.
//!
//! Leaves first:
//! - [`position`]: declination and equation of time for a UTC day
//! - [`rise_set`]: crossings of an altitude on one day, or a polar outcome
//! - [`scanner`]: sorted, deduplicated events over a window of days
//! - [`range`]: events inside an interval, the previous event, and the
//!   state at the interval start
//!
//! Everything here is a deterministic function of its inputs. Minute-level
//! rounding of rise/set matches the error budget of the low-precision series.

pub mod event;
pub mod position;
pub mod range;
pub mod rise_set;
pub mod scanner;

pub use event::{AltitudeThreshold, SolarEvent, SolarEventKind, StateKind};
pub use position::{SolarPosition, position_for};
pub use range::{RangeOptions, RangeResult, resolve_range, state_at};
pub use rise_set::{DayComputation, rise_set_at_altitude};
pub use scanner::{dedup_events, scan};
