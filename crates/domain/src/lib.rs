//! # raceclock-domain
//!
//! Pure domain model for the raceclock 24-hour race dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **geographic points** and **places** (clock points with a time zone)
//! - Define **races** (fixed start/end schedules bound to a place)
//! - The **solar engine**: solar position, rise/set solving, event scanning
//!   and range resolution (state at the start of an interval, previous event,
//!   in-range transitions)
//! - Turn resolved ranges into proportional **timeline segments**
//! - Compute race **progress** and the elapsed/remaining **countdown readout**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Every function here is a pure function of its inputs; the current time is
//! always passed in by the caller.

pub mod error;
pub mod id;
pub mod time;

pub mod countdown;
pub mod geo;
pub mod place;
pub mod progress;
pub mod race;
pub mod solar;
pub mod timeline;
