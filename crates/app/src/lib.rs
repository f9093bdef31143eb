//! # raceclock-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement (driven/outbound ports):
//!   - `RaceCatalog`: read access to configured races and places
//!   - `Clock`: the single source of "now"
//! - Define **driving/inbound ports** as use-case structs:
//!   - `TimelineService`: race timeline, local-day timelines, dashboard,
//!     ad-hoc solar queries
//! - Provide **in-process implementations** that need no IO
//!   (`InMemoryRaceCatalog`, `SystemClock`, `FixedClock`)
//!
//! ## Dependency rule
//! Depends on `raceclock-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod catalog;
pub mod clock;
pub mod ports;
pub mod services;
