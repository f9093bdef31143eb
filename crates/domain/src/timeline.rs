//! Timeline segments: proportional day/night bands over an interval.

use serde::{Deserialize, Serialize};

use crate::solar::{SolarEvent, StateKind};
use crate::time::Timestamp;

/// A contiguous stretch of the interval during which one solar state holds.
///
/// `from` and `to` are fractions of the interval, both within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: f64,
    pub to: f64,
    pub kind: StateKind,
}

impl Segment {
    /// Fraction of the interval covered by this segment.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.to - self.from
    }
}

/// Clamp `x` into `[0, 1]`; NaN stays NaN.
#[must_use]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Partition `[start, end]` into segments.
///
/// The first segment carries `initial_state`; each event starts a new segment
/// carrying its resulting state. Events are expected in ascending order, as
/// returned by [`resolve_range`](crate::solar::resolve_range). Zero-width
/// segments are dropped. Returns nothing when the interval is empty or the
/// initial state is unknown.
#[must_use]
pub fn build_segments(
    initial_state: Option<StateKind>,
    events: &[SolarEvent],
    start: Timestamp,
    end: Timestamp,
) -> Vec<Segment> {
    let Some(initial_state) = initial_state else {
        return Vec::new();
    };
    if end <= start {
        return Vec::new();
    }

    let offset = |instant: Timestamp| clamp01(fraction(start, end, instant));

    let boundaries = std::iter::once((start, initial_state))
        .chain(events.iter().map(|event| (event.when, event.state)))
        .collect::<Vec<_>>();

    boundaries
        .iter()
        .enumerate()
        .filter_map(|(index, &(at, kind))| {
            let until = boundaries.get(index + 1).map_or(end, |&(next, _)| next);
            let segment = Segment {
                from: offset(at),
                to: offset(until),
                kind,
            };
            (segment.to > segment.from).then_some(segment)
        })
        .collect()
}

/// Position of the "now" marker along the interval, clamped into `[0, 1]`.
///
/// An empty or inverted interval places the marker at 0 before its start and
/// at 1 from its start on.
#[must_use]
pub fn progress_marker(start: Timestamp, end: Timestamp, now: Timestamp) -> f64 {
    if end <= start {
        return if now < start { 0.0 } else { 1.0 };
    }
    clamp01(fraction(start, end, now))
}

#[allow(clippy::cast_precision_loss)]
fn fraction(start: Timestamp, end: Timestamp, instant: Timestamp) -> f64 {
    let total = (end - start).num_milliseconds() as f64;
    (instant - start).num_milliseconds() as f64 / total
}
