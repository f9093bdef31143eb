//! Timeline service: solar timelines for races, local days and ad-hoc queries.

use chrono::NaiveDate;
use serde::Serialize;

use raceclock_domain::countdown::{Readout, readout};
use raceclock_domain::error::{RaceClockError, ValidationError};
use raceclock_domain::geo::GeoPoint;
use raceclock_domain::id::{PlaceId, RaceId};
use raceclock_domain::place::Place;
use raceclock_domain::progress::{Progress, compute_progress};
use raceclock_domain::race::Race;
use raceclock_domain::solar::{
    AltitudeThreshold, DayComputation, RangeOptions, RangeResult, SolarPosition, StateKind,
    position_for, resolve_range, rise_set_at_altitude,
};
use raceclock_domain::time::{Timestamp, local_day_window};
use raceclock_domain::timeline::{Segment, build_segments, progress_marker};

use super::catalog_service::{find_place, find_race};
use crate::ports::{Clock, RaceCatalog};

/// Upper bound on the number of UTC days a single range query may scan.
pub const MAX_SCAN_DAYS: i64 = 400;

/// Everything the race progress bar needs at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceTimeline {
    pub race: Race,
    pub place: Place,
    pub range: RangeResult,
    pub segments: Vec<Segment>,
    pub progress: Progress,
    pub readout: Readout,
    pub marker: f64,
    pub now: Timestamp,
}

/// A place's local calendar day with its day/night bands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceTimeline {
    pub place: Place,
    pub day_start: Timestamp,
    pub day_end: Timestamp,
    pub range: RangeResult,
    pub segments: Vec<Segment>,
    pub marker: f64,
    /// Solar state at `now`, read off the resolved events.
    pub state: Option<StateKind>,
}

/// The full dashboard: the race bar and one 24 h dial per place.
///
/// `places` starts with the race's own place, followed by the requested
/// places in order, each appearing once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub now: Timestamp,
    pub race: RaceTimeline,
    pub places: Vec<PlaceTimeline>,
}

/// Sunrise/sunset resolution over an arbitrary interval and point.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarRangeQuery {
    pub from: Timestamp,
    pub to: Timestamp,
    pub latitude: f64,
    pub longitude: f64,
    /// Falls back to the service's configured options when `None`.
    pub options: Option<RangeOptions>,
}

/// Result of a [`SolarRangeQuery`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarRange {
    pub from: Timestamp,
    pub to: Timestamp,
    pub point: GeoPoint,
    pub options: RangeOptions,
    pub range: RangeResult,
    pub segments: Vec<Segment>,
}

/// Crossings of one altitude threshold on one UTC day.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarDayQuery {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: AltitudeThreshold,
}

/// Result of a [`SolarDayQuery`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarDay {
    pub date: NaiveDate,
    pub point: GeoPoint,
    pub altitude: AltitudeThreshold,
    pub altitude_deg: f64,
    pub position: SolarPosition,
    pub computation: DayComputation,
    /// Minutes between the rising and setting crossings; 0 or 1440 on polar days.
    pub length_minutes: i64,
}

/// Application service computing solar timelines.
pub struct TimelineService<C, K> {
    catalog: C,
    clock: K,
    options: RangeOptions,
}

impl<C: RaceCatalog, K: Clock> TimelineService<C, K> {
    /// Create a new service backed by the given catalog and clock, using the
    /// default search window.
    pub fn new(catalog: C, clock: K) -> Self {
        Self {
            catalog,
            clock,
            options: RangeOptions::default(),
        }
    }

    /// Replace the search window used when resolving ranges.
    #[must_use]
    pub fn with_range_options(mut self, options: RangeOptions) -> Self {
        self.options = options;
        self
    }

    /// The search window used when a query does not provide one.
    #[must_use]
    pub fn range_options(&self) -> RangeOptions {
        self.options
    }

    /// Timeline of a race as of now.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::NotFound`] when the race or its place is
    /// missing, or an error from the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn race_timeline(&self, race_id: &RaceId) -> Result<RaceTimeline, RaceClockError> {
        let now = self.clock.now();
        let race = find_race(&self.catalog, race_id).await?;
        let place = find_place(&self.catalog, &race.place).await?;
        Ok(self.race_timeline_at(race, place, now))
    }

    /// Timeline of a place's current local day.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::NotFound`] when the place is missing, or
    /// [`RaceClockError::Validation`] when its time zone is unknown.
    #[tracing::instrument(skip(self))]
    pub async fn place_day_timeline(
        &self,
        place_id: &PlaceId,
    ) -> Result<PlaceTimeline, RaceClockError> {
        let now = self.clock.now();
        let place = find_place(&self.catalog, place_id).await?;
        self.place_day_at(place, now)
    }

    /// Race timeline plus a local-day timeline for the race's place and each
    /// of `place_ids`, all computed against the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::NotFound`] when the race or any place is
    /// missing, or [`RaceClockError::Validation`] for an unknown time zone.
    #[tracing::instrument(skip(self))]
    pub async fn dashboard(
        &self,
        race_id: &RaceId,
        place_ids: &[PlaceId],
    ) -> Result<Dashboard, RaceClockError> {
        let now = self.clock.now();
        let race = find_race(&self.catalog, race_id).await?;
        let race_place = find_place(&self.catalog, &race.place).await?;

        let mut wanted = vec![race.place.clone()];
        for id in place_ids {
            if !wanted.contains(id) {
                wanted.push(id.clone());
            }
        }

        let mut places = Vec::with_capacity(wanted.len());
        for id in &wanted {
            let place = if *id == race_place.id {
                race_place.clone()
            } else {
                find_place(&self.catalog, id).await?
            };
            places.push(self.place_day_at(place, now)?);
        }

        let race = self.race_timeline_at(race, race_place, now);
        tracing::debug!(places = places.len(), "dashboard assembled");
        Ok(Dashboard { now, race, places })
    }

    /// Resolve sunrise/sunset over an arbitrary interval.
    ///
    /// An inverted interval yields an empty result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::Validation`] when the point is out of range
    /// or the scan would cover more than [`MAX_SCAN_DAYS`] days.
    #[tracing::instrument(skip(self))]
    pub fn solar_range(&self, query: SolarRangeQuery) -> Result<SolarRange, RaceClockError> {
        let point = GeoPoint::new(query.latitude, query.longitude)?;
        let options = query.options.unwrap_or(self.options);

        let span_days = if query.to < query.from {
            0
        } else {
            (query.to - query.from).num_days() + 1
        };
        let days = span_days
            + i64::from(options.search_back_days.max(1))
            + i64::from(options.search_fwd_days.max(1));
        if days > MAX_SCAN_DAYS {
            return Err(ValidationError::SearchWindowTooLarge {
                days,
                max: MAX_SCAN_DAYS,
            }
            .into());
        }

        let range = resolve_range(query.from, query.to, &point, &options);
        let segments = build_segments(range.initial_state, &range.events, query.from, query.to);
        Ok(SolarRange {
            from: query.from,
            to: query.to,
            point,
            options,
            range,
            segments,
        })
    }

    /// Rise and set of one threshold on one UTC day, with the solar position.
    ///
    /// # Errors
    ///
    /// Returns [`RaceClockError::Validation`] when the point is out of range.
    #[tracing::instrument(skip(self))]
    pub fn solar_day(&self, query: SolarDayQuery) -> Result<SolarDay, RaceClockError> {
        let point = GeoPoint::new(query.latitude, query.longitude)?;
        let day = query.date.and_time(chrono::NaiveTime::MIN).and_utc();
        let altitude_deg = query.altitude.degrees();
        let computation = rise_set_at_altitude(day, &point, altitude_deg);
        let length_minutes = match computation {
            DayComputation::Ok { rise, set } => (set - rise).num_minutes(),
            DayComputation::SunNeverRises => 0,
            DayComputation::SunNeverSets => 24 * 60,
        };
        Ok(SolarDay {
            date: query.date,
            point,
            altitude: query.altitude,
            altitude_deg,
            position: position_for(day),
            computation,
            length_minutes,
        })
    }

    fn race_timeline_at(&self, race: Race, place: Place, now: Timestamp) -> RaceTimeline {
        let range = resolve_range(race.start, race.end, &place.point, &self.options);
        let segments = build_segments(range.initial_state, &range.events, race.start, race.end);
        tracing::debug!(
            race = %race.id,
            events = range.events.len(),
            segments = segments.len(),
            "race window resolved"
        );
        RaceTimeline {
            progress: compute_progress(race.start, race.end, now),
            readout: readout(race.start, race.end, now),
            marker: progress_marker(race.start, race.end, now),
            race,
            place,
            range,
            segments,
            now,
        }
    }

    fn place_day_at(&self, place: Place, now: Timestamp) -> Result<PlaceTimeline, RaceClockError> {
        let tz = place.tz()?;
        let (day_start, day_end) = local_day_window(now, tz);
        let range = resolve_range(day_start, day_end, &place.point, &self.options);
        let segments = build_segments(range.initial_state, &range.events, day_start, day_end);
        let state = range
            .events
            .iter()
            .take_while(|event| event.when <= now)
            .last()
            .map_or(range.initial_state, |event| Some(event.state));
        Ok(PlaceTimeline {
            marker: progress_marker(day_start, day_end, now),
            state,
            place,
            day_start,
            day_end,
            range,
            segments,
        })
    }
}
