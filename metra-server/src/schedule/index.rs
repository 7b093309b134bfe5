//! The schedule index: dated, per-stop scheduled arrivals.
//!
//! Built once at startup from the three static record streams (calendars,
//! trips, stop-times) and immutable thereafter. Construction is the join
//! trips × expanded service dates × stop-times; a dangling reference
//! between the streams is a fatal error, since a timetable that does not
//! agree with itself has no safe partial interpretation.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::config::QueryWindow;
use crate::domain::{Arrival, Direction, InvalidTripId, StopTime, TimeError, TripId};

use super::records::{CalendarRecord, StopTimeRecord, TripRecord};

/// Fatal errors constructing the schedule index.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("trip {trip_id} references unknown service {service_id}")]
    UnknownService { trip_id: String, service_id: String },

    #[error("stop time at {stop_id} references unknown trip {trip_id}")]
    UnknownTrip { trip_id: String, stop_id: String },

    #[error("invalid trip id {trip_id:?}: {source}")]
    InvalidTripId {
        trip_id: String,
        source: InvalidTripId,
    },

    #[error("invalid arrival time {value:?} for trip {trip_id}: {source}")]
    InvalidArrivalTime {
        trip_id: String,
        value: String,
        source: TimeError,
    },
}

/// Per-trip data resolved during construction.
struct TripEntry {
    direction: Direction,
    /// Concrete dates this trip runs, bounded below by "today".
    active_dates: Vec<NaiveDate>,
}

/// Immutable index of all dated scheduled arrivals, keyed by stop.
#[derive(Debug)]
pub struct ScheduleIndex {
    /// Direction of every known trip, for resolving live records.
    trips: HashMap<String, Direction>,

    /// Scheduled arrivals per stop, in source timetable order.
    by_stop: HashMap<String, Vec<Arrival>>,

    arrival_count: usize,
}

impl ScheduleIndex {
    /// Build the index from the three parsed record streams.
    ///
    /// `today` bounds calendar expansion: no arrival is generated for a
    /// date before it.
    pub fn build(
        calendars: Vec<CalendarRecord>,
        trip_records: Vec<TripRecord>,
        stop_times: Vec<StopTimeRecord>,
        today: NaiveDate,
    ) -> Result<Self, ScheduleError> {
        let services: HashMap<String, _> = calendars
            .into_iter()
            .map(|c| (c.service_id.clone(), c.into_calendar()))
            .collect();

        let mut trip_entries: HashMap<String, TripEntry> = HashMap::new();
        for record in trip_records {
            let calendar =
                services
                    .get(&record.service_id)
                    .ok_or_else(|| ScheduleError::UnknownService {
                        trip_id: record.trip_id.clone(),
                        service_id: record.service_id.clone(),
                    })?;

            trip_entries.insert(
                record.trip_id,
                TripEntry {
                    direction: Direction::from_gtfs(record.direction_id),
                    active_dates: calendar.expand_from(today),
                },
            );
        }

        let mut by_stop: HashMap<String, Vec<Arrival>> = HashMap::new();
        let mut arrival_count = 0usize;
        for record in stop_times {
            let entry =
                trip_entries
                    .get(&record.trip_id)
                    .ok_or_else(|| ScheduleError::UnknownTrip {
                        trip_id: record.trip_id.clone(),
                        stop_id: record.stop_id.clone(),
                    })?;

            let trip_id = TripId::new(record.trip_id.clone()).map_err(|source| {
                ScheduleError::InvalidTripId {
                    trip_id: record.trip_id.clone(),
                    source,
                }
            })?;

            let stop_time = StopTime::parse(&record.arrival_time).map_err(|source| {
                ScheduleError::InvalidArrivalTime {
                    trip_id: record.trip_id.clone(),
                    value: record.arrival_time.clone(),
                    source,
                }
            })?;

            let arrivals = by_stop.entry(record.stop_id.clone()).or_default();
            for date in &entry.active_dates {
                arrivals.push(Arrival::scheduled(
                    trip_id.clone(),
                    record.stop_id.clone(),
                    entry.direction,
                    stop_time.on(*date),
                ));
                arrival_count += 1;
            }
        }

        let trips = trip_entries
            .into_iter()
            .map(|(id, entry)| (id, entry.direction))
            .collect();

        let index = Self {
            trips,
            by_stop,
            arrival_count,
        };
        info!(
            trips = index.trip_count(),
            stops = index.stop_count(),
            arrivals = index.arrival_count(),
            "schedule index built"
        );
        Ok(index)
    }

    /// Scheduled arrivals at a stop for a line, windowed around `now` and
    /// deduplicated by train number.
    ///
    /// `line_prefix` is matched as a prefix of each arrival's line, so
    /// "UP" covers both "UP-NW" and "UP-N". Overlapping service patterns
    /// in the source timetable can produce two arrivals for the same
    /// physical train; only the first encountered is kept.
    pub fn arrivals_for(
        &self,
        line_prefix: &str,
        stop_id: &str,
        now: NaiveDateTime,
        window: &QueryWindow,
    ) -> Vec<Arrival> {
        let Some(arrivals) = self.by_stop.get(stop_id) else {
            return Vec::new();
        };

        let mut seen_trains = HashSet::new();
        arrivals
            .iter()
            .filter(|a| a.line().starts_with(line_prefix))
            .filter(|a| window.contains(now, a.time))
            .filter(|a| seen_trains.insert(a.train_number()))
            .cloned()
            .collect()
    }

    /// Direction of a known trip, or `None` for an unrecognized id.
    pub fn direction_of(&self, trip_id: &str) -> Option<Direction> {
        self.trips.get(trip_id).copied()
    }

    /// Whether the index knows this trip id.
    pub fn knows_trip(&self, trip_id: &str) -> bool {
        self.trips.contains_key(trip_id)
    }

    /// Number of trips in the index.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Number of stops with at least one scheduled arrival.
    pub fn stop_count(&self) -> usize {
        self.by_stop.len()
    }

    /// Total number of dated scheduled arrivals.
    pub fn arrival_count(&self) -> usize {
        self.arrival_count
    }
}
