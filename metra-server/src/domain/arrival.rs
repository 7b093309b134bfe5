//! Dated arrival records.

use chrono::NaiveDateTime;

use super::{Direction, TripId};

/// One expected arrival of a train at a stop.
///
/// A single tagged type covers both sources of truth: `live` is `false`
/// for arrivals expanded from the static timetable and `true` for
/// predictions from the real-time feed. Scheduled arrivals are built once
/// at startup and never mutated; live arrivals are replaced wholesale on
/// every refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub trip_id: TripId,
    pub stop_id: String,
    pub direction: Direction,
    /// Absolute timestamp in agency local time.
    pub time: NaiveDateTime,
    pub live: bool,
}

impl Arrival {
    /// Create a scheduled (static timetable) arrival.
    pub fn scheduled(
        trip_id: TripId,
        stop_id: String,
        direction: Direction,
        time: NaiveDateTime,
    ) -> Self {
        Self {
            trip_id,
            stop_id,
            direction,
            time,
            live: false,
        }
    }

    /// Create a live (real-time feed) arrival.
    pub fn live(
        trip_id: TripId,
        stop_id: String,
        direction: Direction,
        time: NaiveDateTime,
    ) -> Self {
        Self {
            trip_id,
            stop_id,
            direction,
            time,
            live: true,
        }
    }

    /// The line this arrival belongs to, derived from the trip id.
    pub fn line(&self) -> &str {
        self.trip_id.line()
    }

    /// The public train number, derived from the trip id.
    pub fn train_number(&self) -> String {
        self.trip_id.train_number()
    }

    /// Whole minutes from `now` until this arrival (negative if past).
    pub fn minutes_from(&self, now: NaiveDateTime) -> i64 {
        self.time.signed_duration_since(now).num_minutes()
    }
}
