//! Serde DTOs for the Metra trip updates feed.
//!
//! The feed is GTFS-realtime rendered as JSON. Only the fields the engine
//! consumes are modeled; everything else is ignored by serde.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One feed entity from `tripUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripUpdateEntity {
    #[serde(default)]
    pub trip_update: Option<TripUpdate>,
}

/// A trip update: the trip it describes plus per-stop predictions.
#[derive(Debug, Clone, Deserialize)]
pub struct TripUpdate {
    pub trip: TripDescriptor,
    #[serde(default)]
    pub stop_time_update: Vec<StopTimeUpdate>,
}

/// Reference to a scheduled trip.
#[derive(Debug, Clone, Deserialize)]
pub struct TripDescriptor {
    pub trip_id: String,
}

/// A predicted arrival at one stop.
///
/// Updates with no arrival prediction (departure-only records, or
/// skipped stops) carry `arrival: null` and are ignored downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct StopTimeUpdate {
    pub stop_id: String,
    #[serde(default)]
    pub arrival: Option<StopTimeEvent>,
}

/// The predicted time of an arrival.
///
/// Metra serializes protobuf 64-bit timestamps as `{"low": <ISO-8601>}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopTimeEvent {
    pub time: EventTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventTime {
    pub low: DateTime<FixedOffset>,
}
