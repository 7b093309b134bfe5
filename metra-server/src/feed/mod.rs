//! Metra GTFS API client.
//!
//! This module provides an HTTP client for the Metra GTFS API, which
//! serves both the static schedule (calendar, trips, stop times as JSON)
//! and the real-time trip updates feed.
//!
//! Key characteristics of the API:
//! - HTTP basic auth with a 32-character username/password pair
//! - Schedule endpoints return full-table JSON arrays
//! - `tripUpdates` entities reference schedule trip ids; predictions for
//!   trips the schedule does not know must be ignored

mod client;
mod convert;
mod error;
mod types;

pub use client::{MetraClient, MetraConfig};
pub use convert::live_arrivals;
pub use error::FeedError;
pub use types::{
    EventTime, StopTimeEvent, StopTimeUpdate, TripDescriptor, TripUpdate, TripUpdateEntity,
};
