//! Metra next-train server.
//!
//! A web application that answers: "when is the next train at this stop
//! on this line?" The static GTFS timetable is expanded into dated
//! arrivals at startup; a background task merges in real-time trip
//! updates every 30 seconds.

pub mod config;
pub mod domain;
pub mod engine;
pub mod feed;
pub mod schedule;
pub mod web;
