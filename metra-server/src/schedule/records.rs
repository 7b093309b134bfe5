//! Parsed flat record shapes for the static schedule.
//!
//! The engine is source-format agnostic: these records can come from
//! decoded JSON (the Metra GTFS API), CSV rows, or anything else that can
//! produce them. The serde derives cover the JSON shape the API serves.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::domain::ServiceCalendar;

/// One service calendar record (`schedule/calendar`).
///
/// Weekday flags have been observed as booleans, bare integers, and
/// `"0"`/`"1"` strings depending on the feed vintage; all are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarRecord {
    pub service_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(deserialize_with = "flag")]
    pub monday: bool,
    #[serde(deserialize_with = "flag")]
    pub tuesday: bool,
    #[serde(deserialize_with = "flag")]
    pub wednesday: bool,
    #[serde(deserialize_with = "flag")]
    pub thursday: bool,
    #[serde(deserialize_with = "flag")]
    pub friday: bool,
    #[serde(deserialize_with = "flag")]
    pub saturday: bool,
    #[serde(deserialize_with = "flag")]
    pub sunday: bool,
}

impl CalendarRecord {
    /// The weekday mask, Monday-first.
    pub fn weekdays(&self) -> [bool; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }

    /// Convert into the domain calendar type.
    pub fn into_calendar(self) -> ServiceCalendar {
        let weekdays = self.weekdays();
        ServiceCalendar {
            service_id: self.service_id,
            start_date: self.start_date,
            end_date: self.end_date,
            weekdays,
        }
    }
}

/// One trip record (`schedule/trips`).
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    pub trip_id: String,
    pub service_id: String,
    pub direction_id: u8,
}

/// One stop-time record (`schedule/stop_times`).
///
/// `arrival_time` is kept as the raw string; the index parses it with
/// the past-midnight normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct StopTimeRecord {
    pub trip_id: String,
    pub stop_id: String,
    pub arrival_time: String,
}

/// Deserialize a GTFS-style boolean flag from bool, integer, or string.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl serde::de::Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a boolean, 0/1 integer, or \"0\"/\"1\" string")
        }

        fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<bool, E> {
            match v {
                "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                _ => Err(E::invalid_value(serde::de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}
