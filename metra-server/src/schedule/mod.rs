//! Static schedule: parsed record shapes and the dated arrival index.

mod index;
mod records;

pub use index::{ScheduleError, ScheduleIndex};
pub use records::{CalendarRecord, StopTimeRecord, TripRecord};
