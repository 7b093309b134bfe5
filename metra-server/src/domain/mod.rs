//! Domain types for the next-train engine.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod arrival;
mod calendar;
mod direction;
mod time;
mod trip_id;

pub use arrival::Arrival;
pub use calendar::ServiceCalendar;
pub use direction::Direction;
pub use time::{StopTime, TimeError};
pub use trip_id::{InvalidTripId, TripId};
