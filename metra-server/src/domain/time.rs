//! GTFS stop-time handling.
//!
//! GTFS arrival times are `HH:MM:SS` strings where the hour may exceed 23:
//! a service continuing past midnight stays on the previous service day, so
//! "25:10:00" means 01:10 on the day after the service date. This module
//! parses such strings, applying the midnight rollover exactly once, and
//! combines them with a service date into an absolute timestamp.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day from a GTFS stop-time record, normalized past midnight.
///
/// The rollover is applied at parse time: "25:10:00" is stored as 01:10
/// with one day carried, so combining with a service date via [`StopTime::on`]
/// needs no further adjustment.
///
/// # Examples
///
/// ```
/// use metra_server::domain::StopTime;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let st = StopTime::parse("08:15:00").unwrap();
/// assert_eq!(st.on(date).to_string(), "2024-01-01 08:15:00");
///
/// // Past-midnight service lands on the next calendar day
/// let st = StopTime::parse("25:10:00").unwrap();
/// assert_eq!(st.on(date).to_string(), "2024-01-02 01:10:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopTime {
    days_ahead: u8,
    time: NaiveTime,
}

impl StopTime {
    /// Parse a time from `HH:MM:SS` (or `HH:MM`) format.
    ///
    /// Hours up to 47 are accepted; 24 and above roll over to the next
    /// day. Minutes and seconds must be below 60.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let mut parts = s.split(':');

        let hour = parse_component(parts.next())?;
        let minute = parse_component(parts.next())?;
        let second = match parts.next() {
            Some(sec) => parse_component(Some(sec))?,
            None => 0,
        };

        if parts.next().is_some() {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        if hour > 47 {
            return Err(TimeError::new("hour must be 0-47"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        let days_ahead = (hour / 24) as u8;
        let time = NaiveTime::from_hms_opt(hour % 24, minute, second)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { days_ahead, time })
    }

    /// Combine with a service date into an absolute timestamp.
    ///
    /// The date advances by the number of days carried at parse time.
    pub fn on(&self, service_date: NaiveDate) -> NaiveDateTime {
        service_date
            .checked_add_days(Days::new(u64::from(self.days_ahead)))
            .unwrap_or(service_date)
            .and_time(self.time)
    }

    /// The normalized time-of-day component.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Days carried past the service date (0 or 1 in practice).
    pub fn days_ahead(&self) -> u8 {
        self.days_ahead
    }
}

impl std::fmt::Debug for StopTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StopTime({}+{}d)", self.time.format("%H:%M:%S"), self.days_ahead)
    }
}

fn parse_component(part: Option<&str>) -> Result<u32, TimeError> {
    let part = part.ok_or_else(|| TimeError::new("expected HH:MM:SS format"))?;
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::new("invalid digits in time component"));
    }
    part.parse()
        .map_err(|_| TimeError::new("invalid digits in time component"))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every valid hour/minute/second combination parses, and hours
        /// ≥ 24 always land one day later than the service date.
        #[test]
        fn rollover_matches_hour(h in 0u32..48, m in 0u32..60, s in 0u32..60) {
            let st = StopTime::parse(&format!("{h:02}:{m:02}:{s:02}")).unwrap();
            let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let at = st.on(base);
            let expected_date = if h >= 24 {
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
            } else {
                base
            };
            prop_assert_eq!(at.date(), expected_date);
            prop_assert_eq!(at.time(), NaiveTime::from_hms_opt(h % 24, m, s).unwrap());
        }
    }
}
