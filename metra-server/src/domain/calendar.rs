//! Service calendars and their expansion into concrete dates.

use chrono::{Datelike, NaiveDate};

/// A GTFS service calendar: a date range plus a weekday-repeat mask.
///
/// Defines which calendar dates a service operates. The mask is
/// Monday-first, matching `chrono::Weekday::num_days_from_monday`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCalendar {
    pub service_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weekdays: [bool; 7],
}

impl ServiceCalendar {
    /// Whether the service operates on the given date's weekday.
    ///
    /// Note this checks the mask only, not the date range.
    pub fn runs_on_weekday(&self, date: NaiveDate) -> bool {
        self.weekdays[date.weekday().num_days_from_monday() as usize]
    }

    /// Expand into the ordered set of dates the service operates, never
    /// earlier than `lower_bound`.
    ///
    /// Dates before the lower bound are not emitted even when the
    /// calendar's range starts earlier; arrivals on past dates can never
    /// be queried, so expanding them would only waste memory. An inverted
    /// range (`start_date > end_date`) or a fully-past calendar yields an
    /// empty set, not an error.
    pub fn expand_from(&self, lower_bound: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut date = self.start_date.max(lower_bound);
        while date <= self.end_date {
            if self.runs_on_weekday(date) {
                dates.push(date);
            }
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar(start: NaiveDate, end: NaiveDate, weekdays: [bool; 7]) -> ServiceCalendar {
        ServiceCalendar {
            service_id: "SVC1".to_string(),
            start_date: start,
            end_date: end,
            weekdays,
        }
    }

    #[test]
    fn weekday_mask_respected() {
        // 2024-03-11 is a Monday; weekdays-only mask
        let cal = calendar(
            date(2024, 3, 11),
            date(2024, 3, 17),
            [true, true, true, true, true, false, false],
        );
        let dates = cal.expand_from(date(2024, 3, 11));
        assert_eq!(
            dates,
            vec![
                date(2024, 3, 11),
                date(2024, 3, 12),
                date(2024, 3, 13),
                date(2024, 3, 14),
                date(2024, 3, 15),
            ]
        );
        assert!(dates.iter().all(|d| d.weekday() != Weekday::Sat));
    }

    #[test]
    fn lower_bound_clips_past_dates() {
        let cal = calendar(
            date(2024, 3, 11),
            date(2024, 3, 17),
            [true; 7],
        );
        let dates = cal.expand_from(date(2024, 3, 15));
        assert_eq!(dates.first(), Some(&date(2024, 3, 15)));
        assert!(dates.iter().all(|d| *d >= date(2024, 3, 15)));
    }

    #[test]
    fn inverted_range_is_empty() {
        let cal = calendar(date(2024, 3, 17), date(2024, 3, 11), [true; 7]);
        assert!(cal.expand_from(date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn fully_past_calendar_is_empty() {
        let cal = calendar(date(2024, 1, 1), date(2024, 1, 31), [true; 7]);
        assert!(cal.expand_from(date(2024, 6, 1)).is_empty());
    }

    #[test]
    fn all_false_mask_is_empty() {
        let cal = calendar(date(2024, 3, 11), date(2024, 3, 17), [false; 7]);
        assert!(cal.expand_from(date(2024, 3, 11)).is_empty());
    }
}
