//! Engine configuration.

use std::time::Duration;

use chrono::NaiveDateTime;

/// The bounded time range within which scheduled arrivals are relevant
/// to a query.
///
/// Trains that departed up to `lookback_mins` ago are still shown as
/// "departing now", tolerating clock and feed skew; trains further out
/// than `lookahead_mins` are not yet relevant.
#[derive(Debug, Clone)]
pub struct QueryWindow {
    /// Minutes of tolerance behind "now".
    pub lookback_mins: i64,

    /// Minutes ahead of "now" to consider.
    pub lookahead_mins: i64,
}

impl QueryWindow {
    /// The earliest timestamp inside the window.
    pub fn earliest(&self, now: NaiveDateTime) -> NaiveDateTime {
        now - chrono::Duration::minutes(self.lookback_mins)
    }

    /// The latest timestamp inside the window.
    pub fn latest(&self, now: NaiveDateTime) -> NaiveDateTime {
        now + chrono::Duration::minutes(self.lookahead_mins)
    }

    /// Whether a timestamp falls inside the window around `now`.
    pub fn contains(&self, now: NaiveDateTime, time: NaiveDateTime) -> bool {
        time >= self.earliest(now) && time <= self.latest(now)
    }
}

impl Default for QueryWindow {
    fn default() -> Self {
        Self {
            lookback_mins: 15,
            lookahead_mins: 6 * 60,
        }
    }
}

/// Configuration for the next-train engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How often the live reconciler refreshes the feed.
    pub refresh_interval: Duration,

    /// Query window applied to scheduled candidates.
    pub window: QueryWindow,
}

impl EngineConfig {
    /// Set a custom refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Set a custom query window.
    pub fn with_window(mut self, window: QueryWindow) -> Self {
        self.window = window;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(30),
            window: QueryWindow::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn default_window() {
        let window = QueryWindow::default();
        assert_eq!(window.lookback_mins, 15);
        assert_eq!(window.lookahead_mins, 360);
    }

    #[test]
    fn window_bounds() {
        let window = QueryWindow::default();
        let now = at(8, 0);
        assert_eq!(window.earliest(now), at(7, 45));
        assert_eq!(window.latest(now), at(14, 0));

        assert!(window.contains(now, at(7, 45)));
        assert!(window.contains(now, at(14, 0)));
        assert!(!window.contains(now, at(7, 44)));
        assert!(!window.contains(now, at(14, 1)));
    }

    #[test]
    fn default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
    }

    #[test]
    fn builders() {
        let config = EngineConfig::default()
            .with_refresh_interval(Duration::from_secs(5))
            .with_window(QueryWindow {
                lookback_mins: 1,
                lookahead_mins: 60,
            });
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
        assert_eq!(config.window.lookback_mins, 1);
        assert_eq!(config.window.lookahead_mins, 60);
    }
}
