//! Askama templates for the web front-end.

use askama::Template;

use crate::domain::Arrival;
use chrono::NaiveDateTime;

/// Home page with the line/stop search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Next-trains board for one stop.
#[derive(Template)]
#[template(path = "stop.html")]
pub struct StopTemplate {
    pub line: String,
    pub stop: String,
    pub inbound: Option<TrainView>,
    pub outbound: Option<TrainView>,
}

/// View model for one train on the board.
#[derive(Debug, Clone)]
pub struct TrainView {
    pub train: String,
    pub minutes: i64,
    pub live: bool,
}

impl TrainView {
    /// Build from an arrival, with minutes counted from `now`.
    pub fn from_arrival(arrival: &Arrival, now: NaiveDateTime) -> Self {
        Self {
            train: arrival.train_number(),
            minutes: arrival.minutes_from(now).max(0),
            live: arrival.live,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, TripId};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn train_view_minutes() {
        let arrival = Arrival::scheduled(
            TripId::new("UP-NW_UPNW620V1".to_string()).unwrap(),
            "DESPLAINES".to_string(),
            Direction::Inbound,
            at(8, 30),
        );
        let view = TrainView::from_arrival(&arrival, at(8, 0));
        assert_eq!(view.train, "6201");
        assert_eq!(view.minutes, 30);
        assert!(!view.live);
    }

    #[test]
    fn train_view_clamps_negative_minutes() {
        let arrival = Arrival::scheduled(
            TripId::new("UP-NW_UPNW620V1".to_string()).unwrap(),
            "DESPLAINES".to_string(),
            Direction::Inbound,
            at(8, 0),
        );
        // A train shown inside the lookback tolerance reads "0 minutes"
        let view = TrainView::from_arrival(&arrival, at(8, 5));
        assert_eq!(view.minutes, 0);
    }

    #[test]
    fn stop_template_renders_both_present() {
        use askama::Template;

        let html = StopTemplate {
            line: "UP-NW".to_string(),
            stop: "DESPLAINES".to_string(),
            inbound: Some(TrainView {
                train: "620".to_string(),
                minutes: 12,
                live: true,
            }),
            outbound: None,
        }
        .render()
        .unwrap();

        assert!(html.contains("DESPLAINES"));
        assert!(html.contains("#620"));
        assert!(html.contains("12 minutes"));
        assert!(html.contains("No upcoming train"));
    }
}
