//! Conversion from feed entities to live arrival records.

use chrono::Local;
use tracing::debug;

use crate::domain::{Arrival, TripId};
use crate::schedule::ScheduleIndex;

use super::types::TripUpdateEntity;

/// Convert trip update entities into live [`Arrival`] records.
///
/// Only trips known to the schedule index produce records; the feed
/// occasionally carries trips outside the current schedule (or non-trip
/// entities entirely), and those are silently dropped rather than
/// errored. Stop-time updates with no arrival prediction are skipped.
/// Predicted times are converted to agency local time to match the
/// scheduled timestamps.
pub fn live_arrivals(entities: &[TripUpdateEntity], index: &ScheduleIndex) -> Vec<Arrival> {
    let mut arrivals = Vec::new();

    for entity in entities {
        let Some(update) = &entity.trip_update else {
            continue;
        };

        let Some(direction) = index.direction_of(&update.trip.trip_id) else {
            debug!(trip_id = %update.trip.trip_id, "dropping update for unknown trip");
            continue;
        };

        let Ok(trip_id) = TripId::new(update.trip.trip_id.clone()) else {
            continue;
        };

        for stop_update in &update.stop_time_update {
            let Some(arrival) = &stop_update.arrival else {
                continue;
            };

            let time = arrival.time.low.with_timezone(&Local).naive_local();
            arrivals.push(Arrival::live(
                trip_id.clone(),
                stop_update.stop_id.clone(),
                direction,
                time,
            ));
        }
    }

    arrivals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;
    use crate::schedule::{CalendarRecord, ScheduleIndex, StopTimeRecord, TripRecord};
    use chrono::{DateTime, NaiveDate};

    fn index() -> ScheduleIndex {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let calendar: CalendarRecord = serde_json::from_value(serde_json::json!({
            "service_id": "S1",
            "start_date": "2024-03-15",
            "end_date": "2024-03-15",
            "monday": 1, "tuesday": 1, "wednesday": 1, "thursday": 1,
            "friday": 1, "saturday": 1, "sunday": 1,
        }))
        .unwrap();
        ScheduleIndex::build(
            vec![calendar],
            vec![TripRecord {
                trip_id: "UP-NW_UPNW620V1".to_string(),
                service_id: "S1".to_string(),
                direction_id: 0,
            }],
            vec![StopTimeRecord {
                trip_id: "UP-NW_UPNW620V1".to_string(),
                stop_id: "DESPLAINES".to_string(),
                arrival_time: "08:15:00".to_string(),
            }],
            today,
        )
        .unwrap()
    }

    fn entity(trip_id: &str, stops: &[(&str, Option<&str>)]) -> TripUpdateEntity {
        let stop_time_update: Vec<serde_json::Value> = stops
            .iter()
            .map(|(stop_id, time)| match time {
                Some(iso) => serde_json::json!({
                    "stop_id": stop_id,
                    "arrival": {"time": {"low": iso}},
                }),
                None => serde_json::json!({"stop_id": stop_id, "arrival": null}),
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "trip_update": {
                "trip": {"trip_id": trip_id},
                "stop_time_update": stop_time_update,
            }
        }))
        .unwrap()
    }

    #[test]
    fn known_trip_produces_live_arrival() {
        let index = index();
        let entities = vec![entity(
            "UP-NW_UPNW620V1",
            &[("DESPLAINES", Some("2024-03-15T08:22:00-05:00"))],
        )];

        let arrivals = live_arrivals(&entities, &index);
        assert_eq!(arrivals.len(), 1);
        assert!(arrivals[0].live);
        assert_eq!(arrivals[0].stop_id, "DESPLAINES");
        assert_eq!(arrivals[0].direction, Direction::Inbound);

        let expected = DateTime::parse_from_rfc3339("2024-03-15T08:22:00-05:00")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(arrivals[0].time, expected);
    }

    #[test]
    fn unknown_trip_silently_dropped() {
        let index = index();
        let entities = vec![entity(
            "UP-NW_UPNW999V1",
            &[("DESPLAINES", Some("2024-03-15T08:22:00-05:00"))],
        )];

        assert!(live_arrivals(&entities, &index).is_empty());
    }

    #[test]
    fn update_without_prediction_skipped() {
        let index = index();
        let entities = vec![entity(
            "UP-NW_UPNW620V1",
            &[
                ("DESPLAINES", None),
                ("CUMBERLAND", Some("2024-03-15T08:30:00-05:00")),
            ],
        )];

        let arrivals = live_arrivals(&entities, &index);
        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].stop_id, "CUMBERLAND");
    }

    #[test]
    fn entity_without_trip_update_skipped() {
        let index = index();
        let entities: Vec<TripUpdateEntity> =
            vec![serde_json::from_value(serde_json::json!({"id": "alert-1"})).unwrap()];

        assert!(live_arrivals(&entities, &index).is_empty());
    }
}
