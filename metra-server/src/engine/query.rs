//! The next-arrivals merge algorithm.
//!
//! Overlays live records onto windowed scheduled candidates: a live
//! record for a train already in the candidate list replaces it (the feed
//! is always considered more accurate than the static timetable); a live
//! record for a train absent from the window is inserted, modeling a
//! train running far enough off schedule to have left the static window.

use chrono::NaiveDateTime;

use crate::domain::Arrival;

/// Arrivals for one stop, partitioned by direction and ordered ascending
/// by timestamp.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub inbound: Vec<Arrival>,
    pub outbound: Vec<Arrival>,
}

/// The single next train per direction.
///
/// Either side is `None` when no arrival falls inside the query window,
/// which is a normal result, not an error.
#[derive(Debug, Clone, Default)]
pub struct NextTrains {
    pub inbound: Option<Arrival>,
    pub outbound: Option<Arrival>,
}

/// Merge live records into scheduled candidates and produce the board.
///
/// `candidates` must already be windowed and deduplicated by train
/// number (source timetable order); `live` is the most recent complete
/// live snapshot. Ties on timestamp keep the candidate encounter order
/// (the sort is stable and no secondary key is defined).
pub fn merge_board(
    mut candidates: Vec<Arrival>,
    live: &[Arrival],
    line_prefix: &str,
    stop_id: &str,
    now: NaiveDateTime,
    count: usize,
) -> Board {
    for record in live {
        if record.stop_id != stop_id || !record.line().starts_with(line_prefix) {
            continue;
        }

        let train = record.train_number();
        match candidates.iter().position(|c| c.train_number() == train) {
            Some(pos) => candidates[pos] = record.clone(),
            None => candidates.push(record.clone()),
        }
    }

    // A live override may have moved a train into the past; drop it even
    // though the scheduled entry passed the window filter.
    candidates.retain(|c| c.time > now);

    candidates.sort_by(|a, b| a.time.cmp(&b.time));

    let mut board = Board::default();
    for arrival in candidates {
        let side = if arrival.direction.is_inbound() {
            &mut board.inbound
        } else {
            &mut board.outbound
        };
        if side.len() < count {
            side.push(arrival);
        }
    }
    board
}
