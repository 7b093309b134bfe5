//! JSON response shapes for the API endpoints.

use serde::Serialize;

use crate::domain::Arrival;

/// One arrival in an API response.
#[derive(Debug, Clone, Serialize)]
pub struct ArrivalDto {
    pub train: String,
    pub line: String,
    pub stop_id: String,
    pub direction: String,
    /// Absolute timestamp, agency local time
    pub time: String,
    pub live: bool,
}

impl From<&Arrival> for ArrivalDto {
    fn from(arrival: &Arrival) -> Self {
        Self {
            train: arrival.train_number(),
            line: arrival.line().to_string(),
            stop_id: arrival.stop_id.clone(),
            direction: arrival.direction.to_string(),
            time: arrival.time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            live: arrival.live,
        }
    }
}

/// Response for `/api/next`.
#[derive(Debug, Clone, Serialize)]
pub struct NextResponse {
    pub line: String,
    pub stop: String,
    /// Whether any live refresh cycle has completed yet
    pub live_ready: bool,
    pub inbound: Vec<ArrivalDto>,
    pub outbound: Vec<ArrivalDto>,
}
