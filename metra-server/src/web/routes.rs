//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Local;
use serde::Deserialize;

use super::dto::{ArrivalDto, NextResponse};
use super::state::AppState;
use super::templates::{IndexTemplate, StopTemplate, TrainView};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/stop", get(stop_page))
        .route("/api/next", get(next_arrivals))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

#[derive(Debug, Deserialize)]
struct StopQuery {
    line: Option<String>,
    stop: Option<String>,
}

/// Next-trains board for one stop.
async fn stop_page(
    State(state): State<AppState>,
    Query(query): Query<StopQuery>,
) -> impl IntoResponse {
    let line = query
        .line
        .unwrap_or_else(|| state.default_line.clone())
        .to_uppercase();
    let stop = query
        .stop
        .unwrap_or_else(|| state.default_stop.clone())
        .to_uppercase();

    let now = Local::now().naive_local();
    let next = state.engine.next_trains_at(now, &line, &stop).await;

    let template = StopTemplate {
        inbound: next.inbound.as_ref().map(|a| TrainView::from_arrival(a, now)),
        outbound: next
            .outbound
            .as_ref()
            .map(|a| TrainView::from_arrival(a, now)),
        line,
        stop,
    };

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

#[derive(Debug, Deserialize)]
struct NextQuery {
    line: Option<String>,
    stop: Option<String>,
    count: Option<usize>,
    live: Option<bool>,
}

/// JSON board: next arrivals per direction.
async fn next_arrivals(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
) -> Json<NextResponse> {
    let line = query
        .line
        .unwrap_or_else(|| state.default_line.clone())
        .to_uppercase();
    let stop = query
        .stop
        .unwrap_or_else(|| state.default_stop.clone())
        .to_uppercase();
    let count = query.count.unwrap_or(1).clamp(1, 10);
    let include_live = query.live.unwrap_or(true);

    let board = state.engine.get_next(&line, &stop, include_live, count).await;
    let live_ready = state.engine.last_update().await.is_some();

    Json(NextResponse {
        inbound: board.inbound.iter().map(ArrivalDto::from).collect(),
        outbound: board.outbound.iter().map(ArrivalDto::from).collect(),
        line,
        stop,
        live_ready,
    })
}
