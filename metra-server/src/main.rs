use std::net::SocketAddr;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use metra_server::config::EngineConfig;
use metra_server::engine::Engine;
use metra_server::feed::{MetraClient, MetraConfig};
use metra_server::schedule::ScheduleIndex;
use metra_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Get credentials from environment
    let username = std::env::var("METRA_USERNAME").unwrap_or_else(|_| {
        eprintln!("Warning: METRA_USERNAME not set. API calls will fail.");
        String::new()
    });
    let password = std::env::var("METRA_PASSWORD").unwrap_or_else(|_| {
        eprintln!("Warning: METRA_PASSWORD not set. API calls will fail.");
        String::new()
    });

    let default_line = std::env::var("METRA_DEFAULT_LINE").unwrap_or_else(|_| "UP-NW".to_string());
    let default_stop =
        std::env::var("METRA_DEFAULT_STOP").unwrap_or_else(|_| "DESPLAINES".to_string());

    // Create the API client
    let metra_config = MetraConfig::new(&username, &password);
    let client = MetraClient::new(metra_config).expect("Failed to create Metra client");

    // Fetch the static schedule (fail fast if unavailable)
    println!("Fetching static schedule...");
    let (calendars, trips, stop_times) = futures::try_join!(
        client.fetch_calendar(),
        client.fetch_trips(),
        client.fetch_stop_times(),
    )
    .expect("Failed to fetch static schedule");

    // An internally inconsistent timetable has no safe degraded mode
    let today = Local::now().date_naive();
    let index = ScheduleIndex::build(calendars, trips, stop_times, today)
        .expect("Failed to build schedule index");
    println!(
        "Loaded {} trips, {} arrivals at {} stops",
        index.trip_count(),
        index.arrival_count(),
        index.stop_count()
    );

    // Create the engine and start the live refresh loop
    let engine = Engine::new(index, client, EngineConfig::default());
    engine.start();

    // Build app state and router
    let state = AppState::new(engine, default_line, default_stop);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Metra next-train server listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET /          - Line/stop search form");
    println!("  GET /stop      - Next-trains board (line, stop params)");
    println!("  GET /api/next  - JSON board (line, stop, count, live params)");
    println!("  GET /health    - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
