//! Web front-end for the next-train engine.

mod dto;
mod routes;
mod state;
mod templates;

pub use dto::{ArrivalDto, NextResponse};
pub use routes::create_router;
pub use state::AppState;
