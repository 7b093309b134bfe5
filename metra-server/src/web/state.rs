//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::Engine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The schedule/live-merge engine
    pub engine: Arc<Engine>,

    /// Line shown when the request does not name one
    pub default_line: String,

    /// Stop shown when the request does not name one
    pub default_stop: String,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: Engine, default_line: impl Into<String>, default_stop: impl Into<String>) -> Self {
        Self {
            engine: Arc::new(engine),
            default_line: default_line.into(),
            default_stop: default_stop.into(),
        }
    }
}
