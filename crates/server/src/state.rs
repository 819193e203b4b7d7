//! Shared Application State

use std::sync::Arc;

use bank_assistant_agent::ChatEngine;

/// Cloned into every handler by axum; the engine itself is shared.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
}

impl AppState {
    pub fn new(engine: ChatEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
