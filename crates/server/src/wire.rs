//! Wire Types
//!
//! JSON shapes of the chat endpoint. The reply's display lines are
//! joined with "<br>" here at the boundary; the core never carries the
//! separator. Optional response keys are omitted entirely, never null.

use serde::{Deserialize, Serialize};

use bank_assistant_core::{TurnContext, TurnOutcome};

/// Separator the web client renders as a line break.
pub const LINE_SEPARATOR: &str = "<br>";

/// Body of `POST /chat`. A missing `message` fails JSON extraction and
/// is rejected by axum before any handler runs.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<TurnContext>,
}

/// Body of a successful `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub quick_replies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<TurnContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farewell: Option<bool>,
}

impl From<TurnOutcome> for ChatResponse {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            response: outcome.reply.join(LINE_SEPARATOR),
            quick_replies: outcome.quick_replies,
            context: outcome.context,
            farewell: outcome.end_of_session.then_some(true),
        }
    }
}
