//! HTTP transport for the bank assistant
//!
//! axum router exposing the chat engine:
//! - `wire`: JSON request/response shapes
//! - `state`: shared application state
//! - `routes`: `POST /chat` and `GET /health`
//!
//! The binary in `main.rs` wires settings, domain configuration and the
//! demo account directory together.

pub mod routes;
pub mod state;
pub mod wire;

pub use routes::build_router;
pub use state::AppState;
pub use wire::{ChatRequest, ChatResponse};
