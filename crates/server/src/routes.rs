//! HTTP Routes
//!
//! `POST /chat` runs one turn through the engine; `GET /health` is the
//! liveness probe. Request tracing and permissive CORS wrap the router
//! so the browser demo client can call from any origin.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::wire::{ChatRequest, ChatResponse};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let context = request.context.unwrap_or_default();
    let outcome = state.engine.handle(&request.message, &context);
    Json(ChatResponse::from(outcome))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
