//! HTTP-level integration tests for the chat API.
//!
//! These tests prove the wire contract of `POST /chat` and `GET /health`
//! by driving the router directly with `tower::ServiceExt::oneshot`; no
//! running server or network is involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bank_assistant_accounts::InMemoryAccountDirectory;
use bank_assistant_agent::ChatEngine;
use bank_assistant_config::DomainConfig;
use bank_assistant_server::{build_router, AppState};

fn test_app() -> axum::Router {
    let engine = ChatEngine::new(
        Arc::new(InMemoryAccountDirectory::demo()),
        Arc::new(DomainConfig::default()),
    );
    build_router(AppState::new(engine))
}

fn chat_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() })
    })
}

#[tokio::test]
async fn test_health() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_greeting_turn_has_no_context_or_farewell_keys() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({ "message": "hello" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(
        json["response"],
        "Hello! Welcome to XYZ Bank's virtual assistant. How can I help you today?"
    );
    assert_eq!(
        json["quick_replies"],
        serde_json::json!([
            "Check my balance",
            "View transactions",
            "Card information",
            "Loan details"
        ])
    );
    assert!(json.get("context").is_none());
    assert!(json.get("farewell").is_none());
}

#[tokio::test]
async fn test_balance_with_inline_account() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({
            "message": "What's my balance for account 123456?"
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(
        json["response"],
        "Your current balance for account 123456 is $5000.00."
    );
    assert_eq!(json["context"]["account"], "123456");
    assert_eq!(
        json["quick_replies"][0],
        "Show transactions for account 123456"
    );
}

#[tokio::test]
async fn test_transactions_join_lines_with_br() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({
            "message": "show my transactions",
            "context": { "account": "654321" }
        })))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(
        json["response"],
        "Recent transactions for account 654321:<br>\
         2023-05-02: Deposit - $2000.00<br>\
         2023-05-08: Online Shopping - $-320.50"
    );
    assert!(!json["response"].as_str().unwrap().ends_with("<br>"));
}

#[tokio::test]
async fn test_farewell_sets_flag_and_drops_suggestions() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({ "message": "goodbye" })))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(
        json["response"],
        "Thank you for banking with XYZ Bank. Have a great day!"
    );
    assert_eq!(json["farewell"], serde_json::json!(true));
    assert_eq!(json["quick_replies"], serde_json::json!([]));
    assert!(json.get("context").is_none());
}

#[tokio::test]
async fn test_unknown_context_fields_are_ignored() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({
            "message": "what are my loans",
            "context": { "account": "123456", "session_id": "abc", "theme": "dark" }
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(
        json["response"],
        "Loan information for account 123456:<br>\
         Type: Personal, Amount: $10000.00, EMI: $925.00, Due Date: 15th monthly"
    );
    assert_eq!(json["context"]["account"], "123456");
}

#[tokio::test]
async fn test_blank_context_account_treated_as_absent() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({
            "message": "check my balance",
            "context": { "account": "" }
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(
        json["response"],
        "Please provide your account number to check your balance. \
         Example: 'What's my balance for account 123456'?"
    );
    assert!(json["context"]["account"].is_null());
}

#[tokio::test]
async fn test_missing_message_is_rejected() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({
            "context": { "account": "123456" }
        })))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_account_free_turn_echoes_carried_account() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({
            "message": "exchange rates",
            "context": { "account": "654321" }
        })))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["context"]["account"], "654321");

    let response = json["response"].as_str().unwrap();
    assert!(response.starts_with("Current exchange rates (USD base):<br>"));
    assert!(response.contains("1 USD = 110.25 JPY"));
}

#[tokio::test]
async fn test_card_status_blocked_account() {
    let resp = test_app()
        .oneshot(chat_request(serde_json::json!({
            "message": "card status for account 654321"
        })))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(
        json["response"],
        "Dear Vaishnavi Naik, your card linked to account 654321 is currently blocked. \
         Please visit a branch or call customer support."
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
