//! Conversation agent for the bank assistant
//!
//! Rule-based pipeline for one chat turn:
//! - `intent`: ordered keyword classification
//! - `context`: account resolution from the message or carried context
//! - `handlers`: response copy and follow-up suggestions per intent
//! - `engine`: the orchestrator tying them together

pub mod context;
pub mod engine;
pub mod handlers;
pub mod intent;

pub use context::resolve_account;
pub use engine::ChatEngine;
pub use intent::{classify, Intent};
