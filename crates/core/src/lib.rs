//! Core domain types for the bank assistant
//!
//! Shared by every other crate in the workspace:
//! - Account records, transactions, loans and card state
//! - Per-turn context and outcome
//! - The multi-line reply builder
//! - Money and text formatting helpers

pub mod account;
pub mod format;
pub mod reply;
pub mod turn;

pub use account::{AccountId, AccountRecord, CardStatus, Loan, Transaction};
pub use format::{format_rate, format_usd, title_case};
pub use reply::BotReply;
pub use turn::{TurnContext, TurnOutcome};
