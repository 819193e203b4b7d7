//! Intent Handlers
//!
//! One module per intent, each owning its response copy and follow-up
//! suggestions. Handlers are pure functions returning display data; a
//! missing or unknown account is part of the conversation, never an
//! error.

pub mod balance;
pub mod branches;
pub mod card;
pub mod exchange;
pub mod fallback;
pub mod loans;
pub mod support;
pub mod transactions;
pub mod transfer;

use bank_assistant_accounts::AccountDirectory;
use bank_assistant_core::{AccountRecord, BotReply};

/// Shared copy for a lookup miss.
pub(crate) const ACCOUNT_NOT_FOUND: &str =
    "Account not found. Please check your account number and try again.";

/// Failure policy shared by the account-bound handlers. No account in
/// play means the intent-specific prompt without querying the store; a
/// lookup miss means the shared not-found line; only a hit renders.
pub(crate) fn with_account(
    account: Option<&str>,
    directory: &dyn AccountDirectory,
    missing_prompt: &str,
    render: impl FnOnce(&str, &AccountRecord) -> BotReply,
) -> BotReply {
    match account {
        None => BotReply::line(missing_prompt),
        Some(id) => match directory.lookup(id) {
            None => BotReply::line(ACCOUNT_NOT_FOUND),
            Some(record) => render(id, &record),
        },
    }
}
