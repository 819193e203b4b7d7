//! Account Resolution
//!
//! Pulls an account number out of the message ("... account 123456 ...")
//! or falls back to the account carried in the turn context. A number in
//! the message always overrides the carried one.

use once_cell::sync::Lazy;
use regex::Regex;

use bank_assistant_core::{AccountId, TurnContext};

static ACCOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"account\s+(\d+)").unwrap());

/// Resolve the account for this turn.
///
/// Lowercases internally, so "Account 123456" and "account 123456" both
/// match. The first number mentioned wins when there are several.
pub fn resolve_account(message: &str, context: &TurnContext) -> Option<AccountId> {
    let text = message.to_lowercase();
    ACCOUNT_PATTERN
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .or_else(|| context.account.clone())
}
