//! Balance Inquiry

use bank_assistant_accounts::AccountDirectory;
use bank_assistant_core::{format_usd, BotReply};

use super::with_account;

const MISSING_ACCOUNT: &str = "Please provide your account number to check your balance. \
Example: 'What's my balance for account 123456'?";

pub fn respond(account: Option<&str>, directory: &dyn AccountDirectory) -> BotReply {
    with_account(account, directory, MISSING_ACCOUNT, |id, record| {
        BotReply::line(format!(
            "Your current balance for account {} is {}.",
            id,
            format_usd(record.balance)
        ))
    })
}

/// The first suggestion interpolates the account when one is known.
pub fn quick_replies(account: Option<&str>) -> Vec<String> {
    let transactions = match account {
        Some(id) => format!("Show transactions for account {}", id),
        None => "Show my transactions".to_string(),
    };
    vec![
        transactions,
        "Exchange rates".to_string(),
        "Branch locations".to_string(),
    ]
}
