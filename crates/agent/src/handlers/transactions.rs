//! Transaction History

use bank_assistant_accounts::AccountDirectory;
use bank_assistant_core::{format_usd, BotReply};

use super::with_account;

const MISSING_ACCOUNT: &str = "Please provide your account number to view transactions. \
Example: 'Show transactions for account 123456'";

/// How many entries count as "recent".
const RECENT_WINDOW: usize = 3;

pub fn respond(account: Option<&str>, directory: &dyn AccountDirectory) -> BotReply {
    with_account(account, directory, MISSING_ACCOUNT, |id, record| {
        if record.transactions.is_empty() {
            return BotReply::line("No recent transactions found for this account.");
        }

        let mut reply = BotReply::line(format!("Recent transactions for account {}:", id));
        let start = record.transactions.len().saturating_sub(RECENT_WINDOW);
        for entry in &record.transactions[start..] {
            reply.push(format!(
                "{}: {} - {}",
                entry.date,
                entry.description,
                format_usd(entry.amount)
            ));
        }
        reply
    })
}

/// The first suggestion interpolates the account when one is known.
pub fn quick_replies(account: Option<&str>) -> Vec<String> {
    let balance = match account {
        Some(id) => format!("Check balance for account {}", id),
        None => "Check my balance".to_string(),
    };
    vec![
        balance,
        "Transfer money".to_string(),
        "Customer support".to_string(),
    ]
}
