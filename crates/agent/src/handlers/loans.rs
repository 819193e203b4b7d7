//! Loan Information

use bank_assistant_accounts::AccountDirectory;
use bank_assistant_core::{format_usd, title_case, BotReply};

use super::with_account;

const MISSING_ACCOUNT: &str = "Please provide your account number to check loan information. \
Example: 'What are my loans for account 123456'?";

pub fn respond(account: Option<&str>, directory: &dyn AccountDirectory) -> BotReply {
    with_account(account, directory, MISSING_ACCOUNT, |id, record| {
        if record.loans.is_empty() {
            return BotReply::line(format!(
                "You currently have no active loans with account {}.",
                id
            ));
        }

        let mut reply = BotReply::line(format!("Loan information for account {}:", id));
        for loan in &record.loans {
            reply.push(format!(
                "Type: {}, Amount: {}, EMI: {}, Due Date: {}",
                title_case(&loan.kind),
                format_usd(loan.amount),
                format_usd(loan.emi),
                loan.due_date
            ));
        }
        reply
    })
}

pub fn quick_replies() -> Vec<String> {
    vec![
        "Apply for new loan".to_string(),
        "Make loan payment".to_string(),
        "View payment schedule".to_string(),
    ]
}
