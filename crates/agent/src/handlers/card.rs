//! Card Status

use bank_assistant_accounts::AccountDirectory;
use bank_assistant_core::{BotReply, CardStatus};

use super::with_account;

const MISSING_ACCOUNT: &str = "Please provide your account number to check card status. \
Example: 'What's my card status for account 123456'?";

pub fn respond(account: Option<&str>, directory: &dyn AccountDirectory) -> BotReply {
    with_account(account, directory, MISSING_ACCOUNT, |id, record| {
        match &record.card_status {
            CardStatus::Active => BotReply::line(format!(
                "Dear {}, your card linked to account {} is active and ready to use.",
                record.name, id
            )),
            CardStatus::Blocked => BotReply::line(format!(
                "Dear {}, your card linked to account {} is currently blocked. \
                 Please visit a branch or call customer support.",
                record.name, id
            )),
            // No dedicated copy for other states; echo the raw status.
            CardStatus::Other(status) => {
                BotReply::line(format!("Your card status is: {}", status))
            }
        }
    })
}

pub fn quick_replies() -> Vec<String> {
    vec![
        "Report lost card".to_string(),
        "Unblock my card".to_string(),
        "Request new card".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_assistant_accounts::InMemoryAccountDirectory;
    use bank_assistant_core::AccountRecord;

    #[test]
    fn test_active_card_addresses_customer() {
        let directory = InMemoryAccountDirectory::demo();
        let reply = respond(Some("123456"), &directory);
        assert_eq!(
            reply.lines(),
            ["Dear Dhruvi Nanotkar, your card linked to account 123456 is active and ready to use."]
        );
    }

    #[test]
    fn test_blocked_card_points_to_support() {
        let directory = InMemoryAccountDirectory::demo();
        let reply = respond(Some("654321"), &directory);
        assert_eq!(
            reply.lines(),
            ["Dear Vaishnavi Naik, your card linked to account 654321 is currently blocked. \
              Please visit a branch or call customer support."]
        );
    }

    #[test]
    fn test_other_status_echoes_raw_string() {
        let record = AccountRecord {
            name: "Test".to_string(),
            balance: 0.0,
            transactions: vec![],
            card_status: CardStatus::Other("suspended".to_string()),
            loans: vec![],
        };
        let directory = InMemoryAccountDirectory::new([("333333".to_string(), record)]);

        let reply = respond(Some("333333"), &directory);
        assert_eq!(reply.lines(), ["Your card status is: suspended"]);
    }

    #[test]
    fn test_missing_account_prompt() {
        let directory = InMemoryAccountDirectory::demo();
        let reply = respond(None, &directory);
        assert_eq!(
            reply.lines(),
            ["Please provide your account number to check card status. \
              Example: 'What's my card status for account 123456'?"]
        );
    }

    #[test]
    fn test_quick_replies_are_fixed() {
        assert_eq!(
            quick_replies(),
            ["Report lost card", "Unblock my card", "Request new card"]
        );
    }
}
