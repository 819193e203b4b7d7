//! In-Memory Account Directory
//!
//! Fixed demo records keyed by account id. This is the only directory
//! implementation shipped; a production deployment would put a ledger
//! client behind the same trait.

use std::collections::HashMap;

use bank_assistant_core::{AccountId, AccountRecord, CardStatus, Loan, Transaction};

use crate::directory::AccountDirectory;

/// Directory backed by a plain map, built once at startup.
pub struct InMemoryAccountDirectory {
    accounts: HashMap<AccountId, AccountRecord>,
}

impl InMemoryAccountDirectory {
    /// Build a directory from explicit records.
    pub fn new(accounts: impl IntoIterator<Item = (AccountId, AccountRecord)>) -> Self {
        Self {
            accounts: accounts.into_iter().collect(),
        }
    }

    /// The two demo accounts served by the assistant.
    pub fn demo() -> Self {
        Self::new([
            (
                "123456".to_string(),
                AccountRecord {
                    name: "Dhruvi Nanotkar".to_string(),
                    balance: 5000.00,
                    transactions: vec![
                        tx("2023-05-01", "Salary", 3000.00),
                        tx("2023-05-05", "Grocery", -150.00),
                        tx("2023-05-10", "Transfer to Jane", -500.00),
                    ],
                    card_status: CardStatus::Active,
                    loans: vec![Loan {
                        kind: "personal".to_string(),
                        amount: 10000.00,
                        emi: 925.00,
                        due_date: "15th monthly".to_string(),
                    }],
                },
            ),
            (
                "654321".to_string(),
                AccountRecord {
                    name: "Vaishnavi Naik".to_string(),
                    balance: 12000.50,
                    transactions: vec![
                        tx("2023-05-02", "Deposit", 2000.00),
                        tx("2023-05-08", "Online Shopping", -320.50),
                    ],
                    card_status: CardStatus::Blocked,
                    loans: vec![],
                },
            ),
        ])
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn lookup(&self, account_id: &str) -> Option<AccountRecord> {
        self.accounts.get(account_id).cloned()
    }
}

fn tx(date: &str, description: &str, amount: f64) -> Transaction {
    Transaction {
        date: date.to_string(),
        description: description.to_string(),
        amount,
    }
}
