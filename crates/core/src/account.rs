//! Account Domain Types
//!
//! Mock account records served by the account directory: balance,
//! transaction history, card state and active loans. Records are plain
//! data, cloned out of the store and never mutated after startup.

use serde::{Deserialize, Serialize};

/// Account identifier as entered by the customer (digits in practice).
pub type AccountId = String;

/// A single ledger entry in an account's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Display date, e.g. "2023-05-01". Opaque text, never parsed.
    pub date: String,
    pub description: String,
    /// Signed amount; negative values are debits.
    pub amount: f64,
}

/// An active loan attached to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Loan product in lowercase, e.g. "personal".
    pub kind: String,
    pub amount: f64,
    pub emi: f64,
    /// Descriptive due date, e.g. "15th monthly".
    pub due_date: String,
}

/// Card state linked to an account.
///
/// Serialized as the raw lowercase string so states without dedicated
/// response copy survive a round trip through config or the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardStatus {
    Active,
    Blocked,
    /// Any state the card handler has no dedicated copy for.
    Other(String),
}

impl CardStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CardStatus::Active => "active",
            CardStatus::Blocked => "blocked",
            CardStatus::Other(status) => status,
        }
    }
}

impl From<String> for CardStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => CardStatus::Active,
            "blocked" => CardStatus::Blocked,
            _ => CardStatus::Other(value),
        }
    }
}

impl From<CardStatus> for String {
    fn from(value: CardStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Everything the assistant knows about one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Customer display name, used in card messages.
    pub name: String,
    pub balance: f64,
    pub transactions: Vec<Transaction>,
    pub card_status: CardStatus,
    pub loans: Vec<Loan>,
}
