//! Intent Classification
//!
//! Maps free text onto the closed set of supported intents with an
//! ordered keyword table. Matching is plain substring containment over
//! the lowercased input; table order is the precedence contract
//! (greeting outranks balance, balance outranks transfer).

/// Closed set of conversation intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Farewell,
    Balance,
    Transactions,
    Card,
    Loans,
    Transfer,
    ExchangeRates,
    Branches,
    Support,
    Fallback,
}

impl Intent {
    /// Stable lowercase name for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Balance => "balance",
            Intent::Transactions => "transactions",
            Intent::Card => "card",
            Intent::Loans => "loans",
            Intent::Transfer => "transfer",
            Intent::ExchangeRates => "exchange_rates",
            Intent::Branches => "branches",
            Intent::Support => "support",
            Intent::Fallback => "fallback",
        }
    }
}

/// Keyword groups in precedence order. The first group with any keyword
/// contained in the input wins; no group matching means fallback.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["hi", "hello", "hey", "good morning", "good afternoon"],
    ),
    (Intent::Farewell, &["bye", "goodbye", "see you", "exit"]),
    (Intent::Balance, &["balance", "how much do i have"]),
    (
        Intent::Transactions,
        &["transaction", "history", "statement"],
    ),
    (Intent::Card, &["card", "debit", "credit"]),
    (Intent::Loans, &["loan", "emi", "repayment"]),
    (Intent::Transfer, &["transfer", "send money"]),
    (Intent::ExchangeRates, &["exchange", "currency", "forex"]),
    (Intent::Branches, &["branch", "location", "atm"]),
    (Intent::Support, &["support", "help", "contact"]),
];

/// Classify a raw user message.
///
/// Lowercases internally so callers pass the message as typed. There are
/// no word-boundary checks: any text containing a keyword substring
/// matches, and multi-group inputs resolve by table position.
pub fn classify(message: &str) -> Intent {
    let text = message.to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Fallback)
}
