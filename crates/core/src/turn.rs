//! Turn Context and Outcome
//!
//! Per-turn conversational state. The only state the assistant recognizes
//! is the account the customer last referenced; the client carries it
//! between requests and the engine echoes it back on every domain turn.

use serde::{Deserialize, Deserializer, Serialize};

use crate::account::AccountId;
use crate::reply::BotReply;

/// Client-carried conversation context.
///
/// `account` is the one recognized field; unknown keys from older or
/// newer clients are dropped on deserialization, and a blank account is
/// normalized to absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    #[serde(default, deserialize_with = "non_blank_account")]
    pub account: Option<AccountId>,
}

/// Empty or whitespace-only identifiers count as no account at all.
fn non_blank_account<'de, D>(deserializer: D) -> Result<Option<AccountId>, D::Error>
where
    D: Deserializer<'de>,
{
    let account = Option::<AccountId>::deserialize(deserializer)?;
    Ok(account.filter(|id| !id.trim().is_empty()))
}

impl TurnContext {
    pub fn with_account(account: impl Into<AccountId>) -> Self {
        Self {
            account: Some(account.into()),
        }
    }
}

/// Everything the engine produces for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub reply: BotReply,
    /// Suggested follow-up prompts, at most four.
    pub quick_replies: Vec<String>,
    /// `None` on greeting and farewell turns; the client keeps what it had.
    pub context: Option<TurnContext>,
    /// Set on farewell so the client can close the session.
    pub end_of_session: bool,
}
