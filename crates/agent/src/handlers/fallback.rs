//! Fallback
//!
//! Copy for messages no keyword group claimed.

use bank_assistant_core::BotReply;

pub fn respond() -> BotReply {
    BotReply::line("I'm not sure I understand. Could you please rephrase your question?")
}

pub fn quick_replies() -> Vec<String> {
    vec![
        "Check my balance".to_string(),
        "View transactions".to_string(),
        "Card information".to_string(),
    ]
}
