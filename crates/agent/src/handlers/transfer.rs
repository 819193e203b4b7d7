//! Money Transfer
//!
//! The assistant never executes transfers; this handler only explains
//! where to do them.

use bank_assistant_core::BotReply;

pub fn respond() -> BotReply {
    BotReply::line(
        "For security reasons, I can't process transfers directly. \
         Please use our mobile app or online banking for transfers. \
         Would you like me to explain how to make a transfer?",
    )
}

pub fn quick_replies() -> Vec<String> {
    vec![
        "Transfer between my accounts".to_string(),
        "Send to another bank".to_string(),
        "International transfer".to_string(),
    ]
}
