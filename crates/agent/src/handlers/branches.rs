//! Branch Directory

use bank_assistant_config::DomainConfig;
use bank_assistant_core::BotReply;

pub fn respond(domain: &DomainConfig) -> BotReply {
    let mut reply = BotReply::line("Our branch locations:");
    for branch in &domain.branches {
        reply.push(format!(
            "{}: {} (Hours: {})",
            branch.name, branch.address, branch.hours
        ));
    }
    reply
}

pub fn quick_replies() -> Vec<String> {
    vec![
        "Nearest branch to me".to_string(),
        "ATM locations".to_string(),
        "Business hours".to_string(),
    ]
}
