//! Customer Support

use bank_assistant_config::DomainConfig;
use bank_assistant_core::BotReply;

pub fn respond(domain: &DomainConfig) -> BotReply {
    let brand = &domain.brand;
    BotReply::line(format!(
        "For customer support, please call our 24/7 helpline at {} or email us at {}. \
         Our representatives will be happy to assist you.",
        brand.helpline, brand.support_email
    ))
}

pub fn quick_replies() -> Vec<String> {
    vec![
        "Call me back".to_string(),
        "Live chat with agent".to_string(),
        "Schedule appointment".to_string(),
    ]
}
