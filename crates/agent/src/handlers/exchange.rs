//! Exchange Rates

use bank_assistant_config::DomainConfig;
use bank_assistant_core::{format_rate, BotReply};

/// One line per configured currency, in table order. Rates are display
/// data, not money; whole-number rates keep one decimal ("1.0").
pub fn respond(domain: &DomainConfig) -> BotReply {
    let mut reply = BotReply::line("Current exchange rates (USD base):");
    for entry in &domain.exchange_rates {
        reply.push(format!("1 USD = {} {}", format_rate(entry.rate), entry.code));
    }
    reply
}

pub fn quick_replies() -> Vec<String> {
    vec![
        "Order foreign currency".to_string(),
        "View historical rates".to_string(),
        "Currency calculator".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_default_table_in_order() {
        let reply = respond(&DomainConfig::default());
        assert_eq!(
            reply.lines(),
            [
                "Current exchange rates (USD base):",
                "1 USD = 1.0 USD",
                "1 USD = 0.85 EUR",
                "1 USD = 0.72 GBP",
                "1 USD = 110.25 JPY",
                "1 USD = 1.21 CAD",
            ]
        );
    }

    #[test]
    fn test_quick_replies_are_fixed() {
        assert_eq!(
            quick_replies(),
            [
                "Order foreign currency",
                "View historical rates",
                "Currency calculator"
            ]
        );
    }
}
