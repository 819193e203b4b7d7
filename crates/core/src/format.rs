//! Display Formatting Helpers
//!
//! Shared formatting for handler response copy. This is the single source
//! of truth for how money, exchange rates and loan product names render
//! in messages.

/// Format an amount as dollars with two decimals.
///
/// Negative amounts keep the sign after the symbol ("$-150.00"), matching
/// the rest of the response copy.
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format an exchange rate for display.
///
/// Whole-number rates keep one decimal ("1.0"); fractional rates render
/// in their shortest form ("0.85", "110.25").
pub fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{:.1}", rate)
    } else {
        rate.to_string()
    }
}

/// Uppercase the first letter of each word, lowercasing the rest.
///
/// Words are split on whitespace and rejoined with single spaces; loan
/// kinds are short lowercase phrases so nothing more is needed.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
