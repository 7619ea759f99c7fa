//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

/// Formats a decimal amount as a dollar price with two decimal places.
///
/// Usage in templates: `{{ product.price|money }}`
#[askama::filter_fn]
pub fn money(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_money(&amount.to_string()))
}

/// Render a decimal string as "$X.YY". Falls back to the raw string when it
/// does not parse as a decimal.
fn format_money(raw: &str) -> String {
    let formatted = raw
        .parse::<Decimal>()
        .map_or_else(|_| raw.to_string(), |value| format!("{value:.2}"));
    format!("${formatted}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_pads_to_two_decimals() {
        assert_eq!(format_money("12.5"), "$12.50");
        assert_eq!(format_money("0"), "$0.00");
    }

    #[test]
    fn test_money_keeps_two_decimals() {
        assert_eq!(format_money("9.99"), "$9.99");
    }
}
