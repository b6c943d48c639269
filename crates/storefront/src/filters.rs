//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Format an amount as a euro price string.
pub fn format_eur(amount: impl Display) -> String {
    format!("{amount} €")
}

/// Formats an amount as a euro price string.
///
/// Usage in templates: `{{ product.price|eur }}`
#[askama::filter_fn]
pub fn eur(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_eur(amount))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_format_eur_whole_amounts_have_no_decimals() {
        assert_eq!(format_eur(Decimal::from(85)), "85 €");
    }

    #[test]
    fn test_format_eur_keeps_fractional_amounts() {
        assert_eq!(format_eur(Decimal::new(9550, 2)), "95.50 €");
    }
}
