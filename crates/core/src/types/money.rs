//! Money parsing and formatting helpers.
//!
//! Catalog prices are stored as decimal strings because the store tolerates
//! hand-entered values; parsing is therefore lenient and callers decide how
//! to treat garbage (the summary computation coerces it to zero).

use rust_decimal::Decimal;

/// Parse a stored price string into a decimal amount.
///
/// Returns `None` when the string is not a valid decimal number.
#[must_use]
pub fn parse_price(raw: &str) -> Option<Decimal> {
    raw.trim().parse::<Decimal>().ok()
}

/// Format a monetary amount with exactly two decimal places and a currency
/// suffix, e.g. `"25.99 GHS"`.
#[must_use]
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}
