//! Price formatting.
//!
//! The catalog service quotes every price in USD, so formatting is a free
//! function rather than a currency-aware type.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as US dollars with exactly two decimal places.
///
/// Midpoints round away from zero, so `$1.005` formats as `$1.01`.
///
/// # Example
///
/// ```
/// use kiosk_core::format_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_usd(Decimal::new(1099, 2)), "$10.99");
/// assert_eq!(format_usd(Decimal::from(15)), "$15.00");
/// ```
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}
