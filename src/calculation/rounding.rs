//! Currency rounding policy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to 2 decimal places, half away from zero.
///
/// This is standard currency rounding: a half-cent always rounds to the
/// larger magnitude.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_currency(Decimal::from_str("0.495").unwrap());
/// assert_eq!(rounded, Decimal::from_str("0.50").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
