//! Shared rounding helpers.
//!
//! Monetary amounts leave the engine rounded to cent precision and rates to
//! four decimals, always half-away-from-zero. Intermediate values are kept
//! at full `Decimal` precision; rounding happens once, at result assembly.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let raw = Decimal::from_str("204.5454545").unwrap();
/// assert_eq!(round_currency(raw), Decimal::from_str("204.55").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an hourly rate to four decimal places, half away from zero.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}
