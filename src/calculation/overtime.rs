//! Overtime tier calculation.
//!
//! Overtime carries a premium of at least 50% over the normal hour
//! (CF art. 7 XVI); 100% is the usual convention for Sundays and holidays.
//! The engine accepts two independent tiers so a month can mix, for
//! example, weekday overtime at 50% and holiday overtime at 100%.

use rust_decimal::Decimal;

/// The statutory minimum overtime premium percentage.
pub const OVERTIME_MINIMUM_PERCENTAGE: u32 = 50;

/// The conventional premium percentage for Sundays and holidays.
pub const OVERTIME_DOUBLE_PERCENTAGE: u32 = 100;

/// Calculates the value of one overtime tier.
///
/// `value = hours * hourly_rate * (1 + percentage / 100)`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_tier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // 10 hours at R$ 10/h with a 50% premium.
/// let value = calculate_overtime_tier(dec("10"), dec("50"), dec("10"));
/// assert_eq!(value, dec("150.0"));
/// ```
pub fn calculate_overtime_tier(
    hours: Decimal,
    percentage: Decimal,
    hourly_rate: Decimal,
) -> Decimal {
    let multiplier = Decimal::ONE + percentage / Decimal::ONE_HUNDRED;
    hours * hourly_rate * multiplier
}
