//! Hourly rate derivation.
//!
//! The hourly rate prices every variable component (overtime, night premium,
//! Sunday and holiday work). It is the contractual base salary divided by a
//! monthly hour divisor chosen by the caller for the regime in effect: 220
//! for the standard 44-hour week, 210 or 180 for shift regimes. The engine
//! does not infer the divisor.

use rust_decimal::Decimal;

/// The divisor for the standard 44-hour week (CLT art. 64 convention).
pub const STANDARD_MONTHLY_DIVISOR: u32 = 220;

/// Derives the hourly rate from the base salary and the monthly divisor.
///
/// A zero divisor short-circuits to zero instead of failing: every term
/// priced by the hourly rate then degrades to zero, which is the engine-wide
/// policy for missing optional context.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = calculate_hourly_rate(Decimal::from_str("2200.00").unwrap(), 220);
/// assert_eq!(rate, Decimal::from_str("10").unwrap());
///
/// assert_eq!(
///     calculate_hourly_rate(Decimal::from_str("2200.00").unwrap(), 0),
///     Decimal::ZERO,
/// );
/// ```
pub fn calculate_hourly_rate(base_salary: Decimal, divisor: u32) -> Decimal {
    if divisor == 0 {
        return Decimal::ZERO;
    }
    base_salary / Decimal::from(divisor)
}
