//! Proportional salary calculation.
//!
//! The month is a 30-day commercial month regardless of the calendar: a
//! standard-regime employee earns `base_salary * days_worked / 30`. Under
//! 12x36 the unit is the worked shift, and 15 shifts correspond to a full
//! month, so the caller supplies `days_worked` already counted in shifts.

use rust_decimal::Decimal;

use crate::models::WorkScale;

/// Days in the commercial month used for proportionality.
pub const COMMERCIAL_MONTH_DAYS: u32 = 30;

/// Worked shifts corresponding to a full month under 12x36.
pub const FULL_MONTH_SHIFTS_12X36: u32 = 15;

/// Calculates the salary proportional to days worked (or shifts under 12x36).
///
/// Standard regime days are clamped to the commercial month; shift counts
/// are taken as supplied, since a roster can legitimately exceed 15 shifts
/// in a long month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_proportional_salary;
/// use payroll_engine::models::WorkScale;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let half = calculate_proportional_salary(
///     Decimal::from_str("3000.00").unwrap(),
///     15,
///     WorkScale::Standard,
/// );
/// assert_eq!(half, Decimal::from_str("1500").unwrap());
/// ```
pub fn calculate_proportional_salary(
    base_salary: Decimal,
    days_worked: u32,
    scale: WorkScale,
) -> Decimal {
    match scale {
        WorkScale::Standard => {
            let days = days_worked.min(COMMERCIAL_MONTH_DAYS);
            base_salary * Decimal::from(days) / Decimal::from(COMMERCIAL_MONTH_DAYS)
        }
        WorkScale::TwelveByThirtySix => {
            base_salary * Decimal::from(days_worked) / Decimal::from(FULL_MONTH_SHIFTS_12X36)
        }
    }
}
