//! Payroll result model.
//!
//! [`PayrollResult`] captures every value the calculator can produce as a
//! named, always-present field. Renderers rely on that: an inapplicable
//! amount is zero, never absent, and currency fields arrive pre-rounded to
//! two decimal places.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fully itemized outcome of one payroll calculation.
///
/// Deductions (the loan discount) are reported separately and are never
/// subtracted into `gross_salary`; presenting net pay is the caller's job.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollResult;
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult::default();
/// assert_eq!(result.gross_salary, Decimal::ZERO);
/// assert_eq!(result.thirteenth_total_avos, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Salary proportional to days worked (or shifts under 12x36).
    pub proportional_salary: Decimal,
    /// Base salary divided by the monthly hour divisor, to four decimals.
    pub hourly_rate: Decimal,
    /// 30% of the full base salary when hazard pay applies.
    pub hazard_pay_value: Decimal,

    /// Night hours after the legal reduced-minute conversion.
    pub effective_night_hours: Decimal,
    /// Value of the night hours including the premium.
    pub night_shift_value: Decimal,
    /// Weekly-rest reflex over the night-shift value.
    pub dsr_night_shift_value: Decimal,

    /// Value of the first overtime tier.
    pub overtime1_value: Decimal,
    /// Value of the second overtime tier.
    pub overtime2_value: Decimal,
    /// Holiday hours at double rate under 12x36.
    pub holiday_value: Decimal,
    /// Total variable overtime: both tiers plus holiday and Sunday premiums.
    pub overtime_value: Decimal,
    /// Weekly-rest reflex over the overtime total.
    pub dsr_overtime_value: Decimal,

    /// Sundays worked priced as 100% overtime.
    pub sunday_bonus_value: Decimal,
    /// Visits performed times the unit value.
    pub visits_total_value: Decimal,
    /// Loan discount applied this period, echoed from the input.
    pub loan_discount_value: Decimal,

    /// Sum of all earnings for the period.
    pub gross_salary: Decimal,

    /// Qualifying twelfths under the CLT avos method (0 in monthly mode).
    pub thirteenth_total_avos: u32,
    /// Total days counted under the daily-exact method (0 in monthly mode).
    pub thirteenth_total_days: u32,
}
