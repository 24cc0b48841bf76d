//! Holiday pay under the 12x36 regime.
//!
//! A 12x36 roster regularly lands shifts on holidays. CLT art. 59-A folds
//! ordinary Sunday work into the shift compensation, but a worked holiday is
//! still paid in double: the holiday hours earn a forced 100% premium on the
//! hourly rate, regardless of the tier percentages elsewhere in the input.

use rust_decimal::Decimal;

use crate::models::WorkScale;

/// Calculates the holiday pay for a 12x36 shift on a holiday.
///
/// Yields zero unless the regime is 12x36 and a holiday was actually
/// worked; otherwise `holiday_hours * hourly_rate * 2`.
pub fn calculate_holiday_pay(
    scale: WorkScale,
    worked_on_holiday: bool,
    holiday_hours: Decimal,
    hourly_rate: Decimal,
) -> Decimal {
    if scale != WorkScale::TwelveByThirtySix || !worked_on_holiday {
        return Decimal::ZERO;
    }
    holiday_hours * hourly_rate * Decimal::TWO
}
