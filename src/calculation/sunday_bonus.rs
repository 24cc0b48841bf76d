//! Sunday work bonus.
//!
//! Each Sunday worked is priced as one unit of 100% overtime on the hourly
//! rate (Lei 605/49 makes the Sunday the default paid rest day; working it
//! without compensatory rest doubles the hour by convention).

use rust_decimal::Decimal;

/// Calculates the bonus for Sundays worked.
///
/// `value = sundays_amount * hourly_rate * 2`.
pub fn calculate_sunday_bonus(sundays_amount: u32, hourly_rate: Decimal) -> Decimal {
    Decimal::from(sundays_amount) * hourly_rate * Decimal::TWO
}
