//! Night-shift premium calculation.
//!
//! CLT art. 73 prices work between 22:00 and 05:00 at a premium of at least
//! 20%, and its first paragraph shortens the night hour to 52 minutes and 30
//! seconds: one clock hour in the night window counts as 60/52.5 ≈ 1.1428
//! paid hours. Whether that inflation applies is the caller's choice
//! (`apply_night_shift_reduction`), because some collective agreements fold
//! it into the percentage instead.
//!
//! The Sumula 60 extension (night rate past 05:00 when the shift runs
//! through the whole night window) widens which raw hours enter
//! `night_hours` upstream; this module never re-applies it.

use rust_decimal::Decimal;

/// The result of the night-shift calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightShiftResult {
    /// Night hours after the reduced-minute conversion, when it applies.
    pub effective_hours: Decimal,
    /// Value of the effective hours, premium included.
    pub value: Decimal,
}

/// The legal reduced-minute conversion factor: 60 / 52.5.
///
/// Non-terminating, so computed in `Decimal` precision rather than stored
/// as a truncated constant.
pub fn night_reduction_factor() -> Decimal {
    Decimal::from(60) / Decimal::new(525, 1)
}

/// Calculates the night-shift premium value.
///
/// `value = effective_hours * hourly_rate * (1 + percentage / 100)` where
/// `effective_hours` is the clock hours, inflated by [`night_reduction_factor`]
/// when `apply_reduction` is set.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_night_shift;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // 10 night hours at R$ 10/h with the statutory 20% premium, no reduction.
/// let result = calculate_night_shift(dec("10"), dec("10"), dec("20"), false);
/// assert_eq!(result.effective_hours, dec("10"));
/// assert_eq!(result.value, dec("120.00"));
/// ```
pub fn calculate_night_shift(
    night_hours: Decimal,
    hourly_rate: Decimal,
    percentage: Decimal,
    apply_reduction: bool,
) -> NightShiftResult {
    let effective_hours = if apply_reduction {
        night_hours * night_reduction_factor()
    } else {
        night_hours
    };

    let multiplier = Decimal::ONE + percentage / Decimal::ONE_HUNDRED;
    let value = effective_hours * hourly_rate * multiplier;

    NightShiftResult {
        effective_hours,
        value,
    }
}
