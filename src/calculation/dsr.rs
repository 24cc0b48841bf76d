//! Weekly-rest reflex (DSR) calculation.
//!
//! Lei 605/49 pays the weekly rest day, and habitual variable remuneration
//! (overtime, the night premium) must reflect into it: the variable value
//! earned over the month's business days generates a proportional addition
//! for its Sundays and holidays. The reflex is
//! `value / business_days * non_business_days`.
//!
//! Under 12x36 the reflex is legally contested (the 36-hour rest is argued
//! to already compensate it), so the engine computes it there only when the
//! caller opts in with `calculate_dsr_on_12x36`.

use rust_decimal::Decimal;

use crate::models::WorkScale;

/// Calculates the weekly-rest reflex over a variable remuneration value.
///
/// A month with zero business days yields a zero reflex regardless of the
/// variable value; the division guard never raises.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_dsr_reflex;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // R$ 250 of overtime over 25 business days reflects R$ 50 into 5 rest days.
/// assert_eq!(calculate_dsr_reflex(dec("250"), 25, 5), dec("50"));
/// assert_eq!(calculate_dsr_reflex(dec("250"), 0, 5), Decimal::ZERO);
/// ```
pub fn calculate_dsr_reflex(
    variable_value: Decimal,
    business_days: u32,
    non_business_days: u32,
) -> Decimal {
    if business_days == 0 {
        return Decimal::ZERO;
    }
    variable_value / Decimal::from(business_days) * Decimal::from(non_business_days)
}

/// Whether the DSR reflex applies under the given regime.
///
/// Always under the standard regime; under 12x36 only by the caller's
/// explicit choice.
pub fn dsr_applies(scale: WorkScale, calculate_dsr_on_12x36: bool) -> bool {
    match scale {
        WorkScale::Standard => true,
        WorkScale::TwelveByThirtySix => calculate_dsr_on_12x36,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// DSR-001: 25 business / 5 rest days reflect one fifth
    #[test]
    fn test_dsr_001_standard_month() {
        let reflex = calculate_dsr_reflex(dec("204.545454"), 25, 5);
        assert!((reflex - dec("40.909090")).abs() < dec("0.000002"));
    }

    /// DSR-002: zero business days short-circuit to zero
    #[test]
    fn test_dsr_002_zero_business_days_guard() {
        assert_eq!(calculate_dsr_reflex(dec("10000"), 0, 5), Decimal::ZERO);
    }

    /// DSR-003: zero rest days reflect nothing
    #[test]
    fn test_dsr_003_zero_rest_days() {
        assert_eq!(calculate_dsr_reflex(dec("500"), 25, 0), Decimal::ZERO);
    }

    /// DSR-004: reflex applies by default on the standard regime
    #[test]
    fn test_dsr_004_standard_always_applies() {
        assert!(dsr_applies(WorkScale::Standard, false));
        assert!(dsr_applies(WorkScale::Standard, true));
    }

    /// DSR-005: 12x36 defers to the caller
    #[test]
    fn test_dsr_005_twelve_by_thirty_six_opt_in() {
        assert!(!dsr_applies(WorkScale::TwelveByThirtySix, false));
        assert!(dsr_applies(WorkScale::TwelveByThirtySix, true));
    }
}
