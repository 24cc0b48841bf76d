//! Property-based tests for the calculation invariants.
//!
//! These exercise the calculator over randomized inputs rather than fixed
//! scenarios: the itemization must always reconcile with the gross, guards
//! must hold for any denominator, and the accrual boundaries must be exact.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;

use payroll_engine::calculation::{
    calculate, calculate_dsr_reflex, calculate_night_shift, calculate_thirteenth,
    night_reduction_factor,
};
use payroll_engine::models::{CalculationMode, PayrollInput, ThirteenthAccrual};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// A salary between R$ 1,412.00 and R$ 50,000.00 in whole cents.
fn salary_strategy() -> impl Strategy<Value = Decimal> {
    (141_200i64..=5_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Hour quantities between 0.00 and 60.00.
fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=6_000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn monthly_input(base_salary: Decimal) -> PayrollInput {
    PayrollInput {
        calculation_mode: CalculationMode::Monthly,
        base_salary,
        days_worked: 30,
        business_days: 25,
        non_business_days: 5,
        reference_month: 3,
        reference_year: 2025,
        ..PayrollInput::default()
    }
}

proptest! {
    /// A full month with no add-ons always pays exactly the base salary.
    #[test]
    fn prop_no_add_ons_month_equals_base(base in salary_strategy()) {
        let result = calculate(&monthly_input(base));
        prop_assert_eq!(result.gross_salary, base);
    }

    /// The itemized components always sum to the gross.
    #[test]
    fn prop_components_reconcile_with_gross(
        base in salary_strategy(),
        overtime in hours_strategy(),
        night in hours_strategy(),
        sundays in 0u32..=5,
        hazard in any::<bool>(),
    ) {
        let input = PayrollInput {
            overtime_hours: overtime,
            night_hours: night,
            apply_night_shift_reduction: true,
            sundays_amount: sundays,
            has_hazard_pay: hazard,
            ..monthly_input(base)
        };
        let result = calculate(&input);

        let recomputed = result.proportional_salary
            + result.night_shift_value
            + result.overtime_value
            + result.dsr_overtime_value
            + result.dsr_night_shift_value
            + result.hazard_pay_value
            + result.visits_total_value;
        prop_assert_eq!(result.gross_salary, recomputed);
    }

    /// The night value grows with the hours, all else fixed.
    #[test]
    fn prop_night_value_monotone_in_hours(
        hours in 1i64..=5_000,
        rate_cents in 500i64..=10_000,
    ) {
        let rate = Decimal::new(rate_cents, 2);
        let smaller = calculate_night_shift(Decimal::new(hours, 2), rate, dec("20"), true);
        let larger = calculate_night_shift(Decimal::new(hours + 1, 2), rate, dec("20"), true);
        prop_assert!(larger.value > smaller.value);
    }

    /// Zero business days always yield a zero reflex, never a panic.
    #[test]
    fn prop_dsr_zero_guard(value_cents in 0i64..=10_000_000, rest in 0u32..=10) {
        let reflex = calculate_dsr_reflex(Decimal::new(value_cents, 2), 0, rest);
        prop_assert_eq!(reflex, Decimal::ZERO);
    }

    /// A month below the 15-day threshold never contributes an avo.
    #[test]
    fn prop_avo_threshold_is_exact(days in 0u32..=30) {
        let mut map = BTreeMap::new();
        map.insert(1u8, days);
        let result = calculate_thirteenth(dec("2400.00"), &map, ThirteenthAccrual::Clt);
        prop_assert_eq!(result.total_avos, u32::from(days >= 15));
    }

    /// Daily-exact over a 360-day year reproduces the base salary exactly.
    #[test]
    fn prop_daily_exact_full_year_identity(base in salary_strategy()) {
        let map: BTreeMap<u8, u32> = (1u8..=12).map(|m| (m, 30u32)).collect();
        let result = calculate_thirteenth(base, &map, ThirteenthAccrual::DailyExact);
        prop_assert_eq!(result.gross, base);
    }

    /// The calculator is total: arbitrary day splits never panic and never
    /// produce a negative gross.
    #[test]
    fn prop_calculator_is_total(
        base in salary_strategy(),
        days_worked in 0u32..=40,
        business in 0u32..=31,
        non_business in 0u32..=31,
        divisor in prop::sample::select(vec![0u32, 180, 210, 220]),
    ) {
        let input = PayrollInput {
            days_worked,
            business_days: business,
            non_business_days: non_business,
            custom_divisor: divisor,
            overtime_hours: dec("10"),
            ..monthly_input(base)
        };
        let result = calculate(&input);
        prop_assert!(result.gross_salary >= Decimal::ZERO);
    }
}

#[test]
fn reduction_factor_is_sixty_over_fifty_two_and_a_half() {
    let factor = night_reduction_factor();
    assert!((factor - dec("1.1428571428571428571428571429")).abs() < dec("0.0000000001"));
    assert!(factor > Decimal::ONE);
}
