//! Hazard pay (periculosidade).
//!
//! CLT art. 193 par. 1 grants a 30% premium for hazardous work, computed on
//! the full contractual base salary. The statutory basis is the base, not
//! the proportional salary, so a partially worked month still earns the
//! whole premium.

use rust_decimal::Decimal;

/// The statutory hazard premium rate: 30% (CLT art. 193 par. 1).
pub const HAZARD_PAY_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Calculates the hazard premium.
pub fn calculate_hazard_pay(has_hazard_pay: bool, base_salary: Decimal) -> Decimal {
    if !has_hazard_pay {
        return Decimal::ZERO;
    }
    base_salary * HAZARD_PAY_RATE
}
