//! Payroll calculation rules.
//!
//! One module per statutory rule, each a pure function over `Decimal`
//! quantities, orchestrated by [`engine::calculate`]. Rule modules work at
//! full precision; [`rounding`] is applied once, at result assembly.

pub mod dsr;
pub mod engine;
pub mod hazard_pay;
pub mod holiday_pay;
pub mod hourly_rate;
pub mod night_shift;
pub mod overtime;
pub mod proportional_salary;
pub mod rounding;
pub mod sunday_bonus;
pub mod thirteenth;

pub use dsr::{calculate_dsr_reflex, dsr_applies};
pub use engine::{calculate, calculate_traced};
pub use hazard_pay::{HAZARD_PAY_RATE, calculate_hazard_pay};
pub use holiday_pay::calculate_holiday_pay;
pub use hourly_rate::{STANDARD_MONTHLY_DIVISOR, calculate_hourly_rate};
pub use night_shift::{NightShiftResult, calculate_night_shift, night_reduction_factor};
pub use overtime::{
    OVERTIME_DOUBLE_PERCENTAGE, OVERTIME_MINIMUM_PERCENTAGE, calculate_overtime_tier,
};
pub use proportional_salary::{
    COMMERCIAL_MONTH_DAYS, FULL_MONTH_SHIFTS_12X36, calculate_proportional_salary,
};
pub use rounding::{round_currency, round_rate};
pub use sunday_bonus::calculate_sunday_bonus;
pub use thirteenth::{
    AVO_QUALIFYING_DAYS, AVOS_PER_YEAR, COMMERCIAL_YEAR_DAYS, ThirteenthResult,
    calculate_thirteenth,
};
