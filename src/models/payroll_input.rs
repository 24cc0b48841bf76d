//! Payroll input model and related enums.
//!
//! [`PayrollInput`] is the single, fully-typed record the engine accepts:
//! one frozen value per calculation request, built by the caller (a UI form
//! or a batch driver), passed through the validator and then the calculator,
//! and discarded once the result is consumed.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selects which sub-pipeline of the calculator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Regular monthly pay for a reference month.
    Monthly,
    /// Annual bonus ("13th salary") accrual over the reference year.
    Thirteenth,
}

/// The shift regime the employee works under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkScale {
    /// Standard regime: proportionality by calendar days over a 30-day month.
    Standard,
    /// 12 hours on / 36 hours off: proportionality by worked shifts
    /// (15 shifts correspond to a full month), CLT art. 59-A.
    TwelveByThirtySix,
}

/// Which days of the month a 12x36 employee covers.
///
/// Display-only context for the 12x36 regime; the arithmetic never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftScheduleType {
    /// Shifts fall on odd-numbered days.
    Odd,
    /// Shifts fall on even-numbered days.
    Even,
}

/// The accrual method for the 13th salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirteenthAccrual {
    /// CLT rule (Lei 4.090/62): a month with 15 or more days worked counts
    /// as one whole avo (twelfth); fewer days count nothing.
    Clt,
    /// Every day counts proportionally over a 360-day commercial year.
    DailyExact,
}

/// A complete description of an employee's month (or annual-bonus period).
///
/// Exactly one of the two mode-specific field groups is semantically active
/// per calculation, selected by `calculation_mode`; the calculator never
/// reads the inactive group. Optional context defaults to zero/false so a
/// caller only supplies what applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee's name (pass-through, validated for minimum length).
    pub employee_name: String,
    /// The employing company's name (pass-through).
    #[serde(default)]
    pub company_name: String,

    /// Which calculation pipeline to run.
    pub calculation_mode: CalculationMode,

    /// Contractual base salary.
    pub base_salary: Decimal,
    /// Days worked in the month (standard regime, 0-30), or worked shifts
    /// under 12x36.
    #[serde(default)]
    pub days_worked: u32,
    /// Business days in the reference month (DSR denominator).
    #[serde(default)]
    pub business_days: u32,
    /// Sundays and holidays in the reference month (DSR numerator).
    #[serde(default)]
    pub non_business_days: u32,
    /// Reference month, 1 = January.
    #[serde(default)]
    pub reference_month: u32,
    /// Reference year.
    #[serde(default)]
    pub reference_year: i32,

    /// The shift regime in effect.
    #[serde(default = "default_work_scale")]
    pub work_scale: WorkScale,
    /// Odd or even days, for 12x36 rosters.
    #[serde(default)]
    pub shift_schedule_type: Option<ShiftScheduleType>,
    /// Monthly hour divisor used to derive the hourly rate (220, 210, 180...).
    #[serde(default = "default_divisor")]
    pub custom_divisor: u32,
    /// Whether the DSR reflex applies under 12x36 (legally ambiguous, so the
    /// caller decides).
    #[serde(default)]
    pub calculate_dsr_on_12x36: bool,
    /// Whether a holiday was worked under 12x36.
    #[serde(default)]
    pub worked_on_holiday: bool,
    /// Hours worked on the holiday (paid at double rate).
    #[serde(default)]
    pub holiday_hours: Decimal,

    /// Clock hours worked in the night window.
    #[serde(default)]
    pub night_hours: Decimal,
    /// Whether to inflate clock hours by the legal 52.5-minute reduction
    /// (CLT art. 73 par. 1).
    #[serde(default)]
    pub apply_night_shift_reduction: bool,
    /// Night-shift premium percentage (statutory minimum 20).
    #[serde(default = "default_night_shift_percentage")]
    pub night_shift_percentage: Decimal,
    /// Whether night-rate eligibility extends past 05:00 (Sumula 60 TST).
    /// Input-construction concern: it widens which raw hours enter
    /// `night_hours` upstream and is never re-applied by the calculator.
    #[serde(default)]
    pub extend_night_shift: bool,

    /// First overtime tier: hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// First overtime tier: premium percentage (50 or 100).
    #[serde(default = "default_overtime_percentage")]
    pub overtime_percentage: Decimal,
    /// Second overtime tier: hours.
    #[serde(default)]
    pub overtime_hours_2: Decimal,
    /// Second overtime tier: premium percentage (50 or 100).
    #[serde(default = "default_overtime_percentage_2")]
    pub overtime_percentage_2: Decimal,
    /// Sundays worked, priced as 100% overtime.
    #[serde(default)]
    pub sundays_amount: u32,

    /// Whether the statutory 30% hazard premium applies (CLT art. 193).
    #[serde(default)]
    pub has_hazard_pay: bool,
    /// Family allowance amount.
    #[serde(default)]
    pub family_allowance: Decimal,
    /// Production participation bonus.
    #[serde(default)]
    pub production_bonus: Decimal,
    /// Number of field visits performed.
    #[serde(default)]
    pub visits_amount: u32,
    /// Value paid per visit.
    #[serde(default)]
    pub visit_unit_value: Decimal,
    /// Cost allowance (indemnity, non-taxable pass-through).
    #[serde(default)]
    pub cost_allowance: Decimal,

    /// Total outstanding loan value (display-only).
    #[serde(default)]
    pub loan_total_value: Decimal,
    /// Loan discount applied this period (the authoritative deducted value).
    #[serde(default)]
    pub loan_discount_value: Decimal,
    /// Current installment number (display-only).
    #[serde(default)]
    pub loan_current_installment: u32,
    /// Total installment count (display-only).
    #[serde(default)]
    pub loan_total_installments: u32,

    /// Absence days in the period.
    #[serde(default)]
    pub absences: u32,
    /// The employee's admission date, if known.
    #[serde(default)]
    pub admission_date: Option<NaiveDate>,
    /// PIX payment key (CPF, CNPJ, email, phone or random UUID key).
    #[serde(default)]
    pub pix_key: Option<String>,
    /// Bank name for the payment summary (pass-through).
    #[serde(default)]
    pub bank_name: Option<String>,

    /// Days worked per reference month (1-12) for the 13th salary.
    #[serde(default)]
    pub thirteenth_detailed_days: BTreeMap<u8, u32>,
    /// Which accrual method the 13th salary uses.
    #[serde(default = "default_thirteenth_accrual")]
    pub thirteenth_calculation_type: ThirteenthAccrual,
}

fn default_work_scale() -> WorkScale {
    WorkScale::Standard
}

fn default_divisor() -> u32 {
    crate::calculation::STANDARD_MONTHLY_DIVISOR
}

fn default_night_shift_percentage() -> Decimal {
    Decimal::from_parts(20, 0, 0, false, 0)
}

fn default_overtime_percentage() -> Decimal {
    Decimal::from(crate::calculation::OVERTIME_MINIMUM_PERCENTAGE)
}

fn default_overtime_percentage_2() -> Decimal {
    Decimal::from(crate::calculation::OVERTIME_DOUBLE_PERCENTAGE)
}

fn default_thirteenth_accrual() -> ThirteenthAccrual {
    ThirteenthAccrual::Clt
}

impl Default for PayrollInput {
    /// An empty monthly input carrying the same defaults serde applies to
    /// omitted fields.
    fn default() -> Self {
        Self {
            employee_name: String::new(),
            company_name: String::new(),
            calculation_mode: CalculationMode::Monthly,
            base_salary: Decimal::ZERO,
            days_worked: 0,
            business_days: 0,
            non_business_days: 0,
            reference_month: 0,
            reference_year: 0,
            work_scale: default_work_scale(),
            shift_schedule_type: None,
            custom_divisor: default_divisor(),
            calculate_dsr_on_12x36: false,
            worked_on_holiday: false,
            holiday_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            apply_night_shift_reduction: false,
            night_shift_percentage: default_night_shift_percentage(),
            extend_night_shift: false,
            overtime_hours: Decimal::ZERO,
            overtime_percentage: default_overtime_percentage(),
            overtime_hours_2: Decimal::ZERO,
            overtime_percentage_2: default_overtime_percentage_2(),
            sundays_amount: 0,
            has_hazard_pay: false,
            family_allowance: Decimal::ZERO,
            production_bonus: Decimal::ZERO,
            visits_amount: 0,
            visit_unit_value: Decimal::ZERO,
            cost_allowance: Decimal::ZERO,
            loan_total_value: Decimal::ZERO,
            loan_discount_value: Decimal::ZERO,
            loan_current_installment: 0,
            loan_total_installments: 0,
            absences: 0,
            admission_date: None,
            pix_key: None,
            bank_name: None,
            thirteenth_detailed_days: BTreeMap::new(),
            thirteenth_calculation_type: default_thirteenth_accrual(),
        }
    }
}

impl PayrollInput {
    /// The first day of the reference period, when the month is valid.
    ///
    /// Used to pick which fiscal-year minimum wage applies.
    pub fn reference_period_start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.reference_year, self.reference_month, 1)
    }
}
