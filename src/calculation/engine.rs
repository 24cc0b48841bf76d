//! Payroll calculation orchestration.
//!
//! Runs the per-rule modules in statutory order, rounds each component for
//! presentation, and assembles the flat [`PayrollResult`]. The gross salary
//! is the sum of the already-rounded components, so the itemized lines
//! always add up to the printed total.

use rust_decimal::Decimal;
use serde_json::json;

use crate::calculation::dsr::{calculate_dsr_reflex, dsr_applies};
use crate::calculation::hazard_pay::calculate_hazard_pay;
use crate::calculation::holiday_pay::calculate_holiday_pay;
use crate::calculation::hourly_rate::calculate_hourly_rate;
use crate::calculation::night_shift::calculate_night_shift;
use crate::calculation::overtime::calculate_overtime_tier;
use crate::calculation::proportional_salary::calculate_proportional_salary;
use crate::calculation::rounding::{round_currency, round_rate};
use crate::calculation::sunday_bonus::calculate_sunday_bonus;
use crate::calculation::thirteenth::calculate_thirteenth;
use crate::models::{CalculationMode, CalculationStep, PayrollInput, PayrollResult};

/// Calculates a payroll result without recording a trace.
///
/// Pure and infallible: division guards in the rule modules degrade their
/// term to zero instead of failing, so any well-typed input produces a
/// result.
pub fn calculate(input: &PayrollInput) -> PayrollResult {
    calculate_traced(input).0
}

/// Calculates a payroll result and the ordered step trace behind it.
pub fn calculate_traced(input: &PayrollInput) -> (PayrollResult, Vec<CalculationStep>) {
    match input.calculation_mode {
        CalculationMode::Monthly => calculate_monthly(input),
        CalculationMode::Thirteenth => calculate_thirteenth_mode(input),
    }
}

fn calculate_monthly(input: &PayrollInput) -> (PayrollResult, Vec<CalculationStep>) {
    let mut trace = TraceBuilder::new();

    let hourly_rate = calculate_hourly_rate(input.base_salary, input.custom_divisor);
    trace.step(
        "CLT-HOURLY-RATE",
        "Hourly rate",
        "CLT art. 64",
        json!({
            "base_salary": input.base_salary,
            "divisor": input.custom_divisor,
        }),
        json!({ "hourly_rate": hourly_rate }),
        format!(
            "Base salary divided by the {}-hour monthly divisor",
            input.custom_divisor
        ),
    );

    let proportional =
        calculate_proportional_salary(input.base_salary, input.days_worked, input.work_scale);
    trace.step(
        "CLT-PROPORTIONAL",
        "Proportional salary",
        "CLT art. 64-65",
        json!({
            "base_salary": input.base_salary,
            "days_worked": input.days_worked,
            "work_scale": input.work_scale,
        }),
        json!({ "proportional_salary": proportional }),
        format!("{} worked days priced over the commercial month", input.days_worked),
    );

    let night = calculate_night_shift(
        input.night_hours,
        hourly_rate,
        input.night_shift_percentage,
        input.apply_night_shift_reduction,
    );
    if !input.night_hours.is_zero() {
        trace.step(
            "CLT-NIGHT-SHIFT",
            "Night-shift premium",
            "CLT art. 73",
            json!({
                "night_hours": input.night_hours,
                "percentage": input.night_shift_percentage,
                "reduced_hour": input.apply_night_shift_reduction,
            }),
            json!({
                "effective_night_hours": night.effective_hours,
                "night_shift_value": night.value,
            }),
            format!(
                "{} effective hours at the hourly rate plus {}%",
                night.effective_hours, input.night_shift_percentage
            ),
        );
    }

    let overtime1 =
        calculate_overtime_tier(input.overtime_hours, input.overtime_percentage, hourly_rate);
    let overtime2 = calculate_overtime_tier(
        input.overtime_hours_2,
        input.overtime_percentage_2,
        hourly_rate,
    );
    let holiday = calculate_holiday_pay(
        input.work_scale,
        input.worked_on_holiday,
        input.holiday_hours,
        hourly_rate,
    );
    let sunday_bonus = calculate_sunday_bonus(input.sundays_amount, hourly_rate);
    let overtime_total = overtime1 + overtime2 + holiday + sunday_bonus;
    if !overtime_total.is_zero() {
        trace.step(
            "CLT-OVERTIME",
            "Overtime and premium days",
            "CLT art. 59; art. 59-A",
            json!({
                "overtime_hours": input.overtime_hours,
                "overtime_percentage": input.overtime_percentage,
                "overtime_hours_2": input.overtime_hours_2,
                "overtime_percentage_2": input.overtime_percentage_2,
                "holiday_hours": input.holiday_hours,
                "sundays_amount": input.sundays_amount,
            }),
            json!({
                "overtime1_value": overtime1,
                "overtime2_value": overtime2,
                "holiday_value": holiday,
                "sunday_bonus_value": sunday_bonus,
                "overtime_value": overtime_total,
            }),
            "Tiered overtime, 12x36 holiday double pay and Sunday premium".to_string(),
        );
    }

    let reflexes_apply = dsr_applies(input.work_scale, input.calculate_dsr_on_12x36);
    let (dsr_overtime, dsr_night) = if reflexes_apply {
        (
            calculate_dsr_reflex(overtime_total, input.business_days, input.non_business_days),
            calculate_dsr_reflex(night.value, input.business_days, input.non_business_days),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };
    if !dsr_overtime.is_zero() || !dsr_night.is_zero() {
        trace.step(
            "CLT-DSR-REFLEX",
            "Weekly-rest reflex",
            "Lei 605/49 art. 7",
            json!({
                "overtime_value": overtime_total,
                "night_shift_value": night.value,
                "business_days": input.business_days,
                "non_business_days": input.non_business_days,
            }),
            json!({
                "dsr_overtime_value": dsr_overtime,
                "dsr_night_shift_value": dsr_night,
            }),
            format!(
                "Variable remuneration over {} business days reflected into {} rest days",
                input.business_days, input.non_business_days
            ),
        );
    }

    let hazard = calculate_hazard_pay(input.has_hazard_pay, input.base_salary);
    if !hazard.is_zero() {
        trace.step(
            "CLT-HAZARD-PAY",
            "Hazard premium",
            "CLT art. 193 par. 1",
            json!({ "base_salary": input.base_salary }),
            json!({ "hazard_pay_value": hazard }),
            "30% of the full contractual base salary".to_string(),
        );
    }

    let visits_total = Decimal::from(input.visits_amount) * input.visit_unit_value;

    let proportional_salary = round_currency(proportional);
    let hazard_pay_value = round_currency(hazard);
    let night_shift_value = round_currency(night.value);
    let dsr_night_shift_value = round_currency(dsr_night);
    let overtime1_value = round_currency(overtime1);
    let overtime2_value = round_currency(overtime2);
    let holiday_value = round_currency(holiday);
    let overtime_value = round_currency(overtime_total);
    let dsr_overtime_value = round_currency(dsr_overtime);
    let sunday_bonus_value = round_currency(sunday_bonus);
    let visits_total_value = round_currency(visits_total);
    let loan_discount_value = round_currency(input.loan_discount_value);

    let gross_salary = proportional_salary
        + night_shift_value
        + overtime_value
        + dsr_overtime_value
        + dsr_night_shift_value
        + hazard_pay_value
        + round_currency(input.family_allowance)
        + round_currency(input.production_bonus)
        + visits_total_value
        + round_currency(input.cost_allowance);
    trace.step(
        "CLT-GROSS",
        "Gross salary",
        "CLT art. 457",
        json!({
            "proportional_salary": proportional_salary,
            "night_shift_value": night_shift_value,
            "overtime_value": overtime_value,
            "dsr_overtime_value": dsr_overtime_value,
            "dsr_night_shift_value": dsr_night_shift_value,
            "hazard_pay_value": hazard_pay_value,
            "family_allowance": input.family_allowance,
            "production_bonus": input.production_bonus,
            "visits_total_value": visits_total_value,
            "cost_allowance": input.cost_allowance,
        }),
        json!({ "gross_salary": gross_salary }),
        "Sum of the rounded remuneration components; deductions reported apart".to_string(),
    );

    let result = PayrollResult {
        proportional_salary,
        hourly_rate: round_rate(hourly_rate),
        hazard_pay_value,
        effective_night_hours: round_rate(night.effective_hours),
        night_shift_value,
        dsr_night_shift_value,
        overtime1_value,
        overtime2_value,
        holiday_value,
        overtime_value,
        dsr_overtime_value,
        sunday_bonus_value,
        visits_total_value,
        loan_discount_value,
        gross_salary,
        thirteenth_total_avos: 0,
        thirteenth_total_days: 0,
    };

    (result, trace.finish())
}

fn calculate_thirteenth_mode(input: &PayrollInput) -> (PayrollResult, Vec<CalculationStep>) {
    let mut trace = TraceBuilder::new();

    let accrued = calculate_thirteenth(
        input.base_salary,
        &input.thirteenth_detailed_days,
        input.thirteenth_calculation_type,
    );
    trace.step(
        "CLT-THIRTEENTH",
        "13th salary accrual",
        "Lei 4.090/62 art. 1",
        json!({
            "base_salary": input.base_salary,
            "detailed_days": input.thirteenth_detailed_days,
            "method": input.thirteenth_calculation_type,
        }),
        json!({
            "total_avos": accrued.total_avos,
            "total_days": accrued.total_days,
            "gross_salary": accrued.gross,
        }),
        match input.thirteenth_calculation_type {
            crate::models::ThirteenthAccrual::Clt => format!(
                "{} qualifying twelfths of the base salary",
                accrued.total_avos
            ),
            crate::models::ThirteenthAccrual::DailyExact => format!(
                "{} days over the 360-day commercial year",
                accrued.total_days
            ),
        },
    );

    let result = PayrollResult {
        gross_salary: round_currency(accrued.gross),
        thirteenth_total_avos: accrued.total_avos,
        thirteenth_total_days: accrued.total_days,
        ..PayrollResult::default()
    };

    (result, trace.finish())
}

/// Accumulates numbered calculation steps in execution order.
struct TraceBuilder {
    steps: Vec<CalculationStep>,
}

impl TraceBuilder {
    fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn step(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        basis: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(CalculationStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            basis: basis.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn finish(self) -> Vec<CalculationStep> {
        self.steps
    }
}
