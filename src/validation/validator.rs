//! Pre-calculation validation.
//!
//! The validator is a guardrail, not a gate inside the calculator: it runs
//! over the same input, classifies findings as blocking errors or advisory
//! warnings against the statutory limits in [`StatutoryConfig`], and echoes
//! the input untouched. The calculator itself never re-validates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::StatutoryConfig;
use crate::models::{CalculationMode, PayrollInput};
use crate::validation::pix_key::is_plausible_pix_key;

/// The outcome of validating one payroll input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// False when at least one blocking error was found.
    pub valid: bool,
    /// Blocking findings; a calculation should not proceed past them.
    pub errors: Vec<String>,
    /// Advisory findings; they never block a calculation.
    pub warnings: Vec<String>,
    /// The input exactly as received.
    pub validated: PayrollInput,
}

/// Validates a payroll input against the statutory limits.
///
/// `today` is injected so admission-date checks are reproducible in tests
/// and the function stays pure.
pub fn validate(
    input: &PayrollInput,
    config: &StatutoryConfig,
    today: NaiveDate,
) -> ValidationReport {
    let limits = config.limits();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let name_chars = input.employee_name.trim().chars().count();
    if name_chars < limits.min_employee_name_chars {
        errors.push(format!(
            "employee name must have at least {} characters",
            limits.min_employee_name_chars
        ));
    }

    let wage_lookup_date = input.reference_period_start().unwrap_or(today);
    match config.minimum_wage_on(wage_lookup_date) {
        Some(minimum_wage) => {
            if input.base_salary < minimum_wage {
                errors.push(format!(
                    "base salary {} is below the minimum wage {} in effect on {}",
                    input.base_salary, minimum_wage, wage_lookup_date
                ));
            }
        }
        None => warnings.push(format!(
            "no minimum wage configured for {}; the wage floor was not checked",
            wage_lookup_date
        )),
    }

    if input.base_salary > limits.salary_warning_ceiling {
        warnings.push(format!(
            "base salary {} exceeds the plausibility ceiling {}",
            input.base_salary, limits.salary_warning_ceiling
        ));
    }

    let total_overtime = input.overtime_hours + input.overtime_hours_2;
    if total_overtime > limits.max_monthly_overtime_hours {
        warnings.push(format!(
            "{} overtime hours exceed the monthly ceiling of {}",
            total_overtime, limits.max_monthly_overtime_hours
        ));
    }

    if input.night_hours > limits.max_monthly_night_hours {
        warnings.push(format!(
            "{} night hours exceed the full-month ceiling of {}",
            input.night_hours, limits.max_monthly_night_hours
        ));
    }

    if input.absences > limits.max_monthly_absences {
        errors.push(format!(
            "{} absence days exceed the month's maximum of {}",
            input.absences, limits.max_monthly_absences
        ));
    }

    if let Some(admission_date) = input.admission_date
        && admission_date > today
    {
        errors.push(format!("admission date {admission_date} is in the future"));
    }

    if let Some(pix_key) = input.pix_key.as_deref()
        && !is_plausible_pix_key(pix_key)
    {
        warnings.push(format!(
            "PIX key '{pix_key}' does not match any registrable shape (CPF, CNPJ, e-mail, phone, random key)"
        ));
    }

    if input.calculation_mode == CalculationMode::Monthly {
        if input.custom_divisor == 0 {
            errors.push("hour divisor must be greater than zero".to_string());
        }

        let counted_days = input.business_days + input.non_business_days;
        if let Some(period_start) = input.reference_period_start()
            && counted_days != 0
            && counted_days != days_in_month(period_start)
        {
            warnings.push(format!(
                "business plus non-business days ({}) differ from the {} days of {}/{}",
                counted_days,
                days_in_month(period_start),
                input.reference_month,
                input.reference_year
            ));
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
        validated: input.clone(),
    }
}

fn days_in_month(period_start: NaiveDate) -> u32 {
    let (year, month) = (period_start.year(), period_start.month());
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next_month_start {
        Some(next) => next.signed_duration_since(period_start).num_days() as u32,
        None => 30,
    }
}
