//! Configuration types for statutory payroll constants.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files. Legal constants (the minimum
//! wage table, validation ceilings) live here instead of in code so they can
//! be updated per fiscal year without touching the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the legal regime the engine implements.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeMetadata {
    /// Short code for the regime (e.g. "CLT").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The version or revision date of this configuration set.
    pub version: String,
    /// URL to the official legislation text.
    pub source_url: String,
}

/// Ceilings and floors the validator checks inputs against.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationLimits {
    /// Minimum length of an employee name, in characters.
    pub min_employee_name_chars: usize,
    /// Sanity ceiling above which a base salary draws a warning.
    pub salary_warning_ceiling: Decimal,
    /// Recommended monthly ceiling for combined overtime hours.
    pub max_monthly_overtime_hours: Decimal,
    /// Night hours in a full month of night work.
    pub max_monthly_night_hours: Decimal,
    /// Maximum absence days in one month.
    pub max_monthly_absences: u32,
}

/// Limits configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// The validation limits.
    pub limits: ValidationLimits,
}

/// A minimum wage value effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct MinimumWage {
    /// The date this wage takes effect.
    pub effective_date: NaiveDate,
    /// The monthly minimum wage.
    pub monthly: Decimal,
    /// The law or decree establishing this value.
    pub basis: String,
}

/// The complete statutory configuration loaded from YAML files.
///
/// Aggregates regime metadata, validation limits, and the minimum wage
/// table sorted by effective date (oldest first).
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    metadata: RegimeMetadata,
    limits: ValidationLimits,
    wages: Vec<MinimumWage>,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(
        metadata: RegimeMetadata,
        limits: ValidationLimits,
        wages: Vec<MinimumWage>,
    ) -> Self {
        let mut sorted_wages = wages;
        sorted_wages.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            limits,
            wages: sorted_wages,
        }
    }

    /// Returns the regime metadata.
    pub fn metadata(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns the validation limits.
    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Returns the minimum wage table, oldest first.
    pub fn wages(&self) -> &[MinimumWage] {
        &self.wages
    }

    /// The monthly minimum wage in force on the given date.
    ///
    /// Picks the most recent entry effective on or before `date`; `None`
    /// when the date predates the whole table.
    pub fn minimum_wage_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.wages
            .iter()
            .rfind(|w| w.effective_date <= date)
            .map(|w| w.monthly)
    }
}
