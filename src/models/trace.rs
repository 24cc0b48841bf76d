//! Calculation trace models.
//!
//! Every sub-computation the calculator performs can be recorded as an
//! ordered [`CalculationStep`] naming the rule, its statutory basis, the
//! inputs and outputs as JSON snapshots, and a human-readable explanation.
//! The trace backs the payslip "calculation memo" and compliance review.

use serde::{Deserialize, Serialize};

/// A single step in the calculation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Statutory basis for the rule (e.g. "CLT art. 73").
    pub basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete trace for one calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CalculationTrace;
///
/// let trace = CalculationTrace {
///     steps: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationTrace {
    /// The sequence of calculation steps, in evaluation order.
    pub steps: Vec<CalculationStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
