//! Core data models for the CLT Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod payroll_input;
mod payroll_result;
mod trace;

pub use payroll_input::{
    CalculationMode, PayrollInput, ShiftScheduleType, ThirteenthAccrual, WorkScale,
};
pub use payroll_result::PayrollResult;
pub use trace::{CalculationStep, CalculationTrace};
