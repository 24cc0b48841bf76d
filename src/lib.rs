//! CLT Payroll Calculation Engine.
//!
//! This crate calculates Brazilian CLT pay for a single employee and period:
//! monthly pay (proportional salary, night-shift premium, tiered overtime,
//! weekly-rest reflexes, hazard pay) and the 13th salary under both the CLT
//! avos rule and the exact-days rule, plus a pre-calculation validation
//! guardrail against statutory limits.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
