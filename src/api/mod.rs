//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints wrapping the validator and
//! the calculator for UI and batch callers.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
