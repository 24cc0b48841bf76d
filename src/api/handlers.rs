//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_traced;
use crate::models::{CalculationTrace, PayrollInput};
use crate::validation::validate;

use super::response::{ApiError, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /validate endpoint.
///
/// Runs the validation guardrail alone and returns the full report,
/// whether or not it contains blocking errors.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollInput>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let report = validate(&input, state.config().config(), Utc::now().date_naive());
    info!(
        correlation_id = %correlation_id,
        valid = report.valid,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Validates first: blocking errors answer 422 with the full report and no
/// calculation runs. A clean or warning-only input is calculated and the
/// warnings ride along in the response envelope.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollInput>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let report = validate(&input, state.config().config(), Utc::now().date_naive());
    if !report.valid {
        warn!(
            correlation_id = %correlation_id,
            errors = report.errors.len(),
            "Calculation blocked by validation errors"
        );
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            [(header::CONTENT_TYPE, "application/json")],
            Json(report),
        )
            .into_response();
    }

    let start_time = Instant::now();
    let (result, steps) = calculate_traced(&input);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        employee = %input.employee_name,
        gross_salary = %result.gross_salary,
        duration_us,
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        result,
        warnings: report.warnings,
        trace: CalculationTrace { steps, duration_us },
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Maps JSON extraction failures to 400 responses with a structured body.
fn parse_payload(
    payload: Result<Json<PayrollInput>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<PayrollInput, axum::response::Response> {
    match payload {
        Ok(Json(input)) => Ok(input),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}
