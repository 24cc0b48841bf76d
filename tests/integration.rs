//! Comprehensive integration tests for the payroll calculation engine.
//!
//! This test suite covers the end-to-end scenarios over the HTTP surface:
//! - Plain monthly pay
//! - Overtime with the weekly-rest (DSR) reflex
//! - Night shift with the reduced-hour conversion
//! - 12x36 shifts with holiday double pay
//! - 13th salary in both accrual methods
//! - Validation boundaries (minimum wage, absences)
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/clt").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a result field from the response envelope as a `Decimal`.
fn result_decimal(body: &Value, field: &str) -> Decimal {
    let raw = body["result"][field]
        .as_str()
        .unwrap_or_else(|| panic!("result field '{}' missing or not a string", field));
    decimal(raw)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn monthly_request(base_salary: &str) -> Value {
    json!({
        "employee_name": "Maria Souza",
        "company_name": "Acme Ltda",
        "calculation_mode": "monthly",
        "base_salary": base_salary,
        "days_worked": 30,
        "business_days": 25,
        "non_business_days": 5,
        "reference_month": 4,
        "reference_year": 2024
    })
}

// =============================================================================
// Monthly scenarios
// =============================================================================

#[tokio::test]
async fn test_e2e_001_plain_month_pays_the_base_salary() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        monthly_request("3000.00"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_decimal(&body, "gross_salary"), decimal("3000.00"));
    assert_eq!(
        result_decimal(&body, "proportional_salary"),
        decimal("3000.00")
    );
    assert_eq!(result_decimal(&body, "overtime_value"), decimal("0"));
    assert!(body["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_e2e_002_overtime_with_dsr_reflex() {
    let mut request = monthly_request("3000.00");
    request["overtime_hours"] = json!("10");

    let (status, body) = post_json(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_decimal(&body, "hourly_rate"), decimal("13.6364"));
    assert_eq!(result_decimal(&body, "overtime1_value"), decimal("204.55"));
    assert_eq!(result_decimal(&body, "dsr_overtime_value"), decimal("40.91"));
    assert_eq!(result_decimal(&body, "gross_salary"), decimal("3245.46"));
}

#[tokio::test]
async fn test_e2e_003_night_shift_with_reduced_hour() {
    let mut request = monthly_request("2200.00");
    request["night_hours"] = json!("21");
    request["apply_night_shift_reduction"] = json!(true);

    let (status, body) = post_json(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // 21 clock hours become 24 paid hours at R$ 10/h with the 20% premium
    assert_eq!(
        result_decimal(&body, "effective_night_hours"),
        decimal("24.0000")
    );
    assert_eq!(result_decimal(&body, "night_shift_value"), decimal("288.00"));
    assert_eq!(
        result_decimal(&body, "dsr_night_shift_value"),
        decimal("57.60")
    );
    assert_eq!(result_decimal(&body, "gross_salary"), decimal("2545.60"));
}

#[tokio::test]
async fn test_e2e_004_twelve_by_thirty_six_holiday_with_dsr_opt_in() {
    let request = json!({
        "employee_name": "Carlos Lima",
        "calculation_mode": "monthly",
        "base_salary": "3300.00",
        "days_worked": 15,
        "business_days": 25,
        "non_business_days": 5,
        "reference_month": 4,
        "reference_year": 2024,
        "work_scale": "twelve_by_thirty_six",
        "shift_schedule_type": "odd",
        "worked_on_holiday": true,
        "holiday_hours": "12",
        "calculate_dsr_on_12x36": true
    });

    let (status, body) = post_json(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // 15 shifts make a full 12x36 month; the 12 holiday hours pay double
    assert_eq!(
        result_decimal(&body, "proportional_salary"),
        decimal("3300.00")
    );
    assert_eq!(result_decimal(&body, "holiday_value"), decimal("360.00"));
    assert_eq!(result_decimal(&body, "dsr_overtime_value"), decimal("72.00"));
    assert_eq!(result_decimal(&body, "gross_salary"), decimal("3732.00"));
}

#[tokio::test]
async fn test_e2e_005_twelve_by_thirty_six_suppresses_dsr_by_default() {
    let request = json!({
        "employee_name": "Carlos Lima",
        "calculation_mode": "monthly",
        "base_salary": "3300.00",
        "days_worked": 15,
        "business_days": 25,
        "non_business_days": 5,
        "reference_month": 4,
        "reference_year": 2024,
        "work_scale": "twelve_by_thirty_six",
        "worked_on_holiday": true,
        "holiday_hours": "12"
    });

    let (status, body) = post_json(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_decimal(&body, "dsr_overtime_value"), decimal("0"));
    assert_eq!(result_decimal(&body, "gross_salary"), decimal("3660.00"));
}

#[tokio::test]
async fn test_e2e_006_hazard_pay_and_allowances() {
    let mut request = monthly_request("3000.00");
    request["days_worked"] = json!(10);
    request["has_hazard_pay"] = json!(true);
    request["visits_amount"] = json!(4);
    request["visit_unit_value"] = json!("25.00");
    request["cost_allowance"] = json!("80.00");

    let (status, body) = post_json(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // hazard stays on the full base even in a partial month
    assert_eq!(
        result_decimal(&body, "proportional_salary"),
        decimal("1000.00")
    );
    assert_eq!(result_decimal(&body, "hazard_pay_value"), decimal("900.00"));
    assert_eq!(
        result_decimal(&body, "visits_total_value"),
        decimal("100.00")
    );
    assert_eq!(result_decimal(&body, "gross_salary"), decimal("2080.00"));
}

// =============================================================================
// Thirteenth scenarios
// =============================================================================

#[tokio::test]
async fn test_e2e_007_thirteenth_clt_avos() {
    let request = json!({
        "employee_name": "Ana Pereira",
        "calculation_mode": "thirteenth",
        "base_salary": "2400.00",
        "thirteenth_calculation_type": "clt",
        "thirteenth_detailed_days": {
            "1": 30, "2": 30, "3": 30, "4": 30, "5": 30, "6": 30
        }
    });

    let (status, body) = post_json(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["thirteenth_total_avos"], json!(6));
    assert_eq!(result_decimal(&body, "gross_salary"), decimal("1200.00"));
    // the monthly field group stays zeroed
    assert_eq!(result_decimal(&body, "proportional_salary"), decimal("0"));
    assert_eq!(result_decimal(&body, "hourly_rate"), decimal("0"));
}

#[tokio::test]
async fn test_e2e_008_thirteenth_daily_exact() {
    let request = json!({
        "employee_name": "Ana Pereira",
        "calculation_mode": "thirteenth",
        "base_salary": "3600.00",
        "thirteenth_calculation_type": "daily_exact",
        "thirteenth_detailed_days": { "1": 14, "2": 10 }
    });

    let (status, body) = post_json(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["thirteenth_total_days"], json!(24));
    assert_eq!(result_decimal(&body, "gross_salary"), decimal("240.00"));
}

// =============================================================================
// Validation boundaries
// =============================================================================

#[tokio::test]
async fn test_e2e_009_minimum_wage_boundary() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        monthly_request("1411.99"),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["valid"], json!(false));
    assert!(
        body["errors"][0]
            .as_str()
            .unwrap()
            .contains("minimum wage")
    );

    let (status, _) = post_json(
        create_router_for_test(),
        "/calculate",
        monthly_request("1412.00"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_e2e_010_absence_boundary() {
    let mut at_limit = monthly_request("3000.00");
    at_limit["absences"] = json!(30);
    let (status, _) = post_json(create_router_for_test(), "/calculate", at_limit).await;
    assert_eq!(status, StatusCode::OK);

    let mut over = monthly_request("3000.00");
    over["absences"] = json!(31);
    let (status, body) = post_json(create_router_for_test(), "/calculate", over).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"][0].as_str().unwrap().contains("absence"));
}

#[tokio::test]
async fn test_e2e_011_validate_endpoint_returns_full_report() {
    let mut request = monthly_request("150000.00");
    request["pix_key"] = json!("not a key");

    let (status, body) = post_json(create_router_for_test(), "/validate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], json!(true));
    assert_eq!(body["errors"].as_array().unwrap().len(), 0);
    assert_eq!(body["warnings"].as_array().unwrap().len(), 2);
    assert_eq!(body["validated"]["employee_name"], json!("Maria Souza"));
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_e2e_012_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], json!("MALFORMED_JSON"));
}

#[tokio::test]
async fn test_e2e_013_response_envelope_carries_trace_and_identity() {
    let mut request = monthly_request("3000.00");
    request["overtime_hours"] = json!("10");

    let (status, body) = post_json(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["calculation_id"].as_str().is_some());
    assert!(body["timestamp"].as_str().is_some());
    assert_eq!(body["engine_version"], json!(env!("CARGO_PKG_VERSION")));

    let steps = body["trace"]["steps"].as_array().unwrap();
    assert!(!steps.is_empty());
    assert_eq!(steps[0]["rule_id"], json!("CLT-HOURLY-RATE"));
    assert_eq!(steps.last().unwrap()["rule_id"], json!("CLT-GROSS"));
}
