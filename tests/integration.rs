//! Integration tests for the taxi fare engine.
//!
//! This test suite drives the HTTP API end to end and covers:
//! - Day and night tier selection, including the midnight wrap
//! - Started-unit billing for distance and waiting time
//! - Straight-line estimates that never bill waiting time
//! - Missing route and unknown tariff (zero fare)
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

use taxi_fare::api::{AppState, create_router};
use taxi_fare::config::TariffLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let loader = TariffLoader::load("./config/tariffs").expect("Failed to load config");
    create_router(AppState::new(loader))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_estimate(body: Value) -> (StatusCode, Value) {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/estimate")
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

fn routed_request(distance_meters: f64, duration_seconds: f64, travel_time: &str) -> Value {
    json!({
        "tariff_id": "currentBuenosAires",
        "route": {
            "distance_meters": distance_meters,
            "duration_seconds": duration_seconds
        },
        "travel_time": travel_time
    })
}

async fn post_routed(
    distance_meters: f64,
    duration_seconds: f64,
    travel_time: &str,
) -> (StatusCode, Value) {
    post_estimate(routed_request(distance_meters, duration_seconds, travel_time)).await
}

fn assert_total_fare(result: &Value, expected: &str) {
    let actual = result["fare"]["total_fare"].as_str().unwrap();
    assert_eq!(
        actual, expected,
        "Expected total_fare {}, got {}",
        expected, actual
    );
    // always two decimal places
    assert_eq!(decimal(actual).scale(), 2);
}

// =============================================================================
// Day tier
// =============================================================================

#[tokio::test]
async fn test_day_trip_with_distance_and_time() {
    // 2.5 km in 7 minutes at noon: 13 units and 7 tokens at 192.00
    let (status, result) = post_routed(2500.0, 420.0, "2026-01-15T12:00:00").await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fare(&result, "5760.00");
    assert_eq!(result["fare"]["active_tariff_label"], "Diurna");
    assert_eq!(result["fare"]["is_night"], false);
    assert_eq!(result["fare"]["breakdown"]["distance_units"], 13);
    assert_eq!(result["fare"]["breakdown"]["waiting_tokens"], 7);
    assert_eq!(result["formatted_fare"], "ARS 5.760,00");
    assert_eq!(result["straight_line"], false);
}

#[tokio::test]
async fn test_partial_units_billed_as_full_units() {
    // 201 m in 61 s: 2 units and 2 tokens
    let (_, result) = post_routed(201.0, 61.0, "2026-01-15T09:30:00").await;

    assert_total_fare(&result, "2688.00");
    assert_eq!(result["fare"]["breakdown"]["distance_charge"], "384.00");
    assert_eq!(result["fare"]["breakdown"]["waiting_charge"], "384.00");
}

#[tokio::test]
async fn test_zero_distance_trip_costs_flag_down() {
    let (_, result) = post_routed(0.0, 0.0, "2026-01-15T15:00:00").await;

    assert_total_fare(&result, "1920.00");
    assert_eq!(result["formatted_fare"], "ARS 1.920,00");
}

// =============================================================================
// Night tier
// =============================================================================

#[tokio::test]
async fn test_night_trip_before_midnight() {
    // 1 km in 5 minutes at 23:15: 5 units and 5 tokens at 230.40
    let (_, result) = post_routed(1000.0, 300.0, "2026-01-15T23:15:00").await;

    assert_total_fare(&result, "4224.00");
    assert_eq!(result["fare"]["active_tariff_label"], "Nocturna (20% Recargo)");
    assert_eq!(result["fare"]["is_night"], true);
}

#[tokio::test]
async fn test_night_trip_after_midnight() {
    let (_, result) = post_routed(1000.0, 300.0, "2026-01-16T03:00:00").await;

    assert_eq!(result["fare"]["is_night"], true);
    assert_total_fare(&result, "4224.00");
}

#[tokio::test]
async fn test_night_window_boundaries() {
    let cases = [
        ("2026-01-15T21:59:00", false),
        ("2026-01-15T22:00:00", true),
        ("2026-01-16T05:59:00", true),
        ("2026-01-16T06:00:00", false),
    ];

    for (travel_time, expected_night) in cases {
        let (_, result) = post_routed(1000.0, 300.0, travel_time).await;
        assert_eq!(
            result["fare"]["is_night"], expected_night,
            "unexpected tier at {}",
            travel_time
        );
    }
}

// =============================================================================
// Straight-line estimates
// =============================================================================

#[tokio::test]
async fn test_straight_line_estimate_bills_distance_only() {
    let body = json!({
        "origin": { "lat": -34.603722, "lng": -58.381592 },
        "destination": { "lat": -34.5889, "lng": -58.3974 },
        "travel_time": "2026-01-15T12:00:00"
    });
    let (status, result) = post_estimate(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["straight_line"], true);
    assert_eq!(result["route"]["duration_seconds"], 0.0);
    assert_eq!(result["fare"]["breakdown"]["waiting_tokens"], 0);
    assert_eq!(result["fare"]["breakdown"]["waiting_charge"], "0");

    let distance = result["route"]["distance_meters"].as_f64().unwrap();
    let expected_units = (distance / 200.0).ceil() as u64;
    assert_eq!(result["fare"]["breakdown"]["distance_units"], expected_units);
}

#[tokio::test]
async fn test_out_of_range_coordinates_return_400() {
    let body = json!({
        "origin": { "lat": -134.6, "lng": -58.38 },
        "destination": { "lat": -34.58, "lng": -58.39 }
    });
    let (status, result) = post_estimate(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_ROUTE");
}

// =============================================================================
// Missing input
// =============================================================================

#[tokio::test]
async fn test_missing_route_returns_zero_fare() {
    let body = json!({ "travel_time": "2026-01-15T23:00:00" });
    let (status, result) = post_estimate(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fare(&result, "0.00");
    assert_eq!(result["fare"]["active_tariff_label"], "");
    assert_eq!(result["fare"]["is_night"], false);
    assert!(result["route"].is_null());
    // the tariff itself is still known
    assert_eq!(result["currency"], "ARS");
}

#[tokio::test]
async fn test_unknown_tariff_returns_zero_fare() {
    let mut body = routed_request(5000.0, 900.0, "2026-01-15T23:00:00");
    body["tariff_id"] = json!("rosario");
    let (status, result) = post_estimate(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fare(&result, "0.00");
    assert!(result["currency"].is_null());
}

#[tokio::test]
async fn test_default_tariff_used_when_id_omitted() {
    let body = json!({
        "route": { "distance_meters": 201.0 },
        "travel_time": "2026-01-15T12:00:00"
    });
    let (_, result) = post_estimate(body).await;

    assert_eq!(result["tariff_id"], "currentBuenosAires");
    assert_total_fare(&result, "2304.00");
}

#[tokio::test]
async fn test_travel_time_defaults_to_now() {
    let body = json!({ "route": { "distance_meters": 201.0 } });
    let (status, result) = post_estimate(body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["travel_time"].is_string());
    let label = result["fare"]["active_tariff_label"].as_str().unwrap();
    assert!(label == "Diurna" || label == "Nocturna (20% Recargo)");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_negative_duration_returns_400() {
    let (status, result) = post_routed(100.0, -1.0, "2026-01-15T12:00:00").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_ROUTE");
    assert!(result["message"].as_str().unwrap().contains("duration_seconds"));
}

#[tokio::test]
async fn test_oversized_distance_returns_400() {
    let (status, result) = post_routed(1e30, 60.0, "2026-01-15T12:00:00").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_ROUTE");
    assert!(result["message"].as_str().unwrap().contains("distance_meters"));
}

#[tokio::test]
async fn test_invalid_travel_time_returns_400() {
    let mut body = routed_request(100.0, 10.0, "2026-01-15T12:00:00");
    body["travel_time"] = json!("yesterday at noon");
    let (status, result) = post_estimate(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}
