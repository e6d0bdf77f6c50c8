//! HTTP request handlers for the fare engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_fare, format_amount};
use crate::error::EngineError;

use super::request::EstimateRequest;
use super::response::{ApiError, ApiErrorResponse, EstimateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/tariffs/:id", get(tariff_handler))
        .with_state(state)
}

/// Handler for POST /estimate endpoint.
///
/// Accepts an estimate request and returns the fare for the resolved route
/// under the requested tariff. A missing route or an unknown tariff yields a
/// zero fare rather than an error.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let resolved = match request.resolve_route() {
        Ok(resolved) => resolved,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected route input"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let tariff = state.tariffs().tariff(&request.tariff_id);
    if tariff.is_none() {
        warn!(
            correlation_id = %correlation_id,
            tariff_id = %request.tariff_id,
            "No tariff available, returning zero fare"
        );
    }

    let travel_time = request.travel_time_or_now();
    let start_time = Instant::now();
    let fare = calculate_fare(resolved.as_ref().map(|r| &r.details), tariff, travel_time);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        tariff_id = %request.tariff_id,
        is_night = fare.is_night,
        total_fare = %fare.total_fare,
        straight_line = resolved.is_some_and(|r| r.straight_line),
        duration_us = duration.as_micros(),
        "Estimate completed"
    );

    let response = EstimateResponse {
        correlation_id,
        currency: tariff.map(|t| t.currency.clone()),
        formatted_fare: tariff.map(|t| format_amount(fare.total_fare, &t.currency)),
        tariff_id: request.tariff_id,
        travel_time,
        route: resolved.map(|r| r.details),
        straight_line: resolved.is_some_and(|r| r.straight_line),
        fare,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /tariffs/{id} endpoint.
///
/// Returns the full tariff schedule so callers can display its tiers.
async fn tariff_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.tariffs().tariff(&id) {
        Some(tariff) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(tariff.clone()),
        )
            .into_response(),
        None => {
            warn!(tariff_id = %id, "Tariff not found");
            ApiErrorResponse::from(EngineError::TariffNotFound { id }).into_response()
        }
    }
}
