//! Response types for the fare engine API.
//!
//! This module defines the estimate response body, the error response
//! structures and the mapping from engine errors to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{FareResult, RouteDetails};

/// Response body for the `/estimate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Identifier correlating this response with the server logs.
    pub correlation_id: Uuid,
    /// The tariff id that was requested.
    pub tariff_id: String,
    /// Currency of the tariff, absent when no tariff was available.
    pub currency: Option<String>,
    /// The fare rendered for display (e.g., "ARS 2.304,00").
    pub formatted_fare: Option<String>,
    /// The local travel time used for tier selection.
    pub travel_time: NaiveDateTime,
    /// The route that was priced, absent when none could be determined.
    pub route: Option<RouteDetails>,
    /// Whether the route is a straight-line estimate without timing data.
    pub straight_line: bool,
    /// The calculated fare.
    pub fare: FareResult,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a tariff not found error response.
    pub fn tariff_not_found(id: &str) -> Self {
        Self::with_details(
            "TARIFF_NOT_FOUND",
            format!("Tariff not found: {}", id),
            format!("No tariff with id '{}' is configured", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps an error body with a 400 status.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::TariffNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::tariff_not_found(&id),
            },
            EngineError::InvalidRoute { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ROUTE",
                    format!("Invalid route field '{}': {}", field, message),
                    "Distances, durations and coordinates must be finite and in range",
                ),
            },
            // configuration errors only surface at startup
            other => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL_ERROR", other.to_string()),
            },
        }
    }
}
