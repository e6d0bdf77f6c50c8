//! HTTP API module for the fare engine.
//!
//! This module provides the REST endpoints for estimating taxi fares and
//! inspecting the configured tariffs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BUENOS_AIRES_SECONDS_WEST, EstimateRequest, ResolvedRoute, RouteRequest, buenos_aires_now,
    buenos_aires_offset,
};
pub use response::{ApiError, EstimateResponse};
pub use state::AppState;
