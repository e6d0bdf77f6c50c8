//! Request types for the fare engine API.
//!
//! This module defines the JSON request structure for the `/estimate`
//! endpoint and how it resolves into engine inputs.

use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TARIFF_ID;
use crate::error::EngineResult;
use crate::models::{Coordinates, RouteDetails};

/// Seconds west of UTC for Buenos Aires, which is on UTC-03:00 all year.
pub const BUENOS_AIRES_SECONDS_WEST: i32 = 3 * 3600;

/// Request body for the `/estimate` endpoint.
///
/// The route is taken from `route` when present, otherwise estimated as a
/// straight line between `origin` and `destination`. With neither, the route
/// is absent and the fare is zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Tariff to price with.
    #[serde(default = "default_tariff_id")]
    pub tariff_id: String,
    /// Measured route, as returned by a routing service.
    #[serde(default)]
    pub route: Option<RouteRequest>,
    /// Trip origin, used for a straight-line estimate.
    #[serde(default)]
    pub origin: Option<Coordinates>,
    /// Trip destination, used for a straight-line estimate.
    #[serde(default)]
    pub destination: Option<Coordinates>,
    /// Local travel time; defaults to the current time in Buenos Aires.
    #[serde(default)]
    pub travel_time: Option<NaiveDateTime>,
}

fn default_tariff_id() -> String {
    DEFAULT_TARIFF_ID.to_string()
}

/// Measured route in a request, validated into a [`RouteDetails`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Route length in meters.
    pub distance_meters: f64,
    /// Travel time in seconds; zero or absent means unknown.
    #[serde(default)]
    pub duration_seconds: f64,
}

impl TryFrom<RouteRequest> for RouteDetails {
    type Error = crate::error::EngineError;

    fn try_from(req: RouteRequest) -> EngineResult<Self> {
        RouteDetails::new(req.distance_meters, req.duration_seconds)
    }
}

/// A route resolved from a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRoute {
    /// The validated route.
    pub details: RouteDetails,
    /// Whether the route was estimated from coordinates.
    pub straight_line: bool,
}

impl EstimateRequest {
    /// Resolves the route to price.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(..))` from `route`, or from `origin` and `destination`
    /// - `Ok(None)` when neither is given
    /// - `InvalidRoute` when the supplied values are out of range
    pub fn resolve_route(&self) -> EngineResult<Option<ResolvedRoute>> {
        if let Some(route) = self.route {
            return Ok(Some(ResolvedRoute {
                details: route.try_into()?,
                straight_line: false,
            }));
        }

        match (&self.origin, &self.destination) {
            (Some(origin), Some(destination)) => Ok(Some(ResolvedRoute {
                details: RouteDetails::straight_line(origin, destination)?,
                straight_line: true,
            })),
            _ => Ok(None),
        }
    }

    /// Returns the travel time, defaulting to the current Buenos Aires time.
    pub fn travel_time_or_now(&self) -> NaiveDateTime {
        self.travel_time.unwrap_or_else(buenos_aires_now)
    }
}

/// The fixed UTC offset of Buenos Aires.
pub fn buenos_aires_offset() -> FixedOffset {
    FixedOffset::west_opt(BUENOS_AIRES_SECONDS_WEST).unwrap_or_else(|| Utc.fix())
}

/// Current local wall-clock time in Buenos Aires.
pub fn buenos_aires_now() -> NaiveDateTime {
    Utc::now().with_timezone(&buenos_aires_offset()).naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> EstimateRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_buenos_aires_offset_is_three_hours_behind_utc() {
        assert_eq!(buenos_aires_offset().local_minus_utc(), -10_800);

        let utc = Utc::now().naive_utc();
        let local = buenos_aires_now();
        let behind = (utc - local).num_minutes();
        assert!((179..=181).contains(&behind), "offset was {} minutes", behind);
    }

    #[test]
    fn test_defaults_apply_to_empty_request() {
        let request = parse(json!({}));
        assert_eq!(request.tariff_id, DEFAULT_TARIFF_ID);
        assert!(request.route.is_none());
        assert!(request.travel_time.is_none());
        assert_eq!(request.resolve_route().unwrap(), None);
    }

    #[test]
    fn test_explicit_route_wins_over_coordinates() {
        let request = parse(json!({
            "route": { "distance_meters": 1200.0, "duration_seconds": 240.0 },
            "origin": { "lat": -34.60, "lng": -58.38 },
            "destination": { "lat": -34.58, "lng": -58.42 }
        }));
        let resolved = request.resolve_route().unwrap().unwrap();
        assert!(!resolved.straight_line);
        assert_eq!(resolved.details.distance_meters(), 1200.0);
        assert_eq!(resolved.details.duration_seconds(), 240.0);
    }

    #[test]
    fn test_coordinates_produce_straight_line_route() {
        let request = parse(json!({
            "origin": { "lat": -34.60, "lng": -58.38 },
            "destination": { "lat": -34.58, "lng": -58.42 }
        }));
        let resolved = request.resolve_route().unwrap().unwrap();
        assert!(resolved.straight_line);
        assert!(resolved.details.distance_meters() > 0.0);
        assert!(resolved.details.is_distance_only());
    }

    #[test]
    fn test_single_coordinate_gives_no_route() {
        let request = parse(json!({ "origin": { "lat": -34.60, "lng": -58.38 } }));
        assert_eq!(request.resolve_route().unwrap(), None);
    }

    #[test]
    fn test_negative_route_is_rejected() {
        let request = parse(json!({
            "route": { "distance_meters": 100.0, "duration_seconds": -3.0 }
        }));
        match request.resolve_route() {
            Err(EngineError::InvalidRoute { field, .. }) => assert_eq!(field, "duration_seconds"),
            other => panic!("Expected InvalidRoute, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_travel_time_is_kept() {
        let request = parse(json!({ "travel_time": "2026-01-15T23:10:00" }));
        assert_eq!(
            request.travel_time_or_now().to_string(),
            "2026-01-15 23:10:00"
        );
    }
}
