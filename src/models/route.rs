//! Route model and related types.
//!
//! This module defines [`RouteDetails`], the distance and duration measured
//! for a trip, and [`Coordinates`] for straight-line estimates when no routed
//! measurement is available.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Mean Earth radius in meters used for great-circle distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Longest accepted route distance in meters (100 000 km).
pub const MAX_DISTANCE_METERS: f64 = 100_000_000.0;

/// Longest accepted route duration in seconds (30 days).
pub const MAX_DURATION_SECONDS: f64 = 2_592_000.0;

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, -90 to 90.
    pub lat: f64,
    /// Longitude in degrees, -180 to 180.
    pub lng: f64,
}

impl Coordinates {
    /// Checks that both components are finite and within range.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(EngineError::InvalidRoute {
                field: "lat".to_string(),
                message: format!("latitude must be within -90 and 90, got {}", self.lat),
            });
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(EngineError::InvalidRoute {
                field: "lng".to_string(),
                message: format!("longitude must be within -180 and 180, got {}", self.lng),
            });
        }
        Ok(())
    }

    /// Great-circle distance to `other` in meters (haversine formula).
    ///
    /// # Examples
    ///
    /// ```
    /// use taxi_fare::models::Coordinates;
    ///
    /// let obelisco = Coordinates { lat: -34.603722, lng: -58.381592 };
    /// assert_eq!(obelisco.distance_meters_to(&obelisco), 0.0);
    /// ```
    pub fn distance_meters_to(&self, other: &Coordinates) -> f64 {
        let (lat1, lon1) = (self.lat.to_radians(), self.lng.to_radians());
        let (lat2, lon2) = (other.lat.to_radians(), other.lng.to_radians());
        let sin_dlat = ((lat2 - lat1) * 0.5).sin();
        let sin_dlon = ((lon2 - lon1) * 0.5).sin();
        let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        EARTH_RADIUS_METERS * c
    }
}

/// Distance and duration measured for a trip.
///
/// Both values are finite, non-negative and bounded by [`MAX_DISTANCE_METERS`]
/// and [`MAX_DURATION_SECONDS`]; construction through
/// [`RouteDetails::new`] or deserialization rejects anything else, so the fare
/// accumulator never has to guard against them. A `duration_seconds` of zero
/// marks a distance-only estimate and is never billed for waiting time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRouteDetails")]
pub struct RouteDetails {
    distance_meters: f64,
    duration_seconds: f64,
}

#[derive(Deserialize)]
struct RawRouteDetails {
    distance_meters: f64,
    #[serde(default)]
    duration_seconds: f64,
}

impl TryFrom<RawRouteDetails> for RouteDetails {
    type Error = EngineError;

    fn try_from(raw: RawRouteDetails) -> EngineResult<Self> {
        RouteDetails::new(raw.distance_meters, raw.duration_seconds)
    }
}

impl RouteDetails {
    /// Creates a routed measurement.
    ///
    /// # Returns
    ///
    /// Returns `InvalidRoute` if either value is negative, NaN, infinite or
    /// above its maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use taxi_fare::models::RouteDetails;
    ///
    /// let route = RouteDetails::new(1500.0, 420.0).unwrap();
    /// assert_eq!(route.distance_meters(), 1500.0);
    /// assert!(!route.is_distance_only());
    ///
    /// assert!(RouteDetails::new(-1.0, 0.0).is_err());
    /// assert!(RouteDetails::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(distance_meters: f64, duration_seconds: f64) -> EngineResult<Self> {
        check_measurement("distance_meters", distance_meters, MAX_DISTANCE_METERS)?;
        check_measurement("duration_seconds", duration_seconds, MAX_DURATION_SECONDS)?;
        Ok(Self {
            distance_meters,
            duration_seconds,
        })
    }

    /// Creates a distance-only measurement (`duration_seconds` is zero).
    pub fn distance_only(distance_meters: f64) -> EngineResult<Self> {
        Self::new(distance_meters, 0.0)
    }

    /// Estimates a route as the straight line between two points.
    ///
    /// The duration is left at zero since no travel time is known.
    ///
    /// # Examples
    ///
    /// ```
    /// use taxi_fare::models::{Coordinates, RouteDetails};
    ///
    /// let origin = Coordinates { lat: -34.603722, lng: -58.381592 };
    /// let destination = Coordinates { lat: -34.5889, lng: -58.3974 };
    /// let route = RouteDetails::straight_line(&origin, &destination).unwrap();
    /// assert!(route.distance_meters() > 2000.0 && route.distance_meters() < 2300.0);
    /// assert!(route.is_distance_only());
    /// ```
    pub fn straight_line(origin: &Coordinates, destination: &Coordinates) -> EngineResult<Self> {
        origin.validate()?;
        destination.validate()?;
        Self::distance_only(origin.distance_meters_to(destination))
    }

    /// Route length in meters.
    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Travel time in seconds, zero when unknown.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Returns true if no timing data is attached to this route.
    pub fn is_distance_only(&self) -> bool {
        self.duration_seconds == 0.0
    }
}

fn check_measurement(field: &str, value: f64, max: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidRoute {
            field: field.to_string(),
            message: format!("must be a finite number, got {}", value),
        });
    }
    if value < 0.0 {
        return Err(EngineError::InvalidRoute {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    if value > max {
        return Err(EngineError::InvalidRoute {
            field: field.to_string(),
            message: format!("must not exceed {}, got {}", max, value),
        });
    }
    Ok(())
}
