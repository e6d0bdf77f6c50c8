//! Core data models for the fare engine.
//!
//! This module contains the tariff schedule, route measurement and fare
//! result types shared by the calculation, configuration and API layers.

mod fare_result;
mod route;
mod tariff;

pub use fare_result::{FareBreakdown, FareResult};
pub use route::{
    Coordinates, EARTH_RADIUS_METERS, MAX_DISTANCE_METERS, MAX_DURATION_SECONDS, RouteDetails,
};
pub use tariff::{NightTariffHours, Tariff, TariffSpecifics};
