//! Calculation logic for the fare engine.
//!
//! This module contains the pure functions that turn a tariff, a measured
//! route and a travel time into a fare: night window classification, fare
//! accumulation with started-unit billing, and rounding/display of amounts.

mod fare;
mod night_window;
mod rounding;

pub use fare::{calculate_fare, started_units};
pub use night_window::{is_night_active, is_night_hour};
pub use rounding::{FARE_DECIMAL_PLACES, format_amount, round_fare};
