//! Fare accumulation.
//!
//! This module converts a measured route into a fare under the active tier of
//! a tariff: the flag-down charge, plus every started distance unit, plus
//! every started waiting token, rounded to two decimal places.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{FareBreakdown, FareResult, RouteDetails, Tariff};

use super::night_window::is_night_active;
use super::rounding::round_fare;

/// Number of started billing units needed to cover `amount`.
///
/// Any partial unit counts as a full unit, and zero needs zero units. A zero
/// `unit_size` bills nothing.
///
/// # Examples
///
/// ```
/// use taxi_fare::calculation::started_units;
///
/// assert_eq!(started_units(201.0, 200), 2);
/// assert_eq!(started_units(200.0, 200), 1);
/// assert_eq!(started_units(0.0, 200), 0);
/// assert_eq!(started_units(500.0, 0), 0);
/// ```
pub fn started_units(amount: f64, unit_size: u32) -> u64 {
    if unit_size == 0 || amount <= 0.0 {
        return 0;
    }
    (amount / f64::from(unit_size)).ceil() as u64
}

/// Calculates the fare for a trip.
///
/// This function:
/// 1. Returns [`FareResult::degenerate`] if the route or the tariff is missing
/// 2. Picks the night or day tier using [`is_night_active`]
/// 3. Starts from the tariff's flag-down charge
/// 4. Adds one `cost_per_distance_unit` per started `distance_unit_meters`,
///    unless the tier disables distance billing
/// 5. Adds one `cost_per_waiting_token` per started `waiting_token_seconds`,
///    unless the tier disables time billing or the route carries no duration
/// 6. Rounds the total with [`round_fare`](super::round_fare)
///
/// The function is pure and never fails. Route values are validated when a
/// [`RouteDetails`] is built, so they are always finite, non-negative and
/// bounded here. Charges saturate at `Decimal::MAX` instead of overflowing.
///
/// # Examples
///
/// ```no_run
/// use taxi_fare::calculation::calculate_fare;
/// use taxi_fare::config::{DEFAULT_TARIFF_ID, TariffLoader};
/// use taxi_fare::models::RouteDetails;
/// use chrono::NaiveDateTime;
///
/// let loader = TariffLoader::load("./config/tariffs").unwrap();
/// let tariff = loader.get_tariff(DEFAULT_TARIFF_ID).unwrap();
/// let route = RouteDetails::distance_only(201.0).unwrap();
/// let noon = NaiveDateTime::parse_from_str("2026-01-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = calculate_fare(Some(&route), Some(tariff), noon);
/// assert_eq!(result.total_fare.to_string(), "2304.00");
/// assert_eq!(result.active_tariff_label, "Diurna");
/// ```
pub fn calculate_fare(
    route: Option<&RouteDetails>,
    tariff: Option<&Tariff>,
    travel_time: NaiveDateTime,
) -> FareResult {
    let (Some(route), Some(tariff)) = (route, tariff) else {
        debug!(
            has_route = route.is_some(),
            has_tariff = tariff.is_some(),
            "Missing fare input, returning zero fare"
        );
        return FareResult::degenerate();
    };

    let is_night = is_night_active(tariff, travel_time);
    let active = if is_night {
        &tariff.night_tariff
    } else {
        &tariff.day_tariff
    };

    let mut breakdown = FareBreakdown {
        flag_down: tariff.flag_down,
        ..FareBreakdown::default()
    };

    if active.bills_distance() {
        breakdown.distance_units =
            started_units(route.distance_meters(), active.distance_unit_meters);
        breakdown.distance_charge = Decimal::from(breakdown.distance_units)
            .saturating_mul(active.cost_per_distance_unit);
    }

    // A zero duration means the route was estimated without timing data.
    if active.bills_waiting_time() && !route.is_distance_only() {
        breakdown.waiting_tokens =
            started_units(route.duration_seconds(), active.waiting_token_seconds);
        breakdown.waiting_charge = Decimal::from(breakdown.waiting_tokens)
            .saturating_mul(active.cost_per_waiting_token);
    }

    let total_fare = round_fare(breakdown.subtotal());

    debug!(
        tariff_id = %tariff.id,
        is_night,
        distance_units = breakdown.distance_units,
        waiting_tokens = breakdown.waiting_tokens,
        total_fare = %total_fare,
        "Fare calculated"
    );

    FareResult {
        total_fare,
        active_tariff_label: active.label.clone(),
        is_night,
        breakdown,
    }
}
