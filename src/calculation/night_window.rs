//! Night window classification.
//!
//! This module decides whether the night tier of a tariff applies at a given
//! travel time. Only the hour of day is consulted; minutes and seconds never
//! move a trip between tiers.

use chrono::{NaiveDateTime, Timelike};

use crate::models::{NightTariffHours, Tariff};

/// Returns true if `hour` falls inside the night window.
///
/// `start` is inclusive and `end` is exclusive:
/// - When `start <= end` the window is `[start, end)` within one day.
/// - When `start > end` the window wraps past midnight: `[start, 24) ∪ [0, end)`.
///
/// A window with `start == end` is empty. Loaded tariffs never carry one,
/// since [`Tariff::validate`] rejects it.
///
/// # Examples
///
/// ```
/// use taxi_fare::calculation::is_night_hour;
/// use taxi_fare::models::NightTariffHours;
///
/// let window = NightTariffHours { start: 22, end: 6 };
/// assert!(is_night_hour(&window, 22));
/// assert!(is_night_hour(&window, 5));
/// assert!(!is_night_hour(&window, 6));
/// assert!(!is_night_hour(&window, 21));
/// ```
pub fn is_night_hour(window: &NightTariffHours, hour: u32) -> bool {
    let start = u32::from(window.start);
    let end = u32::from(window.end);

    if window.crosses_midnight() {
        hour >= start || hour < end
    } else {
        hour >= start && hour < end
    }
}

/// Determines whether the night tier applies at `travel_time`.
///
/// `travel_time` is the local wall-clock time of the trip.
///
/// # Examples
///
/// ```no_run
/// use taxi_fare::calculation::is_night_active;
/// use taxi_fare::config::{DEFAULT_TARIFF_ID, TariffLoader};
/// use chrono::NaiveDateTime;
///
/// let loader = TariffLoader::load("./config/tariffs").unwrap();
/// let tariff = loader.get_tariff(DEFAULT_TARIFF_ID).unwrap();
///
/// let late = NaiveDateTime::parse_from_str("2026-01-17 23:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_night_active(tariff, late));
/// ```
pub fn is_night_active(tariff: &Tariff, travel_time: NaiveDateTime) -> bool {
    is_night_hour(&tariff.night_tariff_hours, travel_time.hour())
}
