//! Rounding and display of fare amounts.
//!
//! Fares are rounded to two decimal places with midpoints rounded away from
//! zero, so `100.005` becomes `100.01` (banker's rounding would give
//! `100.00`). Amounts are displayed in the es-AR convention used on the
//! official tariff sheets.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by every fare.
pub const FARE_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to exactly two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use taxi_fare::calculation::round_fare;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_fare(Decimal::from_str("100.005").unwrap()).to_string(), "100.01");
/// assert_eq!(round_fare(Decimal::from(1920)).to_string(), "1920.00");
/// ```
pub fn round_fare(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(FARE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(FARE_DECIMAL_PLACES);
    rounded
}

/// Formats an amount with its currency code, e.g. `"ARS 2.304,00"`.
///
/// Uses a dot as the thousands separator and a comma as the decimal
/// separator, always with two decimals.
///
/// # Examples
///
/// ```
/// use taxi_fare::calculation::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(230400, 2), "ARS"), "ARS 2.304,00");
/// assert_eq!(format_amount(Decimal::new(1234567891, 3), "ARS"), "ARS 1.234.567,89");
/// ```
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rounded = round_fare(amount);
    let text = rounded.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{} {}{},{}", currency, sign, grouped, fraction)
}
