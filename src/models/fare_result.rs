//! Fare result models.
//!
//! This module contains the [`FareResult`] returned by the fare accumulator
//! and the [`FareBreakdown`] recording how the total was assembled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The components that make up a fare, before rounding.
///
/// # Example
///
/// ```
/// use taxi_fare::models::FareBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = FareBreakdown::default();
/// assert_eq!(breakdown.subtotal(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBreakdown {
    /// The fixed flag-down charge.
    pub flag_down: Decimal,
    /// Number of started distance units billed.
    pub distance_units: u64,
    /// Amount charged for distance.
    pub distance_charge: Decimal,
    /// Number of started waiting tokens billed.
    pub waiting_tokens: u64,
    /// Amount charged for elapsed time.
    pub waiting_charge: Decimal,
}

impl FareBreakdown {
    /// Sum of all components, unrounded. Saturates at `Decimal::MAX`.
    pub fn subtotal(&self) -> Decimal {
        self.flag_down
            .saturating_add(self.distance_charge)
            .saturating_add(self.waiting_charge)
    }
}

/// The outcome of a single fare calculation.
///
/// `total_fare` always carries exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareResult {
    /// The total fare, rounded to two decimal places.
    pub total_fare: Decimal,
    /// Label of the tariff tier that was applied.
    pub active_tariff_label: String,
    /// Whether the night tier was applied.
    pub is_night: bool,
    /// How the total was assembled.
    pub breakdown: FareBreakdown,
}

impl FareResult {
    /// The result returned when the route or the tariff is unavailable.
    ///
    /// # Example
    ///
    /// ```
    /// use taxi_fare::models::FareResult;
    ///
    /// let result = FareResult::degenerate();
    /// assert!(result.is_degenerate());
    /// assert_eq!(result.total_fare.to_string(), "0.00");
    /// ```
    pub fn degenerate() -> Self {
        Self {
            total_fare: Decimal::new(0, 2),
            active_tariff_label: String::new(),
            is_night: false,
            breakdown: FareBreakdown::default(),
        }
    }

    /// Returns true if this is the all-zero result for missing input.
    pub fn is_degenerate(&self) -> bool {
        self.total_fare.is_zero() && self.active_tariff_label.is_empty() && !self.is_night
    }
}
