//! Tariff model and related types.
//!
//! This module defines the [`Tariff`] schedule published by the city, the
//! per-tier [`TariffSpecifics`], and the [`NightTariffHours`] window that
//! decides which tier applies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Billing parameters for one tariff tier (day or night).
///
/// A zero `distance_unit_meters` or `waiting_token_seconds` disables that
/// billing dimension entirely.
///
/// # Example
///
/// ```
/// use taxi_fare::models::TariffSpecifics;
/// use rust_decimal::Decimal;
///
/// let day = TariffSpecifics {
///     label: "Diurna".to_string(),
///     cost_per_distance_unit: Decimal::new(19200, 2),
///     distance_unit_meters: 200,
///     cost_per_waiting_token: Decimal::new(19200, 2),
///     waiting_token_seconds: 60,
/// };
/// assert!(day.bills_distance());
/// assert!(day.bills_waiting_time());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffSpecifics {
    /// Display label of the tier (e.g., "Diurna").
    pub label: String,
    /// Amount charged per started distance unit.
    pub cost_per_distance_unit: Decimal,
    /// Length of one billable distance unit in meters.
    pub distance_unit_meters: u32,
    /// Amount charged per started waiting token.
    pub cost_per_waiting_token: Decimal,
    /// Length of one billable waiting token in seconds.
    pub waiting_token_seconds: u32,
}

impl TariffSpecifics {
    /// Returns true if this tier charges for distance.
    pub fn bills_distance(&self) -> bool {
        self.distance_unit_meters > 0
    }

    /// Returns true if this tier charges for elapsed time.
    pub fn bills_waiting_time(&self) -> bool {
        self.waiting_token_seconds > 0
    }

    fn validate(&self, tariff_id: &str, tier: &str) -> EngineResult<()> {
        if self.cost_per_distance_unit < Decimal::ZERO {
            return Err(invalid(
                tariff_id,
                format!("{} tier cost_per_distance_unit must not be negative", tier),
            ));
        }
        if self.cost_per_waiting_token < Decimal::ZERO {
            return Err(invalid(
                tariff_id,
                format!("{} tier cost_per_waiting_token must not be negative", tier),
            ));
        }
        Ok(())
    }
}

/// The hour window during which the night tier applies.
///
/// `start` is inclusive and `end` is exclusive. When `start > end` the
/// window wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightTariffHours {
    /// First night hour (0-23).
    pub start: u8,
    /// First day hour after the night window (0-23).
    pub end: u8,
}

impl NightTariffHours {
    /// Returns true if the window wraps past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.start > self.end
    }
}

impl std::fmt::Display for NightTariffHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00 - {:02}:00", self.start, self.end)
    }
}

/// A published two-tier fare schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Opaque identifier used by tariff providers.
    pub id: String,
    /// Human-readable name of the schedule.
    pub name: String,
    /// Currency code the amounts are expressed in (e.g., "ARS").
    pub currency: String,
    /// Fixed charge applied to every trip.
    pub flag_down: Decimal,
    /// Tier used outside the night window.
    pub day_tariff: TariffSpecifics,
    /// Tier used inside the night window.
    pub night_tariff: TariffSpecifics,
    /// Hours during which the night tier applies.
    pub night_tariff_hours: NightTariffHours,
    /// When the schedule was last published.
    pub last_updated: DateTime<Utc>,
}

impl Tariff {
    /// Checks the invariants every loaded tariff must satisfy.
    ///
    /// Rejects:
    /// - an empty id or currency
    /// - a negative flag-down or per-unit cost
    /// - night window hours outside 0-23
    /// - a night window whose start equals its end, since that would be
    ///   ambiguous between "never night" and "always night"
    ///
    /// # Examples
    ///
    /// ```
    /// use taxi_fare::models::{NightTariffHours, Tariff, TariffSpecifics};
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let tier = TariffSpecifics {
    ///     label: "Diurna".to_string(),
    ///     cost_per_distance_unit: Decimal::new(19200, 2),
    ///     distance_unit_meters: 200,
    ///     cost_per_waiting_token: Decimal::new(19200, 2),
    ///     waiting_token_seconds: 60,
    /// };
    /// let mut tariff = Tariff {
    ///     id: "currentBuenosAires".to_string(),
    ///     name: "Tarifas Oficiales CABA".to_string(),
    ///     currency: "ARS".to_string(),
    ///     flag_down: Decimal::new(192000, 2),
    ///     day_tariff: tier.clone(),
    ///     night_tariff: tier,
    ///     night_tariff_hours: NightTariffHours { start: 22, end: 6 },
    ///     last_updated: Utc::now(),
    /// };
    /// assert!(tariff.validate().is_ok());
    ///
    /// tariff.night_tariff_hours = NightTariffHours { start: 22, end: 22 };
    /// assert!(tariff.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(invalid(&self.id, "id must not be empty"));
        }
        if self.currency.trim().is_empty() {
            return Err(invalid(&self.id, "currency must not be empty"));
        }
        if self.flag_down < Decimal::ZERO {
            return Err(invalid(&self.id, "flag_down must not be negative"));
        }

        let NightTariffHours { start, end } = self.night_tariff_hours;
        if start > 23 || end > 23 {
            return Err(invalid(
                &self.id,
                format!("night window hours must be within 0-23, got {}-{}", start, end),
            ));
        }
        if start == end {
            return Err(invalid(
                &self.id,
                format!("night window start and end must differ, got {}-{}", start, end),
            ));
        }

        self.day_tariff.validate(&self.id, "day")?;
        self.night_tariff.validate(&self.id, "night")?;
        Ok(())
    }
}

fn invalid(tariff_id: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidTariff {
        tariff_id: tariff_id.to_string(),
        message: message.into(),
    }
}
