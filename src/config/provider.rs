//! Tariff provider abstraction.
//!
//! The fare engine does not care where tariffs come from. Callers resolve a
//! tariff through a [`TariffProvider`] and pass the outcome straight to
//! [`calculate_fare`](crate::calculation::calculate_fare); `None` flows into
//! the zero-fare path.

use crate::models::Tariff;

use super::loader::TariffLoader;
use super::types::TariffCatalog;

/// A source of tariffs addressed by opaque id.
///
/// Implementations must be `Send + Sync` so a provider can be shared across
/// request handlers.
pub trait TariffProvider: Send + Sync {
    /// Returns the tariff with the given id, or `None` if none is available.
    fn tariff(&self, id: &str) -> Option<&Tariff>;
}

impl TariffProvider for TariffCatalog {
    fn tariff(&self, id: &str) -> Option<&Tariff> {
        self.get(id)
    }
}

impl TariffProvider for TariffLoader {
    fn tariff(&self, id: &str) -> Option<&Tariff> {
        self.catalog().get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_fare;
    use crate::config::DEFAULT_TARIFF_ID;
    use crate::models::RouteDetails;
    use chrono::NaiveDate;

    fn provider() -> Box<dyn TariffProvider> {
        Box::new(TariffLoader::load("./config/tariffs").unwrap())
    }

    #[test]
    fn test_provider_returns_known_tariff() {
        let provider = provider();
        assert_eq!(
            provider.tariff(DEFAULT_TARIFF_ID).map(|t| t.currency.as_str()),
            Some("ARS")
        );
    }

    #[test]
    fn test_unknown_tariff_flows_into_zero_fare() {
        let provider = provider();
        let route = RouteDetails::new(3000.0, 600.0).unwrap();
        let noon = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        let result = calculate_fare(Some(&route), provider.tariff("missing"), noon);
        assert!(result.is_degenerate());
    }

    #[test]
    fn test_empty_catalog_provides_nothing() {
        let catalog = TariffCatalog::default();
        assert!(catalog.tariff(DEFAULT_TARIFF_ID).is_none());
    }
}
