//! Application state for the fare engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TariffProvider;

/// Shared application state.
///
/// Holds the tariff provider every handler resolves tariffs through. The
/// provider is immutable once the server is running.
#[derive(Clone)]
pub struct AppState {
    /// The source of tariffs.
    tariffs: Arc<dyn TariffProvider>,
}

impl AppState {
    /// Creates a new application state around the given tariff provider.
    pub fn new(tariffs: impl TariffProvider + 'static) -> Self {
        Self {
            tariffs: Arc::new(tariffs),
        }
    }

    /// Returns the tariff provider.
    pub fn tariffs(&self) -> &dyn TariffProvider {
        self.tariffs.as_ref()
    }
}
