//! Configuration loading and management for the fare engine.
//!
//! This module loads tariff schedules from YAML files, exposes them through
//! the [`TariffProvider`] trait, and reads the server settings.
//!
//! # Example
//!
//! ```no_run
//! use taxi_fare::config::{DEFAULT_TARIFF_ID, TariffLoader};
//!
//! let loader = TariffLoader::load("./config/tariffs").unwrap();
//! println!("Loaded tariff: {}", loader.get_tariff(DEFAULT_TARIFF_ID).unwrap().name);
//! ```

mod loader;
mod provider;
mod types;

pub use loader::TariffLoader;
pub use provider::TariffProvider;
pub use types::{
    BIND_ADDR_ENV, CONFIG_DIR_ENV, DEFAULT_BIND_ADDR, DEFAULT_CONFIG_DIR, DEFAULT_TARIFF_ID,
    ServerConfig, TariffCatalog,
};
