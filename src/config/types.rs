//! Configuration types for the fare engine.
//!
//! This module contains the in-memory tariff catalogue built from the YAML
//! tariff files, and the server settings read from the environment.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};
use crate::models::Tariff;

/// Identifier of the official Buenos Aires city tariff.
pub const DEFAULT_TARIFF_ID: &str = "currentBuenosAires";

/// Default directory holding one YAML file per tariff.
pub const DEFAULT_CONFIG_DIR: &str = "./config/tariffs";

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Environment variable overriding [`DEFAULT_CONFIG_DIR`].
pub const CONFIG_DIR_ENV: &str = "TAXI_FARE_CONFIG_DIR";

/// Environment variable overriding [`DEFAULT_BIND_ADDR`].
pub const BIND_ADDR_ENV: &str = "TAXI_FARE_BIND_ADDR";

/// The set of validated tariffs available to the engine, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TariffCatalog {
    tariffs: BTreeMap<String, Tariff>,
}

impl TariffCatalog {
    /// Builds a catalogue, validating every tariff.
    ///
    /// # Returns
    ///
    /// Returns an error if any tariff fails [`Tariff::validate`] or if two
    /// tariffs share an id.
    pub fn new(tariffs: Vec<Tariff>) -> EngineResult<Self> {
        let mut catalog = Self::default();
        for tariff in tariffs {
            catalog.insert(tariff)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, tariff: Tariff) -> EngineResult<()> {
        tariff.validate()?;
        if self.tariffs.contains_key(&tariff.id) {
            return Err(EngineError::InvalidTariff {
                tariff_id: tariff.id.clone(),
                message: "duplicate tariff id".to_string(),
            });
        }
        self.tariffs.insert(tariff.id.clone(), tariff);
        Ok(())
    }

    /// Returns the tariff with the given id, if any.
    pub fn get(&self, id: &str) -> Option<&Tariff> {
        self.tariffs.get(id)
    }

    /// Returns all tariff ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tariffs.keys().map(String::as_str)
    }

    /// Returns the number of tariffs.
    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    /// Returns true if no tariffs are loaded.
    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }
}

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding the tariff YAML files.
    pub config_dir: PathBuf,
    /// Address to listen on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads settings from the environment, falling back to the defaults.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EngineResult<Self> {
        let config_dir = lookup(CONFIG_DIR_ENV).unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());
        let bind_addr = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| EngineError::ConfigParseError {
                path: BIND_ADDR_ENV.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            config_dir: PathBuf::from(config_dir),
            bind_addr,
        })
    }
}
