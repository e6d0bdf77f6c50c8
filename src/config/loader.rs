//! Configuration loading functionality.
//!
//! This module provides the [`TariffLoader`] type for loading tariff
//! schedules from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::Tariff;

use super::types::TariffCatalog;

/// Loads and provides access to tariff schedules.
///
/// The `TariffLoader` reads every `*.yaml` or `*.yml` file in a directory, one tariff
/// per file, validates each one and indexes them by id.
///
/// # Directory Structure
///
/// ```text
/// config/tariffs/
/// └── currentBuenosAires.yaml   # Official CABA schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use taxi_fare::config::{DEFAULT_TARIFF_ID, TariffLoader};
///
/// let loader = TariffLoader::load("./config/tariffs").unwrap();
/// let tariff = loader.get_tariff(DEFAULT_TARIFF_ID).unwrap();
/// println!("Flag-down: {} {}", tariff.currency, tariff.flag_down);
/// ```
#[derive(Debug, Clone)]
pub struct TariffLoader {
    catalog: TariffCatalog,
}

impl TariffLoader {
    /// Loads every tariff from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `TariffLoader` instance on success, or an error if:
    /// - The directory is missing or contains no `*.yaml` or `*.yml` file
    /// - Any file contains invalid YAML or misses a required field
    /// - Any tariff fails validation, or two files share a tariff id
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let files = Self::tariff_files(path)?;

        let mut tariffs = Vec::with_capacity(files.len());
        for file in &files {
            let tariff = Self::load_yaml::<Tariff>(file)?;
            debug!(tariff_id = %tariff.id, path = %file.display(), "Loaded tariff file");
            tariffs.push(tariff);
        }

        let catalog = TariffCatalog::new(tariffs)?;
        info!(
            path = %path.display(),
            tariff_count = catalog.len(),
            tariff_ids = ?catalog.ids().collect::<Vec<_>>(),
            "Tariff configuration loaded"
        );

        Ok(Self { catalog })
    }

    /// Lists the `*.yaml` and `*.yml` files in a directory, sorted by file name.
    fn tariff_files(dir: &Path) -> EngineResult<Vec<PathBuf>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tariff files found)", dir_str),
            });
        }

        files.sort();
        Ok(files)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tariff catalogue.
    pub fn catalog(&self) -> &TariffCatalog {
        &self.catalog
    }

    /// Gets a tariff by its id.
    ///
    /// # Returns
    ///
    /// Returns the tariff if found, or `TariffNotFound` error.
    pub fn get_tariff(&self, id: &str) -> EngineResult<&Tariff> {
        self.catalog
            .get(id)
            .ok_or_else(|| EngineError::TariffNotFound { id: id.to_string() })
    }
}
