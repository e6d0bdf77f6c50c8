//! Error types for the fare engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that is rejected at the engine boundary: tariff
//! configuration problems and invalid route measurements. The fare
//! accumulator itself never fails.

use thiserror::Error;

/// The main error type for the fare engine.
///
/// # Example
///
/// ```
/// use taxi_fare::error::EngineError;
///
/// let error = EngineError::TariffNotFound {
///     id: "cordoba".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tariff not found: cordoba");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No tariff with the requested identifier is available.
    #[error("Tariff not found: {id}")]
    TariffNotFound {
        /// The tariff identifier that was requested.
        id: String,
    },

    /// A tariff failed validation.
    #[error("Invalid tariff '{tariff_id}': {message}")]
    InvalidTariff {
        /// The identifier of the offending tariff.
        tariff_id: String,
        /// A description of what made the tariff invalid.
        message: String,
    },

    /// A route measurement or coordinate was negative, out of range or not finite.
    #[error("Invalid route field '{field}': {message}")]
    InvalidRoute {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
