//! Fare estimation engine for Buenos Aires taxis.
//!
//! This crate selects the day or night tier of a published tariff from the
//! travel time and converts a measured route into a fare: a flag-down charge
//! plus every started distance unit and waiting token.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
