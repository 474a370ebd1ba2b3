//! Vecinal Billing Engine
//!
//! This crate provides the dues-calculation core for a residential
//! association. It includes:
//!
//! - Domain models (BillingConfig, DebtReport)
//! - The quincena debt calculator
//! - Unified error handling for configuration loading
//! - Application configuration from the environment

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::BillingError;
pub use models::{BillingConfig, DebtReport};
pub use services::DebtCalculator;

/// Result type alias using BillingError
pub type BillingResult<T> = Result<T, BillingError>;
