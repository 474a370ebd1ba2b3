// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Invalid closing day: {0} (must be between 1 and 31)")]
    InvalidClosingDay(u32),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BillingError {
    pub fn error_code(&self) -> &str {
        match self {
            BillingError::InvalidClosingDay(_) => "invalid_closing_day",
            BillingError::InvalidAmount(_) => "invalid_amount",
            BillingError::InvalidDate(_) => "invalid_date",
            BillingError::Config(_) => "config_error",
        }
    }
}
