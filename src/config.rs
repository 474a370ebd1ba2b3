// src/config.rs
use std::env;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::BillingError;
use crate::models::BillingConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub billing: BillingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, BillingError> {
        dotenv::dotenv().ok();

        let billing = match env::var("BILLING_CONFIG") {
            Ok(raw) => Self::parse_billing_json(&raw)?,
            Err(_) => Self::billing_from_vars()?,
        };

        billing.validate()?;

        if billing.closing_day > 28 {
            warn!(
                "closing_day {} will be clamped in short months",
                billing.closing_day
            );
        }

        let config = Config {
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "production".to_string()),
            billing,
        };

        info!(
            "Billing config loaded: closing_day={}, cutoff={}",
            config.billing.closing_day, config.billing.cutoff_date
        );

        Ok(config)
    }

    /// Payload JSON (completo o parcial) empujado por el almacén de
    /// configuración; los campos ausentes toman los valores por defecto.
    fn parse_billing_json(raw: &str) -> Result<BillingConfig, BillingError> {
        serde_json::from_str(raw)
            .map_err(|e| BillingError::Config(format!("BILLING_CONFIG: {}", e)))
    }

    fn billing_from_vars() -> Result<BillingConfig, BillingError> {
        let defaults = BillingConfig::default();

        Ok(BillingConfig {
            base_amount: decimal_var("BILLING_BASE_AMOUNT", defaults.base_amount)?,
            closing_day: int_var("BILLING_CLOSING_DAY", defaults.closing_day)?,
            due_day: int_var("BILLING_DUE_DAY", defaults.due_day)?,
            grace_period_days: int_var(
                "BILLING_GRACE_PERIOD_DAYS",
                defaults.grace_period_days,
            )?,
            late_fee_pct: decimal_var("BILLING_LATE_FEE_PCT", defaults.late_fee_pct)?,
            penalty_fee_pct: decimal_var(
                "BILLING_PENALTY_FEE_PCT",
                defaults.penalty_fee_pct,
            )?,
            cutoff_date: date_var("BILLING_CUTOFF_DATE", defaults.cutoff_date)?,
        })
    }
}

fn decimal_var(name: &str, default: Decimal) -> Result<Decimal, BillingError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<Decimal>()
            .map_err(|e| BillingError::Config(format!("{}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn int_var(name: &str, default: u32) -> Result<u32, BillingError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|e| BillingError::Config(format!("{}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn date_var(name: &str, default: NaiveDate) -> Result<NaiveDate, BillingError> {
    match env::var(name) {
        Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| BillingError::InvalidDate(format!("{}: {}", name, raw))),
        Err(_) => Ok(default),
    }
}
