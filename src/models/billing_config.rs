// src/models/billing_config.rs
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// Configuración de facturación de la asociación
///
/// La configuración es propiedad del almacén externo; este crate solo
/// la lee. Los campos `due_day`, `grace_period_days`, `late_fee_pct` y
/// `penalty_fee_pct` son informativos para otros consumidores y no
/// entran en el cálculo de deuda.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Monto cobrado por cada quincena cerrada
    pub base_amount: Decimal,

    /// Día del mes que cierra la primera quincena
    pub closing_day: u32,

    /// Día de vencimiento (informativo)
    pub due_day: u32,

    /// Días de gracia para pago anticipado (informativo)
    pub grace_period_days: u32,

    /// Porcentaje de recargo por mora (informativo)
    pub late_fee_pct: Decimal,

    /// Porcentaje de penalidad (informativo)
    pub penalty_fee_pct: Decimal,

    /// Fecha de corte: nunca se cobra retroactivamente antes de ella
    pub cutoff_date: NaiveDate,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            base_amount: Decimal::from(50),
            closing_day: 14,
            due_day: 20,
            grace_period_days: 5,
            late_fee_pct: Decimal::from(10),
            penalty_fee_pct: Decimal::from(20),
            cutoff_date: NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap_or_default(),
        }
    }
}

impl BillingConfig {
    /// Valida la configuración antes de usarla.
    ///
    /// Días de cierre 29-31 se aceptan; el calculador los ajusta al
    /// largo de cada mes.
    pub fn validate(&self) -> Result<(), BillingError> {
        if self.closing_day < 1 || self.closing_day > 31 {
            return Err(BillingError::InvalidClosingDay(self.closing_day));
        }

        if self.base_amount < Decimal::ZERO {
            return Err(BillingError::InvalidAmount(format!(
                "base_amount must not be negative: {}",
                self.base_amount
            )));
        }

        Ok(())
    }
}
