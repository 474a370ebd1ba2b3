// src/models/debt.rs
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reporte de deuda de un socio
///
/// Valor derivado: se crea en cada invocación del calculador y no se
/// persiste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtReport {
    /// Quincenas cerradas adeudadas
    pub quincenas_owed: u32,

    /// Monto total adeudado (`quincenas_owed * base_amount`)
    pub amount_owed: Decimal,

    /// Inicio efectivo de facturación (máximo entre alta y corte)
    pub range_start: NaiveDate,

    /// Fecha de evaluación
    pub range_end: NaiveDate,
}

impl DebtReport {
    pub fn is_delinquent(&self) -> bool {
        self.quincenas_owed > 0
    }
}
