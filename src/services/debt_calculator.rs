//! Motor de cálculo de deuda por quincenas
//!
//! Cuenta las quincenas cerradas entre el inicio efectivo de
//! facturación y la fecha de evaluación:
//! - La primera quincena del mes cierra el día de cierre configurado.
//! - La segunda cierra el último día del mes.
//! - Solo se cobra una quincena cuya fecha de cierre ya pasó.

use chrono::{DateTime, Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{BillingConfig, DebtReport};

pub struct DebtCalculator {
    config: BillingConfig,
}

impl DebtCalculator {
    pub fn new(config: BillingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Calcula la deuda a la fecha local de hoy.
    pub fn calculate(&self, join_date: NaiveDate) -> DebtReport {
        self.calculate_as_of(join_date, Local::now().date_naive())
    }

    /// Calcula la deuda con la fecha de alta en texto.
    ///
    /// Acepta `YYYY-MM-DD` o un timestamp RFC 3339 (la hora se
    /// descarta). Una fecha ilegible degrada a la fecha de evaluación,
    /// lo que produce deuda cero.
    pub fn calculate_from_iso(
        &self,
        join_date_iso: &str,
        evaluation_date: NaiveDate,
    ) -> DebtReport {
        let join_date = coerce_date(join_date_iso, evaluation_date);
        self.calculate_as_of(join_date, evaluation_date)
    }

    /// Calcula la deuda a una fecha de evaluación explícita.
    ///
    /// El inicio efectivo es el máximo entre la fecha de alta y la
    /// fecha de corte: un socio dado de alta antes del corte solo
    /// paga desde el corte.
    pub fn calculate_as_of(
        &self,
        join_date: NaiveDate,
        evaluation_date: NaiveDate,
    ) -> DebtReport {
        let effective_start = join_date.max(self.config.cutoff_date);

        let mut quincenas_owed = 0u32;
        let mut cursor = effective_start;

        loop {
            let boundary = closing_boundary(cursor, self.config.closing_day);
            if evaluation_date <= boundary {
                break;
            }

            quincenas_owed += 1;
            cursor = match boundary.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        let amount_owed = Decimal::from(quincenas_owed) * self.config.base_amount;

        debug!(
            "debt calc: join={}, effective_start={}, eval={}, quincenas={}, amount={}",
            join_date, effective_start, evaluation_date, quincenas_owed, amount_owed
        );

        DebtReport {
            quincenas_owed,
            amount_owed,
            range_start: effective_start,
            range_end: evaluation_date,
        }
    }
}

/// Próxima fecha de cierre en o después del cursor.
///
/// El día de cierre se ajusta al largo del mes; en meses cortos puede
/// coincidir con fin de mes y el mes aporta una sola quincena.
fn closing_boundary(cursor: NaiveDate, closing_day: u32) -> NaiveDate {
    let month_end = last_day_of_month(cursor);
    let day = closing_day.min(month_end.day());

    if cursor.day() <= day {
        cursor.with_day(day).unwrap_or(month_end)
    } else {
        month_end
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// Interpreta una fecha en texto; si no se puede, cae a `fallback`.
fn coerce_date(raw: &str, fallback: NaiveDate) -> NaiveDate {
    let trimmed = raw.trim();

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calculator() -> DebtCalculator {
        DebtCalculator::new(BillingConfig {
            base_amount: dec!(50),
            closing_day: 14,
            cutoff_date: date(2025, 1, 15),
            ..Default::default()
        })
    }

    #[test]
    fn test_cutoff_wins_before_first_boundary() {
        let report = calculator().calculate_as_of(date(2025, 1, 1), date(2025, 1, 10));

        assert_eq!(report.range_start, date(2025, 1, 15));
        assert_eq!(report.range_end, date(2025, 1, 10));
        assert_eq!(report.quincenas_owed, 0);
        assert_eq!(report.amount_owed, Decimal::ZERO);
        assert!(!report.is_delinquent());
    }

    #[test]
    fn test_month_end_boundary_after_cutoff() {
        // El corte cae el día 15, pasado el día de cierre: la primera
        // quincena facturable cierra el 31 de enero
        let report = calculator().calculate_as_of(date(2025, 1, 1), date(2025, 2, 1));

        assert_eq!(report.quincenas_owed, 1);
        assert_eq!(report.amount_owed, dec!(50));
    }

    #[test]
    fn test_open_quincena_is_not_charged() {
        let report = calculator().calculate_as_of(date(2025, 3, 1), date(2025, 3, 20));

        assert_eq!(report.range_start, date(2025, 3, 1));
        assert_eq!(report.quincenas_owed, 1);
        assert_eq!(report.amount_owed, dec!(50));
    }

    #[test]
    fn test_join_on_evaluation_date() {
        let report = calculator().calculate_as_of(date(2025, 6, 1), date(2025, 6, 1));

        assert_eq!(report.quincenas_owed, 0);
    }

    #[test]
    fn test_join_after_evaluation_date() {
        let report = calculator().calculate_as_of(date(2025, 8, 1), date(2025, 6, 1));

        assert_eq!(report.quincenas_owed, 0);
        assert_eq!(report.amount_owed, Decimal::ZERO);
    }

    #[test]
    fn test_join_equal_to_cutoff_billed_from_cutoff() {
        let report = calculator().calculate_as_of(date(2025, 1, 15), date(2025, 2, 1));

        assert_eq!(report.range_start, date(2025, 1, 15));
        assert_eq!(report.quincenas_owed, 1);
    }

    #[test]
    fn test_unparseable_join_date_yields_zero_debt() {
        let eval = date(2025, 5, 10);

        let empty = calculator().calculate_from_iso("", eval);
        assert_eq!(empty.quincenas_owed, 0);
        assert_eq!(empty.range_start, eval);

        let garbage = calculator().calculate_from_iso("no-es-fecha", eval);
        assert_eq!(garbage.quincenas_owed, 0);
    }

    #[test]
    fn test_rfc3339_join_date_uses_calendar_date() {
        let report =
            calculator().calculate_from_iso("2025-03-01T10:30:00Z", date(2025, 3, 20));

        assert_eq!(report.range_start, date(2025, 3, 1));
        assert_eq!(report.quincenas_owed, 1);
    }

    #[test]
    fn test_full_year_accumulates_two_per_month() {
        let report = calculator().calculate_as_of(date(2025, 2, 1), date(2026, 2, 1));

        assert_eq!(report.quincenas_owed, 24);
        assert_eq!(report.amount_owed, dec!(1200));
    }

    #[test]
    fn test_closing_day_clamped_in_short_month() {
        let calc = DebtCalculator::new(BillingConfig {
            base_amount: dec!(50),
            closing_day: 30,
            cutoff_date: date(2025, 1, 15),
            ..Default::default()
        });

        // Febrero: el cierre ajustado coincide con fin de mes y el mes
        // aporta una sola quincena
        let report = calc.calculate_as_of(date(2025, 2, 1), date(2025, 3, 1));

        assert_eq!(report.quincenas_owed, 1);
    }

    #[test]
    fn test_late_fees_never_folded_into_amount() {
        let calc = DebtCalculator::new(BillingConfig {
            base_amount: dec!(50),
            closing_day: 14,
            late_fee_pct: dec!(99),
            penalty_fee_pct: dec!(99),
            cutoff_date: date(2025, 1, 15),
            ..Default::default()
        });

        let report = calc.calculate_as_of(date(2025, 3, 1), date(2025, 3, 20));

        assert_eq!(report.amount_owed, dec!(50));
    }
}
