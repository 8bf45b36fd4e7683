//! Per-period aggregation of movement amounts

use bigdecimal::BigDecimal;
use std::collections::BTreeMap;

use crate::traits::Periodic;
use crate::types::*;

/// Calculated sums keyed by period
pub type PeriodTotals = BTreeMap<Period, BigDecimal>;

/// Sum movement amounts per year-month period
pub fn calculate_balances(movements: &[Movement]) -> PeriodTotals {
    movements
        .iter()
        .fold(PeriodTotals::new(), |mut totals, movement| {
            *totals
                .entry(movement.period())
                .or_insert_with(|| BigDecimal::from(0)) += &movement.amount;
            totals
        })
}

/// Calculated sum for a period, zero when no movement fell into it
pub fn calculated_for(totals: &PeriodTotals, period: &Period) -> BigDecimal {
    totals
        .get(period)
        .cloned()
        .unwrap_or_else(|| BigDecimal::from(0))
}
