//! Comparison of calculated period totals against reported balances

use std::collections::{BTreeMap, HashSet};

use crate::reconciliation::aggregator::{calculated_for, PeriodTotals};
use crate::traits::Periodic;
use crate::types::*;

/// Compare each reported balance with the calculated total of its period.
///
/// When several balances fall into the same period the last one in input
/// order decides the outcome for that period.
pub fn compare_balances(
    calculated: &PeriodTotals,
    balances: &[Balance],
) -> BTreeMap<Period, BalanceError> {
    let mut errors = BTreeMap::new();
    let mut asserted = HashSet::new();

    for balance in balances {
        let period = balance.period();
        if !asserted.insert(period) {
            tracing::warn!(
                period = %period,
                balance = %balance.balance,
                "Period asserted more than once, later balance replaces earlier one"
            );
        }

        let actual = calculated_for(calculated, &period);
        if actual == balance.balance {
            errors.remove(&period);
        } else {
            errors.insert(
                period,
                BalanceError::new(period, balance.balance.clone(), actual),
            );
        }
    }

    errors
}
