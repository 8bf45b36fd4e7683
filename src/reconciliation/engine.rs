//! Reconciliation engine that runs duplicate detection and balance checks

use crate::reconciliation::{calculate_balances, compare_balances, find_duplicates};
use crate::traits::*;
use crate::types::*;

/// Validates batches of movements against reported balances.
///
/// The engine holds no state between calls; one instance can be shared
/// across threads.
pub struct ReconciliationEngine {
    validator: Box<dyn BatchValidator>,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Create an engine with the default intake validator
    pub fn new() -> Self {
        Self {
            validator: Box::new(DefaultBatchValidator),
        }
    }

    /// Create an engine with a custom intake validator
    pub fn with_validator(validator: Box<dyn BatchValidator>) -> Self {
        Self { validator }
    }

    /// Reconcile a batch.
    ///
    /// Duplicates short-circuit the call: when any are found the verdict
    /// carries only the duplicate groups and balances are not compared.
    pub fn validate(&self, movements: &[Movement], balances: &[Balance]) -> Verdict {
        let duplicates = find_duplicates(movements);
        if !duplicates.is_empty() {
            tracing::info!(
                movements = movements.len(),
                groups = duplicates.len(),
                "Batch rejected: duplicate movements"
            );
            return Verdict::with_duplicates(duplicates);
        }

        let calculated = calculate_balances(movements);
        tracing::debug!(
            movements = movements.len(),
            periods = calculated.len(),
            "Calculated period totals"
        );

        let balance_errors = compare_balances(&calculated, balances);
        let verdict = Verdict::with_balance_errors(balance_errors);

        tracing::info!(
            movements = movements.len(),
            balances = balances.len(),
            mismatches = verdict.reasons.balance_errors.len(),
            is_valid = verdict.is_valid,
            "Batch reconciled"
        );

        verdict
    }

    /// Run the intake validator, then reconcile the request
    pub fn validate_request(&self, request: &ReconciliationRequest) -> ReconciliationResult<Verdict> {
        self.validator.validate_batch(request).inspect_err(|e| {
            tracing::debug!(error = %e, "Batch rejected at intake");
        })?;

        Ok(self.validate(&request.movements, &request.balances))
    }
}
