//! Traits for period derivation and batch intake validation

use crate::types::*;

/// Anything that falls into a reconciliation period
pub trait Periodic {
    /// Year-month bucket this item belongs to
    fn period(&self) -> Period;
}

impl Periodic for Movement {
    fn period(&self) -> Period {
        Period::from_date(&self.date)
    }
}

impl Periodic for Balance {
    fn period(&self) -> Period {
        Period::from_date(&self.date)
    }
}

/// Trait for implementing intake rules on a batch before it is reconciled
///
/// Validators only reject malformed input. Duplicates and balance mismatches
/// are reconciliation findings, so validators must not check for them.
pub trait BatchValidator: Send + Sync {
    /// Validate the batch as a whole
    fn validate_batch(&self, request: &ReconciliationRequest) -> ReconciliationResult<()>;
}

/// Default validator: both lists must be non-empty
pub struct DefaultBatchValidator;

impl BatchValidator for DefaultBatchValidator {
    fn validate_batch(&self, request: &ReconciliationRequest) -> ReconciliationResult<()> {
        if request.movements.is_empty() {
            return Err(ReconciliationError::EmptyMovements);
        }

        if request.balances.is_empty() {
            return Err(ReconciliationError::EmptyBalances);
        }

        Ok(())
    }
}
