//! Validation utilities

use crate::traits::*;
use crate::types::*;

/// Maximum accepted label length, in characters
pub const MAX_LABEL_LENGTH: usize = 500;

/// Validate that a movement label is usable
pub fn validate_label(label: &str) -> ReconciliationResult<()> {
    if label.trim().is_empty() {
        return Err(ReconciliationError::Validation(
            "Movement label cannot be empty".to_string(),
        ));
    }

    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(ReconciliationError::Validation(format!(
            "Movement label cannot exceed {} characters",
            MAX_LABEL_LENGTH
        )));
    }

    Ok(())
}

/// Enhanced batch validator with per-movement checks
pub struct EnhancedBatchValidator;

impl BatchValidator for EnhancedBatchValidator {
    fn validate_batch(&self, request: &ReconciliationRequest) -> ReconciliationResult<()> {
        // Basic validation
        DefaultBatchValidator.validate_batch(request)?;

        for movement in &request.movements {
            validate_label(&movement.label).map_err(|e| match e {
                ReconciliationError::Validation(msg) => {
                    ReconciliationError::Validation(format!("movement {}: {}", movement.id, msg))
                }
                other => other,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};

    fn request_with_label(label: &str) -> ReconciliationRequest {
        let date = Utc.with_ymd_and_hms(2024, 5, 29, 12, 0, 0).unwrap();
        ReconciliationRequest::new(
            vec![Movement::new(7, date, label, BigDecimal::from(150))],
            vec![Balance::new(date, BigDecimal::from(150))],
        )
    }

    #[test]
    fn test_validate_label() {
        assert!(validate_label("Achat en ligne").is_ok());
        assert!(validate_label("   ").is_err());
        assert!(validate_label(&"x".repeat(MAX_LABEL_LENGTH)).is_ok());
        assert!(validate_label(&"x".repeat(MAX_LABEL_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_enhanced_validator_reports_movement_id() {
        let err = EnhancedBatchValidator
            .validate_batch(&request_with_label(""))
            .unwrap_err();

        match err {
            ReconciliationError::Validation(msg) => assert!(msg.starts_with("movement 7:")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_enhanced_validator_runs_default_rules() {
        let mut request = request_with_label("Achat en ligne");
        request.balances.clear();

        assert_eq!(
            EnhancedBatchValidator.validate_batch(&request),
            Err(ReconciliationError::EmptyBalances)
        );
    }
}
