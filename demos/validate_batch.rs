//! Example: reconciling a month of bank movements
//!
//! Run with `RUST_LOG=debug` to see the engine's log events.

use bigdecimal::BigDecimal;
use chrono::{TimeZone, Utc};
use reconciliation_core::{utils::EnhancedBatchValidator, *};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!("=== Movement Reconciliation Example ===\n");

    let engine = ReconciliationEngine::with_validator(Box::new(EnhancedBatchValidator));

    let movements = vec![
        Movement::new(
            1,
            Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
            "Salaire",
            BigDecimal::from_str("2500.00")?,
        ),
        Movement::new(
            2,
            Utc.with_ymd_and_hms(2024, 5, 5, 10, 0, 0).unwrap(),
            "Loyer",
            BigDecimal::from_str("-900.00")?,
        ),
        Movement::new(
            3,
            Utc.with_ymd_and_hms(2024, 5, 29, 12, 0, 0).unwrap(),
            "Achat en ligne",
            BigDecimal::from_str("-150.00")?,
        ),
    ];
    let balances = vec![Balance::new(
        Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap(),
        BigDecimal::from_str("1450.00")?,
    )];

    // 1. Clean batch
    println!("1. Reconciling a clean batch...");
    let request = ReconciliationRequest::new(movements.clone(), balances.clone());
    let verdict = engine.validate_request(&request)?;
    println!("   ✓ valid: {}\n", verdict.is_valid);

    // 2. Same purchase imported twice under a new id
    println!("2. Reconciling a batch with a re-imported movement...");
    let mut duplicated = movements.clone();
    let mut copy = movements[2].clone();
    copy.id = 4;
    duplicated.push(copy);
    let verdict = engine.validate(&duplicated, &balances);
    for group in &verdict.reasons.duplicates {
        println!("   ✗ {} ({} movements)", group.identifier, group.movements.len());
    }
    println!();

    // 3. Reported balance doesn't match
    println!("3. Reconciling against a wrong reported balance...");
    let wrong = vec![Balance::new(
        Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap(),
        BigDecimal::from_str("1500.00")?,
    )];
    let verdict = engine.validate(&movements, &wrong);
    for (period, error) in &verdict.reasons.balance_errors {
        println!(
            "   ✗ {}: expected {}, actual {}, difference {}",
            period, error.expected, error.actual, error.difference
        );
    }
    println!();

    println!("Response body:\n{}", serde_json::to_string_pretty(&verdict)?);

    Ok(())
}
