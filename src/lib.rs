//! # Reconciliation Core
//!
//! Validates a batch of bank movements against reported period-end balances.
//!
//! ## Features
//!
//! - **Duplicate detection**: movements sharing date, label and amount are grouped, whatever their ids
//! - **Period aggregation**: exact decimal sums per calendar month
//! - **Balance reconciliation**: every reported balance is checked against its month's total
//! - **Intake validation**: pluggable batch validators for the transport layer
//!
//! ## Quick Start
//!
//! ```rust
//! use reconciliation_core::{Balance, Movement, ReconciliationEngine};
//! use bigdecimal::BigDecimal;
//! use chrono::{TimeZone, Utc};
//!
//! let engine = ReconciliationEngine::new();
//! let movements = vec![Movement::new(
//!     1,
//!     Utc.with_ymd_and_hms(2024, 5, 29, 12, 0, 0).unwrap(),
//!     "Achat en ligne",
//!     BigDecimal::from(150),
//! )];
//! let balances = vec![Balance::new(
//!     Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap(),
//!     BigDecimal::from(150),
//! )];
//!
//! let verdict = engine.validate(&movements, &balances);
//! assert!(verdict.is_valid);
//! ```

pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
