//! Reconciliation of bank movements against reported period balances

pub mod aggregator;
pub mod balances;
pub mod duplicates;
pub mod engine;

pub use aggregator::*;
pub use balances::*;
pub use duplicates::*;
pub use engine::*;
