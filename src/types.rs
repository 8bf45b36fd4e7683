//! Core types and data structures for movement reconciliation

use bigdecimal::BigDecimal;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single dated bank movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Surrogate identifier supplied by the caller (not part of movement identity)
    pub id: i64,
    /// When the movement was booked
    pub date: DateTime<Utc>,
    /// Free-form label, e.g. "Achat en ligne"
    pub label: String,
    /// Signed amount of the movement
    #[serde(with = "bigdecimal::serde::json_num")]
    pub amount: BigDecimal,
}

impl Movement {
    /// Create a new movement
    pub fn new(id: i64, date: DateTime<Utc>, label: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            id,
            date,
            label: label.into(),
            amount,
        }
    }
}

/// A reported balance as of a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Date the balance was reported for
    pub date: DateTime<Utc>,
    /// Reported amount
    #[serde(with = "bigdecimal::serde::json_num")]
    pub balance: BigDecimal,
}

impl Balance {
    /// Create a new reported balance
    pub fn new(date: DateTime<Utc>, balance: BigDecimal) -> Self {
        Self { date, balance }
    }
}

/// Calendar year-month bucket used as the reconciliation granularity.
///
/// Displays and serializes as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, returning `None` when `month` is not in `1..=12`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Truncate a timestamp to its year-month (UTC)
    pub fn from_date(date: &DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, `1..=12`
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = ReconciliationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReconciliationError::InvalidPeriod(s.to_string());

        let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
        if month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        Period::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Movements sharing the same date, label and amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Identity key shared by every movement in the group
    pub identifier: String,
    /// Movements in their original relative order (always two or more)
    pub movements: Vec<Movement>,
}

/// Mismatch between a reported balance and the sum of its period's movements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceError {
    /// Period the reported balance was checked for
    pub period: Period,
    /// Reported balance
    #[serde(with = "bigdecimal::serde::json_num")]
    pub expected: BigDecimal,
    /// Sum of recorded movements for the period
    #[serde(with = "bigdecimal::serde::json_num")]
    pub actual: BigDecimal,
    /// Absolute difference between expected and actual
    #[serde(with = "bigdecimal::serde::json_num")]
    pub difference: BigDecimal,
}

impl BalanceError {
    /// Build an error for a period, deriving the absolute difference
    pub fn new(period: Period, expected: BigDecimal, actual: BigDecimal) -> Self {
        let difference = (&expected - &actual).abs();
        Self {
            period,
            expected,
            actual,
            difference,
        }
    }
}

/// Structured reasons attached to a verdict
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reasons {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicates: Vec<DuplicateGroup>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub balance_errors: BTreeMap<Period, BalanceError>,
}

impl Reasons {
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty() && self.balance_errors.is_empty()
    }
}

/// Outcome of reconciling one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_valid: bool,
    pub reasons: Reasons,
}

impl Verdict {
    /// Verdict for a batch rejected on duplicates; balance errors are never attached
    pub fn with_duplicates(duplicates: Vec<DuplicateGroup>) -> Self {
        Self::from_reasons(Reasons {
            duplicates,
            balance_errors: BTreeMap::new(),
        })
    }

    /// Verdict for a batch that went through balance reconciliation
    pub fn with_balance_errors(balance_errors: BTreeMap<Period, BalanceError>) -> Self {
        Self::from_reasons(Reasons {
            duplicates: Vec::new(),
            balance_errors,
        })
    }

    fn from_reasons(reasons: Reasons) -> Self {
        Self {
            is_valid: reasons.is_empty(),
            reasons,
        }
    }
}

/// Batch as received from the transport layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationRequest {
    pub movements: Vec<Movement>,
    pub balances: Vec<Balance>,
}

impl ReconciliationRequest {
    pub fn new(movements: Vec<Movement>, balances: Vec<Balance>) -> Self {
        Self {
            movements,
            balances,
        }
    }
}

/// Errors raised while accepting a batch for reconciliation.
///
/// Duplicates and balance mismatches are not errors; they are reported in
/// [`Verdict::reasons`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconciliationError {
    #[error("Batch must contain at least one movement")]
    EmptyMovements,
    #[error("Batch must contain at least one balance")]
    EmptyBalances,
    #[error("Invalid period: {0} (expected YYYY-MM)")]
    InvalidPeriod(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for reconciliation operations
pub type ReconciliationResult<T> = Result<T, ReconciliationError>;
