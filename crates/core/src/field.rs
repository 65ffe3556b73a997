//! Sortable columns and their raw comparable values
//!
//! The dashboard table can be sorted by any column of the record. `SortKey`
//! names the columns (using the wire/header spelling), `FieldValue` is the
//! raw value a record holds for a column.
//!
//! Comparison semantics are deliberately partial: an absent optional field,
//! a NaN, or a text/number mismatch compares as a tie, so a stable sort
//! leaves such records in their original relative order instead of failing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::transaction::TransactionRecord;

/// A sortable column, spelled as it appears on the wire and in the table
/// header. An unrecognized column name fails to parse; callers treat that
/// as "no sort key".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
pub enum SortKey {
    #[serde(rename = "AccountID")]
    #[strum(serialize = "AccountID")]
    AccountId,

    #[serde(rename = "TransactionID")]
    #[strum(serialize = "TransactionID")]
    TransactionId,

    #[serde(rename = "TransactionAmount")]
    #[strum(serialize = "TransactionAmount")]
    TransactionAmount,

    #[serde(rename = "TransactionDuration")]
    #[strum(serialize = "TransactionDuration")]
    TransactionDuration,

    #[serde(rename = "LoginAttempts")]
    #[strum(serialize = "LoginAttempts")]
    LoginAttempts,

    #[serde(rename = "AccountBalance")]
    #[strum(serialize = "AccountBalance")]
    AccountBalance,

    #[serde(rename = "CustomerAge")]
    #[strum(serialize = "CustomerAge")]
    CustomerAge,

    #[serde(rename = "fraud_score")]
    #[strum(serialize = "fraud_score")]
    FraudScore,
}

/// Raw value of one column on one record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl PartialOrd for FieldValue {
    /// Numbers order numerically, text lexicographically. NaN and mixed
    /// text/number comparisons have no defined order and return `None`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl TransactionRecord {
    /// Raw value of `key` on this record. Optional identifier columns yield
    /// `None` when the uploaded file did not carry them; the sort engine
    /// treats that as a tie rather than inventing an order.
    pub fn field(&self, key: SortKey) -> Option<FieldValue> {
        match key {
            SortKey::AccountId => self.account_id.clone().map(FieldValue::Text),
            SortKey::TransactionId => self.transaction_id.clone().map(FieldValue::Text),
            SortKey::TransactionAmount => Some(FieldValue::Number(self.amount)),
            SortKey::TransactionDuration => Some(FieldValue::Number(self.duration_secs)),
            SortKey::LoginAttempts => Some(FieldValue::Number(self.login_attempts as f64)),
            SortKey::AccountBalance => Some(FieldValue::Number(self.balance)),
            SortKey::CustomerAge => Some(FieldValue::Number(self.customer_age as f64)),
            SortKey::FraudScore => Some(FieldValue::Number(self.fraud_score)),
        }
    }
}
