//! Scored transaction records and the result set returned by the scorer
//!
//! Field names on the wire follow the scoring service's schema exactly
//! (`TransactionID`, `AccountID`, `TransactionAmount`, ...). Records are
//! immutable once received; the engine never mutates them.

use serde::{Deserialize, Serialize};

/// Synthesize a display identifier from a positional index.
///
/// The scorer assigns each record a 0-based sequence number; rows that carry
/// no `TransactionID` of their own are displayed as `TXN0001`, `TXN0002`, ...
/// (1-based, zero-padded to at least four digits).
///
/// This is the single fallback rule shared by the account ranker and the
/// presentation layer.
pub fn synthesized_transaction_id(index: usize) -> String {
    format!("TXN{:04}", index + 1)
}

/// One scored transaction as delivered by the external scoring service.
///
/// # Invariant
/// `fraud_score` is always present and numeric on any record that reaches
/// the analytics engine. A missing or non-numeric score is a contract
/// violation by the upstream scorer; the engine does not defend against it
/// and simply propagates IEEE float semantics (NaN comparisons are ties).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Positional sequence number assigned when the result set was built.
    /// Used only for fallback-identifier synthesis and as a rendering key.
    pub id: usize,

    /// Transaction identifier from the uploaded file, if present.
    #[serde(rename = "TransactionID", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Account identifier from the uploaded file, if present.
    #[serde(rename = "AccountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Transaction amount (currency, non-negative by contract).
    #[serde(rename = "TransactionAmount")]
    pub amount: f64,

    /// Account balance at transaction time (currency, non-negative).
    #[serde(rename = "AccountBalance")]
    pub balance: f64,

    /// Duration of the transaction session, in seconds.
    #[serde(rename = "TransactionDuration")]
    pub duration_secs: f64,

    /// Login attempts preceding the transaction.
    #[serde(rename = "LoginAttempts")]
    pub login_attempts: u32,

    /// Customer age in years.
    #[serde(rename = "CustomerAge")]
    pub customer_age: i64,

    /// Fraud likelihood in [0, 1], attached by the external scorer.
    pub fraud_score: f64,
}

impl TransactionRecord {
    /// Transaction identifier for display: the record's own id, or the
    /// synthesized positional fallback.
    pub fn display_transaction_id(&self) -> String {
        self.transaction_id
            .clone()
            .unwrap_or_else(|| synthesized_transaction_id(self.id))
    }

    /// Account identifier for display and grouping: `AccountID` if present,
    /// otherwise the transaction identifier (synthesized if need be).
    pub fn display_account_id(&self) -> String {
        self.account_id
            .clone()
            .unwrap_or_else(|| self.display_transaction_id())
    }
}

/// The full response of a scoring call: totals plus the ordered fraudulent
/// subset. Legitimate transactions are excluded from all aggregation and
/// ranking, so only the counts survive for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Number of rows in the uploaded file.
    pub total_transactions: usize,

    /// Number of rows the scorer flagged as fraudulent.
    pub fraudulent_count: usize,

    /// Flagged rows in upload order.
    pub fraudulent_transactions: Vec<TransactionRecord>,

    /// True when the scorer answered from its offline mock model.
    #[serde(rename = "ml_mock_mode", default)]
    pub mock_mode: bool,
}

impl ResultSet {
    /// Rows not flagged as fraudulent.
    pub fn legitimate_count(&self) -> usize {
        self.total_transactions
            .saturating_sub(self.fraudulent_count)
    }
}
