//! Account ranking - top suspicious accounts
//!
//! Groups the fraudulent records by account identity, folds per-account
//! score statistics, and ranks the aggregates by a three-key rule:
//! average score descending (with an epsilon tie-rule), then transaction
//! count descending, then account id ascending.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use antiscam_core::TransactionRecord;

use crate::config::AnalyticsConfig;

/// Per-account rollup, rebuilt from scratch on every ranking call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountAggregate {
    /// Account identifier, or the record-level fallback where absent.
    pub id: String,
    pub total_score: f64,
    pub count: usize,
    /// `total_score / count`; kept current as each member is folded in.
    pub avg_score: f64,
    pub max_score: f64,
    /// Display ids of contributing transactions, in first-seen order.
    pub transactions: Vec<String>,
}

impl AccountAggregate {
    fn new(id: String) -> Self {
        Self {
            id,
            total_score: 0.0,
            count: 0,
            avg_score: 0.0,
            max_score: 0.0,
            transactions: Vec::new(),
        }
    }

    fn fold(&mut self, record: &TransactionRecord) {
        self.total_score += record.fraud_score;
        self.count += 1;
        self.avg_score = self.total_score / self.count as f64;
        self.max_score = self.max_score.max(record.fraud_score);
        self.transactions.push(record.display_transaction_id());
    }
}

/// Rank accounts by suspiciousness and truncate to the configured limit.
///
/// Grouping key equality is exact string match on the display account id.
/// Ordering, most desirable first:
/// 1. `avg_score` descending; two averages within `avg_score_epsilon` of
///    each other count as tied
/// 2. `count` descending
/// 3. `id` ascending, lexicographic
///
/// Empty input yields an empty vector.
pub fn rank_accounts(
    records: &[TransactionRecord],
    config: &AnalyticsConfig,
) -> Vec<AccountAggregate> {
    let mut aggregates: Vec<AccountAggregate> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let id = record.display_account_id();
        let slot = *slots.entry(id.clone()).or_insert_with(|| {
            aggregates.push(AccountAggregate::new(id));
            aggregates.len() - 1
        });
        aggregates[slot].fold(record);
    }

    let eps = config.avg_score_epsilon;
    aggregates.sort_by(|a, b| {
        if (b.avg_score - a.avg_score).abs() > eps {
            return b
                .avg_score
                .partial_cmp(&a.avg_score)
                .unwrap_or(Ordering::Equal);
        }
        b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id))
    });
    aggregates.truncate(config.top_accounts_limit);

    debug!(
        records = records.len(),
        accounts = aggregates.len(),
        "ranked suspicious accounts"
    );
    aggregates
}

/// Top `limit` suspicious accounts with the default tie-break epsilon.
pub fn top_suspicious_accounts(
    records: &[TransactionRecord],
    limit: usize,
) -> Vec<AccountAggregate> {
    rank_accounts(
        records,
        &AnalyticsConfig {
            top_accounts_limit: limit,
            ..AnalyticsConfig::default()
        },
    )
}
