//! Risk tier distribution
//!
//! One-pass tally of records per tier. The struct representation guarantees
//! downstream consumers always see all four tiers, zeroes included.

use serde::{Deserialize, Serialize};

use antiscam_core::TransactionRecord;

use crate::risk::{classify, RiskTier};

/// Counts per risk tier over one result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskDistribution {
    pub fn get(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::Critical => self.critical,
            RiskTier::High => self.high,
            RiskTier::Medium => self.medium,
            RiskTier::Low => self.low,
        }
    }

    /// Counts paired with their tier, most severe first.
    pub fn iter(&self) -> impl Iterator<Item = (RiskTier, usize)> + '_ {
        RiskTier::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Tally the risk tier of every record.
pub fn risk_distribution(records: &[TransactionRecord]) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for record in records {
        match classify(record.fraud_score) {
            RiskTier::Critical => distribution.critical += 1,
            RiskTier::High => distribution.high += 1,
            RiskTier::Medium => distribution.medium += 1,
            RiskTier::Low => distribution.low += 1,
        }
    }
    distribution
}

/// Share of `count` in `total`, as a percentage. A zero total is 0%, never
/// a division error.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
