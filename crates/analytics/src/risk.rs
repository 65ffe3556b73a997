//! Risk tier classification
//!
//! A fraud score maps to one of four tiers through fixed thresholds,
//! checked in descending order with closed lower bounds:
//! `>= 0.8 Critical, >= 0.6 High, >= 0.4 Medium, else Low`.
//!
//! Tiers are derived on demand and never stored.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk tier - ordered from lowest to highest severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl PartialOrd for RiskTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskTier {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl RiskTier {
    /// All tiers in display order (most severe first).
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Critical,
        RiskTier::High,
        RiskTier::Medium,
        RiskTier::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Critical => "Critical",
            RiskTier::High => "High",
            RiskTier::Medium => "Medium",
            RiskTier::Low => "Low",
        }
    }

    /// Display color for this tier. Rendering metadata only; carries no
    /// computational meaning.
    pub const fn color(&self) -> &'static str {
        match self {
            RiskTier::Critical => "#BB0A21",
            RiskTier::High => "#E63946",
            RiskTier::Medium => "#F77F00",
            RiskTier::Low => "#06A77D",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a fraud score into a risk tier.
///
/// Total function: scores are trusted to lie in [0, 1] but out-of-range
/// values degrade gracefully through the same threshold chain. Anything
/// that fails every `>=` check lands in `Low`, NaN included.
pub fn classify(score: f64) -> RiskTier {
    if score >= 0.8 {
        RiskTier::Critical
    } else if score >= 0.6 {
        RiskTier::High
    } else if score >= 0.4 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
