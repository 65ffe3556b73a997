//! Offline mocks for the scoring and explanation collaborators
//!
//! Used when the remote backends are not configured: the scorer falls back
//! to a simple rule-based model, the explainer to a templated markdown
//! analysis. Both mirror the behavior of the live services closely enough
//! for demos and tests.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use antiscam_core::TransactionRecord;

use crate::error::ServiceError;
use crate::service::ExplanationService;

/// Outcome of one mock scoring call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub fraud: bool,
    /// Fraud likelihood in [0, 1], rounded to 4 decimals.
    pub fraud_score: f64,
}

/// Rule-based mock scoring model.
///
/// Flags a row as fraud when the amount exceeds 5000 or more than 3 login
/// attempts preceded it, then draws a score from [0.65, 0.95) for fraud and
/// [0.05, 0.45) otherwise. Seedable for deterministic tests.
pub struct MockScorer {
    rng: StdRng,
}

impl MockScorer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn predict(&mut self, amount: f64, login_attempts: u32) -> Prediction {
        let fraud = amount > 5000.0 || login_attempts > 3;
        let raw = if fraud {
            self.rng.gen_range(0.65..0.95)
        } else {
            self.rng.gen_range(0.05..0.45)
        };
        Prediction {
            fraud,
            fraud_score: round4(raw),
        }
    }
}

impl Default for MockScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Templated markdown explanation of why a transaction was flagged.
///
/// Walks the same risk factors the live explainer is prompted with: high
/// amount, excessive login attempts, very short duration, amount vs.
/// balance ratio, and age demographic.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedExplainer;

impl RuleBasedExplainer {
    pub fn explanation(record: &TransactionRecord) -> String {
        let mut reasons: Vec<String> = Vec::new();

        if record.amount > 5000.0 {
            reasons.push(format!(
                "Unusually high transaction amount of RM{}",
                format_currency(record.amount)
            ));
        }
        if record.login_attempts > 3 {
            reasons.push(format!(
                "Excessive login attempts ({}) indicating potential account compromise",
                record.login_attempts
            ));
        }
        if record.duration_secs < 10.0 {
            reasons.push(format!(
                "Very short transaction duration ({}s) suggesting automated behavior",
                record.duration_secs
            ));
        }
        if record.amount > record.balance * 0.8 {
            reasons.push(format!(
                "Transaction amount represents {:.1}% of account balance",
                record.amount / record.balance * 100.0
            ));
        }
        if record.customer_age < 25 || record.customer_age > 70 {
            reasons.push(format!(
                "Customer age ({}) falls in higher risk demographic",
                record.customer_age
            ));
        }
        if reasons.is_empty() {
            reasons.push("Multiple risk indicators combined to flag this transaction".to_string());
        }

        let mut out = String::from("🚨 **Fraud Alert Analysis**\n\n");
        out.push_str("This transaction has been flagged due to the following risk factors:\n\n");
        for (i, reason) in reasons.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, reason));
        }
        out.push_str(&format!(
            "\n**Risk Score:** {:.2}%\n",
            record.fraud_score * 100.0
        ));
        out.push_str(
            "\n**Recommendation:** Review transaction details and verify customer identity before processing.",
        );
        out
    }
}

#[async_trait]
impl ExplanationService for RuleBasedExplainer {
    async fn explain(&self, record: &TransactionRecord) -> Result<String, ServiceError> {
        Ok(Self::explanation(record))
    }
}

/// `12345.6` -> `"12,345.60"`.
fn format_currency(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (integral, fractional) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let (sign, digits) = integral
        .strip_prefix('-')
        .map_or(("", integral), |rest| ("-", rest));

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{fractional}")
}
