//! Analytics configuration with tunable parameters
//!
//! The tie-break epsilon and the top-N limit are configurable rather than
//! hardcoded so production tuning needs no recompilation. Defaults match
//! the dashboard's historical behavior.

use serde::{Deserialize, Serialize};

/// Configuration for the analytics engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Two average scores closer than this count as tied when ranking
    /// accounts, so floating-point jitter cannot produce arbitrary order.
    #[serde(default = "default_avg_score_epsilon")]
    pub avg_score_epsilon: f64,

    /// How many accounts the suspicious-accounts ranking returns.
    #[serde(default = "default_top_accounts_limit")]
    pub top_accounts_limit: usize,
}

fn default_avg_score_epsilon() -> f64 {
    0.001
}

fn default_top_accounts_limit() -> usize {
    5
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            avg_score_epsilon: default_avg_score_epsilon(),
            top_accounts_limit: default_top_accounts_limit(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.avg_score_epsilon, 0.001);
        assert_eq!(config.top_accounts_limit, 5);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let json = r#"{ "top_accounts_limit": 10 }"#;
        let config: AnalyticsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.top_accounts_limit, 10);
        assert_eq!(config.avg_score_epsilon, 0.001);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = AnalyticsConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("avg_score_epsilon"));

        let parsed: AnalyticsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.top_accounts_limit, config.top_accounts_limit);
    }
}
