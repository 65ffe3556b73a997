//! Dashboard application state
//!
//! The single mutable state in the system. Replaced or mutated wholesale by
//! explicit user actions (new upload, column click, row selection); every
//! read is a pure delegation into the analytics engine over the currently
//! loaded result set.

use serde::{Deserialize, Serialize};
use tracing::info;

use antiscam_analytics::{
    percentage, rank_accounts, risk_distribution, sorted_view, AccountAggregate, AnalyticsConfig,
    RiskDistribution, RiskTier, SortState,
};
use antiscam_core::{ResultSet, SortKey, TransactionRecord};

/// Headline counters for the summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub fraudulent: usize,
    pub legitimate: usize,
}

/// Serializable state owned by the presentation layer.
///
/// Lifecycle: [`DashboardState::load_results`] replaces the result set and
/// resets sort and selection; `toggle_sort` and the selection methods are
/// the only other mutations. Nothing here is persisted across uploads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardState {
    /// Currently loaded scoring response, if any.
    pub results: Option<ResultSet>,
    /// Active column sort.
    pub sort: SortState,
    /// Record id of the transaction open in the detail view.
    pub selected: Option<usize>,
    /// Explanation text fetched for the selected transaction.
    pub explanation: Option<String>,
    /// Ranking/tie-break tuning.
    #[serde(default)]
    pub config: AnalyticsConfig,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Mutations (user actions) ===

    /// Replace the loaded result set wholesale. Sort state and selection do
    /// not survive a new upload.
    pub fn load_results(&mut self, results: ResultSet) {
        info!(
            total = results.total_transactions,
            fraudulent = results.fraudulent_count,
            mock = results.mock_mode,
            "loaded result set"
        );
        self.results = Some(results);
        self.sort = SortState::default();
        self.selected = None;
        self.explanation = None;
    }

    /// Column click: toggles direction on the active column, resets to
    /// ascending on a new one.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.select(key);
    }

    /// Open the detail view for the record with this id.
    pub fn select_transaction(&mut self, id: usize) {
        self.selected = Some(id);
        self.explanation = None;
    }

    pub fn set_explanation(&mut self, text: String) {
        self.explanation = Some(text);
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.explanation = None;
    }

    // === Reads (pure, delegate to the analytics engine) ===

    fn fraudulent(&self) -> &[TransactionRecord] {
        self.results
            .as_ref()
            .map(|r| r.fraudulent_transactions.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_transaction(&self) -> Option<&TransactionRecord> {
        let id = self.selected?;
        self.fraudulent().iter().find(|r| r.id == id)
    }

    /// The fraudulent transactions in the current sort order.
    pub fn sorted_transactions(&self) -> Vec<TransactionRecord> {
        sorted_view(self.fraudulent(), &self.sort)
    }

    /// Top suspicious accounts under the configured limit and epsilon.
    pub fn top_accounts(&self) -> Vec<AccountAggregate> {
        rank_accounts(self.fraudulent(), &self.config)
    }

    pub fn distribution(&self) -> RiskDistribution {
        risk_distribution(self.fraudulent())
    }

    /// Tier shares of the fraudulent count, most severe first. An empty
    /// result set yields four zero percentages.
    pub fn distribution_percentages(&self) -> Vec<(RiskTier, f64)> {
        let denominator = self
            .results
            .as_ref()
            .map(|r| r.fraudulent_count)
            .unwrap_or(0);
        self.distribution()
            .iter()
            .map(|(tier, count)| (tier, percentage(count, denominator)))
            .collect()
    }

    pub fn summary(&self) -> Summary {
        match &self.results {
            Some(results) => Summary {
                total: results.total_transactions,
                fraudulent: results.fraudulent_count,
                legitimate: results.legitimate_count(),
            },
            None => Summary::default(),
        }
    }
}
