//! AntiScam Analytics Engine
//!
//! Pure, stateless aggregation over a scored result set. The presentation
//! layer calls into this crate on every state change; nothing here mutates
//! its input or holds state between calls.
//!
//! ```text
//! ResultSet.fraudulent_transactions
//!     ├── risk::classify ──────► RiskTier (per record)
//!     │       ├──► ranker::top_suspicious_accounts (top-N aggregates)
//!     │       └──► distribution::risk_distribution (tier tallies)
//!     └── sort::sorted_view(records, SortState) ──► ordered copy
//! ```
//!
//! ## Key components
//!
//! - [`risk::RiskTier`] - Fixed-threshold score classification
//! - [`ranker`] - Per-account rollups with epsilon-aware tie-breaks
//! - [`distribution::RiskDistribution`] - All-four-tiers tally
//! - [`sort`] - Stable, direction-toggling column sort
//! - [`config::AnalyticsConfig`] - Tunable epsilon and top-N limit
//!
//! ## Error model
//!
//! There is none. Every operation is total over well-formed input; malformed
//! numeric fields are a caller contract violation and simply follow IEEE
//! float semantics (NaN comparisons count as ties, they never panic).

pub mod config;
pub mod distribution;
pub mod ranker;
pub mod risk;
pub mod sort;

pub use config::AnalyticsConfig;
pub use distribution::{percentage, risk_distribution, RiskDistribution};
pub use ranker::{rank_accounts, top_suspicious_accounts, AccountAggregate};
pub use risk::{classify, RiskTier};
pub use sort::{sorted_view, SortDirection, SortState};
