//! AntiScam Dashboard Application Layer
//!
//! Holds the one piece of mutable state in the system, [`DashboardState`],
//! and the trait boundaries to the external collaborators (scoring and
//! explanation services). The analytics engine stays a stateless service
//! invoked on reads of that state.
//!
//! Everything asynchronous and fallible lives behind the collaborator
//! traits; when they fail the engine is simply not invoked.

pub mod error;
pub mod mock;
pub mod service;
pub mod state;

pub use error::ServiceError;
pub use mock::{MockScorer, Prediction, RuleBasedExplainer};
pub use service::{ApiStatus, ExplanationService, ScoringService, UploadPayload};
pub use state::{DashboardState, Summary};
