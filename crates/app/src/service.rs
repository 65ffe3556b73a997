//! External collaborator boundaries
//!
//! The dashboard talks to two remote services: a scorer that turns an
//! uploaded Excel/CSV payload into a [`ResultSet`], and an explainer that
//! produces markdown free text for a single flagged transaction. Wire
//! schemas are owned by those services; this crate only fixes the shape at
//! the boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use antiscam_core::{ResultSet, TransactionRecord};

use crate::error::ServiceError;

/// Health report of the scoring backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    pub ml_api_configured: bool,
    pub openai_configured: bool,
    /// True when scores come from the offline mock model instead of the
    /// real one.
    pub mock_mode: bool,
}

/// An uploaded transaction file, passed through verbatim. The scorer owns
/// parsing and column validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadPayload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// The external scoring service.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Report backend health and configuration.
    async fn status(&self) -> Result<ApiStatus, ServiceError>;

    /// Score every row of an uploaded file in one call and return the
    /// flagged subset with totals.
    async fn analyze(&self, payload: UploadPayload) -> Result<ResultSet, ServiceError>;
}

/// The external explanation service. Takes the full record, answers with
/// markdown free text.
#[async_trait]
pub trait ExplanationService: Send + Sync {
    async fn explain(&self, record: &TransactionRecord) -> Result<String, ServiceError>;
}
