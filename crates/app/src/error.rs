//! Collaborator-boundary errors
//!
//! The analytics engine itself is total and has no error taxonomy; faults
//! only arise at the service boundaries around it.

use thiserror::Error;

/// Errors surfaced by the scoring and explanation collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The upload was refused before scoring (wrong format, missing
    /// columns, empty file).
    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    /// The collaborator could not be reached or answered with a transport
    /// failure.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered but the payload did not match its own
    /// schema.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
