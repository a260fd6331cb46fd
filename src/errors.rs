//! Error types for the assessment engine.
//!
//! The engine itself is a total function over its documented input domain:
//! unknown question ids and option values are ignored, never raised. Errors
//! only arise at the boundaries (share-payload decoding) or when the strict
//! completeness policy is enabled.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ActmapError>;

#[derive(Debug, Error)]
pub enum ActmapError {
    /// Strict completeness policy: the answer set left catalog questions
    /// unanswered, so no risk level is produced.
    #[error("assessment incomplete: {} unanswered question(s)", missing.len())]
    Incomplete { missing: Vec<String> },

    /// Share payload was not valid base64.
    #[error("share payload is not valid base64: {0}")]
    ShareEncoding(#[from] base64::DecodeError),

    /// Share payload decoded but did not contain valid JSON answers.
    #[error("share payload is not valid JSON: {0}")]
    ShareFormat(#[from] serde_json::Error),
}
