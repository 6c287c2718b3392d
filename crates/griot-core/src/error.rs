//! Console error types.

use thiserror::Error;

/// Failure reported by a remote gateway call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response (connection, DNS, TLS...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("server returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Top-level domain error type.
///
/// Every variant is recovered where it occurs: the console reports it to
/// the operator and leaves canonical state as it was before the failing
/// operation.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Loading a list from the server failed. The prior list is kept.
    #[error("failed to load {resource}: {source}")]
    Fetch {
        /// What was being loaded (e.g. "publication requests").
        resource: &'static str,
        /// The underlying gateway failure.
        source: GatewayError,
    },

    /// A remote command failed. No local field was mutated.
    #[error("{command} failed for record {record_id}: {source}")]
    Command {
        /// Command type name.
        command: &'static str,
        /// The targeted record.
        record_id: i64,
        /// The underlying gateway failure.
        source: GatewayError,
    },

    /// Input rejected before any remote call.
    #[error("validation error: {0}")]
    Validation(String),

    /// The record is not present in the canonical list.
    #[error("record not found: {0}")]
    NotFound(i64),
}
