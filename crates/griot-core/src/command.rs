//! Command abstractions.

use uuid::Uuid;

/// Trait that all operator commands implement.
///
/// A command names one remote action on one record (approve request 7,
/// delete tale 12, ...). Handlers log the command type and correlation ID
/// so the remote call and the local mutation it causes can be traced.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging).
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the console.
    fn correlation_id(&self) -> Uuid;

    /// Server identifier of the record the command targets.
    fn record_id(&self) -> i64;
}
