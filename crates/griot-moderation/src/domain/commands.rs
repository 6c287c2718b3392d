//! Commands for the Publication Moderation context.

use griot_core::command::Command;
use uuid::Uuid;

/// Command to approve a publication request.
#[derive(Debug, Clone)]
pub struct ApprovePublication {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The request to approve.
    pub request_id: i64,
}

impl ApprovePublication {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new(request_id: i64) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            request_id,
        }
    }
}

impl Command for ApprovePublication {
    fn command_type(&self) -> &'static str {
        "moderation.approve_publication"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn record_id(&self) -> i64 {
        self.request_id
    }
}

/// Command to reject a publication request with a comment.
#[derive(Debug, Clone)]
pub struct RejectPublication {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The request to reject.
    pub request_id: i64,
    /// Operator-supplied justification, as typed.
    pub comment: String,
}

impl RejectPublication {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new(request_id: i64, comment: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            request_id,
            comment: comment.into(),
        }
    }
}

impl Command for RejectPublication {
    fn command_type(&self) -> &'static str {
        "moderation.reject_publication"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn record_id(&self) -> i64 {
        self.request_id
    }
}
