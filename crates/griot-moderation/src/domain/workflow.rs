//! Publication workflow state machine.
//!
//! ```text
//! EN_ATTENTE --approve--> APPROUVEE
//! EN_ATTENTE --reject(comment)--> REJETEE
//! ```
//!
//! Transitions are applied only after the server acknowledged the matching
//! command. The local machine does not guard the source status: whatever
//! the server accepts is mirrored.

use griot_core::clock::Clock;
use griot_core::error::DomainError;
use uuid::Uuid;

use super::events::{ModerationEvent, PublicationProcessed};
use super::request::{PublicationRequest, RequestStatus};

/// A rejection comment: trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionComment(String);

impl RejectionComment {
    /// Parses operator input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the comment is empty or only
    /// whitespace.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "a rejection comment is required".to_owned(),
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The comment text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A decision applied to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Approve the request.
    Approve,
    /// Reject the request with a comment.
    Reject(RejectionComment),
}

impl Transition {
    /// Status reached by this transition. Never `Pending`.
    #[must_use]
    pub fn target_status(&self) -> RequestStatus {
        match self {
            Self::Approve => RequestStatus::Approved,
            Self::Reject(_) => RequestStatus::Rejected,
        }
    }
}

impl PublicationRequest {
    /// Applies an acknowledged decision and returns the resulting event.
    ///
    /// Sets the status, stamps `processed_at` from `clock` and records the
    /// validator name. A rejection also stores the comment; an approval
    /// leaves any existing comment untouched.
    pub fn apply_transition(
        &mut self,
        transition: &Transition,
        validator_name: Option<&str>,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> ModerationEvent {
        let previous_status = self.status;
        self.status = transition.target_status();
        self.processed_at = Some(clock.timestamp());
        if let Some(name) = validator_name {
            self.validator_name = Some(name.to_owned());
        }
        if let Transition::Reject(comment) = transition {
            self.comment = Some(comment.as_str().to_owned());
        }

        let processed = PublicationProcessed {
            request_id: self.id,
            previous_status,
            status: self.status,
            validator_name: self.validator_name.clone(),
            comment: self.comment.clone(),
            processed_at: self.processed_at.clone().unwrap_or_default(),
            correlation_id,
        };
        match transition {
            Transition::Approve => ModerationEvent::RequestApproved(processed),
            Transition::Reject(_) => ModerationEvent::RequestRejected(processed),
        }
    }
}
