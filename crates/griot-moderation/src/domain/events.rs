//! Domain events for the Publication Moderation context.

use serde::Serialize;
use uuid::Uuid;

use super::request::RequestStatus;

/// Emitted when a request has been decided locally after the server
/// acknowledged the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationProcessed {
    /// The decided request.
    pub request_id: i64,
    /// Status before the decision.
    pub previous_status: RequestStatus,
    /// Status after the decision.
    pub status: RequestStatus,
    /// Name recorded as validator.
    pub validator_name: Option<String>,
    /// Rejection comment, if any.
    pub comment: Option<String>,
    /// Decision timestamp.
    pub processed_at: String,
    /// The correlation ID of the originating command.
    pub correlation_id: Uuid,
}

/// Event variants for the Publication Moderation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ModerationEvent {
    /// The queue was replaced by a fresh server listing.
    QueueLoaded {
        /// Revision of the published list.
        revision: u64,
        /// Number of requests loaded.
        count: usize,
    },
    /// A request was approved.
    RequestApproved(PublicationProcessed),
    /// A request was rejected.
    RequestRejected(PublicationProcessed),
}

impl ModerationEvent {
    /// The type name for this event (for logging).
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::QueueLoaded { .. } => "moderation.queue_loaded",
            Self::RequestApproved(_) => "moderation.request_approved",
            Self::RequestRejected(_) => "moderation.request_rejected",
        }
    }

    /// The decision payload, for approve and reject events.
    #[must_use]
    pub fn processed(&self) -> Option<&PublicationProcessed> {
        match self {
            Self::QueueLoaded { .. } => None,
            Self::RequestApproved(p) | Self::RequestRejected(p) => Some(p),
        }
    }
}
