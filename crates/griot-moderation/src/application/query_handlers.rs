//! Query handlers for the Publication Moderation context.
//!
//! Read-only projections of the queue for the front end.

use serde::Serialize;

use crate::application::queue::ModerationQueue;
use crate::application::view::{ModerationFilters, derive_moderation_view};
use crate::domain::classifier::ContentType;
use crate::domain::request::{PublicationRequest, RequestStatus};

/// Counters shown above the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueSummary {
    /// Every loaded request.
    pub total: usize,
    /// Requests awaiting a decision.
    pub pending: usize,
    /// Requests no longer pending.
    pub processed: usize,
}

/// One row of the moderation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRow {
    /// Request identifier.
    pub id: i64,
    /// Content title.
    pub title: String,
    /// Inferred content type.
    pub content_type: ContentType,
    /// Submitting member.
    pub requester: String,
    /// Current status.
    pub status: RequestStatus,
    /// Submission timestamp.
    pub requested_at: String,
    /// Validator, once decided.
    pub validator: Option<String>,
    /// Decision timestamp.
    pub processed_at: Option<String>,
    /// Decision comment.
    pub comment: Option<String>,
}

impl From<&PublicationRequest> for RequestRow {
    fn from(request: &PublicationRequest) -> Self {
        Self {
            id: request.id,
            title: request.content_title.clone(),
            content_type: request.content_type(),
            requester: request.requester_name.clone(),
            status: request.status(),
            requested_at: request.requested_at.clone(),
            validator: request.validator_name().map(str::to_owned),
            processed_at: request.processed_at().map(str::to_owned),
            comment: request.comment().map(str::to_owned),
        }
    }
}

/// Counts loaded requests by pending/processed.
#[must_use]
pub fn summarize(queue: &ModerationQueue) -> QueueSummary {
    let snapshot = queue.snapshot();
    let total = snapshot.items().len();
    let pending = snapshot
        .items()
        .iter()
        .filter(|request| request.status().is_pending())
        .count();
    QueueSummary {
        total,
        pending,
        processed: total - pending,
    }
}

/// Rows visible under `filters`, in queue order.
#[must_use]
pub fn visible_rows(queue: &ModerationQueue, filters: &ModerationFilters) -> Vec<RequestRow> {
    derive_moderation_view(queue.snapshot(), filters)
        .iter()
        .map(RequestRow::from)
        .collect()
}
