//! Command handlers for the Publication Moderation context.
//!
//! Each handler validates its input, issues the remote command and, only
//! once the server acknowledged it, applies the matching transition to the
//! canonical queue. A failed remote command leaves every local field as it
//! was.

use griot_core::clock::Clock;
use griot_core::command::Command;
use griot_core::error::{DomainError, GatewayError};
use griot_core::gateway::ModerationGateway;
use griot_core::session::Session;

use crate::application::queue::ModerationQueue;
use crate::application::view::ViewState;
use crate::domain::commands::{ApprovePublication, RejectPublication};
use crate::domain::events::ModerationEvent;
use crate::domain::workflow::{RejectionComment, Transition};

/// Outcome of a successful moderation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationCommandResult {
    /// The decided request.
    pub request_id: i64,
    /// The event describing the applied transition.
    pub event: ModerationEvent,
    /// Whether the view left the `Pending` tab as a consequence.
    pub tab_switched: bool,
}

/// Handles the `ApprovePublication` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the request is not loaded (no remote
/// call is made), or `DomainError::Command` if the server refuses the
/// validation (nothing is mutated).
pub async fn handle_approve_publication(
    command: &ApprovePublication,
    session: &Session,
    clock: &dyn Clock,
    gateway: &dyn ModerationGateway,
    queue: &ModerationQueue,
    view: &ViewState,
) -> Result<ModerationCommandResult, DomainError> {
    ensure_loaded(command, queue)?;

    tracing::info!(
        correlation_id = %command.correlation_id,
        request_id = command.request_id,
        "validating publication request"
    );
    gateway
        .validate_request(command.request_id)
        .await
        .map_err(|source| command_failed(command, source))?;

    record_decision(command, &Transition::Approve, session, clock, queue, view)
}

/// Handles the `RejectPublication` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the comment is blank and
/// `DomainError::NotFound` if the request is not loaded; neither makes a
/// remote call. Returns `DomainError::Command` if the server refuses the
/// rejection (nothing is mutated).
pub async fn handle_reject_publication(
    command: &RejectPublication,
    session: &Session,
    clock: &dyn Clock,
    gateway: &dyn ModerationGateway,
    queue: &ModerationQueue,
    view: &ViewState,
) -> Result<ModerationCommandResult, DomainError> {
    let comment = RejectionComment::parse(&command.comment)?;
    ensure_loaded(command, queue)?;

    tracing::info!(
        correlation_id = %command.correlation_id,
        request_id = command.request_id,
        "rejecting publication request"
    );
    gateway
        .reject_request(command.request_id, comment.as_str())
        .await
        .map_err(|source| command_failed(command, source))?;

    record_decision(
        command,
        &Transition::Reject(comment),
        session,
        clock,
        queue,
        view,
    )
}

fn ensure_loaded(command: &impl Command, queue: &ModerationQueue) -> Result<(), DomainError> {
    let request_id = command.record_id();
    let request = queue
        .find(request_id)
        .ok_or(DomainError::NotFound(request_id))?;
    if !request.status().is_pending() {
        tracing::warn!(
            correlation_id = %command.correlation_id(),
            request_id,
            status = %request.status(),
            "request already processed, issuing command anyway"
        );
    }
    Ok(())
}

fn command_failed(command: &impl Command, source: GatewayError) -> DomainError {
    tracing::warn!(
        correlation_id = %command.correlation_id(),
        request_id = command.record_id(),
        command_type = command.command_type(),
        error = %source,
        "remote command failed"
    );
    DomainError::Command {
        command: command.command_type(),
        record_id: command.record_id(),
        source,
    }
}

/// Applies an acknowledged transition. The tab switch happens inside the
/// queue mutation, so it is visible before the new list is published.
fn record_decision(
    command: &impl Command,
    transition: &Transition,
    session: &Session,
    clock: &dyn Clock,
    queue: &ModerationQueue,
    view: &ViewState,
) -> Result<ModerationCommandResult, DomainError> {
    let request_id = command.record_id();
    let validator_name = session.display_name();
    let (event, tab_switched) = queue.update(request_id, |request| {
        let was_pending = request.status().is_pending();
        let event = request.apply_transition(
            transition,
            validator_name.as_deref(),
            command.correlation_id(),
            clock,
        );
        let tab_switched = was_pending && view.leave_pending_tab();
        (event, tab_switched)
    })?;

    tracing::info!(
        correlation_id = %command.correlation_id(),
        request_id,
        event_type = event.event_type(),
        tab_switched,
        "publication request decided"
    );
    Ok(ModerationCommandResult {
        request_id,
        event,
        tab_switched,
    })
}
