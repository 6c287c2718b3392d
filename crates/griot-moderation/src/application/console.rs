//! Moderation console: the queue, its view state and the collaborators
//! needed to run commands, behind one `&self` API.
//!
//! Every method borrows the console immutably, so several commands may be
//! in flight at once on one task. Concurrent commands on the same request
//! are not serialized: each reaches the server, and the one whose
//! response arrives last determines the final local decision fields.

use std::sync::Arc;

use griot_core::clock::Clock;
use griot_core::error::DomainError;
use griot_core::filter::DerivedView;
use griot_core::gateway::ModerationGateway;
use griot_core::session::Session;

use crate::application::command_handlers::{
    ModerationCommandResult, handle_approve_publication, handle_reject_publication,
};
use crate::application::queue::{LoadState, ModerationQueue};
use crate::application::view::{ModerationFilters, StatusTab, ViewState, derive_moderation_view};
use crate::domain::commands::{ApprovePublication, RejectPublication};
use crate::domain::events::ModerationEvent;
use crate::domain::request::PublicationRequest;

/// Moderation console state and collaborators.
pub struct ModerationConsole {
    gateway: Arc<dyn ModerationGateway>,
    clock: Arc<dyn Clock>,
    session: Session,
    queue: ModerationQueue,
    view: ViewState,
}

impl ModerationConsole {
    /// Creates a console with an empty queue and the default filters.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn ModerationGateway>,
        clock: Arc<dyn Clock>,
        session: Session,
    ) -> Self {
        Self::with_filters(gateway, clock, session, ModerationFilters::default())
    }

    /// Creates a console with initial filters.
    #[must_use]
    pub fn with_filters(
        gateway: Arc<dyn ModerationGateway>,
        clock: Arc<dyn Clock>,
        session: Session,
        filters: ModerationFilters,
    ) -> Self {
        Self {
            gateway,
            clock,
            session,
            queue: ModerationQueue::new(),
            view: ViewState::new(filters),
        }
    }

    /// Loads the queue from the server.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Fetch` if the listing fails; the prior queue
    /// is kept.
    pub async fn load(&self) -> Result<ModerationEvent, DomainError> {
        self.queue.load(self.gateway.as_ref()).await
    }

    /// Approves a request.
    ///
    /// # Errors
    ///
    /// See [`handle_approve_publication`].
    pub async fn approve(&self, request_id: i64) -> Result<ModerationCommandResult, DomainError> {
        let command = ApprovePublication::new(request_id);
        handle_approve_publication(
            &command,
            &self.session,
            self.clock.as_ref(),
            self.gateway.as_ref(),
            &self.queue,
            &self.view,
        )
        .await
    }

    /// Rejects a request with a comment.
    ///
    /// # Errors
    ///
    /// See [`handle_reject_publication`].
    pub async fn reject(
        &self,
        request_id: i64,
        comment: &str,
    ) -> Result<ModerationCommandResult, DomainError> {
        let command = RejectPublication::new(request_id, comment);
        handle_reject_publication(
            &command,
            &self.session,
            self.clock.as_ref(),
            self.gateway.as_ref(),
            &self.queue,
            &self.view,
        )
        .await
    }

    /// Selects a status tab.
    pub fn set_tab(&self, tab: StatusTab) {
        self.view.set_tab(tab);
    }

    /// Sets the free-text search.
    pub fn set_search(&self, search: impl Into<String>) {
        self.view.set_search(search);
    }

    /// Active filters.
    #[must_use]
    pub fn filters(&self) -> ModerationFilters {
        self.view.filters()
    }

    /// The requests visible under the active filters.
    #[must_use]
    pub fn visible(&self) -> DerivedView<PublicationRequest> {
        derive_moderation_view(self.queue.snapshot(), &self.view.filters())
    }

    /// The canonical queue.
    #[must_use]
    pub fn queue(&self) -> &ModerationQueue {
        &self.queue
    }

    /// Progress of the most recent load.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.queue.load_state()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use griot_core::dto::RequestStatus;
    use griot_core::session::Session;
    use griot_test_support::{
        FixedClock, GatedModerationGateway, ModerationCall, RecordingModerationGateway,
        SequenceClock, request_dto,
    };

    use super::ModerationConsole;
    use crate::application::queue::LoadState;
    use crate::application::view::StatusTab;

    fn requests() -> Vec<griot_core::dto::PublicationRequestDto> {
        vec![
            request_dto(1, "Conte des ancêtres", RequestStatus::Pending),
            request_dto(2, "Proverbe du jour", RequestStatus::Pending),
            request_dto(3, "Masque dogon", RequestStatus::Rejected),
        ]
    }

    #[tokio::test]
    async fn test_visible_follows_tab_and_search() {
        // Arrange
        let console = ModerationConsole::new(
            Arc::new(RecordingModerationGateway::new(requests())),
            Arc::new(FixedClock::at(2026, 2, 1, 9, 0, 0)),
            Session::anonymous(),
        );
        console.load().await.unwrap();

        // Act
        console.set_tab(StatusTab::Pending);
        console.set_search("prov");

        // Assert
        let ids: Vec<i64> = console.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(console.load_state(), LoadState::Loaded);
    }

    #[tokio::test]
    async fn test_reject_on_pending_tab_keeps_request_on_screen() {
        let console = ModerationConsole::new(
            Arc::new(RecordingModerationGateway::new(requests())),
            Arc::new(FixedClock::at(2026, 2, 1, 9, 0, 0)),
            Session::start("tok", Some("Mariam Diallo".to_owned())),
        );
        console.load().await.unwrap();
        console.set_tab(StatusTab::Pending);

        let result = console.reject(1, "Doublon").await.unwrap();

        assert!(result.tab_switched);
        assert_eq!(console.filters().tab, StatusTab::All);
        let visible = console.visible();
        let rejected = visible.iter().find(|r| r.id == 1).unwrap();
        assert_eq!(rejected.status(), RequestStatus::Rejected);
        assert_eq!(rejected.comment(), Some("Doublon"));
    }

    async fn wait_for_commands(gateway: &GatedModerationGateway, count: usize) {
        while gateway.calls().iter().filter(|c| c.is_command()).count() < count {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_concurrent_approvals_last_response_wins() {
        // Arrange
        let first_instant = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();
        let second_instant = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 5).unwrap();
        let gateway = Arc::new(GatedModerationGateway::new(requests()));
        let console = Arc::new(ModerationConsole::new(
            gateway.clone(),
            Arc::new(SequenceClock::new(vec![first_instant, second_instant])),
            Session::start("tok", Some("Mariam Diallo".to_owned())),
        ));
        console.load().await.unwrap();
        let first_gate = gateway.gate();
        let second_gate = gateway.gate();

        // Act
        let first = tokio::spawn({
            let console = Arc::clone(&console);
            async move { console.approve(1).await }
        });
        wait_for_commands(&gateway, 1).await;
        let second = tokio::spawn({
            let console = Arc::clone(&console);
            async move { console.approve(1).await }
        });
        wait_for_commands(&gateway, 2).await;

        second_gate.send(()).unwrap();
        let second = second.await.unwrap().unwrap();
        first_gate.send(()).unwrap();
        let first = first.await.unwrap().unwrap();

        // Assert
        assert_eq!(
            second.event.processed().unwrap().processed_at,
            "2026-02-01T10:00:00"
        );
        assert_eq!(
            first.event.processed().unwrap().processed_at,
            "2026-02-01T10:00:05"
        );
        let calls: Vec<ModerationCall> = gateway
            .calls()
            .into_iter()
            .filter(ModerationCall::is_command)
            .collect();
        assert_eq!(calls, vec![ModerationCall::Validate(1), ModerationCall::Validate(1)]);
        let request = console.queue().find(1).unwrap();
        assert_eq!(request.status(), RequestStatus::Approved);
        assert_eq!(request.processed_at(), Some("2026-02-01T10:00:05"));
        assert_eq!(console.queue().snapshot().revision(), 3);
    }
}
