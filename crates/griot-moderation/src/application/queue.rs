//! Moderation queue repository.
//!
//! Owns the canonical list of publication requests. The list is replaced
//! wholesale by [`ModerationQueue::load`] and changed one record at a time
//! by [`ModerationQueue::update`] once a remote command has succeeded.

use griot_core::error::DomainError;
use griot_core::gateway::ModerationGateway;
use griot_core::store::{CanonicalList, Snapshot};
use tokio::sync::watch;

use crate::domain::events::ModerationEvent;
use crate::domain::request::PublicationRequest;

/// Progress of the most recent load, shown inline by the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed; the prior list is still shown.
    Failed(String),
}

/// The canonical moderation queue.
#[derive(Debug)]
pub struct ModerationQueue {
    list: CanonicalList<PublicationRequest>,
    load_state: watch::Sender<LoadState>,
}

impl Default for ModerationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ModerationQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (load_state, _rx) = watch::channel(LoadState::Idle);
        Self {
            list: CanonicalList::new(),
            load_state,
        }
    }

    /// Replaces the queue with one fetch from `gateway`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Fetch` if the gateway fails. The previous list
    /// is kept and the load state becomes [`LoadState::Failed`].
    pub async fn load(
        &self,
        gateway: &dyn ModerationGateway,
    ) -> Result<ModerationEvent, DomainError> {
        self.load_state.send_replace(LoadState::Loading);
        match gateway.list_requests().await {
            Ok(dtos) => {
                let requests: Vec<PublicationRequest> =
                    dtos.into_iter().map(PublicationRequest::from).collect();
                let count = requests.len();
                self.list.replace_all(requests);
                self.load_state.send_replace(LoadState::Loaded);
                let revision = self.list.snapshot().revision();
                tracing::info!(count, revision, "publication requests loaded");
                Ok(ModerationEvent::QueueLoaded { revision, count })
            }
            Err(source) => {
                tracing::warn!(error = %source, "failed to load publication requests");
                self.load_state
                    .send_replace(LoadState::Failed(source.to_string()));
                Err(DomainError::Fetch {
                    resource: "publication requests",
                    source,
                })
            }
        }
    }

    /// Applies `mutator` to the request with `request_id` and publishes a
    /// new container.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no such request is loaded; nothing
    /// is published in that case.
    pub fn update<R>(
        &self,
        request_id: i64,
        mutator: impl FnOnce(&mut PublicationRequest) -> R,
    ) -> Result<R, DomainError> {
        self.list
            .try_update(
                |request| request.id == request_id,
                |request| Ok(mutator(request)),
            )
            .unwrap_or(Err(DomainError::NotFound(request_id)))
    }

    /// Returns a copy of the request with `request_id`, if loaded.
    #[must_use]
    pub fn find(&self, request_id: i64) -> Option<PublicationRequest> {
        self.list
            .snapshot()
            .items()
            .iter()
            .find(|request| request.id == request_id)
            .cloned()
    }

    /// Current snapshot of the canonical list.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<PublicationRequest> {
        self.list.snapshot()
    }

    /// Subscribes to list changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<PublicationRequest>> {
        self.list.subscribe()
    }

    /// Current load state.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use griot_core::dto::RequestStatus;
    use griot_core::error::{DomainError, GatewayError};
    use griot_test_support::{FailingModerationGateway, RecordingModerationGateway, request_dto};

    use super::{LoadState, ModerationQueue};
    use crate::domain::classifier::ContentType;
    use crate::domain::events::ModerationEvent;

    fn two_requests() -> RecordingModerationGateway {
        RecordingModerationGateway::new(vec![
            request_dto(1, "Conte des ancêtres", RequestStatus::Pending),
            request_dto(2, "Proverbe du jour", RequestStatus::Approved),
        ])
    }

    #[tokio::test]
    async fn test_load_replaces_list_and_classifies() {
        // Arrange
        let queue = ModerationQueue::new();
        let gateway = two_requests();

        // Act
        let event = queue.load(&gateway).await.unwrap();

        // Assert
        assert_eq!(event, ModerationEvent::QueueLoaded { revision: 1, count: 2 });
        let snapshot = queue.snapshot();
        assert_eq!(snapshot.items()[0].content_type(), ContentType::Conte);
        assert_eq!(snapshot.items()[1].content_type(), ContentType::Proverbe);
        assert_eq!(queue.load_state(), LoadState::Loaded);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_list() {
        // Arrange
        let queue = ModerationQueue::new();
        let gateway = two_requests();
        queue.load(&gateway).await.unwrap();
        let before = queue.snapshot();
        gateway.fail_listing(GatewayError::Status {
            status: 503,
            body: String::new(),
        });

        // Act
        let result = queue.load(&gateway).await;

        // Assert
        match result {
            Err(DomainError::Fetch { resource, .. }) => {
                assert_eq!(resource, "publication requests");
            }
            other => panic!("expected Fetch error, got {other:?}"),
        }
        assert!(queue.snapshot().same_container(&before));
        assert!(matches!(queue.load_state(), LoadState::Failed(_)));
    }

    #[tokio::test]
    async fn test_load_from_unreachable_server_leaves_queue_empty() {
        let queue = ModerationQueue::new();

        let result = queue.load(&FailingModerationGateway).await;

        assert!(result.is_err());
        assert!(queue.snapshot().items().is_empty());
        assert_eq!(
            queue.load_state(),
            LoadState::Failed("transport error: connection refused".to_owned())
        );
    }

    #[tokio::test]
    async fn test_update_publishes_new_container_and_notifies() {
        // Arrange
        let queue = ModerationQueue::new();
        queue.load(&two_requests()).await.unwrap();
        let before = queue.snapshot();
        let rx = queue.subscribe();

        // Act
        let title = queue
            .update(1, |request| request.content_title.clone())
            .unwrap();

        // Assert
        assert_eq!(title, "Conte des ancêtres");
        assert!(rx.has_changed().unwrap());
        let after = queue.snapshot();
        assert!(!after.same_container(&before));
        assert_eq!(after.revision(), before.revision() + 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let queue = ModerationQueue::new();
        queue.load(&two_requests()).await.unwrap();
        let before = queue.snapshot();

        let result = queue.update(99, |_| ());

        assert!(matches!(result, Err(DomainError::NotFound(99))));
        assert!(queue.snapshot().same_container(&before));
    }
}
