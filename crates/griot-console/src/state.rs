//! Shared console state.

use std::sync::Arc;

use griot_client::HttpGateway;
use griot_core::clock::{Clock, SystemClock};
use griot_core::gateway::{CurationGateway, ModerationGateway, ProfileGateway};
use griot_core::session::Session;

use crate::config::ConsoleConfig;

/// Collaborators shared by every console command.
#[derive(Clone)]
pub struct AppState {
    /// Operator session.
    pub session: Session,
    /// Time source for decisions and period filters.
    pub clock: Arc<dyn Clock>,
    /// Moderation endpoints.
    pub moderation: Arc<dyn ModerationGateway>,
    /// Curation endpoints.
    pub curation: Arc<dyn CurationGateway>,
    /// Own-profile endpoints.
    pub profiles: Arc<dyn ProfileGateway>,
    /// Account ID of the operator, when configured.
    pub user_id: Option<i64>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        session: Session,
        clock: Arc<dyn Clock>,
        moderation: Arc<dyn ModerationGateway>,
        curation: Arc<dyn CurationGateway>,
        profiles: Arc<dyn ProfileGateway>,
    ) -> Self {
        Self {
            session,
            clock,
            moderation,
            curation,
            profiles,
            user_id: None,
        }
    }

    /// Sets the operator's account ID.
    #[must_use]
    pub fn with_user_id(mut self, user_id: Option<i64>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Production state: one HTTP gateway serving every port, system clock.
    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        let session = config.session();
        let gateway = Arc::new(HttpGateway::new(config.api_url.clone(), session.clone()));
        Self::new(
            session,
            Arc::new(SystemClock),
            gateway.clone(),
            gateway.clone(),
            gateway,
        )
        .with_user_id(config.user_id)
    }
}
