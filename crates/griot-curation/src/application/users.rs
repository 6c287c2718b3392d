//! User directory.

use griot_core::error::DomainError;
use griot_core::filter::{DerivedView, ViewQuery};
use griot_core::gateway::CurationGateway;
use griot_core::store::{CanonicalList, Snapshot};

use crate::domain::user::UserAccount;

/// Canonical list of user accounts.
#[derive(Debug, Default)]
pub struct UserDirectory {
    list: CanonicalList<UserAccount>,
}

impl UserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the directory with one fetch from `gateway`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Fetch` if the gateway fails; the previous list
    /// is kept.
    pub async fn load(&self, gateway: &dyn CurationGateway) -> Result<usize, DomainError> {
        let dtos = gateway.list_users().await.map_err(|source| {
            tracing::warn!(error = %source, "failed to load users");
            DomainError::Fetch {
                resource: "users",
                source,
            }
        })?;
        let users: Vec<UserAccount> = dtos.into_iter().map(UserAccount::from).collect();
        let count = users.len();
        self.list.replace_all(users);
        tracing::info!(count, "users loaded");
        Ok(count)
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<UserAccount> {
        self.list.snapshot()
    }

    /// Returns a copy of the account with `user_id`, if loaded.
    #[must_use]
    pub fn find(&self, user_id: i64) -> Option<UserAccount> {
        self.list
            .snapshot()
            .items()
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
    }

    /// Accounts matching `search` over name, email, role and telephone.
    #[must_use]
    pub fn view(&self, search: &str) -> DerivedView<UserAccount> {
        let query = ViewQuery::default().with_text(search);
        DerivedView::from_snapshot(self.list.snapshot(), |user| query.matches(user))
    }

    /// Records the activation flag the server accepted.
    pub(crate) fn set_active(&self, user_id: i64, active: bool) -> Result<(), DomainError> {
        self.list
            .try_update(
                |user| user.id == user_id,
                |user| {
                    user.active = active;
                    Ok(())
                },
            )
            .unwrap_or(Err(DomainError::NotFound(user_id)))
    }
}
