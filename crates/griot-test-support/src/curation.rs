//! Test gateway — a recording `CurationGateway` for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use griot_core::dto::{ContentDto, ContentKind, FamilyDto, RiddleDraftDto, UserDto};
use griot_core::error::GatewayError;
use griot_core::gateway::CurationGateway;

/// Identifier the recording gateway assigns to a created riddle.
pub const CREATED_RIDDLE_ID: i64 = 100;

/// A call received by [`RecordingCurationGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurationCall {
    /// `list_families`.
    ListFamilies,
    /// `list_contents(kind)`.
    ListContents(ContentKind),
    /// `create_riddle(draft)`.
    CreateRiddle(RiddleDraftDto),
    /// `delete_content(kind, id)`.
    DeleteContent(ContentKind, i64),
    /// `list_users`.
    ListUsers,
    /// `set_user_activation(id, active)`.
    SetUserActivation(i64, bool),
}

/// A curation gateway backed by in-memory fixtures. Records every call;
/// every call fails once [`RecordingCurationGateway::fail_with`] is set.
#[derive(Debug, Default)]
pub struct RecordingCurationGateway {
    families: Vec<FamilyDto>,
    contents: Vec<ContentDto>,
    users: Vec<UserDto>,
    failure: Mutex<Option<GatewayError>>,
    calls: Mutex<Vec<CurationCall>>,
}

impl RecordingCurationGateway {
    /// Create an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Families returned by `list_families`.
    #[must_use]
    pub fn with_families(mut self, families: Vec<FamilyDto>) -> Self {
        self.families = families;
        self
    }

    /// Contents returned by `list_contents`, whatever the kind.
    #[must_use]
    pub fn with_contents(mut self, contents: Vec<ContentDto>) -> Self {
        self.contents = contents;
        self
    }

    /// Users returned by `list_users`.
    #[must_use]
    pub fn with_users(mut self, users: Vec<UserDto>) -> Self {
        self.users = users;
        self
    }

    /// Make every subsequent call fail with `error`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn fail_with(&self, error: GatewayError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Returns a snapshot of all calls received, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<CurationCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T>(&self, call: CurationCall, value: T) -> Result<T, GatewayError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl CurationGateway for RecordingCurationGateway {
    async fn list_families(&self) -> Result<Vec<FamilyDto>, GatewayError> {
        self.record(CurationCall::ListFamilies, self.families.clone())
    }

    async fn list_contents(&self, kind: ContentKind) -> Result<Vec<ContentDto>, GatewayError> {
        self.record(CurationCall::ListContents(kind), self.contents.clone())
    }

    async fn create_riddle(&self, draft: &RiddleDraftDto) -> Result<ContentDto, GatewayError> {
        let created = ContentDto {
            id: CREATED_RIDDLE_ID,
            titre: Some(draft.titre.clone()),
            description: Some(draft.reponse_devinette.clone()),
            nom_createur: None,
            prenom_createur: None,
            nom_famille: None,
            region_famille: None,
            date_creation: Some("2026-01-15T10:00:00".to_owned()),
            type_contenu: Some("DEVINETTE".to_owned()),
            url_photo: None,
        };
        self.record(CurationCall::CreateRiddle(draft.clone()), created)
    }

    async fn delete_content(
        &self,
        kind: ContentKind,
        content_id: i64,
    ) -> Result<String, GatewayError> {
        self.record(CurationCall::DeleteContent(kind, content_id), "deleted".to_owned())
    }

    async fn list_users(&self) -> Result<Vec<UserDto>, GatewayError> {
        self.record(CurationCall::ListUsers, self.users.clone())
    }

    async fn set_user_activation(&self, user_id: i64, active: bool) -> Result<(), GatewayError> {
        self.record(CurationCall::SetUserActivation(user_id, active), ())
    }
}
