//! Remote gateway ports.
//!
//! The console never talks HTTP directly; contexts depend on these traits
//! and receive an implementation at construction (the reqwest client in
//! production, recording mocks in tests). Each call reports a plain
//! success or failure: no retry, no timeout, no de-duplication.

use async_trait::async_trait;

use crate::dto::{
    ContentDto, ContentKind, FamilyDto, ProfileDto, ProfileUpdateDto, PublicationRequestDto,
    RiddleDraftDto, UserDto,
};
use crate::error::GatewayError;

/// Port for the publication-request moderation endpoints.
#[async_trait]
pub trait ModerationGateway: Send + Sync {
    /// Fetches every publication request, pending and processed.
    async fn list_requests(&self) -> Result<Vec<PublicationRequestDto>, GatewayError>;

    /// Validates (approves) a request. Returns the server acknowledgement.
    async fn validate_request(&self, request_id: i64) -> Result<String, GatewayError>;

    /// Rejects a request with a mandatory comment. Returns the server
    /// acknowledgement.
    async fn reject_request(&self, request_id: i64, comment: &str)
    -> Result<String, GatewayError>;
}

/// Port for the curation listings (families, contents, users).
#[async_trait]
pub trait CurationGateway: Send + Sync {
    /// Fetches every family.
    async fn list_families(&self) -> Result<Vec<FamilyDto>, GatewayError>;

    /// Fetches every content item of one kind.
    async fn list_contents(&self, kind: ContentKind) -> Result<Vec<ContentDto>, GatewayError>;

    /// Creates a text-only riddle. Returns the stored item.
    async fn create_riddle(&self, draft: &RiddleDraftDto) -> Result<ContentDto, GatewayError>;

    /// Deletes a content item. Returns the server acknowledgement.
    async fn delete_content(&self, kind: ContentKind, content_id: i64)
    -> Result<String, GatewayError>;

    /// Fetches every user account.
    async fn list_users(&self) -> Result<Vec<UserDto>, GatewayError>;

    /// Activates or deactivates a user account.
    async fn set_user_activation(&self, user_id: i64, active: bool) -> Result<(), GatewayError>;
}

/// Port for the signed-in account's own profile.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Fetches the profile of `user_id`.
    async fn get_profile(&self, user_id: i64) -> Result<ProfileDto, GatewayError>;

    /// Updates the profile of `user_id`. Returns the stored profile.
    async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdateDto,
    ) -> Result<ProfileDto, GatewayError>;
}
