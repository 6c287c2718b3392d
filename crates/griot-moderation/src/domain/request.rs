//! The publication request record.

use griot_core::dto::PublicationRequestDto;
use griot_core::filter::Filterable;
use serde::Serialize;

use super::classifier::{ContentType, classify};

pub use griot_core::dto::RequestStatus;

/// A request asking that a piece of submitted content be made public.
///
/// Identity and submission fields are public and never change. Decision
/// fields (`status`, validator, `comment`, `processed_at`) are only written
/// by the workflow transitions in [`super::workflow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationRequest {
    /// Request identifier.
    pub id: i64,
    /// Identifier of the content item.
    pub content_id: i64,
    /// Title of the content item.
    pub content_title: String,
    /// Identifier of the submitting member.
    pub requester_id: i64,
    /// Display name of the submitting member.
    pub requester_name: String,
    /// Creation timestamp as sent by the server.
    pub requested_at: String,
    pub(crate) validator_id: Option<i64>,
    pub(crate) validator_name: Option<String>,
    pub(crate) status: RequestStatus,
    pub(crate) comment: Option<String>,
    pub(crate) processed_at: Option<String>,
    pub(crate) content_type: ContentType,
}

impl PublicationRequest {
    /// Current status.
    #[must_use]
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Validator identifier, once decided server-side.
    #[must_use]
    pub fn validator_id(&self) -> Option<i64> {
        self.validator_id
    }

    /// Validator display name.
    #[must_use]
    pub fn validator_name(&self) -> Option<&str> {
        self.validator_name.as_deref()
    }

    /// Decision comment.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Decision timestamp.
    #[must_use]
    pub fn processed_at(&self) -> Option<&str> {
        self.processed_at.as_deref()
    }

    /// Category inferred from the title when the request was loaded.
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }
}

impl From<PublicationRequestDto> for PublicationRequest {
    fn from(dto: PublicationRequestDto) -> Self {
        let content_type = classify(&dto.titre_contenu);
        Self {
            id: dto.id,
            content_id: dto.id_contenu,
            content_title: dto.titre_contenu,
            requester_id: dto.id_demandeur,
            requester_name: dto.nom_demandeur,
            requested_at: dto.date_demande,
            validator_id: dto.id_valideur,
            validator_name: dto.nom_valideur,
            status: dto.statut,
            comment: dto.commentaire,
            processed_at: dto.date_traitement,
            content_type,
        }
    }
}

impl Filterable for PublicationRequest {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(&self.content_title), Some(&self.requester_name)]
    }

    fn date_field(&self) -> Option<&str> {
        Some(&self.requested_at)
    }
}
