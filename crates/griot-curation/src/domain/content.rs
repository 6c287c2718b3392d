//! Content items: tales, proverbs, riddles and crafts.

use griot_core::dto::{ContentDto, ContentKind, RiddleDraftDto};
use griot_core::error::DomainError;
use griot_core::filter::Filterable;
use serde::Serialize;

/// One published content item of a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    /// Content identifier.
    pub id: i64,
    /// Kind, fixed by the endpoint it was listed from.
    #[serde(skip)]
    pub kind: ContentKind,
    /// Title.
    pub title: Option<String>,
    /// Description or body.
    pub description: Option<String>,
    /// Creator last name.
    pub creator_last_name: Option<String>,
    /// Creator first name.
    pub creator_first_name: Option<String>,
    /// Owning family name.
    pub family_name: Option<String>,
    /// Owning family region.
    pub region: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Photo or thumbnail path.
    pub photo_url: Option<String>,
}

impl ContentItem {
    /// Builds an item of `kind` from its wire shape.
    #[must_use]
    pub fn from_dto(kind: ContentKind, dto: ContentDto) -> Self {
        Self {
            id: dto.id,
            kind,
            title: dto.titre,
            description: dto.description,
            creator_last_name: dto.nom_createur,
            creator_first_name: dto.prenom_createur,
            family_name: dto.nom_famille,
            region: dto.region_famille,
            created_at: dto.date_creation,
            photo_url: dto.url_photo,
        }
    }

    /// `"{first} {last}"` of the creator, trimmed.
    #[must_use]
    pub fn creator(&self) -> String {
        format!(
            "{} {}",
            self.creator_first_name.as_deref().unwrap_or_default(),
            self.creator_last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_owned()
    }
}

impl Filterable for ContentItem {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.title.as_deref(),
            self.description.as_deref(),
            self.creator_last_name.as_deref(),
            self.creator_first_name.as_deref(),
            self.family_name.as_deref(),
            self.region.as_deref(),
        ]
    }

    fn date_field(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn category_label(&self) -> Option<&str> {
        self.family_name.as_deref()
    }
}

/// Validated text of a new riddle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiddleDraft {
    question: String,
    answer: String,
}

impl RiddleDraft {
    /// Parses operator input; both parts are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the question or the answer is
    /// blank.
    pub fn parse(question: &str, answer: &str) -> Result<Self, DomainError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Err(DomainError::Validation(
                "a riddle needs both a question and an answer".to_owned(),
            ));
        }
        Ok(Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
        })
    }

    /// Wire body; the question doubles as the title.
    #[must_use]
    pub fn to_dto(&self) -> RiddleDraftDto {
        RiddleDraftDto {
            titre: self.question.clone(),
            texte_devinette: self.question.clone(),
            reponse_devinette: self.answer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use griot_test_support::content_dto;

    #[test]
    fn test_creator_joins_first_and_last_name() {
        let item = ContentItem::from_dto(
            ContentKind::Conte,
            content_dto(1, "Le lièvre", "Keita", "Kayes"),
        );

        assert_eq!(item.creator(), "Seydou Coulibaly");
    }

    #[test]
    fn test_creator_without_first_name_is_trimmed() {
        let mut dto = content_dto(1, "Le lièvre", "Keita", "Kayes");
        dto.prenom_createur = None;

        let item = ContentItem::from_dto(ContentKind::Conte, dto);

        assert_eq!(item.creator(), "Coulibaly");
    }

    #[test]
    fn test_riddle_draft_trims_and_repeats_question_as_title() {
        let draft =
            RiddleDraft::parse("  Qui a des dents mais ne mord pas ? ", " Le peigne ").unwrap();

        let dto = draft.to_dto();

        assert_eq!(dto.titre, "Qui a des dents mais ne mord pas ?");
        assert_eq!(dto.texte_devinette, dto.titre);
        assert_eq!(dto.reponse_devinette, "Le peigne");
    }

    #[test]
    fn test_riddle_draft_requires_both_parts() {
        assert!(matches!(RiddleDraft::parse("  ", "Le peigne"), Err(DomainError::Validation(_))));
        assert!(matches!(RiddleDraft::parse("Qui ?", ""), Err(DomainError::Validation(_))));
    }
}
