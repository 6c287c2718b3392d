//! `griot contents ...`

use griot_core::dto::ContentKind;
use griot_curation::application::command_handlers::{handle_create_riddle, handle_delete_content};
use griot_curation::application::contents::{ContentFilters, ContentLibrary};
use griot_curation::application::families::FamilyDirectory;
use griot_curation::domain::commands::{CreateRiddle, DeleteContent};
use griot_curation::domain::content::{ContentItem, RiddleDraft};

use super::with_notices;
use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::output::{self, RegionCount};
use crate::prompt::Prompt;
use crate::state::AppState;

async fn open(state: &AppState, kind: ContentKind) -> Result<ContentLibrary, AppError> {
    let library = ContentLibrary::new(kind);
    library.load(state.curation.as_ref()).await?;
    Ok(library)
}

fn render_library(
    library: &ContentLibrary,
    filters: &ContentFilters,
    families: &FamilyDirectory,
    format: OutputFormat,
) -> Result<String, AppError> {
    let items: Vec<ContentItem> = library.view(filters, families).iter().cloned().collect();
    output::render(&items, format)
}

/// Lists contents of `kind` passing `filters`. The family directory is only
/// fetched when a family is selected.
///
/// # Errors
///
/// Returns `AppError::Domain` if a listing cannot be loaded.
pub async fn list(
    state: &AppState,
    kind: ContentKind,
    filters: ContentFilters,
    format: OutputFormat,
) -> Result<String, AppError> {
    let families = FamilyDirectory::new();
    if filters.family_id.is_some() {
        families.load(state.curation.as_ref()).await?;
    }
    let library = open(state, kind).await?;
    render_library(&library, &filters, &families, format)
}

/// Counts contents of `kind` per region.
///
/// # Errors
///
/// Returns `AppError::Domain` if the listing cannot be loaded.
pub async fn regions(
    state: &AppState,
    kind: ContentKind,
    format: OutputFormat,
) -> Result<String, AppError> {
    let library = open(state, kind).await?;
    let counts = library.count_by_region();
    let rows: Vec<RegionCount> = library
        .unique_regions()
        .into_iter()
        .map(|region| {
            let count = counts.get(&region).copied().unwrap_or_default();
            RegionCount { region, count }
        })
        .collect();
    output::render(&rows, format)
}

/// Creates a riddle, prompting for the parts not given, and lists the
/// riddles with the new one first.
///
/// # Errors
///
/// Returns `AppError::Domain` if a part is blank, the riddles cannot be
/// loaded or the server refuses the creation.
pub async fn add_riddle(
    state: &AppState,
    question: Option<String>,
    answer: Option<String>,
    format: OutputFormat,
    prompt: &mut dyn Prompt,
) -> Result<String, AppError> {
    let question = match question {
        Some(question) => question,
        None => prompt.ask("Riddle")?,
    };
    let answer = match answer {
        Some(answer) => answer,
        None => prompt.ask("Answer")?,
    };
    let command = CreateRiddle::new(question, answer);
    // Blank parts are refused before anything is fetched.
    RiddleDraft::parse(&command.question, &command.answer)?;

    let library = open(state, ContentKind::Devinette).await?;
    let created = handle_create_riddle(&command, state.curation.as_ref(), &library).await?;

    let notice = format!("Riddle {} created.", created.id);
    let body = render_library(
        &library,
        &ContentFilters::default(),
        &FamilyDirectory::new(),
        format,
    )?;
    Ok(with_notices(&[notice], &body))
}

/// Deletes content `id` of `kind` after confirmation.
///
/// # Errors
///
/// Returns `AppError::Cancelled` if the operator declines, or
/// `AppError::Domain` if the item is unknown or the server refuses.
pub async fn delete(
    state: &AppState,
    kind: ContentKind,
    id: i64,
    yes: bool,
    format: OutputFormat,
    prompt: &mut dyn Prompt,
) -> Result<String, AppError> {
    let library = open(state, kind).await?;
    let title = library
        .snapshot()
        .items()
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.title.clone().unwrap_or_default());
    if let Some(title) = title {
        if !yes && !prompt.confirm(&format!("Delete {kind} {id} \"{title}\"?"))? {
            return Err(AppError::Cancelled);
        }
    }

    handle_delete_content(
        &DeleteContent::new(kind, id),
        state.curation.as_ref(),
        &library,
    )
    .await?;

    let notice = format!("Deleted {kind} {id}.");
    let body = render_library(
        &library,
        &ContentFilters::default(),
        &FamilyDirectory::new(),
        format,
    )?;
    Ok(with_notices(&[notice], &body))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use griot_core::error::DomainError;
    use griot_test_support::{
        CREATED_RIDDLE_ID, CurationCall, RecordingCurationGateway, RecordingModerationGateway,
        content_dto, family_dto,
    };

    use super::*;
    use crate::commands::testing::{ScriptedPrompt, state};

    fn curation() -> Arc<RecordingCurationGateway> {
        Arc::new(
            RecordingCurationGateway::new()
                .with_families(vec![
                    family_dto(1, "Keita", "2026-01-01T09:00:00"),
                    family_dto(2, "Traoré", "2026-01-01T09:00:00"),
                ])
                .with_contents(vec![
                    content_dto(11, "Le lièvre et l'hyène", "Keita", "Kayes"),
                    content_dto(12, "La calebasse", "Traoré", "Ségou"),
                    content_dto(13, "Le baobab", "KEITA", "Kayes"),
                ]),
        )
    }

    fn app(curation: Arc<RecordingCurationGateway>) -> AppState {
        state(Arc::new(RecordingModerationGateway::new(Vec::new())), curation)
    }

    #[tokio::test]
    async fn test_list_by_family_resolves_name_case_insensitively() {
        // Arrange
        let curation = curation();
        let state = app(curation.clone());
        let filters = ContentFilters {
            family_id: Some(1),
            ..ContentFilters::default()
        };

        // Act
        let text = list(&state, ContentKind::Conte, filters, OutputFormat::Table)
            .await
            .unwrap();

        // Assert
        assert!(text.contains("Le lièvre"));
        assert!(text.contains("Le baobab"));
        assert!(!text.contains("La calebasse"));
        assert_eq!(
            curation.calls(),
            vec![
                CurationCall::ListFamilies,
                CurationCall::ListContents(ContentKind::Conte)
            ]
        );
    }

    #[tokio::test]
    async fn test_list_without_family_skips_family_fetch() {
        let curation = curation();
        let state = app(curation.clone());
        let filters = ContentFilters {
            region: Some("Ségou".to_owned()),
            on_day: NaiveDate::from_ymd_opt(2026, 1, 5),
            ..ContentFilters::default()
        };

        let text = list(&state, ContentKind::Proverbe, filters, OutputFormat::Table)
            .await
            .unwrap();

        assert!(text.contains("La calebasse"));
        assert_eq!(text.lines().count(), 3);
        assert_eq!(
            curation.calls(),
            vec![CurationCall::ListContents(ContentKind::Proverbe)]
        );
    }

    #[tokio::test]
    async fn test_regions_are_sorted_with_counts() {
        let state = app(curation());

        let text = regions(&state, ContentKind::Artisanat, OutputFormat::Table)
            .await
            .unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "Kayes       2");
        assert_eq!(lines[3], "Ségou       1");
    }

    #[tokio::test]
    async fn test_delete_confirms_then_removes_item() {
        // Arrange
        let curation = curation();
        let state = app(curation.clone());
        let mut prompt = ScriptedPrompt::answering(&["y"]);

        // Act
        let text = delete(
            &state,
            ContentKind::Conte,
            12,
            false,
            OutputFormat::Table,
            &mut prompt,
        )
        .await
        .unwrap();

        // Assert
        assert!(prompt.questions[0].contains("La calebasse"));
        assert!(text.starts_with("Deleted conte 12."));
        assert!(!text.contains("La calebasse"));
        assert!(curation.calls().contains(&CurationCall::DeleteContent(ContentKind::Conte, 12)));
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let curation = curation();
        let state = app(curation.clone());
        let mut prompt = ScriptedPrompt::answering(&["n"]);

        let result = delete(
            &state,
            ContentKind::Conte,
            12,
            false,
            OutputFormat::Table,
            &mut prompt,
        )
        .await;

        assert!(matches!(result, Err(AppError::Cancelled)));
        assert_eq!(curation.calls(), vec![CurationCall::ListContents(ContentKind::Conte)]);
    }

    #[tokio::test]
    async fn test_delete_unknown_item_is_not_found() {
        let state = app(curation());
        let mut prompt = ScriptedPrompt::default();

        let result = delete(
            &state,
            ContentKind::Conte,
            99,
            false,
            OutputFormat::Table,
            &mut prompt,
        )
        .await;

        match result {
            Err(AppError::Domain(DomainError::NotFound(99))) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(prompt.questions.is_empty());
    }

    #[tokio::test]
    async fn test_add_riddle_prompts_and_lists_it_first() {
        // Arrange
        let curation = curation();
        let state = app(curation.clone());
        let mut prompt = ScriptedPrompt::answering(&["Le peigne"]);

        // Act
        let text = add_riddle(
            &state,
            Some("Qui a des dents mais ne mord pas ?".to_owned()),
            None,
            OutputFormat::Json,
            &mut prompt,
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(prompt.questions, vec!["Answer".to_owned()]);
        let (notice, body) = text.split_once("\n\n").unwrap();
        assert_eq!(notice, format!("Riddle {CREATED_RIDDLE_ID} created."));
        let items: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(items[0]["id"], CREATED_RIDDLE_ID);
        assert_eq!(items.as_array().unwrap().len(), 4);
        assert_eq!(curation.calls()[0], CurationCall::ListContents(ContentKind::Devinette));
    }

    #[tokio::test]
    async fn test_blank_riddle_is_refused_before_any_call() {
        let curation = curation();
        let state = app(curation.clone());
        let mut prompt = ScriptedPrompt::default();

        let result = add_riddle(
            &state,
            Some("Qui ?".to_owned()),
            Some("  ".to_owned()),
            OutputFormat::Table,
            &mut prompt,
        )
        .await;

        match result {
            Err(AppError::Domain(DomainError::Validation(_))) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
        assert!(curation.calls().is_empty());
    }
}
