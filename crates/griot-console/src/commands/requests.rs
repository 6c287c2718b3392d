//! `griot requests ...`

use griot_core::error::DomainError;
use griot_moderation::application::console::ModerationConsole;
use griot_moderation::application::query_handlers::{QueueSummary, RequestRow, summarize};
use griot_moderation::application::view::ModerationFilters;
use griot_moderation::domain::workflow::RejectionComment;
use serde::Serialize;

use super::with_notices;
use crate::cli::{OutputFormat, ViewArgs};
use crate::error::AppError;
use crate::output;
use crate::prompt::Prompt;
use crate::state::AppState;

/// The moderation view as rendered to the operator.
#[derive(Debug, Serialize)]
struct QueueListing {
    tab: String,
    search: String,
    summary: QueueSummary,
    requests: Vec<RequestRow>,
}

async fn open(state: &AppState, view: ViewArgs) -> Result<ModerationConsole, AppError> {
    let console = ModerationConsole::with_filters(
        state.moderation.clone(),
        state.clock.clone(),
        state.session.clone(),
        ModerationFilters {
            tab: view.tab,
            search: view.search,
        },
    );
    console.load().await?;
    Ok(console)
}

fn render_view(console: &ModerationConsole, format: OutputFormat) -> Result<String, AppError> {
    let filters = console.filters();
    let rows: Vec<RequestRow> = console.visible().iter().map(RequestRow::from).collect();
    let summary = summarize(console.queue());
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&QueueListing {
            tab: filters.tab.to_string(),
            search: filters.search,
            summary,
            requests: rows,
        })?),
        OutputFormat::Table => {
            let search = if filters.search.trim().is_empty() {
                "-".to_owned()
            } else {
                format!("{:?}", filters.search)
            };
            let header = format!(
                "tab: {}  search: {search}  pending: {}  processed: {}  total: {}",
                filters.tab, summary.pending, summary.processed, summary.total
            );
            Ok(format!("{header}\n\n{}", output::render(&rows, format)?))
        }
    }
}

/// Lists the queue under the requested tab and search.
///
/// # Errors
///
/// Returns `AppError::Domain` if the queue cannot be loaded.
pub async fn list(
    state: &AppState,
    view: ViewArgs,
    format: OutputFormat,
) -> Result<String, AppError> {
    let console = open(state, view).await?;
    render_view(&console, format)
}

/// Approves request `id` after confirmation.
///
/// # Errors
///
/// Returns `AppError::Cancelled` if the operator declines, or
/// `AppError::Domain` if the request is unknown or the server refuses.
pub async fn approve(
    state: &AppState,
    id: i64,
    yes: bool,
    view: ViewArgs,
    format: OutputFormat,
    prompt: &mut dyn Prompt,
) -> Result<String, AppError> {
    let console = open(state, view).await?;
    let request = console.queue().find(id).ok_or(DomainError::NotFound(id))?;
    if !yes
        && !prompt.confirm(&format!(
            "Approve request {id} \"{}\" by {}?",
            request.content_title, request.requester_name
        ))?
    {
        return Err(AppError::Cancelled);
    }

    let result = console.approve(id).await?;
    let mut notices = vec![format!("Request {} approved.", result.request_id)];
    if result.tab_switched {
        notices.push(format!("Showing the {} tab.", console.filters().tab));
    }
    Ok(with_notices(&notices, &render_view(&console, format)?))
}

/// Rejects request `id`, prompting for the comment when none was given.
///
/// # Errors
///
/// Returns `AppError::Domain` if the comment is blank, the request is
/// unknown or the server refuses.
pub async fn reject(
    state: &AppState,
    id: i64,
    comment: Option<String>,
    view: ViewArgs,
    format: OutputFormat,
    prompt: &mut dyn Prompt,
) -> Result<String, AppError> {
    let comment = match comment {
        Some(comment) => comment,
        None => prompt.ask(&format!("Rejection comment for request {id}"))?,
    };
    let comment = RejectionComment::parse(&comment)?;

    let console = open(state, view).await?;
    let result = console.reject(id, comment.as_str()).await?;
    let mut notices = vec![format!("Request {} rejected.", result.request_id)];
    if result.tab_switched {
        notices.push(format!("Showing the {} tab.", console.filters().tab));
    }
    Ok(with_notices(&notices, &render_view(&console, format)?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use griot_core::dto::RequestStatus;
    use griot_core::error::DomainError;
    use griot_moderation::application::view::StatusTab;
    use griot_test_support::{
        ModerationCall, RecordingCurationGateway, RecordingModerationGateway, request_dto,
    };

    use super::*;
    use crate::commands::testing::{ScriptedPrompt, state};

    fn gateway() -> Arc<RecordingModerationGateway> {
        Arc::new(RecordingModerationGateway::new(vec![
            request_dto(7, "Conte des ancêtres", RequestStatus::Pending),
            request_dto(8, "Proverbe du jour", RequestStatus::Approved),
        ]))
    }

    fn pending_tab() -> ViewArgs {
        ViewArgs {
            tab: StatusTab::Pending,
            search: String::new(),
        }
    }

    #[tokio::test]
    async fn test_list_shows_only_the_selected_tab() {
        // Arrange
        let state = state(gateway(), Arc::new(RecordingCurationGateway::new()));

        // Act
        let text = list(&state, pending_tab(), OutputFormat::Table).await.unwrap();

        // Assert
        assert!(text.starts_with("tab: pending  search: -  pending: 1  processed: 1  total: 2"));
        assert!(text.contains("Conte des ancêtres"));
        assert!(!text.contains("Proverbe du jour"));
    }

    #[tokio::test]
    async fn test_approve_on_pending_tab_switches_to_all() {
        // Arrange
        let moderation = gateway();
        let state = state(moderation.clone(), Arc::new(RecordingCurationGateway::new()));
        let mut prompt = ScriptedPrompt::answering(&["y"]);

        // Act
        let text = approve(&state, 7, false, pending_tab(), OutputFormat::Json, &mut prompt)
            .await
            .unwrap();

        // Assert
        assert!(prompt.questions[0].contains("Conte des ancêtres"));
        assert!(moderation.calls().contains(&ModerationCall::Validate(7)));
        let (notices, body) = text.split_once("\n\n").unwrap();
        assert_eq!(notices, "Request 7 approved.\nShowing the all tab.");
        let listing: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(listing["tab"], "all");
        assert_eq!(listing["requests"][0]["status"], "APPROUVEE");
        assert_eq!(listing["requests"][0]["validator"], "Mariam Diallo");
        assert_eq!(listing["requests"][0]["processed_at"], "2026-01-15T10:00:00");
    }

    #[tokio::test]
    async fn test_declined_confirmation_sends_nothing() {
        let moderation = gateway();
        let state = state(moderation.clone(), Arc::new(RecordingCurationGateway::new()));
        let mut prompt = ScriptedPrompt::answering(&["n"]);

        let result = approve(
            &state,
            7,
            false,
            ViewArgs::default(),
            OutputFormat::Table,
            &mut prompt,
        )
        .await;

        assert!(matches!(result, Err(AppError::Cancelled)));
        assert_eq!(moderation.command_count(), 0);
    }

    #[tokio::test]
    async fn test_approve_unknown_request_is_not_found() {
        let moderation = gateway();
        let state = state(moderation.clone(), Arc::new(RecordingCurationGateway::new()));
        let mut prompt = ScriptedPrompt::default();

        let result = approve(
            &state,
            99,
            true,
            ViewArgs::default(),
            OutputFormat::Table,
            &mut prompt,
        )
        .await;

        match result {
            Err(AppError::Domain(DomainError::NotFound(99))) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(prompt.questions.is_empty());
        assert_eq!(moderation.command_count(), 0);
    }

    #[tokio::test]
    async fn test_reject_prompts_for_comment() {
        // Arrange
        let moderation = gateway();
        let state = state(moderation.clone(), Arc::new(RecordingCurationGateway::new()));
        let mut prompt = ScriptedPrompt::answering(&["  Titre trompeur  "]);

        // Act
        let text = reject(&state, 7, None, ViewArgs::default(), OutputFormat::Table, &mut prompt)
            .await
            .unwrap();

        // Assert
        assert!(text.starts_with("Request 7 rejected.\n\ntab: all"));
        assert!(text.contains("Titre trompeur"));
        assert!(
            moderation
                .calls()
                .contains(&ModerationCall::Reject(7, "Titre trompeur".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_blank_comment_is_refused_without_remote_call() {
        let moderation = gateway();
        let state = state(moderation.clone(), Arc::new(RecordingCurationGateway::new()));
        let mut prompt = ScriptedPrompt::default();

        let result = reject(
            &state,
            7,
            Some("   ".to_owned()),
            ViewArgs::default(),
            OutputFormat::Table,
            &mut prompt,
        )
        .await;

        match result {
            Err(AppError::Domain(DomainError::Validation(_))) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
        assert!(moderation.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_prompted_comment_skips_queue_load() {
        // Arrange
        let moderation = gateway();
        let state = state(moderation.clone(), Arc::new(RecordingCurationGateway::new()));
        let mut prompt = ScriptedPrompt::answering(&[""]);

        // Act
        let result = reject(&state, 7, None, ViewArgs::default(), OutputFormat::Table, &mut prompt)
            .await;

        // Assert
        match result {
            Err(AppError::Domain(DomainError::Validation(_))) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
        assert_eq!(prompt.questions, vec!["Rejection comment for request 7".to_owned()]);
        assert!(moderation.calls().is_empty());
    }
}
