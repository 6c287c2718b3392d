//! `griot families ...`

use griot_core::filter::Period;
use griot_curation::application::families::{FamilyDirectory, FamilyFilters};
use griot_curation::domain::family::Family;

use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::output;
use crate::state::AppState;

/// Lists families matching `search` created within `period`.
///
/// # Errors
///
/// Returns `AppError::Domain` if the families cannot be loaded.
pub async fn list(
    state: &AppState,
    search: String,
    period: Period,
    format: OutputFormat,
) -> Result<String, AppError> {
    let directory = FamilyDirectory::new();
    directory.load(state.curation.as_ref()).await?;
    let families: Vec<Family> = directory
        .view(&FamilyFilters { search, period }, state.clock.as_ref())
        .iter()
        .cloned()
        .collect();
    output::render(&families, format)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use griot_core::error::{DomainError, GatewayError};
    use griot_test_support::{RecordingCurationGateway, RecordingModerationGateway, family_dto};

    use super::*;
    use crate::commands::testing::state;

    #[tokio::test]
    async fn test_last_week_keeps_recent_families() {
        // Arrange
        let curation = RecordingCurationGateway::new().with_families(vec![
            family_dto(1, "Keita", "2026-01-12T09:00:00"),
            family_dto(2, "Traoré", "2025-11-02T09:00:00"),
        ]);
        let state = state(
            Arc::new(RecordingModerationGateway::new(Vec::new())),
            Arc::new(curation),
        );

        // Act
        let text = list(&state, String::new(), Period::LastWeek, OutputFormat::Table)
            .await
            .unwrap();

        // Assert
        assert!(text.contains("Keita"));
        assert!(!text.contains("Traoré"));
        assert!(text.contains("Actif"));
    }

    #[tokio::test]
    async fn test_failed_load_is_reported() {
        let curation = RecordingCurationGateway::new();
        curation.fail_with(GatewayError::Transport("connection refused".to_owned()));
        let state = state(
            Arc::new(RecordingModerationGateway::new(Vec::new())),
            Arc::new(curation),
        );

        let result = list(&state, String::new(), Period::All, OutputFormat::Table).await;

        match result {
            Err(AppError::Domain(DomainError::Fetch { resource, .. })) => {
                assert_eq!(resource, "families");
            }
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }
}
