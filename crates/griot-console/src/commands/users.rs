//! `griot users ...`

use griot_curation::application::command_handlers::handle_toggle_user_activation;
use griot_curation::application::users::UserDirectory;
use griot_curation::domain::commands::ToggleUserActivation;
use griot_curation::domain::user::UserAccount;

use super::with_notices;
use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::output;
use crate::state::AppState;

/// Lists accounts matching `search`.
///
/// # Errors
///
/// Returns `AppError::Domain` if the accounts cannot be loaded.
pub async fn list(
    state: &AppState,
    search: &str,
    format: OutputFormat,
) -> Result<String, AppError> {
    let directory = UserDirectory::new();
    directory.load(state.curation.as_ref()).await?;
    let users: Vec<UserAccount> = directory.view(search).iter().cloned().collect();
    output::render(&users, format)
}

/// Flips the activation of account `id`.
///
/// # Errors
///
/// Returns `AppError::Domain` if the account is unknown or the server
/// refuses the change.
pub async fn toggle(state: &AppState, id: i64, format: OutputFormat) -> Result<String, AppError> {
    let directory = UserDirectory::new();
    directory.load(state.curation.as_ref()).await?;
    let active = handle_toggle_user_activation(
        &ToggleUserActivation::new(id),
        state.curation.as_ref(),
        &directory,
    )
    .await?;

    let notice = format!("User {id} {}.", if active { "activated" } else { "deactivated" });
    let users: Vec<UserAccount> = directory.find(id).into_iter().collect();
    Ok(with_notices(&[notice], &output::render(&users, format)?))
}
