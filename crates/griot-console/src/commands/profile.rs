//! `griot profile ...`

use griot_curation::application::command_handlers::handle_update_profile;
use griot_curation::application::profile::load_profile;
use griot_curation::domain::commands::UpdateProfile;
use griot_curation::domain::profile::ProfileEdit;

use super::with_notices;
use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::output;
use crate::prompt::Prompt;
use crate::state::AppState;

fn user_id(state: &AppState) -> Result<i64, AppError> {
    state.user_id.ok_or_else(|| {
        AppError::Config("GRIOT_USER_ID is required for profile commands".to_owned())
    })
}

/// Shows the operator's own profile.
///
/// # Errors
///
/// Returns `AppError::Config` without `GRIOT_USER_ID`, or `AppError::Domain`
/// if the profile cannot be loaded.
pub async fn show(state: &AppState, format: OutputFormat) -> Result<String, AppError> {
    let user_id = user_id(state)?;
    let profile = load_profile(state.profiles.as_ref(), user_id).await?;
    output::render(&[profile], format)
}

/// Applies `edit` to the operator's profile, prompting for the three
/// passwords when `change_password` is set.
///
/// # Errors
///
/// Returns `AppError::Config` without `GRIOT_USER_ID`, or `AppError::Domain`
/// if the password rules are broken, the profile cannot be loaded or the
/// server refuses the update.
pub async fn update(
    state: &AppState,
    mut edit: ProfileEdit,
    change_password: bool,
    format: OutputFormat,
    prompt: &mut dyn Prompt,
) -> Result<String, AppError> {
    let user_id = user_id(state)?;
    if change_password {
        edit.current_password = Some(prompt.secret("Current password")?);
        edit.new_password = Some(prompt.secret("New password")?);
        edit.confirm_password = Some(prompt.secret("Confirm new password")?);
    }

    let current = load_profile(state.profiles.as_ref(), user_id).await?;
    let stored = handle_update_profile(
        &UpdateProfile::new(user_id, edit),
        state.profiles.as_ref(),
        &current,
    )
    .await?;

    let notice = "Profile updated.".to_owned();
    Ok(with_notices(&[notice], &output::render(&[stored], format)?))
}
