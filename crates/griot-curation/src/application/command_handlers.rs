//! Command handlers for the Curation context.
//!
//! Same shape as moderation: the local list only changes after the server
//! acknowledged the command.

use griot_core::command::Command;
use griot_core::dto::ContentKind;
use griot_core::error::{DomainError, GatewayError};
use griot_core::gateway::{CurationGateway, ProfileGateway};

use crate::application::contents::ContentLibrary;
use crate::application::users::UserDirectory;
use crate::domain::commands::{CreateRiddle, DeleteContent, ToggleUserActivation, UpdateProfile};
use crate::domain::content::{ContentItem, RiddleDraft};
use crate::domain::profile::Profile;

fn command_failed(command: &impl Command, source: GatewayError) -> DomainError {
    tracing::warn!(
        correlation_id = %command.correlation_id(),
        record_id = command.record_id(),
        command_type = command.command_type(),
        error = %source,
        "remote command failed"
    );
    DomainError::Command {
        command: command.command_type(),
        record_id: command.record_id(),
        source,
    }
}

/// Handles the `DeleteContent` command against the library of the same
/// kind.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `library` holds another kind,
/// `DomainError::NotFound` if the item is not loaded (neither makes a
/// remote call), or `DomainError::Command` if the server refuses the
/// deletion (the item stays listed).
pub async fn handle_delete_content(
    command: &DeleteContent,
    gateway: &dyn CurationGateway,
    library: &ContentLibrary,
) -> Result<(), DomainError> {
    if command.kind != library.kind() {
        return Err(DomainError::Validation(format!(
            "cannot delete a {} from the {} library",
            command.kind,
            library.kind()
        )));
    }
    if !library.contains(command.content_id) {
        return Err(DomainError::NotFound(command.content_id));
    }

    tracing::info!(
        correlation_id = %command.correlation_id,
        kind = %command.kind,
        content_id = command.content_id,
        "deleting content"
    );
    gateway
        .delete_content(command.kind, command.content_id)
        .await
        .map_err(|source| command_failed(command, source))?;

    library.remove(command.content_id);
    Ok(())
}

/// Handles the `ToggleUserActivation` command. Returns the new flag.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the account is not loaded (no remote
/// call), or `DomainError::Command` if the server refuses the change (the
/// flag is left as it was).
pub async fn handle_toggle_user_activation(
    command: &ToggleUserActivation,
    gateway: &dyn CurationGateway,
    directory: &UserDirectory,
) -> Result<bool, DomainError> {
    let user = directory
        .find(command.user_id)
        .ok_or(DomainError::NotFound(command.user_id))?;
    let active = !user.active;

    tracing::info!(
        correlation_id = %command.correlation_id,
        user_id = command.user_id,
        active,
        "changing user activation"
    );
    gateway
        .set_user_activation(command.user_id, active)
        .await
        .map_err(|source| command_failed(command, source))?;

    directory.set_active(command.user_id, active)?;
    Ok(active)
}

/// Handles the `CreateRiddle` command. The created riddle is put first in
/// `library` and returned.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `library` is not the riddle library
/// or the question or answer is blank (no remote call), or
/// `DomainError::Command` if the server refuses the creation.
pub async fn handle_create_riddle(
    command: &CreateRiddle,
    gateway: &dyn CurationGateway,
    library: &ContentLibrary,
) -> Result<ContentItem, DomainError> {
    if library.kind() != ContentKind::Devinette {
        return Err(DomainError::Validation(format!(
            "cannot add a riddle to the {} library",
            library.kind()
        )));
    }
    let draft = RiddleDraft::parse(&command.question, &command.answer)?;

    tracing::info!(correlation_id = %command.correlation_id, "creating riddle");
    let created = gateway
        .create_riddle(&draft.to_dto())
        .await
        .map_err(|source| command_failed(command, source))?;

    let item = ContentItem::from_dto(ContentKind::Devinette, created);
    library.prepend(item.clone());
    Ok(item)
}

/// Handles the `UpdateProfile` command. Returns the profile the server
/// stored, which replaces `current`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the password rules are broken (no
/// remote call), or `DomainError::Command` if the server refuses the update.
pub async fn handle_update_profile(
    command: &UpdateProfile,
    gateway: &dyn ProfileGateway,
    current: &Profile,
) -> Result<Profile, DomainError> {
    let update = command.edit.to_update(current)?;

    tracing::info!(
        correlation_id = %command.correlation_id,
        user_id = command.user_id,
        password_change = update.mot_de_passe.is_some(),
        "updating profile"
    );
    let stored = gateway
        .update_profile(command.user_id, &update)
        .await
        .map_err(|source| command_failed(command, source))?;

    Ok(Profile::from(stored))
}
