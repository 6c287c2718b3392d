//! The signed-in account's own profile.

use griot_core::dto::{ProfileDto, ProfileUpdateDto};
use griot_core::error::DomainError;
use serde::Serialize;

/// Profile of the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Account identifier, when the server sends it.
    pub id: Option<i64>,
    /// Last name.
    pub last_name: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Telephone number.
    pub telephone: Option<String>,
    /// Role label.
    pub role: Option<String>,
}

impl From<ProfileDto> for Profile {
    fn from(dto: ProfileDto) -> Self {
        Self {
            id: dto.id,
            last_name: dto.nom,
            first_name: dto.prenom,
            email: dto.email,
            telephone: dto.telephone,
            role: dto.role,
        }
    }
}

/// Changes requested by the operator. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEdit {
    /// New last name.
    pub last_name: Option<String>,
    /// New first name.
    pub first_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// Current password, required to change it.
    pub current_password: Option<String>,
    /// New password.
    pub new_password: Option<String>,
    /// New password, typed again.
    pub confirm_password: Option<String>,
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ProfileEdit {
    /// Whether the edit asks for a password change.
    #[must_use]
    pub fn changes_password(&self) -> bool {
        filled(self.new_password.as_deref()).is_some()
            || filled(self.confirm_password.as_deref()).is_some()
    }

    /// Builds the update body from `current` overlaid with this edit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a password change lacks the
    /// current password or the two new passwords differ.
    pub fn to_update(&self, current: &Profile) -> Result<ProfileUpdateDto, DomainError> {
        let mut update = ProfileUpdateDto {
            nom: self.last_name.clone().or_else(|| current.last_name.clone()),
            prenom: self.first_name.clone().or_else(|| current.first_name.clone()),
            email: self.email.clone().or_else(|| current.email.clone()),
            mot_de_passe: None,
            ancien_mot_de_passe: None,
        };
        if self.changes_password() {
            let Some(current_password) = filled(self.current_password.as_deref()) else {
                return Err(DomainError::Validation(
                    "the current password is required to change it".to_owned(),
                ));
            };
            if self.new_password != self.confirm_password {
                return Err(DomainError::Validation(
                    "the new passwords do not match".to_owned(),
                ));
            }
            update.mot_de_passe.clone_from(&self.new_password);
            update.ancien_mot_de_passe = Some(current_password.to_owned());
        }
        Ok(update)
    }
}
