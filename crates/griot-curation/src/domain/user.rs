//! User accounts.

use griot_core::dto::UserDto;
use griot_core::filter::Filterable;
use serde::Serialize;

/// A platform user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAccount {
    /// User identifier.
    pub id: i64,
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Role label.
    pub role: Option<String>,
    /// Telephone number.
    pub telephone: Option<String>,
    /// Whether the account may sign in.
    pub active: bool,
    /// Registration timestamp.
    pub registered_at: Option<String>,
}

impl From<UserDto> for UserAccount {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            full_name: dto.nom_complet,
            email: dto.email,
            role: dto.role,
            telephone: dto.telephone,
            active: dto.actif,
            registered_at: dto.date_ajout,
        }
    }
}

impl Filterable for UserAccount {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.full_name),
            Some(&self.email),
            self.role.as_deref(),
            self.telephone.as_deref(),
        ]
    }

    fn date_field(&self) -> Option<&str> {
        self.registered_at.as_deref()
    }
}
