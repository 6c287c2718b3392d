//! Family records.

use griot_core::dto::FamilyDto;
use griot_core::filter::{CategorySource, Filterable};
use serde::Serialize;

/// A family registered on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Family {
    /// Family identifier.
    pub id: i64,
    /// Family name.
    pub name: Option<String>,
    /// Name the content endpoints copy onto each item; falls back to `name`.
    pub label: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Ethnic group.
    pub ethnic_group: Option<String>,
    /// Region.
    pub region: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Number of members.
    pub member_count: i64,
    /// Administrator last name.
    pub admin_last_name: Option<String>,
    /// Administrator first name.
    pub admin_first_name: Option<String>,
    /// Administrator email.
    pub admin_email: Option<String>,
    /// Activation flag; `None` when never initialised.
    pub is_active: Option<bool>,
}

impl Family {
    /// `Actif` only when the flag is explicitly set.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_active == Some(true) {
            "Actif"
        } else {
            "Inactif"
        }
    }

    /// Name shown in listings.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or_default()
    }
}

impl From<FamilyDto> for Family {
    fn from(dto: FamilyDto) -> Self {
        Self {
            id: dto.id,
            label: dto.nom_famille.or_else(|| dto.nom.clone()),
            name: dto.nom,
            description: dto.description,
            ethnic_group: dto.ethnie,
            region: dto.region,
            created_at: dto.date_creation,
            member_count: dto.nombre_membres,
            admin_last_name: dto.nom_admin,
            admin_first_name: dto.prenom_admin,
            admin_email: dto.email_admin,
            is_active: dto.is_active,
        }
    }
}

impl Filterable for Family {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.admin_last_name.as_deref(),
            self.admin_first_name.as_deref(),
        ]
    }

    fn date_field(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl CategorySource for Family {
    fn category_key(&self) -> i64 {
        self.id
    }

    fn category_name(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
