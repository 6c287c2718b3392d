//! DTO fixtures with plausible defaults.

use griot_core::dto::{
    ContentDto, FamilyDto, ProfileDto, PublicationRequestDto, RequestStatus, UserDto,
};

/// A publication request as the server would send it.
///
/// Processed statuses come back with a validator and a decision date so the
/// fixture respects "decided iff not pending".
#[must_use]
pub fn request_dto(id: i64, title: &str, status: RequestStatus) -> PublicationRequestDto {
    let decided = !status.is_pending();
    PublicationRequestDto {
        id,
        id_contenu: id * 10,
        titre_contenu: title.to_owned(),
        id_demandeur: 3,
        nom_demandeur: "Awa Traoré".to_owned(),
        id_valideur: decided.then_some(1),
        nom_valideur: decided.then(|| "Super Admin".to_owned()),
        statut: status,
        commentaire: None,
        date_demande: "2026-01-10T08:30:00".to_owned(),
        date_traitement: decided.then(|| "2026-01-12T09:00:00".to_owned()),
    }
}

/// A family created at `date_creation`.
#[must_use]
pub fn family_dto(id: i64, name: &str, date_creation: &str) -> FamilyDto {
    FamilyDto {
        id,
        nom: Some(name.to_owned()),
        nom_famille: Some(name.to_owned()),
        description: None,
        ethnie: None,
        region: Some("Kayes".to_owned()),
        date_creation: Some(date_creation.to_owned()),
        nombre_membres: 4,
        nom_admin: Some("Keita".to_owned()),
        prenom_admin: Some("Moussa".to_owned()),
        email_admin: None,
        is_active: Some(true),
    }
}

/// A content item owned by `family`.
#[must_use]
pub fn content_dto(id: i64, title: &str, family: &str, region: &str) -> ContentDto {
    ContentDto {
        id,
        titre: Some(title.to_owned()),
        description: None,
        nom_createur: Some("Coulibaly".to_owned()),
        prenom_createur: Some("Seydou".to_owned()),
        nom_famille: Some(family.to_owned()),
        region_famille: Some(region.to_owned()),
        date_creation: Some("2026-01-05T14:00:00".to_owned()),
        type_contenu: None,
        url_photo: None,
    }
}

/// A user account.
#[must_use]
pub fn user_dto(id: i64, full_name: &str, active: bool) -> UserDto {
    UserDto {
        id,
        nom_complet: full_name.to_owned(),
        email: format!("user{id}@example.org"),
        role: Some("MEMBRE".to_owned()),
        telephone: None,
        actif: active,
        date_ajout: None,
    }
}

/// The signed-in super-admin's profile.
#[must_use]
pub fn profile_dto(id: i64) -> ProfileDto {
    ProfileDto {
        id: Some(id),
        nom: Some("Diallo".to_owned()),
        prenom: Some("Mariam".to_owned()),
        email: Some("mariam@example.org".to_owned()),
        telephone: None,
        role: Some("SUPERADMIN".to_owned()),
    }
}
