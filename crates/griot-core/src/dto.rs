//! Wire shapes exchanged with the super-admin API.
//!
//! Field names follow the server's JSON (French, camelCase). Contexts turn
//! these into their own domain records; nothing outside a gateway should
//! need to build one by hand except tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Life-cycle status of a publication request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Awaiting a decision.
    #[serde(rename = "EN_ATTENTE")]
    Pending,
    /// Approved by a validator.
    #[serde(rename = "APPROUVEE")]
    Approved,
    /// Rejected by a validator, with a comment.
    #[serde(rename = "REJETEE")]
    Rejected,
    /// Published by a process outside the console.
    #[serde(rename = "PUBLIEE")]
    Published,
}

impl RequestStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "EN_ATTENTE",
            Self::Approved => "APPROUVEE",
            Self::Rejected => "REJETEE",
            Self::Published => "PUBLIEE",
        }
    }

    /// Whether the request still awaits a decision.
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A publication request as returned by `GET /superadmin/demandes-publication`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRequestDto {
    /// Request identifier.
    pub id: i64,
    /// Identifier of the content item.
    pub id_contenu: i64,
    /// Title of the content item.
    pub titre_contenu: String,
    /// Identifier of the submitting member.
    pub id_demandeur: i64,
    /// Display name of the submitting member.
    pub nom_demandeur: String,
    /// Identifier of the validator, once decided.
    #[serde(default)]
    pub id_valideur: Option<i64>,
    /// Display name of the validator, once decided.
    #[serde(default)]
    pub nom_valideur: Option<String>,
    /// Current status.
    pub statut: RequestStatus,
    /// Validator comment (mandatory on rejection).
    #[serde(default)]
    pub commentaire: Option<String>,
    /// Creation timestamp.
    pub date_demande: String,
    /// Decision timestamp.
    #[serde(default)]
    pub date_traitement: Option<String>,
}

/// A family as returned by `GET /superadmin/dashboard/familles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyDto {
    /// Family identifier.
    pub id: i64,
    /// Family name.
    #[serde(default)]
    pub nom: Option<String>,
    /// Label the content endpoints denormalize onto each item.
    #[serde(default)]
    pub nom_famille: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Ethnic group.
    #[serde(default)]
    pub ethnie: Option<String>,
    /// Region.
    #[serde(default)]
    pub region: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_creation: Option<String>,
    /// Number of members.
    #[serde(default)]
    pub nombre_membres: i64,
    /// Family administrator last name.
    #[serde(default)]
    pub nom_admin: Option<String>,
    /// Family administrator first name.
    #[serde(default)]
    pub prenom_admin: Option<String>,
    /// Family administrator email.
    #[serde(default)]
    pub email_admin: Option<String>,
    /// Activation flag; `null` when never initialised.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// A content item (tale, proverb, riddle or craft).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDto {
    /// Content identifier.
    pub id: i64,
    /// Title.
    #[serde(default)]
    pub titre: Option<String>,
    /// Description or body.
    #[serde(default)]
    pub description: Option<String>,
    /// Creator last name.
    #[serde(default)]
    pub nom_createur: Option<String>,
    /// Creator first name.
    #[serde(default)]
    pub prenom_createur: Option<String>,
    /// Owning family name.
    #[serde(default)]
    pub nom_famille: Option<String>,
    /// Owning family region.
    #[serde(default)]
    pub region_famille: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_creation: Option<String>,
    /// Server-side content type (e.g. `CONTE`).
    #[serde(default)]
    pub type_contenu: Option<String>,
    /// Photo or thumbnail path.
    #[serde(default)]
    pub url_photo: Option<String>,
}

/// A user account as returned by `GET /superadmin/dashboard/utilisateurs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// User identifier.
    pub id: i64,
    /// Full name.
    pub nom_complet: String,
    /// Email address.
    pub email: String,
    /// Role label.
    #[serde(default)]
    pub role: Option<String>,
    /// Telephone number.
    #[serde(default)]
    pub telephone: Option<String>,
    /// Whether the account is active.
    pub actif: bool,
    /// Registration timestamp.
    #[serde(default)]
    pub date_ajout: Option<String>,
}

impl ContentDto {
    /// Whether the server-side type names `kind`, ignoring case.
    #[must_use]
    pub fn is_of_kind(&self, kind: ContentKind) -> bool {
        self.type_contenu
            .as_deref()
            .is_some_and(|code| code.trim().eq_ignore_ascii_case(kind.type_code()))
    }
}

/// The signed-in account as returned by `GET /utilisateurs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    /// Account identifier.
    #[serde(default)]
    pub id: Option<i64>,
    /// Last name.
    #[serde(default)]
    pub nom: Option<String>,
    /// First name.
    #[serde(default)]
    pub prenom: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Telephone number.
    #[serde(default)]
    pub telephone: Option<String>,
    /// Role label.
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `PUT /utilisateurs/{id}`. The password pair is only sent when
/// the password changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateDto {
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mot_de_passe: Option<String>,
    /// Current password, checked by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancien_mot_de_passe: Option<String>,
}

/// Text fields of a riddle created by the super-admin. Sent as a
/// multipart form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiddleDraftDto {
    /// Title shown in listings.
    pub titre: String,
    /// The riddle itself.
    pub texte_devinette: String,
    /// The answer.
    pub reponse_devinette: String,
}

/// Kind of curated content, each served by its own endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Tales.
    Conte,
    /// Proverbs.
    Proverbe,
    /// Riddles.
    Devinette,
    /// Crafts.
    Artisanat,
}

impl ContentKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 4] = [Self::Conte, Self::Proverbe, Self::Devinette, Self::Artisanat];

    /// Singular path segment (`conte`).
    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Conte => "conte",
            Self::Proverbe => "proverbe",
            Self::Devinette => "devinette",
            Self::Artisanat => "artisanat",
        }
    }

    /// Server-side type code carried in `typeContenu` (`CONTE`).
    #[must_use]
    pub fn type_code(self) -> &'static str {
        match self {
            Self::Conte => "CONTE",
            Self::Proverbe => "PROVERBE",
            Self::Devinette => "DEVINETTE",
            Self::Artisanat => "ARTISANAT",
        }
    }

    /// Plural path segment used by the dashboard listings (`contes`).
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Conte => "contes",
            Self::Proverbe => "proverbes",
            Self::Devinette => "devinettes",
            Self::Artisanat => "artisanats",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| wanted == kind.singular() || wanted == kind.plural())
            .ok_or_else(|| format!("unknown content kind: {s}"))
    }
}
