//! Paths of the super-admin API, relative to the base URL.

use griot_core::dto::ContentKind;

/// Publication request listing.
pub const REQUESTS: &str = "/superadmin/demandes-publication";

/// Family listing.
pub const FAMILIES: &str = "/superadmin/dashboard/familles";

/// User listing.
pub const USERS: &str = "/superadmin/dashboard/utilisateurs";

/// Public-content listing, all kinds mixed.
pub const PUBLIC_CONTENTS: &str = "/superadmin/contenus-publics";

/// Riddle creation (multipart form).
pub const NEW_RIDDLE: &str = "/superadmin/contenus-publics/devinette";

/// Validation of one request.
#[must_use]
pub fn validate_request(request_id: i64) -> String {
    format!("{REQUESTS}/{request_id}/valider")
}

/// Rejection of one request; the comment goes in the query string.
#[must_use]
pub fn reject_request(request_id: i64) -> String {
    format!("{REQUESTS}/{request_id}/rejeter")
}

/// Listing of one content kind. Proverbs have no dashboard listing and
/// come from the mixed public-content listing.
#[must_use]
pub fn contents(kind: ContentKind) -> String {
    match kind {
        ContentKind::Proverbe => PUBLIC_CONTENTS.to_owned(),
        _ => format!("/superadmin/dashboard/{}", kind.plural()),
    }
}

/// Whether the listing of `kind` also returns other kinds.
#[must_use]
pub fn lists_mixed_kinds(kind: ContentKind) -> bool {
    contents(kind) == PUBLIC_CONTENTS
}

/// Deletion of one content item. Tales and crafts are deleted through the
/// public-content endpoints, riddles and proverbs through the dashboard.
#[must_use]
pub fn delete_content(kind: ContentKind, content_id: i64) -> String {
    match kind {
        ContentKind::Conte | ContentKind::Artisanat => {
            format!("/superadmin/contenus-publics/{}/{content_id}", kind.singular())
        }
        ContentKind::Devinette | ContentKind::Proverbe => {
            format!("/superadmin/dashboard/{}/{content_id}", kind.plural())
        }
    }
}

/// Activation flag of one user; the flag goes in the query string.
#[must_use]
pub fn user_activation(user_id: i64) -> String {
    format!("{USERS}/{user_id}/activation")
}

/// Profile of one account, read with GET and replaced with PUT.
#[must_use]
pub fn profile(user_id: i64) -> String {
    format!("/utilisateurs/{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_content_routes_by_kind() {
        assert_eq!(
            delete_content(ContentKind::Conte, 3),
            "/superadmin/contenus-publics/conte/3"
        );
        assert_eq!(
            delete_content(ContentKind::Artisanat, 4),
            "/superadmin/contenus-publics/artisanat/4"
        );
        assert_eq!(
            delete_content(ContentKind::Devinette, 5),
            "/superadmin/dashboard/devinettes/5"
        );
        assert_eq!(
            delete_content(ContentKind::Proverbe, 6),
            "/superadmin/dashboard/proverbes/6"
        );
    }

    #[test]
    fn test_request_command_paths() {
        assert_eq!(validate_request(7), "/superadmin/demandes-publication/7/valider");
        assert_eq!(reject_request(7), "/superadmin/demandes-publication/7/rejeter");
        assert_eq!(contents(ContentKind::Artisanat), "/superadmin/dashboard/artisanats");
    }

    #[test]
    fn test_proverbs_are_listed_from_public_contents() {
        assert_eq!(contents(ContentKind::Proverbe), "/superadmin/contenus-publics");
        assert!(lists_mixed_kinds(ContentKind::Proverbe));
        assert!(!lists_mixed_kinds(ContentKind::Devinette));
        assert_eq!(contents(ContentKind::Devinette), "/superadmin/dashboard/devinettes");
        assert_eq!(profile(4), "/utilisateurs/4");
    }
}
