//! The signed-in account's profile.

use griot_core::error::DomainError;
use griot_core::gateway::ProfileGateway;

use crate::domain::profile::Profile;

/// Fetches the profile of `user_id`.
///
/// # Errors
///
/// Returns `DomainError::Fetch` if the gateway fails.
pub async fn load_profile(
    gateway: &dyn ProfileGateway,
    user_id: i64,
) -> Result<Profile, DomainError> {
    let dto = gateway.get_profile(user_id).await.map_err(|source| {
        tracing::warn!(user_id, error = %source, "failed to load profile");
        DomainError::Fetch {
            resource: "profile",
            source,
        }
    })?;
    tracing::info!(user_id, "profile loaded");
    Ok(Profile::from(dto))
}

#[cfg(test)]
mod tests {
    use griot_core::error::{DomainError, GatewayError};
    use griot_test_support::{ProfileCall, RecordingProfileGateway, profile_dto};

    use super::load_profile;

    #[tokio::test]
    async fn test_load_reads_profile_of_user() {
        let gateway = RecordingProfileGateway::new(profile_dto(4));

        let profile = load_profile(&gateway, 4).await.unwrap();

        assert_eq!(profile.last_name.as_deref(), Some("Diallo"));
        assert_eq!(gateway.calls(), vec![ProfileCall::Get(4)]);
    }

    #[tokio::test]
    async fn test_load_failure_is_a_fetch_error() {
        let gateway = RecordingProfileGateway::new(profile_dto(4));
        gateway.fail_with(GatewayError::Status {
            status: 404,
            body: String::new(),
        });

        let result = load_profile(&gateway, 4).await;

        match result {
            Err(DomainError::Fetch { resource, .. }) => assert_eq!(resource, "profile"),
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }
}
