//! Test gateway — a recording `ProfileGateway` for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use griot_core::dto::{ProfileDto, ProfileUpdateDto};
use griot_core::error::GatewayError;
use griot_core::gateway::ProfileGateway;

/// A call received by [`RecordingProfileGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCall {
    /// `get_profile(id)`.
    Get(i64),
    /// `update_profile(id, update)`.
    Update(i64, ProfileUpdateDto),
}

/// A profile gateway holding one stored profile. Updates overwrite the
/// name and email fields and echo the stored profile back.
#[derive(Debug)]
pub struct RecordingProfileGateway {
    profile: Mutex<ProfileDto>,
    failure: Mutex<Option<GatewayError>>,
    calls: Mutex<Vec<ProfileCall>>,
}

impl RecordingProfileGateway {
    /// Create a gateway storing `profile`.
    #[must_use]
    pub fn new(profile: ProfileDto) -> Self {
        Self {
            profile: Mutex::new(profile),
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make every subsequent call fail with `error`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn fail_with(&self, error: GatewayError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Returns a snapshot of all calls received, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<ProfileCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, call: ProfileCall) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileGateway for RecordingProfileGateway {
    async fn get_profile(&self, user_id: i64) -> Result<ProfileDto, GatewayError> {
        self.check(ProfileCall::Get(user_id))?;
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdateDto,
    ) -> Result<ProfileDto, GatewayError> {
        self.check(ProfileCall::Update(user_id, update.clone()))?;
        let mut profile = self.profile.lock().unwrap();
        if update.nom.is_some() {
            profile.nom.clone_from(&update.nom);
        }
        if update.prenom.is_some() {
            profile.prenom.clone_from(&update.prenom);
        }
        if update.email.is_some() {
            profile.email.clone_from(&update.email);
        }
        Ok(profile.clone())
    }
}
