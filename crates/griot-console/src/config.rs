//! Console configuration read from the environment.

use griot_client::DEFAULT_API_URL;
use griot_core::session::{Session, compose_display_name};

use crate::error::AppError;

/// Display name recorded as validator when the session names nobody.
pub const FALLBACK_DISPLAY_NAME: &str = "Super Admin";

/// Resolved console configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// API base URL.
    pub api_url: String,
    /// Bearer token stored by the Auth collaborator.
    pub token: Option<String>,
    /// Operator display name.
    pub display_name: Option<String>,
    /// Account ID of the operator, needed by the profile commands.
    pub user_id: Option<i64>,
}

impl std::fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("display_name", &self.display_name)
            .field("user_id", &self.user_id)
            .finish()
    }
}

impl ConsoleConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Blank values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `GRIOT_API_URL` is not an http(s) URL
    /// or `GRIOT_USER_ID` is not an integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = match get("GRIOT_API_URL") {
            Some(url) => validate_url(url)?,
            None => DEFAULT_API_URL.to_owned(),
        };
        let display_name = get("GRIOT_USER_NAME").or_else(|| {
            compose_display_name(
                get("GRIOT_USER_FIRST_NAME").as_deref(),
                get("GRIOT_USER_LAST_NAME").as_deref(),
            )
        });

        let user_id = get("GRIOT_USER_ID")
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    AppError::Config(format!("GRIOT_USER_ID must be an integer, got {raw:?}"))
                })
            })
            .transpose()?;

        Ok(Self {
            api_url,
            token: get("GRIOT_TOKEN"),
            display_name,
            user_id,
        })
    }

    /// Applies the `--api-url` override.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the override is not an http(s) URL.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Result<Self, AppError> {
        if let Some(url) = api_url {
            self.api_url = validate_url(url)?;
        }
        Ok(self)
    }

    /// Starts the operator session. Authenticated sessions always carry a
    /// display name.
    #[must_use]
    pub fn session(&self) -> Session {
        match &self.token {
            Some(token) => Session::start(
                token.clone(),
                Some(
                    self.display_name
                        .clone()
                        .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_owned()),
                ),
            ),
            None => Session::anonymous(),
        }
    }
}

fn validate_url(url: String) -> Result<String, AppError> {
    let url = url.trim().to_owned();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(AppError::Config(format!(
            "GRIOT_API_URL must be an http(s) URL, got {url:?}"
        )))
    }
}
