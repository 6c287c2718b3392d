//! Operator session supplied by the external Auth collaborator.
//!
//! A `Session` is created once at start-up from whatever the Auth
//! collaborator stored (an opaque bearer token and a cached display name)
//! and handed to the gateway and the workflow. Clones share state, so
//! [`Session::end`] tears the credentials down for every holder.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone, Default)]
struct Credentials {
    token: Option<String>,
    display_name: Option<String>,
}

/// Shared handle on the operator's credentials.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Credentials>>,
}

impl Session {
    /// Starts a session with a bearer token and an optional display name.
    #[must_use]
    pub fn start(token: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Credentials {
                token: Some(token.into()),
                display_name: display_name.filter(|name| !name.trim().is_empty()),
            })),
        }
    }

    /// A session without credentials. Requests go out unauthenticated.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns the bearer token, if the session holds one.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// Returns the cached display name.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.read().display_name.clone()
    }

    /// Returns the display name or `fallback` when none is cached.
    #[must_use]
    pub fn display_name_or(&self, fallback: &str) -> String {
        self.display_name().unwrap_or_else(|| fallback.to_owned())
    }

    /// Whether a bearer token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Drops the token and display name for every clone of this session.
    pub fn end(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Credentials::default();
        tracing::debug!("operator session ended");
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Credentials> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let creds = self.read();
        f.debug_struct("Session")
            .field("token", &creds.token.as_ref().map(|_| "<redacted>"))
            .field("display_name", &creds.display_name)
            .finish()
    }
}

/// Builds the display name the login response implies: `"{first} {last}"`,
/// trimmed. Returns `None` when the last name is missing.
#[must_use]
pub fn compose_display_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let last = last_name.filter(|n| !n.trim().is_empty())?;
    let full = format!("{} {}", first_name.unwrap_or_default(), last);
    Some(full.trim().to_owned())
}
