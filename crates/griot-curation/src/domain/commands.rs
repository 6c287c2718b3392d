//! Commands for the Curation context.

use griot_core::command::Command;
use griot_core::dto::ContentKind;
use uuid::Uuid;

use crate::domain::profile::ProfileEdit;

/// Command to delete a content item.
#[derive(Debug, Clone)]
pub struct DeleteContent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Kind of the item, which selects the endpoint.
    pub kind: ContentKind,
    /// The item to delete.
    pub content_id: i64,
}

impl DeleteContent {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new(kind: ContentKind, content_id: i64) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            kind,
            content_id,
        }
    }
}

impl Command for DeleteContent {
    fn command_type(&self) -> &'static str {
        "curation.delete_content"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn record_id(&self) -> i64 {
        self.content_id
    }
}

/// Command to flip a user account between active and inactive.
#[derive(Debug, Clone)]
pub struct ToggleUserActivation {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The account to toggle.
    pub user_id: i64,
}

impl ToggleUserActivation {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new(user_id: i64) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            user_id,
        }
    }
}

impl Command for ToggleUserActivation {
    fn command_type(&self) -> &'static str {
        "curation.toggle_user_activation"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn record_id(&self) -> i64 {
        self.user_id
    }
}

/// Command to create a text-only riddle.
#[derive(Debug, Clone)]
pub struct CreateRiddle {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Riddle text, also used as its title.
    pub question: String,
    /// Expected answer.
    pub answer: String,
}

impl CreateRiddle {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl Command for CreateRiddle {
    fn command_type(&self) -> &'static str {
        "curation.create_riddle"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// The server assigns the identifier; `0` until then.
    fn record_id(&self) -> i64 {
        0
    }
}

/// Command to update the signed-in account's profile.
#[derive(Debug, Clone)]
pub struct UpdateProfile {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The account being edited.
    pub user_id: i64,
    /// Requested changes.
    pub edit: ProfileEdit,
}

impl UpdateProfile {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new(user_id: i64, edit: ProfileEdit) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            user_id,
            edit,
        }
    }
}

impl Command for UpdateProfile {
    fn command_type(&self) -> &'static str {
        "curation.update_profile"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn record_id(&self) -> i64 {
        self.user_id
    }
}
