//! Operator prompts.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};

use crate::error::AppError;

/// Asks the operator questions. Questions go to stderr so stdout only ever
/// carries rendered listings.
pub trait Prompt {
    /// Yes/no question; defaults to no.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Prompt` if the answer cannot be read.
    fn confirm(&mut self, question: &str) -> Result<bool, AppError>;

    /// Free-text question. An empty answer is returned as is.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Prompt` if the answer cannot be read.
    fn ask(&mut self, question: &str) -> Result<String, AppError>;

    /// Free-text question answered without echo.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Prompt` if the answer cannot be read.
    fn secret(&mut self, question: &str) -> Result<String, AppError>;
}

/// Terminal prompt backed by `dialoguer`.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    /// Prompt using the colorful theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(false)
            .interact()?)
    }

    fn ask(&mut self, question: &str) -> Result<String, AppError> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?)
    }

    fn secret(&mut self, question: &str) -> Result<String, AppError> {
        Ok(Password::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty_password(true)
            .interact()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_prompt_failure_maps_to_prompt_error() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::NotConnected, "not a tty"));

        let app_err = AppError::from(err);

        match &app_err {
            AppError::Prompt(_) => {}
            other => panic!("expected Prompt error, got {other:?}"),
        }
        assert!(app_err.to_string().starts_with("prompt error:"));
        assert!(app_err.to_string().contains("not a tty"));
    }
}
