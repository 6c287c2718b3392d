//! Console command handlers.
//!
//! Each command loads what it needs once, acts, and returns the text to
//! print on stdout: outcome notices followed by the resulting view.

pub mod contents;
pub mod families;
pub mod profile;
pub mod requests;
pub mod users;

use griot_curation::application::contents::ContentFilters;
use griot_curation::domain::profile::ProfileEdit;

use crate::cli::{
    Commands, ContentCommands, FamilyCommands, OutputFormat, ProfileCommands, RequestCommands,
    UserCommands,
};
use crate::error::AppError;
use crate::prompt::Prompt;
use crate::state::AppState;

/// Runs one parsed command.
///
/// # Errors
///
/// Returns the first error met by the command; local state is left as the
/// server last acknowledged it.
pub async fn run(
    command: Commands,
    state: &AppState,
    format: OutputFormat,
    prompt: &mut dyn Prompt,
) -> Result<String, AppError> {
    match command {
        Commands::Requests(RequestCommands::List { view }) => {
            requests::list(state, view, format).await
        }
        Commands::Requests(RequestCommands::Approve { id, yes, view }) => {
            requests::approve(state, id, yes, view, format, prompt).await
        }
        Commands::Requests(RequestCommands::Reject { id, comment, view }) => {
            requests::reject(state, id, comment, view, format, prompt).await
        }
        Commands::Families(FamilyCommands::List { search, period }) => {
            families::list(state, search, period, format).await
        }
        Commands::Contents(ContentCommands::List {
            kind,
            search,
            family,
            region,
            on_day,
        }) => {
            let filters = ContentFilters {
                search,
                family_id: family,
                region,
                on_day,
            };
            contents::list(state, kind, filters, format).await
        }
        Commands::Contents(ContentCommands::Regions { kind }) => {
            contents::regions(state, kind, format).await
        }
        Commands::Contents(ContentCommands::AddRiddle { question, answer }) => {
            contents::add_riddle(state, question, answer, format, prompt).await
        }
        Commands::Contents(ContentCommands::Delete { kind, id, yes }) => {
            contents::delete(state, kind, id, yes, format, prompt).await
        }
        Commands::Users(UserCommands::List { search }) => users::list(state, &search, format).await,
        Commands::Users(UserCommands::Toggle { id }) => users::toggle(state, id, format).await,
        Commands::Profile(ProfileCommands::Show) => profile::show(state, format).await,
        Commands::Profile(ProfileCommands::Update {
            last_name,
            first_name,
            email,
            change_password,
        }) => {
            let edit = ProfileEdit {
                last_name,
                first_name,
                email,
                ..ProfileEdit::default()
            };
            profile::update(state, edit, change_password, format, prompt).await
        }
    }
}

/// Prepends `notices` to a rendered view.
fn with_notices(notices: &[String], body: &str) -> String {
    let mut out = notices.join("\n");
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(body);
    out
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Arc;

    use griot_core::session::Session;
    use griot_test_support::{
        FixedClock, RecordingCurationGateway, RecordingModerationGateway, RecordingProfileGateway,
        profile_dto,
    };

    use crate::error::AppError;
    use crate::prompt::Prompt;
    use crate::state::AppState;

    /// Prompt answering from a script and recording the questions asked.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub(crate) questions: Vec<String>,
    }

    impl ScriptedPrompt {
        pub(crate) fn answering(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| (*a).to_owned()).collect(),
                questions: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
            let answer = self.ask(question)?;
            Ok(answer == "y")
        }

        fn ask(&mut self, question: &str) -> Result<String, AppError> {
            self.questions.push(question.to_owned());
            Ok(self.answers.pop_front().unwrap_or_default())
        }

        fn secret(&mut self, question: &str) -> Result<String, AppError> {
            self.ask(question)
        }
    }

    pub(crate) fn state(
        moderation: Arc<RecordingModerationGateway>,
        curation: Arc<RecordingCurationGateway>,
    ) -> AppState {
        AppState::new(
            Session::start("tok", Some("Mariam Diallo".to_owned())),
            Arc::new(FixedClock::at(2026, 1, 15, 10, 0, 0)),
            moderation,
            curation,
            Arc::new(RecordingProfileGateway::new(profile_dto(1))),
        )
    }
}
