//! Command-line interface of the `griot` binary.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use griot_core::dto::ContentKind;
use griot_core::filter::Period;
use griot_moderation::application::view::StatusTab;

/// Top-level CLI parser for the `griot` binary.
#[derive(Debug, Parser)]
#[command(name = "griot", version, about = "Griot super-admin console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides GRIOT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format: table, json
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Rendering of listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Moderate publication requests
    #[command(subcommand)]
    Requests(RequestCommands),
    /// Browse families
    #[command(subcommand)]
    Families(FamilyCommands),
    /// Browse and delete contents
    #[command(subcommand)]
    Contents(ContentCommands),
    /// Browse and (de)activate user accounts
    #[command(subcommand)]
    Users(UserCommands),
    /// Show or edit your own profile (needs GRIOT_USER_ID)
    #[command(subcommand)]
    Profile(ProfileCommands),
}

/// Tab and search applied to the moderation view.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Status tab: all, pending, processed
    #[arg(long, default_value_t = StatusTab::All)]
    pub tab: StatusTab,

    /// Search in title and requester
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Debug, Subcommand)]
pub enum RequestCommands {
    /// List publication requests
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Approve a pending request
    Approve {
        /// Request ID
        id: i64,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Reject a request with a comment
    Reject {
        /// Request ID
        id: i64,
        /// Rejection comment (prompted when absent)
        #[arg(short, long)]
        comment: Option<String>,
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum FamilyCommands {
    /// List families
    List {
        /// Search in family and administrator names
        #[arg(long, default_value = "")]
        search: String,
        /// Creation period: all, last_week, last_month
        #[arg(long, default_value_t = Period::All)]
        period: Period,
    },
}

#[derive(Debug, Subcommand)]
pub enum ContentCommands {
    /// List contents of one kind
    List {
        /// Content kind: conte, proverbe, devinette, artisanat
        kind: ContentKind,
        /// Search in title, description, creator, family and region
        #[arg(long, default_value = "")]
        search: String,
        /// Family ID
        #[arg(long)]
        family: Option<i64>,
        /// Exact region
        #[arg(long)]
        region: Option<String>,
        /// Creation day (YYYY-MM-DD)
        #[arg(long)]
        on_day: Option<NaiveDate>,
    },
    /// Count contents of one kind per region
    Regions {
        /// Content kind
        kind: ContentKind,
    },
    /// Add a text-only riddle
    AddRiddle {
        /// Riddle text, also used as title (prompted when absent)
        #[arg(short, long)]
        question: Option<String>,
        /// Answer (prompted when absent)
        #[arg(short, long)]
        answer: Option<String>,
    },
    /// Delete a content item
    Delete {
        /// Content kind
        kind: ContentKind,
        /// Content ID
        id: i64,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCommands {
    /// List user accounts
    List {
        /// Search in name, email, role and telephone
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Activate or deactivate an account
    Toggle {
        /// User ID
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show your profile
    Show,
    /// Edit your profile
    Update {
        /// New last name
        #[arg(long)]
        last_name: Option<String>,
        /// New first name
        #[arg(long)]
        first_name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// Change the password (prompted without echo)
        #[arg(long)]
        change_password: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn test_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requests_list_defaults_to_all_tab_and_table() {
        let cli = Cli::try_parse_from(["griot", "requests", "list"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Table);
        match cli.command {
            Commands::Requests(RequestCommands::List { view }) => {
                assert_eq!(view.tab, StatusTab::All);
                assert!(view.search.is_empty());
            }
            other => panic!("expected requests list, got {other:?}"),
        }
    }

    #[test]
    fn test_approve_parses_id_tab_and_yes() {
        let cli = Cli::try_parse_from([
            "griot", "requests", "approve", "7", "--tab", "pending", "--yes",
        ])
        .unwrap();

        match cli.command {
            Commands::Requests(RequestCommands::Approve { id, yes, view }) => {
                assert_eq!(id, 7);
                assert!(yes);
                assert_eq!(view.tab, StatusTab::Pending);
            }
            other => panic!("expected requests approve, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "griot",
            "requests",
            "reject",
            "8",
            "--comment",
            "Doublon",
            "--format",
            "json",
            "--api-url",
            "http://staging/api",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.api_url.as_deref(), Some("http://staging/api"));
        match cli.command {
            Commands::Requests(RequestCommands::Reject { id, comment, .. }) => {
                assert_eq!(id, 8);
                assert_eq!(comment.as_deref(), Some("Doublon"));
            }
            other => panic!("expected requests reject, got {other:?}"),
        }
    }

    #[test]
    fn test_contents_list_parses_kind_and_filters() {
        let cli = Cli::try_parse_from([
            "griot",
            "contents",
            "list",
            "proverbes",
            "--family",
            "3",
            "--region",
            "Kayes",
            "--on-day",
            "2026-01-05",
        ])
        .unwrap();

        match cli.command {
            Commands::Contents(ContentCommands::List {
                kind,
                family,
                region,
                on_day,
                ..
            }) => {
                assert_eq!(kind, ContentKind::Proverbe);
                assert_eq!(family, Some(3));
                assert_eq!(region.as_deref(), Some("Kayes"));
                assert_eq!(on_day, NaiveDate::from_ymd_opt(2026, 1, 5));
            }
            other => panic!("expected contents list, got {other:?}"),
        }
    }

    #[test]
    fn test_families_period_parses() {
        let cli =
            Cli::try_parse_from(["griot", "families", "list", "--period", "last_week"]).unwrap();

        match cli.command {
            Commands::Families(FamilyCommands::List { period, .. }) => {
                assert_eq!(period, Period::LastWeek);
            }
            other => panic!("expected families list, got {other:?}"),
        }
    }

    #[test]
    fn test_add_riddle_parses_question_and_answer() {
        let cli = Cli::try_parse_from([
            "griot",
            "contents",
            "add-riddle",
            "-q",
            "Qui a des dents mais ne mord pas ?",
            "--answer",
            "Le peigne",
        ])
        .unwrap();

        match cli.command {
            Commands::Contents(ContentCommands::AddRiddle { question, answer }) => {
                assert_eq!(question.as_deref(), Some("Qui a des dents mais ne mord pas ?"));
                assert_eq!(answer.as_deref(), Some("Le peigne"));
            }
            other => panic!("expected contents add-riddle, got {other:?}"),
        }
    }

    #[test]
    fn test_profile_update_parses_fields_and_password_flag() {
        let cli = Cli::try_parse_from([
            "griot",
            "profile",
            "update",
            "--email",
            "mariam@example.org",
            "--change-password",
        ])
        .unwrap();

        match cli.command {
            Commands::Profile(ProfileCommands::Update {
                email,
                last_name,
                change_password,
                ..
            }) => {
                assert_eq!(email.as_deref(), Some("mariam@example.org"));
                assert_eq!(last_name, None);
                assert!(change_password);
            }
            other => panic!("expected profile update, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["griot", "requests", "list", "--tab", "done"]).is_err());
        assert!(Cli::try_parse_from(["griot", "contents", "list", "poeme"]).is_err());
        assert!(Cli::try_parse_from(["griot", "--format", "xml", "users", "list"]).is_err());
        assert!(Cli::try_parse_from(["griot", "requests", "approve", "seven"]).is_err());
    }
}
