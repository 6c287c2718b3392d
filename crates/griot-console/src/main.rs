//! Griot super-admin console entry point.

use std::process::ExitCode;

use clap::Parser;
use griot_console::cli::Cli;
use griot_console::commands;
use griot_console::config::ConsoleConfig;
use griot_console::error::AppError;
use griot_console::prompt::TerminalPrompt;
use griot_console::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing subscriber. Logs go to stderr; stdout carries the
    // rendered views.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, AppError> {
    // Read configuration from environment.
    let config = ConsoleConfig::from_env()?.with_api_url(cli.api_url)?;
    tracing::info!(api_url = %config.api_url, "starting Griot console");

    let state = AppState::from_config(&config);
    let mut prompt = TerminalPrompt::new();
    let result = commands::run(cli.command, &state, cli.format, &mut prompt).await;

    state.session.end();
    result
}
