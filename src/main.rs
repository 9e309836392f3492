mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::ffi::OsString;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{API_KEY_VAR, AppConfig};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::llm::OpenAiClient;
use crate::infra::terminal::TerminalConfirmation;
use crate::workflow::commit::CommitWorkflowOutcome;

#[derive(Parser, Debug)]
#[command(
    name = "gpt-commit",
    author,
    version,
    about = "Draft Git commit messages from staged changes"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Generate a Git commit message based on the summary of changes.
    Commit,
}

#[derive(Debug)]
enum Route {
    Dispatch(Option<Commands>),
    Invalid(String),
    Informational(clap::Error),
}

fn route<I, T>(args: I) -> Route
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => Route::Dispatch(cli.command),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Route::Informational(err)
        }
        Err(_) => Route::Invalid(
            args.iter()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    match route(std::env::args_os()) {
        Route::Informational(err) => err.exit(),
        Route::Invalid(args) => {
            eprintln!("Invalid command: {args}\n");
            let _ = Cli::command().print_help();
            std::process::exit(1);
        }
        Route::Dispatch(None) => {
            let _ = Cli::command().print_help();
        }
        Route::Dispatch(Some(Commands::Commit)) => {
            if let Err(error) = run_commit().await {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_commit() -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    if config.openai_api_key.is_none() {
        warn!("{API_KEY_VAR} not configured; the completion service will reject the request");
    }

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let language_model = Arc::new(OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
    ));
    let confirmation = Arc::new(TerminalConfirmation::new());

    let context = AppContext::new(config, git, language_model, confirmation);

    match cmd::commit::run(&context).await? {
        CommitWorkflowOutcome::NoChanges => println!("No changes to commit. Commit canceled."),
        CommitWorkflowOutcome::Committed(message) => {
            debug!(message = message.as_str(), "commit created");
            println!("Committed with the suggested message.");
        }
        CommitWorkflowOutcome::Declined(message) => {
            debug!(message = message.as_str(), "suggestion declined");
            println!("Commit canceled.");
        }
    }

    Ok(())
}
