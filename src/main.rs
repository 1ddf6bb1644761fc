use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use medqa::cli::{AskCommand, Cli, Commands, TuiCommand};
use medqa::logging::{self, LogTarget};
use medqa::{ApiError, AskClient, AskClientBuilder, AskClientTrait, Phase, QueryController};

/// Exit code when the service could not answer the question.
const QUERY_FAILED_EXIT: i32 = 2;

fn main() {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&cli);

    let result = match &cli.command {
        Commands::Tui(cmd) => handle_tui(&cli, cmd).map(|()| 0),
        Commands::Ask(cmd) => handle_ask(&cli, cmd),
        Commands::Health => handle_health(&cli).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let exit_code = if is_user_error(&e) { 1 } else { 2 };
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code);
        }
    }
}

/// Sets up logging; a failure here only costs the log, not the session.
fn init_logging(cli: &Cli) {
    let target = match cli.command {
        Commands::Tui(_) => match medqa::utils::get_log_directory() {
            Ok(dir) => LogTarget::File(dir),
            Err(e) => {
                eprintln!("Warning: logging disabled: {e}");
                return;
            }
        },
        Commands::Ask(_) | Commands::Health => LogTarget::Stderr,
    };

    if let Err(e) = logging::init(target, cli.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }
}

/// Determines if an error is a user error (vs a service or internal error).
///
/// User errors are an empty question and a malformed base URL.
fn is_user_error(error: &anyhow::Error) -> bool {
    if let Some(ApiError::InvalidUrl(_)) = error.downcast_ref::<ApiError>() {
        return true;
    }
    error.to_string().contains("cannot be empty")
}

/// Builds the service client from `--api-base`, the environment, or the default.
fn build_client(cli: &Cli) -> Result<AskClient> {
    let mut builder = AskClientBuilder::new();
    if let Some(url) = &cli.api_base {
        builder = builder.base_url(url);
    }
    builder.build().context("Failed to create service client")
}

/// Handles the tui command by launching the interactive UI.
fn handle_tui(cli: &Cli, cmd: &TuiCommand) -> Result<()> {
    let client = build_client(cli)?;
    medqa::tui::run(Arc::new(client), cmd.question.clone())
}

/// Handles the ask command: one submit, wait, print the rendered result.
///
/// Returns the process exit code.
fn handle_ask(cli: &Cli, cmd: &AskCommand) -> Result<i32> {
    if cmd.question.trim().is_empty() {
        anyhow::bail!("Question cannot be empty");
    }

    let client = build_client(cli)?;
    let (phase, text) = execute_ask(Arc::new(client), &cmd.question);

    if phase == Phase::Failed {
        eprint!("{text}");
        return Ok(QUERY_FAILED_EXIT);
    }
    print!("{text}");
    Ok(0)
}

/// Runs one question through a controller and renders the outcome.
///
/// Separated from `handle_ask` so tests can supply a stub client.
fn execute_ask(client: Arc<dyn AskClientTrait>, question: &str) -> (Phase, String) {
    let mut controller = QueryController::new(client);
    controller.set_question_text(question);
    controller.submit();
    controller.wait();

    let state = controller.state();
    (state.phase(), medqa::to_plain_text(&medqa::project(state)))
}

/// Handles the health command by calling the service's health endpoint.
fn handle_health(cli: &Cli) -> Result<()> {
    let client = build_client(cli)?;
    let message = client
        .health()
        .with_context(|| format!("Service at {} is not healthy", client.base_url()))?;
    println!("{}: {message}", client.base_url());
    Ok(())
}
