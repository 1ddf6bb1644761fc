//! Command-line interface definition.

use clap::{ArgAction, Parser, Subcommand};

/// medqa - ask a drug question, get an answer with citations
#[derive(Debug, Parser)]
#[command(name = "medqa")]
#[command(about = "Ask a question-answering service about drugs and view cited answers")]
#[command(version)]
pub struct Cli {
    /// Base URL of the question-answering service (default: $MEDQA_API_BASE or http://127.0.0.1:8000)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch interactive terminal UI
    Tui(TuiCommand),
    /// Ask a single question and print the answer
    Ask(AskCommand),
    /// Check that the question-answering service is reachable
    Health,
}

/// Launch the interactive terminal UI
#[derive(Debug, Parser)]
pub struct TuiCommand {
    /// Question to pre-fill instead of the default
    #[arg(short, long, value_name = "TEXT")]
    pub question: Option<String>,
}

/// Ask a single question
#[derive(Debug, Parser)]
pub struct AskCommand {
    /// The question to send
    #[arg(value_name = "QUESTION")]
    pub question: String,
}
