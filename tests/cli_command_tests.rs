//! CLI parsing tests for the `medqa` commands.

use clap::{CommandFactory, Parser};
use medqa::cli::{Cli, Commands};

#[test]
fn tui_command_parses_correctly() {
    let cli = Cli::try_parse_from(["medqa", "tui"]).expect("failed to parse tui command");

    match cli.command {
        Commands::Tui(cmd) => assert!(cmd.question.is_none()),
        other => panic!("expected tui, got {other:?}"),
    }
}

#[test]
fn tui_accepts_prefilled_question() {
    let cli = Cli::try_parse_from(["medqa", "tui", "--question", "Is it safe?"]).unwrap();

    let Commands::Tui(cmd) = cli.command else {
        panic!("expected tui command");
    };
    assert_eq!(cmd.question.as_deref(), Some("Is it safe?"));
}

#[test]
fn tui_command_takes_no_positional_arguments() {
    let result = Cli::try_parse_from(["medqa", "tui", "extra-arg"]);
    assert!(result.is_err(), "tui command should not accept extra arguments");
}

#[test]
fn ask_requires_a_question() {
    assert!(Cli::try_parse_from(["medqa", "ask"]).is_err());

    let cli = Cli::try_parse_from(["medqa", "ask", "Can this drug cause dizziness?"]).unwrap();
    let Commands::Ask(cmd) = cli.command else {
        panic!("expected ask command");
    };
    assert_eq!(cmd.question, "Can this drug cause dizziness?");
}

#[test]
fn api_base_and_verbosity_are_global() {
    let cli = Cli::try_parse_from([
        "medqa",
        "health",
        "--api-base",
        "http://qa.internal:8000",
        "-vv",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Health));
    assert_eq!(cli.api_base.as_deref(), Some("http://qa.internal:8000"));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["medqa"]).is_err());
}

#[test]
fn every_subcommand_has_help_text() {
    let cmd = Cli::command();
    for name in ["tui", "ask", "health"] {
        let sub = cmd
            .get_subcommands()
            .find(|c| c.get_name() == name)
            .unwrap_or_else(|| panic!("{name} subcommand should exist"));
        assert!(sub.get_about().is_some(), "{name} should have about text");
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
