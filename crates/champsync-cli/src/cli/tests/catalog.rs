//! Tests for setup, import, list, show, names, random, check, reset, completions, man.

use super::parse;
use crate::cli::commands::is_reset_confirmation;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;
use std::path::Path;

#[test]
fn cli_parse_setup() {
    match parse(&["champsync", "setup"]) {
        CliCommand::Setup => {}
        _ => panic!("expected Setup"),
    }
}

#[test]
fn cli_parse_import() {
    match parse(&["champsync", "import", "data.csv"]) {
        CliCommand::Import { path } => assert_eq!(path, Path::new("data.csv")),
        _ => panic!("expected Import"),
    }
}

#[test]
fn cli_parse_import_requires_path() {
    assert!(Cli::try_parse_from(["champsync", "import"]).is_err());
}

#[test]
fn cli_parse_list_default_limit() {
    match parse(&["champsync", "list"]) {
        CliCommand::List { limit } => assert_eq!(limit, 5),
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_limit() {
    match parse(&["champsync", "list", "--limit", "20"]) {
        CliCommand::List { limit } => assert_eq!(limit, 20),
        _ => panic!("expected List with --limit"),
    }
    match parse(&["champsync", "list", "-n", "1"]) {
        CliCommand::List { limit } => assert_eq!(limit, 1),
        _ => panic!("expected List with -n"),
    }
}

#[test]
fn cli_parse_show() {
    match parse(&["champsync", "show", "ahri"]) {
        CliCommand::Show { name } => assert_eq!(name, "ahri"),
        _ => panic!("expected Show"),
    }
    match parse(&["champsync", "show", "Dr. Mundo"]) {
        CliCommand::Show { name } => assert_eq!(name, "Dr. Mundo"),
        _ => panic!("expected Show with a spaced name"),
    }
    assert!(Cli::try_parse_from(["champsync", "show"]).is_err());
}

#[test]
fn cli_parse_names_random_check() {
    assert!(matches!(parse(&["champsync", "names"]), CliCommand::Names));
    assert!(matches!(parse(&["champsync", "random"]), CliCommand::Random));
    assert!(matches!(parse(&["champsync", "check"]), CliCommand::Check));
    assert!(Cli::try_parse_from(["champsync", "names", "extra"]).is_err());
}

#[test]
fn cli_parse_reset() {
    match parse(&["champsync", "reset", "data.csv"]) {
        CliCommand::Reset { path, yes } => {
            assert_eq!(path, Path::new("data.csv"));
            assert!(!yes);
        }
        _ => panic!("expected Reset"),
    }
    match parse(&["champsync", "reset", "data.csv", "--yes"]) {
        CliCommand::Reset { yes, .. } => assert!(yes),
        _ => panic!("expected Reset with --yes"),
    }
}

#[test]
fn reset_confirmation_needs_yes() {
    assert!(is_reset_confirmation("yes\n"));
    assert!(is_reset_confirmation("  YES "));
    assert!(!is_reset_confirmation("y"));
    assert!(!is_reset_confirmation(""));
    assert!(!is_reset_confirmation("no"));
}

#[test]
fn cli_parse_completions_and_man() {
    match parse(&["champsync", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
    match parse(&["champsync", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
