use super::*;
use clap::CommandFactory;
use clap::Parser;

#[test]
fn cli_debug_assert() {
    Cli::command().debug_assert();
}

#[test]
fn day_parses_with_defaults() {
    let cli = Cli::try_parse_from(["newday", "5"]).expect("parse should succeed");

    assert_eq!(cli.day.as_deref(), Some("5"));
    assert!(!cli.list);
    assert!(!cli.json);
}

#[test]
fn explicit_root_and_json() {
    let cli = Cli::try_parse_from(["newday", "--root", "/tmp/aoc", "--json", "12"])
        .expect("parse should succeed");

    assert_eq!(cli.root, PathBuf::from("/tmp/aoc"));
    assert!(cli.json);
    assert_eq!(cli.day.as_deref(), Some("12"));
}

#[test]
fn negative_day_reaches_day_parser() {
    let cli = Cli::try_parse_from(["newday", "-3"]).expect("negative number accepted");
    assert_eq!(cli.day.as_deref(), Some("-3"));
}

#[test]
fn day_is_required_without_list() {
    let err = Cli::try_parse_from(["newday"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

    let cli = Cli::try_parse_from(["newday", "--list"]).expect("list needs no day");
    assert!(cli.list);
    assert!(cli.day.is_none());
}

#[test]
fn list_conflicts_with_day() {
    let err = Cli::try_parse_from(["newday", "--list", "4"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}
