use super::*;
use clap::{CommandFactory, Parser};

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_no_arguments_uses_defaults() {
    let cli = Cli::try_parse_from(["placeprobe"]).unwrap();
    assert!(!cli.global.verbose);
    assert!(cli.global.database.is_none());
    assert!(cli.global.limit.is_none());
    assert!(cli.global.config.is_none());
}

#[test]
fn test_overrides_parsed() {
    let cli = Cli::try_parse_from([
        "placeprobe",
        "-v",
        "--database",
        "/data/historic_places.db",
        "-l",
        "5",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    assert_eq!(
        cli.global.database,
        Some(PathBuf::from("/data/historic_places.db"))
    );
    assert_eq!(cli.global.limit, Some(5));
}

#[test]
fn test_zero_limit_rejected() {
    assert!(Cli::try_parse_from(["placeprobe", "--limit", "0"]).is_err());
}
