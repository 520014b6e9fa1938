use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_resolve_defaults_without_config_file() {
    let dir = tempdir().unwrap();
    let config = resolve_config(&GlobalArgs::default(), dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_reads_config_from_cwd() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("placeprobe.yml"),
        "database_path: archive/places.db\nlimit: 8\n",
    )
    .unwrap();

    let config = resolve_config(&GlobalArgs::default(), dir.path()).unwrap();
    assert_eq!(config.database_path, PathBuf::from("archive/places.db"));
    assert_eq!(config.limit, 8);
}

#[test]
fn test_resolve_flags_override_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("custom.yml");
    fs::write(&config_path, "database_path: from_file.db\nlimit: 8\n").unwrap();

    let global = GlobalArgs {
        verbose: false,
        database: Some(PathBuf::from("from_flag.db")),
        limit: None,
        config: Some(config_path),
    };
    let config = resolve_config(&global, dir.path()).unwrap();
    assert_eq!(config.database_path, PathBuf::from("from_flag.db"));
    assert_eq!(config.limit, 8);
}

#[test]
fn test_resolve_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    let global = GlobalArgs {
        config: Some(dir.path().join("nope.yml")),
        ..GlobalArgs::default()
    };

    let err = resolve_config(&global, dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("[C001]"));
}

#[test]
fn test_exit_code_displays_nothing() {
    assert_eq!(ExitCode(1).to_string(), "");
}
