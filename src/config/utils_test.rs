use crate::config::{StorageConfig, constants::LOG_FILE_PATH};

use super::*;

#[test]
fn test_load_configuration() {
    let config = load_configuration("./testdata/config.toml").expect("failed to load config");

    assert_eq!(config.general.verbose, true);

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("debug"));
    let log_filters = log.filters.as_deref().unwrap_or_default();
    assert_eq!(log_filters.len(), 1);
    assert_eq!(log_filters[0].module.as_deref(), Some("taskbook::storage"));
    assert_eq!(log_filters[0].level.as_deref(), Some("trace"));

    let log_file = &log.file;
    assert_eq!(log_file.path, "/var/log/taskbook.log");
    assert_eq!(log_file.append, true);

    match &config.storage {
        StorageConfig::Sqlite(sqlite) => assert_eq!(
            sqlite.path.as_deref(),
            Some("$HOME/.local/share/taskbook/tasks.db")
        ),
        other => panic!("unexpected storage config: {:?}", other),
    }
}

#[test]
fn test_load_configuration_with_some_default_fields() {
    let config =
        load_configuration("./testdata/config_with_default.toml").expect("failed to load config");

    assert_eq!(config.general.verbose, false);

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("info"));
    assert_eq!(log.file.path, LOG_FILE_PATH);
    assert_eq!(log.file.append, false);

    assert!(matches!(config.storage, StorageConfig::Memory(_)));
}

#[test]
fn test_default_storage_is_local_file() {
    let config: Configuration = toml::from_str("").expect("failed to parse empty config");
    match config.storage {
        StorageConfig::Sqlite(sqlite) => assert_eq!(sqlite.path.as_deref(), Some("tasks.db")),
        other => panic!("unexpected storage config: {:?}", other),
    }

    let config: Configuration =
        toml::from_str("[storage]\nsqlite = {}").expect("failed to parse sqlite config");
    match config.storage {
        StorageConfig::Sqlite(sqlite) => assert_eq!(sqlite.path.as_deref(), Some("tasks.db")),
        other => panic!("unexpected storage config: {:?}", other),
    }
}

#[test]
fn test_resolve_path() {
    let ret = resolve_path("$TASKBOOK_TEST_UNSET/${TASKBOOK_TEST_UNSET_TOO}/config.toml")
        .expect("failed to resolve path");
    assert_eq!(ret, "//config.toml");

    let dir = "/tmp/taskbook";
    let user_path = "user_path";
    unsafe {
        std::env::set_var("TASKBOOK_TEST_DIR", dir);
        std::env::set_var("TASKBOOK_TEST_USER", user_path);
    }
    let ret = resolve_path("$TASKBOOK_TEST_DIR/${TASKBOOK_TEST_USER}/config.toml")
        .expect("failed to resolve path");
    assert_eq!(ret, format!("{dir}/{user_path}/config.toml"));
}

#[test]
fn test_resolve_relative_path() {
    let ret = resolve_path("tasks.db").expect("failed to resolve path");
    let expected = std::env::current_dir().unwrap().join("tasks.db");
    assert_eq!(ret, expected.to_string_lossy());
}

#[test]
fn test_basename() {
    assert_eq!(basename("src/storage/sqlite/mod.rs"), "mod.rs");
    assert_eq!(basename("main.rs"), "main.rs");
}

#[test]
fn test_init_parent_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/tasks.db");
    init_parent_dir(path.to_str().unwrap()).unwrap();
    assert!(dir.path().join("nested/deeper").is_dir());
}
