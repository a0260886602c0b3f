//! Store round-trips through a temporary directory.

use std::fs;
use std::path::Path;

use color_config::{Config, ConfigError, ConfigStore, DocumentEditor, Flags};
use serde_json::{Value, json};
use tempfile::tempdir;

/// Editor that overwrites the file with fixed content.
struct ReplaceWith(&'static str);

impl DocumentEditor for ReplaceWith {
    fn edit(&self, path: &Path) -> color_config::Result<()> {
        fs::write(path, self.0).unwrap();
        Ok(())
    }
}

/// Editor that always fails without touching the file.
struct Broken;

impl DocumentEditor for Broken {
    fn edit(&self, _path: &Path) -> color_config::Result<()> {
        Err(ConfigError::Editor {
            program: "broken".to_string(),
            message: "crashed".to_string(),
        })
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::at(dir.path().join("nested"));
    assert!(!store.exists());
    assert_eq!(store.load().unwrap(), Config::default());
}

#[test]
fn init_writes_sorted_defaults() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::at(dir.path().join("colorpedia"));
    let config = store.init().unwrap();

    assert!(store.exists());
    assert_eq!(config, Config::default());
    assert_eq!(read_json(&store.path()), Config::default().dump());

    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.starts_with("{\n  \"always_output_json\": false,\n"));
    assert!(content.ends_with("}\n"));
    assert!(!store.path().with_extension("json.tmp").exists());
}

#[test]
fn saved_changes_load_back() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::at(dir.path());
    let mut config = Config::default();
    config
        .update(&json!({ "approx_name_suffix": " (approx)", "json_keys": ["name"] }))
        .unwrap();
    config.set_flags(&Flags {
        units: Some(true),
        ..Flags::default()
    });
    store.save(&config).unwrap();
    assert_eq!(store.load().unwrap(), config);
}

#[cfg(unix)]
#[test]
fn failed_save_removes_temp_file() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::at(dir.path());
    // A non-empty directory in place of config.json makes the rename fail.
    fs::create_dir(store.path()).unwrap();
    fs::write(store.path().join("keep"), "").unwrap();

    let error = store.save(&Config::default()).unwrap_err();
    assert!(matches!(error, ConfigError::Io { operation: "replace", .. }));
    assert!(!store.path().with_extension("json.tmp").exists());
    assert!(store.path().join("keep").exists());
}

#[test]
fn invalid_file_is_reported() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::at(dir.path());

    fs::write(store.path(), "{ not json").unwrap();
    assert!(matches!(store.load().unwrap_err(), ConfigError::Json { .. }));

    fs::write(store.path(), "[]").unwrap();
    assert!(matches!(store.load().unwrap_err(), ConfigError::BadDocument { .. }));

    fs::write(store.path(), r#"{"get_view_color_width": 0}"#).unwrap();
    assert_eq!(
        store.load().unwrap_err().to_string(),
        "Bad value for configuration key \"get_view_color_width\" (expecting an integer between 1 and 100)"
    );
}

#[test]
fn edit_saves_valid_changes() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::at(dir.path());
    store.init().unwrap();

    let config = store
        .edit(&ReplaceWith(r#"{"always_output_json": true, "default_shades_count": 5}"#))
        .unwrap();
    assert!(config.always_output_json());
    assert_eq!(config.default_shades_count(), 5);
    assert_eq!(store.load().unwrap(), config);
    assert!(!dir.path().join("config.edit.json").exists());
}

#[test]
fn edit_keeps_file_when_result_is_invalid() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::at(dir.path());
    store.init().unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    let error = store.edit(&ReplaceWith(r#"{"colour": true}"#)).unwrap_err();
    assert_eq!(error.to_string(), "Bad configuration key \"colour\"");
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);

    let error = store.edit(&Broken).unwrap_err();
    assert!(matches!(error, ConfigError::Editor { .. }));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    assert!(!dir.path().join("config.edit.json").exists());
}

#[test]
fn edit_requires_an_existing_file() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::at(dir.path());
    let error = store.edit(&ReplaceWith("{}")).unwrap_err();
    assert!(matches!(error, ConfigError::Io { operation: "copy", .. }));
}
