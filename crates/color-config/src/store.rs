//! Configuration file persistence.
//!
//! The configuration lives in `config.json` inside the platform config
//! directory:
//! - Linux: ~/.config/colorpedia/
//! - macOS: ~/Library/Application Support/colorpedia/
//! - Windows: %APPDATA%\colorpedia\config\

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::editor::DocumentEditor;
use crate::error::{ConfigError, Result};

const APP_QUALIFIER: &str = "";
const APP_ORG: &str = "";
const APP_NAME: &str = "colorpedia";
const CONFIG_FILENAME: &str = "config.json";
const EDIT_FILENAME: &str = "config.edit.json";

/// Location of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Store in the platform-specific config directory.
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn default_location() -> Option<Self> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| Self::at(dirs.config_dir()))
    }

    /// Store in an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `config.json`.
    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILENAME)
    }

    /// Returns true once `init` (or `save`) has written the file.
    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// Loads the stored configuration, or the defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not JSON, or holds an invalid
    /// configuration.
    pub fn load(&self) -> Result<Config> {
        let path = self.path();
        let mut config = Config::default();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                return Ok(config);
            }
            Err(e) => return Err(ConfigError::io("read", &path)(e)),
        };
        config.update(&parse_document(&path, &content)?)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Writes `config` as sorted, two-space indented JSON.
    ///
    /// Uses atomic write (temp file + rename) so a failed save never leaves
    /// a truncated file behind. The temp file is removed when the save fails.
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn save(&self, config: &Config) -> Result<()> {
        let path = self.path();
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(ConfigError::io("create directory", &self.dir))?;

        let mut content = render_document(&config.dump(), 2);
        content.push('\n');

        let result = write_synced(&temp_path, content.as_bytes()).and_then(|()| {
            fs::rename(&temp_path, &path).map_err(ConfigError::io("replace", &path))
        });
        if result.is_err() {
            remove_leftover(&temp_path);
        } else {
            tracing::debug!(path = %path.display(), "saved configuration");
        }
        result
    }

    /// Writes the default configuration, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn init(&self) -> Result<Config> {
        let config = Config::default();
        self.save(&config)?;
        tracing::info!(path = %self.path().display(), "initialized configuration");
        Ok(config)
    }

    /// Lets `editor` modify a copy of the file, then validates and saves it.
    ///
    /// The stored file is only replaced when the edited copy is a valid
    /// configuration. The copy is removed afterwards either way.
    ///
    /// # Errors
    ///
    /// Fails if the copy cannot be made, the editor fails, or the edited
    /// document is not a valid configuration.
    pub fn edit(&self, editor: &dyn DocumentEditor) -> Result<Config> {
        let path = self.path();
        let edit_path = self.dir.join(EDIT_FILENAME);

        let result = fs::copy(&path, &edit_path)
            .map_err(ConfigError::io("copy", &path))
            .and_then(|_| editor.edit(&edit_path))
            .and_then(|()| {
                let content =
                    fs::read_to_string(&edit_path).map_err(ConfigError::io("read", &edit_path))?;
                let mut config = Config::default();
                config.update(&parse_document(&edit_path, &content)?)?;
                Ok(config)
            })
            .and_then(|config| self.save(&config).map(|()| config));

        remove_leftover(&edit_path);
        result
    }
}

fn write_synced(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(ConfigError::io("create", path))?;
    file.write_all(content).map_err(ConfigError::io("write", path))?;
    file.sync_all().map_err(ConfigError::io("sync", path))
}

/// Removes a temporary file, tolerating its absence.
fn remove_leftover(path: &Path) {
    if let Err(e) = fs::remove_file(path)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(path = %path.display(), "failed to remove temporary file: {e}");
    }
}

fn parse_document(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders JSON one member per line, indented by `indent` spaces per level.
///
/// Object keys come out sorted. An indent of 0 still breaks lines.
pub fn render_document(document: &Value, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .map(|()| String::from_utf8_lossy(&buffer).into_owned())
        .unwrap_or_else(|_| document.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_location_ends_with_app_name() {
        if let Some(store) = ConfigStore::default_location() {
            assert!(store.path().ends_with(CONFIG_FILENAME));
            assert!(store.dir().to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn renders_with_requested_indent() {
        let document = json!({ "b": [1], "a": true });
        assert_eq!(
            render_document(&document, 0),
            "{\n\"a\": true,\n\"b\": [\n1\n]\n}"
        );
        assert_eq!(
            render_document(&document, 2),
            "{\n  \"a\": true,\n  \"b\": [\n    1\n  ]\n}"
        );
        assert_eq!(render_document(&json!({ "a": 1 }), 4), "{\n    \"a\": 1\n}");
    }
}
