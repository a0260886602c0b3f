//! Editing a configuration document with an external program.

use std::path::Path;
use std::process::Command;

use crate::error::{ConfigError, Result};

#[cfg(windows)]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const FALLBACK_EDITOR: &str = "vi";

/// Something that edits a file in place and returns when done.
pub trait DocumentEditor {
    /// Edits the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Editor`] if the edit could not be completed.
    fn edit(&self, path: &Path) -> Result<()>;
}

/// Runs an editor program directly (no shell) with the file as its only argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEditor {
    program: String,
}

impl CommandEditor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Picks the editor from `explicit`, then `$VISUAL`, then `$EDITOR`.
    ///
    /// Falls back to `notepad` on Windows and `vi` elsewhere.
    pub fn from_env(explicit: Option<&str>) -> Self {
        let visual = std::env::var("VISUAL").ok();
        let editor = std::env::var("EDITOR").ok();
        Self::resolve(explicit, visual.as_deref(), editor.as_deref())
    }

    /// Resolution behind [`CommandEditor::from_env`].
    ///
    /// Only the first word of the chosen value is used; any arguments in an
    /// environment variable are dropped.
    pub fn resolve(explicit: Option<&str>, visual: Option<&str>, editor: Option<&str>) -> Self {
        let program = [explicit, visual, editor]
            .into_iter()
            .flatten()
            .find_map(|value| value.split_whitespace().next())
            .unwrap_or(FALLBACK_EDITOR);
        Self::new(program)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl DocumentEditor for CommandEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        tracing::debug!(program = %self.program, path = %path.display(), "launching editor");
        let status = Command::new(&self.program)
            .arg(path)
            .status()
            .map_err(|e| ConfigError::Editor {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(ConfigError::Editor {
                program: self.program.clone(),
                message: format!("editor exited with {status}"),
            });
        }
        Ok(())
    }
}
