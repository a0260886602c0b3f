//! Colorpedia configuration: the validated option set and its JSON file.

pub mod config;
pub mod editor;
pub mod error;
pub mod store;

pub use config::{Config, FIELDS, Flags};
pub use editor::{CommandEditor, DocumentEditor};
pub use error::{ConfigError, Result};
pub use store::{ConfigStore, render_document};
