use thiserror::Error;

/// Errors raised while normalizing input or resolving colors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// A raw value is outside its declared domain.
    #[error("Bad {name} (expecting {expecting})")]
    Input {
        name: &'static str,
        expecting: String,
    },

    /// The name is well-formed but not in the name table.
    #[error("Unknown color name \"{name}\" (expecting a CSS3 color name)")]
    UnknownName { name: String },

    /// The palette is well-formed but not registered.
    #[error("Unknown color palette \"{palette}\"")]
    UnknownPalette { palette: String },
}

impl ColorError {
    pub(crate) fn input(name: &'static str, expecting: impl Into<String>) -> Self {
        Self::Input {
            name,
            expecting: expecting.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;
