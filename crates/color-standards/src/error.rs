#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("invalid hex code {hex:?} for color name {name:?}")]
    InvalidHexCode { name: String, hex: String },

    #[error("invalid color name {name:?} (expecting a non-empty lowercase word)")]
    InvalidName { name: String },

    #[error("duplicate color name {name:?}")]
    DuplicateName { name: String },

    #[error("invalid palette name {palette:?} (expecting a non-empty lowercase word)")]
    InvalidPaletteName { palette: String },

    #[error("palette {palette:?} is empty")]
    EmptyPalette { palette: String },

    #[error("palette {palette:?} contains invalid hex code {hex:?}")]
    InvalidPaletteCode { palette: String, hex: String },

    #[error("palette {palette:?} lists hex code {hex} more than once")]
    DuplicatePaletteCode { palette: String, hex: String },

    #[error("duplicate palette {palette:?}")]
    DuplicatePalette { palette: String },

    #[error("name table is inconsistent: {message}")]
    Inconsistent { message: String },
}
