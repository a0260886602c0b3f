//! Color models, conversions and the color value object.
//!
//! Everything here is pure: conversions never touch the filesystem and the
//! only shared state is the read-only name table from `color-standards`.

pub mod color;
pub mod convert;
pub mod error;
pub mod inputs;
pub mod keys;
pub mod types;

pub use color::{Color, ColorRecord};
pub use convert::{
    cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsl_to_rgb_shades, hsv_to_rgb, name_to_rgb,
    palette_to_rgbs, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_names,
    rgb_to_names_in,
};
pub use error::{ColorError, Result};
pub use inputs::ShadesFlag;
pub use keys::{JsonKey, KeySet, KeyVocabulary, ViewKey};
pub use types::{Cmyk, Hsl, Hsv, Rgb};
