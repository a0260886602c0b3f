#![deny(unsafe_code)]

//! Static color reference data.
//!
//! The name table maps canonical uppercase hex codes to one or more CSS
//! keywords and back. Palettes map a lowercase name to an ordered list of
//! hex codes. Both are built once, on first access, from the source lists in
//! [`names`] and [`palettes`].

pub mod error;
mod names;
mod palettes;
pub mod table;

pub use crate::error::StandardsError;
pub use crate::table::{NameTable, NamedColor, default_table, hex_channels, is_hex_code};
