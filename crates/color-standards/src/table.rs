//! Bidirectional name table and palette registry.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use crate::error::StandardsError;
use crate::names::CSS_COLORS;
use crate::palettes::PALETTES;

/// One table entry: a hex code and every keyword that names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    /// Uppercase six-digit hex code without the `#` prefix.
    pub hex: &'static str,
    /// Channel bytes decoded from `hex`.
    pub channels: [u8; 3],
    /// Keywords for this code, sorted lexicographically.
    pub names: Vec<&'static str>,
}

/// Immutable lookup tables for color names and palettes.
///
/// Entries are kept in ascending hex order. Nearest-name searches scan them
/// in that order, so equidistant candidates always resolve to the lower code.
#[derive(Debug)]
pub struct NameTable {
    entries: Vec<NamedColor>,
    by_hex: HashMap<&'static str, usize>,
    by_name: HashMap<&'static str, &'static str>,
    palettes: BTreeMap<&'static str, &'static [&'static str]>,
}

static DEFAULT_TABLE: OnceLock<NameTable> = OnceLock::new();

/// Returns the built-in table of CSS keywords and palettes.
///
/// The table is built on first access and shared for the rest of the process.
///
/// # Panics
///
/// Panics if the built-in source lists violate the table invariants. The unit
/// tests build the same lists, so this cannot happen in a tested build.
pub fn default_table() -> &'static NameTable {
    DEFAULT_TABLE.get_or_init(|| {
        NameTable::build(CSS_COLORS, PALETTES)
            .unwrap_or_else(|error| panic!("built-in color table is invalid: {error}"))
    })
}

/// Returns true if `code` is exactly six ASCII hex digits.
pub fn is_hex_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|byte| byte.is_ascii_hexdigit())
}

/// Decodes a six-digit hex code (either case) into channel bytes.
pub fn hex_channels(code: &str) -> Option<[u8; 3]> {
    if !is_hex_code(code) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&code[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

fn is_lowercase_word(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_lowercase())
}

impl NameTable {
    /// Builds a table from `(name, hex)` pairs and `(palette, hex codes)` pairs.
    ///
    /// Names sharing a hex code become aliases of one entry. The inverse
    /// mapping is derived here rather than maintained separately.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed names or codes, duplicate names,
    /// duplicate palettes, empty palettes and repeated codes inside a palette.
    pub fn build(
        colors: &[(&'static str, &'static str)],
        palettes: &[(&'static str, &'static [&'static str])],
    ) -> Result<Self, StandardsError> {
        let mut grouped: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        let mut by_name = HashMap::with_capacity(colors.len());

        for &(name, hex) in colors {
            if !is_lowercase_word(name) {
                return Err(StandardsError::InvalidName {
                    name: name.to_string(),
                });
            }
            if !is_hex_code(hex) || hex.bytes().any(|byte| byte.is_ascii_lowercase()) {
                return Err(StandardsError::InvalidHexCode {
                    name: name.to_string(),
                    hex: hex.to_string(),
                });
            }
            if by_name.insert(name, hex).is_some() {
                return Err(StandardsError::DuplicateName {
                    name: name.to_string(),
                });
            }
            grouped.entry(hex).or_default().push(name);
        }

        let mut entries = Vec::with_capacity(grouped.len());
        let mut by_hex = HashMap::with_capacity(grouped.len());
        for (hex, mut names) in grouped {
            let Some(channels) = hex_channels(hex) else {
                return Err(StandardsError::InvalidHexCode {
                    name: names.first().copied().unwrap_or_default().to_string(),
                    hex: hex.to_string(),
                });
            };
            names.sort_unstable();
            by_hex.insert(hex, entries.len());
            entries.push(NamedColor {
                hex,
                channels,
                names,
            });
        }

        let mut palette_map = BTreeMap::new();
        for &(palette, codes) in palettes {
            validate_palette(palette, codes)?;
            if palette_map.insert(palette, codes).is_some() {
                return Err(StandardsError::DuplicatePalette {
                    palette: palette.to_string(),
                });
            }
        }

        tracing::debug!(
            entries = entries.len(),
            names = by_name.len(),
            palettes = palette_map.len(),
            "built color name table"
        );

        Ok(Self {
            entries,
            by_hex,
            by_name,
            palettes: palette_map,
        })
    }

    /// All entries in ascending hex order.
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Number of distinct hex codes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup of the keywords for an uppercase hex code.
    pub fn names_for_hex(&self, hex: &str) -> Option<&[&'static str]> {
        self.by_hex
            .get(hex)
            .map(|&index| self.entries[index].names.as_slice())
    }

    /// Hex code for a keyword.
    pub fn hex_for_name(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name).copied()
    }

    /// All keywords with their hex codes, sorted by keyword.
    pub fn names(&self) -> Vec<(&'static str, &'static str)> {
        let mut names: Vec<_> = self.by_name.iter().map(|(&n, &h)| (n, h)).collect();
        names.sort_unstable();
        names
    }

    /// Member codes of a palette, in display order.
    pub fn palette(&self, name: &str) -> Option<&'static [&'static str]> {
        self.palettes.get(name).copied()
    }

    /// All palettes, sorted by name.
    pub fn palettes(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.palettes.iter().map(|(&name, &codes)| (name, codes))
    }

    /// Re-checks the derived lookups against each other.
    ///
    /// Every keyword must map back to the entry that lists it, every entry
    /// must be reachable by its code, names must be sorted and entries must
    /// be in strictly ascending hex order.
    ///
    /// # Errors
    ///
    /// Returns [`StandardsError::Inconsistent`] describing the first mismatch.
    pub fn verify(&self) -> Result<(), StandardsError> {
        let inconsistent = |message: String| Err(StandardsError::Inconsistent { message });

        let mut seen_names = HashSet::with_capacity(self.by_name.len());
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 && self.entries[index - 1].hex >= entry.hex {
                return inconsistent(format!("entry {} is out of order", entry.hex));
            }
            if self.by_hex.get(entry.hex) != Some(&index) {
                return inconsistent(format!("entry {} is not indexed", entry.hex));
            }
            if entry.names.is_empty() {
                return inconsistent(format!("entry {} has no names", entry.hex));
            }
            if !entry.names.is_sorted() {
                return inconsistent(format!("names of {} are not sorted", entry.hex));
            }
            for &name in &entry.names {
                if self.by_name.get(name) != Some(&entry.hex) {
                    return inconsistent(format!("{name} does not map back to {}", entry.hex));
                }
                seen_names.insert(name);
            }
        }
        if seen_names.len() != self.by_name.len() {
            return inconsistent(format!(
                "{} names are indexed but {} are listed by entries",
                self.by_name.len(),
                seen_names.len()
            ));
        }
        for (&palette, &codes) in &self.palettes {
            validate_palette(palette, codes)?;
        }
        Ok(())
    }
}

fn validate_palette(palette: &str, codes: &[&str]) -> Result<(), StandardsError> {
    if !is_lowercase_word(palette) {
        return Err(StandardsError::InvalidPaletteName {
            palette: palette.to_string(),
        });
    }
    if codes.is_empty() {
        return Err(StandardsError::EmptyPalette {
            palette: palette.to_string(),
        });
    }
    let mut seen = HashSet::with_capacity(codes.len());
    for &hex in codes {
        if !is_hex_code(hex) || hex.bytes().any(|byte| byte.is_ascii_lowercase()) {
            return Err(StandardsError::InvalidPaletteCode {
                palette: palette.to_string(),
                hex: hex.to_string(),
            });
        }
        if !seen.insert(hex) {
            return Err(StandardsError::DuplicatePaletteCode {
                palette: palette.to_string(),
                hex: hex.to_string(),
            });
        }
    }
    Ok(())
}
