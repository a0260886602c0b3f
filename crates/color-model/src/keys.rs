//! Closed vocabularies of displayable and serializable color fields.
//!
//! Variants are declared in canonical output order, so iterating a
//! [`KeySet`] always yields keys in the order views and JSON records use.

use std::collections::BTreeSet;
use std::fmt;

/// Ordered set of keys drawn from one vocabulary.
pub type KeySet<K> = BTreeSet<K>;

/// A fixed set of named keys.
pub trait KeyVocabulary: Copy + Ord + Sized + 'static {
    /// Every key, in canonical order.
    const ALL: &'static [Self];

    /// Canonical lowercase name.
    fn as_str(self) -> &'static str;

    /// Looks up a key by its canonical name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }

    /// The full vocabulary as a set.
    fn all() -> KeySet<Self> {
        Self::ALL.iter().copied().collect()
    }
}

/// Fields shown by the detail and list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKey {
    Name,
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Color,
}

impl KeyVocabulary for ViewKey {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Hex,
        Self::Rgb,
        Self::Hsl,
        Self::Hsv,
        Self::Cmyk,
        Self::Color,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Cmyk => "cmyk",
            Self::Color => "color",
        }
    }
}

/// Fields included in JSON records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JsonKey {
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Name,
    IsNameExact,
}

impl KeyVocabulary for JsonKey {
    const ALL: &'static [Self] = &[
        Self::Hex,
        Self::Rgb,
        Self::Hsl,
        Self::Hsv,
        Self::Cmyk,
        Self::Name,
        Self::IsNameExact,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Cmyk => "cmyk",
            Self::Name => "name",
            Self::IsNameExact => "is_name_exact",
        }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JsonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &key in ViewKey::ALL {
            assert_eq!(ViewKey::from_name(key.as_str()), Some(key));
        }
        for &key in JsonKey::ALL {
            assert_eq!(JsonKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(ViewKey::from_name("is_name_exact"), None);
        assert_eq!(JsonKey::from_name("color"), None);
        assert_eq!(JsonKey::from_name("HEX"), None);
    }

    #[test]
    fn sets_iterate_in_canonical_order() {
        let keys: KeySet<ViewKey> = [ViewKey::Color, ViewKey::Name, ViewKey::Hsv]
            .into_iter()
            .collect();
        let names: Vec<_> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["name", "hsv", "color"]);
        assert_eq!(JsonKey::all().len(), 7);
        assert_eq!(JsonKey::all().last(), Some(&JsonKey::IsNameExact));
    }
}
