//! The color value object.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::convert::{
    hsl_to_rgb_shades, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_names,
};
use crate::keys::{JsonKey, KeySet, KeyVocabulary};
use crate::types::{Cmyk, Hsl, Hsv, Rgb};

/// An RGB color with every derived representation computed up front.
///
/// Equality and hashing look only at the RGB triple; the remaining fields
/// are a pure function of it.
#[derive(Debug, Clone)]
pub struct Color {
    rgb: Rgb,
    hex: String,
    hsl: Hsl,
    hsv: Hsv,
    cmyk: Cmyk,
    names: &'static [&'static str],
    is_name_exact: bool,
    name: String,
}

impl Color {
    #[must_use]
    pub fn new(rgb: Rgb) -> Self {
        let (names, is_name_exact) = rgb_to_names(rgb);
        Self {
            rgb,
            hex: rgb_to_hex(rgb),
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
            cmyk: rgb_to_cmyk(rgb),
            names,
            is_name_exact,
            name: names.join("/"),
        }
    }

    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(Rgb::new(r, g, b))
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Uppercase hex code without `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// Every keyword of the matched table entry.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// False when the names belong to the nearest entry rather than this color.
    pub fn is_name_exact(&self) -> bool {
        self.is_name_exact
    }

    /// Keywords joined with `/`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lightness ramp through this color's hue and saturation.
    ///
    /// See [`hsl_to_rgb_shades`] for how `size` is interpreted.
    pub fn get_shades(&self, size: usize) -> impl Iterator<Item = Color> + use<> {
        hsl_to_rgb_shades(self.hsl, size).map(Color::new)
    }

    /// Projects the fields named by `keys` into a serializable record.
    #[must_use]
    pub fn record(&self, keys: &KeySet<JsonKey>) -> ColorRecord {
        let mut record = ColorRecord::default();
        for key in keys {
            match key {
                JsonKey::Hex => record.hex = Some(self.hex.clone()),
                JsonKey::Rgb => record.rgb = Some(self.rgb),
                JsonKey::Hsl => record.hsl = Some(self.hsl),
                JsonKey::Hsv => record.hsv = Some(self.hsv),
                JsonKey::Cmyk => record.cmyk = Some(self.cmyk),
                JsonKey::Name => record.name = Some(self.name.clone()),
                JsonKey::IsNameExact => record.is_name_exact = Some(self.is_name_exact),
            }
        }
        record
    }

    /// Like [`Color::record`], but takes raw key names and skips unknown ones.
    #[must_use]
    pub fn get_dict<I>(&self, keys: I) -> ColorRecord
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keys: KeySet<JsonKey> = keys
            .into_iter()
            .filter_map(|key| JsonKey::from_name(key.as_ref()))
            .collect();
        self.record(&keys)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
    }
}

/// Selected fields of a [`Color`], serialized in canonical key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColorRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsl: Option<Hsl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsv: Option<Hsv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmyk: Option<Cmyk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_name_exact: Option<bool>,
}

impl ColorRecord {
    /// Returns true if no field was selected.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
