//! Display and behavior options.
//!
//! A [`Config`] is always valid: it starts from defaults and only changes
//! through [`Config::update`], which validates the whole merged document
//! before committing, or [`Config::set_flags`], whose inputs are already
//! normalized.

use color_model::{JsonKey, KeySet, KeyVocabulary, ShadesFlag, ViewKey};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

pub const DEFAULT_APPROX_NAME_SUFFIX: &str = "~";
pub const DEFAULT_SHADES_COUNT: u8 = 15;
pub const GET_VIEW_COLOR_HEIGHT: u8 = 10;
pub const GET_VIEW_COLOR_WIDTH: u8 = 20;
pub const LIST_VIEW_COLOR_WIDTH: u8 = 20;

const ALWAYS_OUTPUT_JSON: &str = "always_output_json";
const APPROX_NAME_SUFFIX: &str = "approx_name_suffix";
const DEFAULT_SHADES_COUNT_KEY: &str = "default_shades_count";
const DISPLAY_DEGREE_SYMBOL: &str = "display_degree_symbol";
const DISPLAY_PERCENT_SYMBOL: &str = "display_percent_symbol";
const GET_VIEW_COLOR_HEIGHT_KEY: &str = "get_view_color_height";
const GET_VIEW_COLOR_WIDTH_KEY: &str = "get_view_color_width";
const GET_VIEW_KEYS: &str = "get_view_keys";
const LIST_VIEW_COLOR_WIDTH_KEY: &str = "list_view_color_width";
const LIST_VIEW_KEYS: &str = "list_view_keys";
const JSON_KEYS: &str = "json_keys";
const UPPERCASE_HEX_CODES: &str = "uppercase_hex_codes";

/// Every configuration key, in field declaration order.
pub const FIELDS: &[&str] = &[
    ALWAYS_OUTPUT_JSON,
    APPROX_NAME_SUFFIX,
    DEFAULT_SHADES_COUNT_KEY,
    DISPLAY_DEGREE_SYMBOL,
    DISPLAY_PERCENT_SYMBOL,
    GET_VIEW_COLOR_HEIGHT_KEY,
    GET_VIEW_COLOR_WIDTH_KEY,
    GET_VIEW_KEYS,
    LIST_VIEW_COLOR_WIDTH_KEY,
    LIST_VIEW_KEYS,
    JSON_KEYS,
    UPPERCASE_HEX_CODES,
];

/// Command-line overrides applied on top of the stored configuration.
///
/// `None` leaves the corresponding setting untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub json: Option<bool>,
    pub all: Option<bool>,
    pub units: Option<bool>,
    pub shades: Option<ShadesFlag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    always_output_json: bool,
    approx_name_suffix: String,
    default_shades_count: u8,
    display_degree_symbol: bool,
    display_percent_symbol: bool,
    get_view_color_height: u8,
    get_view_color_width: u8,
    get_view_keys: KeySet<ViewKey>,
    list_view_color_width: u8,
    list_view_keys: KeySet<ViewKey>,
    json_keys: KeySet<JsonKey>,
    uppercase_hex_codes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            always_output_json: false,
            approx_name_suffix: DEFAULT_APPROX_NAME_SUFFIX.to_string(),
            default_shades_count: DEFAULT_SHADES_COUNT,
            display_degree_symbol: false,
            display_percent_symbol: false,
            get_view_color_height: GET_VIEW_COLOR_HEIGHT,
            get_view_color_width: GET_VIEW_COLOR_WIDTH,
            get_view_keys: ViewKey::all(),
            list_view_color_width: LIST_VIEW_COLOR_WIDTH,
            list_view_keys: ViewKey::all(),
            json_keys: JsonKey::all(),
            uppercase_hex_codes: true,
        }
    }
}

impl Config {
    pub fn always_output_json(&self) -> bool {
        self.always_output_json
    }

    /// Appended to names that only approximately match.
    pub fn approx_name_suffix(&self) -> &str {
        &self.approx_name_suffix
    }

    /// Number of shades to print instead of a single color; 0 disables shades.
    pub fn default_shades_count(&self) -> u8 {
        self.default_shades_count
    }

    pub fn display_degree_symbol(&self) -> bool {
        self.display_degree_symbol
    }

    pub fn display_percent_symbol(&self) -> bool {
        self.display_percent_symbol
    }

    pub fn get_view_color_height(&self) -> u8 {
        self.get_view_color_height
    }

    pub fn get_view_color_width(&self) -> u8 {
        self.get_view_color_width
    }

    pub fn get_view_keys(&self) -> &KeySet<ViewKey> {
        &self.get_view_keys
    }

    pub fn list_view_color_width(&self) -> u8 {
        self.list_view_color_width
    }

    pub fn list_view_keys(&self) -> &KeySet<ViewKey> {
        &self.list_view_keys
    }

    pub fn json_keys(&self) -> &KeySet<JsonKey> {
        &self.json_keys
    }

    pub fn uppercase_hex_codes(&self) -> bool {
        self.uppercase_hex_codes
    }

    /// Merges `data` into the current settings.
    ///
    /// Every key must name a field. The merged document is then validated
    /// field by field in a fixed order, so the reported field does not
    /// depend on the key order of `data`. Nothing changes unless the whole
    /// merge is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BadDocument`] if `data` is not an object,
    /// [`ConfigError::UnknownKey`] for the first unknown key and
    /// [`ConfigError::BadValue`] for the first invalid field.
    pub fn update(&mut self, data: &Value) -> Result<()> {
        let Value::Object(data) = data else {
            return Err(ConfigError::BadDocument {
                message: "Bad JSON: expecting an object".to_string(),
            });
        };

        let mut merged = self.to_map();
        for (key, value) in data {
            if !FIELDS.contains(&key.as_str()) {
                return Err(ConfigError::UnknownKey { key: key.clone() });
            }
            merged.insert(key.clone(), value.clone());
        }

        let fields = Fields(&merged);
        let approx_name_suffix = fields.string(APPROX_NAME_SUFFIX)?;
        let always_output_json = fields.boolean(ALWAYS_OUTPUT_JSON)?;
        let display_degree_symbol = fields.boolean(DISPLAY_DEGREE_SYMBOL)?;
        let display_percent_symbol = fields.boolean(DISPLAY_PERCENT_SYMBOL)?;
        let uppercase_hex_codes = fields.boolean(UPPERCASE_HEX_CODES)?;
        let default_shades_count = fields.integer(DEFAULT_SHADES_COUNT_KEY, 0)?;
        let get_view_color_height = fields.integer(GET_VIEW_COLOR_HEIGHT_KEY, 1)?;
        let get_view_color_width = fields.integer(GET_VIEW_COLOR_WIDTH_KEY, 1)?;
        let list_view_color_width = fields.integer(LIST_VIEW_COLOR_WIDTH_KEY, 1)?;
        let get_view_keys = fields.keys::<ViewKey>(GET_VIEW_KEYS)?;
        let list_view_keys = fields.keys::<ViewKey>(LIST_VIEW_KEYS)?;
        let json_keys = fields.keys::<JsonKey>(JSON_KEYS)?;

        *self = Self {
            always_output_json,
            approx_name_suffix,
            default_shades_count,
            display_degree_symbol,
            display_percent_symbol,
            get_view_color_height,
            get_view_color_width,
            get_view_keys,
            list_view_color_width,
            list_view_keys,
            json_keys,
            uppercase_hex_codes,
        };
        Ok(())
    }

    /// Serializes every field; key sets become arrays in canonical order.
    pub fn dump(&self) -> Value {
        Value::Object(self.to_map())
    }

    fn to_map(&self) -> Map<String, Value> {
        fn key_names<K: KeyVocabulary>(keys: &KeySet<K>) -> Value {
            keys.iter().map(|key| Value::from(key.as_str())).collect()
        }

        let mut map = Map::new();
        map.insert(ALWAYS_OUTPUT_JSON.into(), self.always_output_json.into());
        map.insert(APPROX_NAME_SUFFIX.into(), self.approx_name_suffix.clone().into());
        map.insert(DEFAULT_SHADES_COUNT_KEY.into(), self.default_shades_count.into());
        map.insert(DISPLAY_DEGREE_SYMBOL.into(), self.display_degree_symbol.into());
        map.insert(DISPLAY_PERCENT_SYMBOL.into(), self.display_percent_symbol.into());
        map.insert(GET_VIEW_COLOR_HEIGHT_KEY.into(), self.get_view_color_height.into());
        map.insert(GET_VIEW_COLOR_WIDTH_KEY.into(), self.get_view_color_width.into());
        map.insert(GET_VIEW_KEYS.into(), key_names(&self.get_view_keys));
        map.insert(LIST_VIEW_COLOR_WIDTH_KEY.into(), self.list_view_color_width.into());
        map.insert(LIST_VIEW_KEYS.into(), key_names(&self.list_view_keys));
        map.insert(JSON_KEYS.into(), key_names(&self.json_keys));
        map.insert(UPPERCASE_HEX_CODES.into(), self.uppercase_hex_codes.into());
        map
    }

    /// Applies command-line overrides.
    ///
    /// `all` only acts when true, widening every key set to its full
    /// vocabulary. `units` drives both unit symbols together. For `shades`,
    /// `Toggle(false)` zeroes the count, `Count(n)` replaces it and
    /// `Toggle(true)` keeps the configured count.
    pub fn set_flags(&mut self, flags: &Flags) {
        if let Some(json) = flags.json {
            self.always_output_json = json;
        }
        if flags.all == Some(true) {
            self.get_view_keys = ViewKey::all();
            self.list_view_keys = ViewKey::all();
            self.json_keys = JsonKey::all();
        }
        if let Some(units) = flags.units {
            self.display_degree_symbol = units;
            self.display_percent_symbol = units;
        }
        match flags.shades {
            Some(ShadesFlag::Toggle(false)) => self.default_shades_count = 0,
            Some(ShadesFlag::Count(count)) => self.default_shades_count = count,
            Some(ShadesFlag::Toggle(true)) | None => {}
        }
    }
}

/// Typed access to a merged configuration document.
struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    fn get(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&Value::Null)
    }

    fn string(&self, key: &'static str) -> Result<String> {
        self.get(key)
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ConfigError::bad_value(key, "a string"))
    }

    fn boolean(&self, key: &'static str) -> Result<bool> {
        self.get(key)
            .as_bool()
            .ok_or_else(|| ConfigError::bad_value(key, "true or false"))
    }

    fn integer(&self, key: &'static str, min: u8) -> Result<u8> {
        self.get(key)
            .as_u64()
            .filter(|value| (u64::from(min)..=100).contains(value))
            .and_then(|value| u8::try_from(value).ok())
            .ok_or_else(|| {
                ConfigError::bad_value(key, format!("an integer between {min} and 100"))
            })
    }

    fn keys<K: KeyVocabulary>(&self, key: &'static str) -> Result<KeySet<K>> {
        let parsed = self.get(key).as_array().and_then(|values| {
            values
                .iter()
                .map(|value| value.as_str().and_then(K::from_name))
                .collect::<Option<KeySet<K>>>()
        });
        match parsed {
            Some(keys) if !keys.is_empty() => Ok(keys),
            _ => {
                let allowed: Vec<_> = K::ALL
                    .iter()
                    .map(|key| format!("\"{}\"", key.as_str()))
                    .collect();
                Err(ConfigError::bad_value(
                    key,
                    format!("non-empty array of strings in [{}]", allowed.join(", ")),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn dump_then_update_is_identity() {
        let mut config = Config::default();
        config.update(&Config::default().dump()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn dump_lists_keys_in_canonical_order() {
        let dump = Config::default().dump();
        assert_eq!(
            dump[GET_VIEW_KEYS],
            json!(["name", "hex", "rgb", "hsl", "hsv", "cmyk", "color"])
        );
        assert_eq!(
            dump[JSON_KEYS],
            json!(["hex", "rgb", "hsl", "hsv", "cmyk", "name", "is_name_exact"])
        );
        assert_eq!(dump.as_object().unwrap().len(), FIELDS.len());
    }

    #[test]
    fn non_objects_are_rejected() {
        for data in [json!(true), json!(null), json!([]), json!("{}"), json!(1)] {
            let error = Config::default().update(&data).unwrap_err();
            assert!(matches!(error, ConfigError::BadDocument { .. }));
            assert_eq!(error.to_string(), "Bad JSON: expecting an object");
        }
    }

    #[test]
    fn null_values_are_rejected_for_every_field() {
        for &key in FIELDS {
            let error = Config::default().update(&json!({ key: null })).unwrap_err();
            assert!(
                matches!(&error, ConfigError::BadValue { key: field, .. } if *field == key),
                "{key}: {error}"
            );
            assert!(error.to_string().starts_with("Bad value for configuration key"));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        for &key in FIELDS {
            let bad_key = format!("bad-{key}");
            let error = Config::default()
                .update(&json!({ bad_key.clone(): null }))
                .unwrap_err();
            assert_eq!(error.to_string(), format!("Bad configuration key \"{bad_key}\""));
        }
    }

    #[test]
    fn first_invalid_field_follows_validation_order() {
        let error = Config::default()
            .update(&json!({
                "json_keys": [],
                "get_view_color_width": 0,
                "uppercase_hex_codes": "yes",
            }))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Bad value for configuration key \"uppercase_hex_codes\" (expecting true or false)"
        );
    }

    #[test]
    fn failed_update_keeps_previous_values() {
        let mut config = Config::default();
        config
            .update(&json!({ "approx_name_suffix": " (approx)", "get_view_keys": ["hex"] }))
            .unwrap();
        let before = config.clone();

        let error = config
            .update(&json!({ "display_degree_symbol": true, "list_view_keys": ["bogus"] }))
            .unwrap_err();
        assert!(matches!(error, ConfigError::BadValue { key: "list_view_keys", .. }));
        assert_eq!(config, before);
        assert!(!config.display_degree_symbol());
    }

    #[test]
    fn numeric_domains() {
        let mut config = Config::default();
        config.update(&json!({ "default_shades_count": 0 })).unwrap();
        assert_eq!(config.default_shades_count(), 0);
        config.update(&json!({ "get_view_color_height": 100 })).unwrap();
        assert_eq!(config.get_view_color_height(), 100);

        for (key, value, expecting) in [
            ("default_shades_count", json!(101), "an integer between 0 and 100"),
            ("get_view_color_height", json!(0), "an integer between 1 and 100"),
            ("get_view_color_width", json!(-1), "an integer between 1 and 100"),
            ("list_view_color_width", json!(20.0), "an integer between 1 and 100"),
            ("list_view_color_width", json!(true), "an integer between 1 and 100"),
        ] {
            let error = Config::default().update(&json!({ key: value })).unwrap_err();
            assert_eq!(
                error.to_string(),
                format!("Bad value for configuration key \"{key}\" (expecting {expecting})")
            );
        }
    }

    #[test]
    fn key_sets_are_deduplicated_and_validated() {
        let mut config = Config::default();
        config
            .update(&json!({ "list_view_keys": ["color", "hex", "color"] }))
            .unwrap();
        assert_eq!(
            config.list_view_keys().iter().copied().collect::<Vec<_>>(),
            [ViewKey::Hex, ViewKey::Color]
        );

        let error = Config::default()
            .update(&json!({ "json_keys": ["color"] }))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Bad value for configuration key \"json_keys\" (expecting non-empty array of \
             strings in [\"hex\", \"rgb\", \"hsl\", \"hsv\", \"cmyk\", \"name\", \"is_name_exact\"])"
        );
        assert!(Config::default().update(&json!({ "get_view_keys": [] })).is_err());
        assert!(Config::default().update(&json!({ "get_view_keys": "name" })).is_err());
        assert!(Config::default().update(&json!({ "get_view_keys": [1] })).is_err());
    }

    #[test]
    fn json_flag() {
        let mut config = Config::default();
        config.set_flags(&Flags {
            json: Some(true),
            ..Flags::default()
        });
        assert!(config.always_output_json());
        config.set_flags(&Flags::default());
        assert!(config.always_output_json());
        config.set_flags(&Flags {
            json: Some(false),
            ..Flags::default()
        });
        assert!(!config.always_output_json());
    }

    #[test]
    fn all_flag_only_acts_when_true() {
        let mut config = Config::default();
        config
            .update(&json!({
                "get_view_keys": ["name", "hex"],
                "list_view_keys": ["name", "hex"],
                "json_keys": ["name", "hex"],
            }))
            .unwrap();
        let narrowed = config.clone();

        for all in [None, Some(false)] {
            config.set_flags(&Flags {
                all,
                ..Flags::default()
            });
            assert_eq!(config, narrowed);
        }

        config.set_flags(&Flags {
            all: Some(true),
            ..Flags::default()
        });
        assert_eq!(config.get_view_keys(), &ViewKey::all());
        assert_eq!(config.list_view_keys(), &ViewKey::all());
        assert_eq!(config.json_keys(), &JsonKey::all());
    }

    #[test]
    fn units_flag_sets_both_symbols() {
        let mut config = Config::default();
        config.set_flags(&Flags {
            units: Some(true),
            ..Flags::default()
        });
        assert!(config.display_degree_symbol() && config.display_percent_symbol());
        config.set_flags(&Flags {
            units: Some(false),
            ..Flags::default()
        });
        assert!(!config.display_degree_symbol() && !config.display_percent_symbol());
    }

    #[test]
    fn shades_flag() {
        for (shades, expected) in [
            (None, DEFAULT_SHADES_COUNT),
            (Some(ShadesFlag::Toggle(true)), DEFAULT_SHADES_COUNT),
            (Some(ShadesFlag::Toggle(false)), 0),
            (Some(ShadesFlag::Count(10)), 10),
            (Some(ShadesFlag::Count(0)), 0),
        ] {
            let mut config = Config::default();
            config.set_flags(&Flags {
                shades,
                ..Flags::default()
            });
            assert_eq!(config.default_shades_count(), expected, "{shades:?}");
        }
    }
}
