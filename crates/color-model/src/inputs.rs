//! Normalization of raw command-line scalars.
//!
//! Each function accepts the argument exactly as the user typed it and either
//! returns the value in the range the converters expect or a
//! [`ColorError::Input`] naming the argument and its domain.

use crate::error::{ColorError, Result};

/// Accepted shape of a hex code argument: three or six hex digits, no `#`.
pub const HEX_PATTERN: &str = "^(?:[0-9a-fA-F]{3}){1,2}$";

/// Largest accepted shade count.
pub const MAX_SHADES_COUNT: u8 = 100;

/// Largest accepted indent width for `config show`.
pub const MAX_INDENT_WIDTH: usize = 8;

/// Parsed value of the `--shades` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadesFlag {
    /// `--shades`, `--shades=true` or `--shades=false`.
    Toggle(bool),
    /// `--shades=N`.
    Count(u8),
}

/// Expands a three- or six-digit hex code to six digits, keeping its case.
///
/// # Errors
///
/// Fails unless `value` matches [`HEX_PATTERN`].
pub fn normalize_hex_code(value: &str) -> Result<String> {
    let is_hex = value.bytes().all(|byte| byte.is_ascii_hexdigit());
    match value.len() {
        6 if is_hex => Ok(value.to_string()),
        3 if is_hex => Ok(value.chars().flat_map(|c| [c, c]).collect()),
        _ => Err(ColorError::input(
            "hex code",
            format!("a string matching {HEX_PATTERN}"),
        )),
    }
}

/// Parses an 8-bit RGB channel.
///
/// # Errors
///
/// Fails unless `value` is an integer between 0 and 255.
pub fn validate_rgb_value(value: &str) -> Result<u8> {
    value
        .parse::<u8>()
        .map_err(|_| ColorError::input("RGB value", "an integer between 0 and 255"))
}

fn parse_bounded_float(value: &str, max: f64) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| (0.0..=max).contains(number))
}

/// Converts a percentage to a fraction in `0.0..=1.0`.
///
/// # Errors
///
/// Fails unless `value` is a number between 0 and 100.
pub fn normalize_percent_value(value: &str) -> Result<f64> {
    parse_bounded_float(value, 100.0)
        .map(|percent| percent / 100.0)
        .ok_or_else(|| ColorError::input("percent value", "a float between 0.0 and 100.0"))
}

/// Converts an angle in degrees to a fraction of a turn.
///
/// # Errors
///
/// Fails unless `value` is a number between 0 and 360.
pub fn normalize_degree_angle(value: &str) -> Result<f64> {
    parse_bounded_float(value, 360.0)
        .map(|degrees| degrees / 360.0)
        .ok_or_else(|| ColorError::input("degree angle", "a float between 0.0 and 360.0"))
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parses the explicit value of a boolean flag (`--json=false`).
///
/// # Errors
///
/// Fails unless `value` is `true` or `false`, in any case.
pub fn parse_boolean_flag(value: &str) -> Result<bool> {
    parse_bool(value).ok_or_else(|| ColorError::input("boolean flag", "true, false or no value"))
}

/// Parses the explicit value of `--shades`.
///
/// # Errors
///
/// Fails unless `value` is a boolean or an integer between 0 and 100.
pub fn parse_shades_flag(value: &str) -> Result<ShadesFlag> {
    if let Some(toggle) = parse_bool(value) {
        return Ok(ShadesFlag::Toggle(toggle));
    }
    value
        .parse::<u8>()
        .ok()
        .filter(|&count| count <= MAX_SHADES_COUNT)
        .map(ShadesFlag::Count)
        .ok_or_else(|| ColorError::input("shades count", "an integer between 0 and 100"))
}

/// Parses the JSON indent width used by `config show`.
///
/// # Errors
///
/// Fails unless `value` is an integer between 0 and 8.
pub fn validate_indent_width(value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .ok()
        .filter(|&width| width <= MAX_INDENT_WIDTH)
        .ok_or_else(|| ColorError::input("indent width", "an integer between 0 and 8"))
}

/// Checks that an editor is a single command word.
///
/// Arguments are not allowed, so the value can be executed directly without
/// going through a shell.
///
/// # Errors
///
/// Fails if `value` is empty or contains whitespace.
pub fn validate_editor(value: &str) -> Result<String> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ColorError::input(
            "editor",
            "a shell-executable command without whitespaces",
        ));
    }
    Ok(value.to_string())
}
