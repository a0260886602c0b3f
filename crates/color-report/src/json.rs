//! JSON rendering.
//!
//! Output is compact `serde_json` text: no spaces after separators, and the
//! fractional models (HSL, HSV, CMYK) are always floats, so black's CMYK is
//! `[0.0,0.0,0.0,1.0]`. Consumers should compare parsed values, not text.

use color_config::Config;
use color_model::Color;

/// One color as a JSON object holding the configured JSON keys.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render_json_one(config: &Config, color: &Color) -> serde_json::Result<String> {
    serde_json::to_string(&color.record(config.json_keys()))
}

/// Several colors as a JSON array of objects.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render_json_many<'a, I>(config: &Config, colors: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a Color>,
{
    let records: Vec<_> = colors
        .into_iter()
        .map(|color| color.record(config.json_keys()))
        .collect();
    serde_json::to_string(&records)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn full_record() {
        let output = render_json_one(&Config::default(), &Color::from_rgb(0, 0, 0)).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "hex": "000000",
                "rgb": [0, 0, 0],
                "hsl": [0.0, 0.0, 0.0],
                "hsv": [0.0, 0.0, 0.0],
                "cmyk": [0.0, 0.0, 0.0, 1.0],
                "name": "black",
                "is_name_exact": true,
            })
        );
        assert!(output.starts_with(r#"{"hex":"000000","rgb":[0,0,0],"hsl""#));
    }

    #[test]
    fn output_is_compact_with_float_components() {
        let mut config = Config::default();
        config
            .update(&json!({ "json_keys": ["hex", "cmyk"] }))
            .unwrap();
        assert_eq!(
            render_json_one(&config, &Color::from_rgb(0, 0, 0)).unwrap(),
            r#"{"hex":"000000","cmyk":[0.0,0.0,0.0,1.0]}"#
        );
    }

    #[test]
    fn empty_sequence_is_an_empty_array() {
        assert_eq!(render_json_many(&Config::default(), Vec::<&Color>::new()).unwrap(), "[]");
    }
}
