//! Detail and list views.
//!
//! The configured key sets choose which fields appear; their order is fixed.

use color_config::Config;
use color_model::{Color, ViewKey};

use crate::format::{
    format_cmyk, format_get_color, format_hex, format_hsl, format_hsv, format_list_color,
    format_name, format_rgb,
};
use crate::json::{render_json_many, render_json_one};

/// Multi-line view of one color: labelled fields, then a swatch block.
pub fn format_get_view(config: &Config, color: &Color) -> String {
    let keys = config.get_view_keys();
    let mut lines = Vec::with_capacity(keys.len());
    if keys.contains(&ViewKey::Name) {
        lines.push(format!(
            "Name : {}",
            format_name(config, color.name(), color.is_name_exact())
        ));
    }
    if keys.contains(&ViewKey::Hex) {
        lines.push(format!("Hex  : {}", format_hex(config, color.hex())));
    }
    if keys.contains(&ViewKey::Rgb) {
        lines.push(format!("RGB  : {}", format_rgb(config, color.rgb())));
    }
    if keys.contains(&ViewKey::Hsl) {
        lines.push(format!("HSL  : {}", format_hsl(config, color.hsl())));
    }
    if keys.contains(&ViewKey::Hsv) {
        lines.push(format!("HSV  : {}", format_hsv(config, color.hsv())));
    }
    if keys.contains(&ViewKey::Cmyk) {
        lines.push(format!("CMYK : {}", format_cmyk(config, color.cmyk())));
    }
    if keys.contains(&ViewKey::Color) {
        lines.push(format!("\n{}", format_get_color(config, color.rgb())));
    }
    lines.join("\n")
}

/// One-line view of a color: swatch first, name last, `|`-separated.
pub fn format_list_view(config: &Config, color: &Color) -> String {
    let keys = config.list_view_keys();
    let mut fields = Vec::with_capacity(keys.len());
    if keys.contains(&ViewKey::Color) {
        fields.push(format_list_color(config, color.rgb()));
    }
    if keys.contains(&ViewKey::Hex) {
        fields.push(format_hex(config, color.hex()));
    }
    if keys.contains(&ViewKey::Rgb) {
        fields.push(format_rgb(config, color.rgb()));
    }
    if keys.contains(&ViewKey::Hsl) {
        fields.push(format_hsl(config, color.hsl()));
    }
    if keys.contains(&ViewKey::Hsv) {
        fields.push(format_hsv(config, color.hsv()));
    }
    if keys.contains(&ViewKey::Cmyk) {
        fields.push(format_cmyk(config, color.cmyk()));
    }
    if keys.contains(&ViewKey::Name) {
        fields.push(format_name(config, color.name(), color.is_name_exact()).into_owned());
    }
    fields.join("|")
}

/// Renders several colors: a JSON array, or one list row per color.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn render_colors<'a, I>(config: &Config, colors: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a Color>,
{
    if config.always_output_json() {
        return render_json_many(config, colors);
    }
    let rows: Vec<_> = colors
        .into_iter()
        .map(|color| format_list_view(config, color))
        .collect();
    Ok(rows.join("\n"))
}

/// Renders one looked-up color.
///
/// A non-zero shade count replaces the color with its shade ramp, rendered
/// like a palette. Otherwise the color is shown as JSON or in the detail view.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn render_color(config: &Config, color: &Color) -> serde_json::Result<String> {
    let shades = usize::from(config.default_shades_count());
    if shades > 0 {
        tracing::debug!(shades, hex = color.hex(), "rendering shade ramp");
        let ramp: Vec<_> = color.get_shades(shades).collect();
        return render_colors(config, &ramp);
    }
    if config.always_output_json() {
        render_json_one(config, color)
    } else {
        Ok(format_get_view(config, color))
    }
}
