//! Colorpedia output rendering.
//!
//! - **Detail view**: one labelled line per field plus a color swatch
//! - **List view**: one pipe-separated row per color, for palettes and shades
//! - **JSON**: records projected through the configured JSON keys

mod format;
mod json;
mod view;

pub use format::{
    format_cmyk, format_degree, format_degree_with_unit, format_get_color, format_hex,
    format_hsl, format_hsv, format_list_color, format_name, format_percent,
    format_percent_with_unit, format_rgb,
};
pub use json::{render_json_many, render_json_one};
pub use view::{format_get_view, format_list_view, render_color, render_colors};
