//! Tables for the `names` and `palettes` listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color as CellColor, ContentArrangement, Table};

use color_config::Config;
use color_model::hex_to_rgb;
use color_report::format_hex;
use color_standards::NameTable;

const SWATCH: &str = "      ";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Forces styling on or off; `None` leaves the decision to terminal detection.
fn apply_styling(table: &mut Table, styled: Option<bool>) {
    match styled {
        Some(true) => {
            table.enforce_styling();
        }
        Some(false) => {
            table.force_no_tty();
        }
        None => {}
    }
}

fn swatch(hex: &str) -> Cell {
    let cell = Cell::new(SWATCH);
    match hex_to_rgb(hex) {
        Ok(rgb) => cell.bg(CellColor::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }),
        Err(_) => cell,
    }
}

/// Every keyword with its swatch and hex code, sorted by keyword.
pub fn names_table(config: &Config, table: &NameTable, styled: Option<bool>) -> Table {
    let mut output = Table::new();
    output.set_header(vec!["Color", "Name", "Hex"]);
    apply_table_style(&mut output);
    apply_styling(&mut output, styled);
    for (name, hex) in table.names() {
        output.add_row(vec![
            swatch(hex),
            Cell::new(name),
            Cell::new(format_hex(config, hex)),
        ]);
    }
    output
}

/// Every palette with its size and member codes, sorted by palette name.
pub fn palettes_table(config: &Config, table: &NameTable, styled: Option<bool>) -> Table {
    let mut output = Table::new();
    output.set_header(vec!["Palette", "Size", "Colors"]);
    apply_table_style(&mut output);
    apply_styling(&mut output, styled);
    for (name, codes) in table.palettes() {
        let colors: Vec<_> = codes.iter().map(|code| format_hex(config, code)).collect();
        output.add_row(vec![
            Cell::new(name),
            Cell::new(codes.len()),
            Cell::new(colors.join(" ")),
        ]);
    }
    output
}
