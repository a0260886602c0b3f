//! Field formatters.
//!
//! Numbers are rounded to whole units and left-aligned in three columns, or
//! four when a unit symbol is shown, so repeated rows line up.

use std::borrow::Cow;

use color_config::Config;
use color_model::{Cmyk, Hsl, Hsv, Rgb};

const DEGREE_SYMBOL: char = '°';
const PERCENT_SYMBOL: char = '%';

pub fn format_degree(value: f64) -> String {
    format!("{value:<3.0}")
}

pub fn format_degree_with_unit(value: f64) -> String {
    format!("{:<4}", format!("{value:.0}{DEGREE_SYMBOL}"))
}

pub fn format_percent(value: f64) -> String {
    format!("{value:<3.0}")
}

pub fn format_percent_with_unit(value: f64) -> String {
    format!("{:<4}", format!("{value:.0}{PERCENT_SYMBOL}"))
}

fn degree_formatter(config: &Config) -> fn(f64) -> String {
    if config.display_degree_symbol() {
        format_degree_with_unit
    } else {
        format_degree
    }
}

fn percent_formatter(config: &Config) -> fn(f64) -> String {
    if config.display_percent_symbol() {
        format_percent_with_unit
    } else {
        format_percent
    }
}

fn swatch_line(rgb: Rgb, width: u8) -> String {
    format!(
        "\x1b[48;2;{};{};{}m{}\x1b[0m",
        rgb.r,
        rgb.g,
        rgb.b,
        " ".repeat(usize::from(width))
    )
}

/// Block of `get_view_color_height` swatch rows.
pub fn format_get_color(config: &Config, rgb: Rgb) -> String {
    let line = swatch_line(rgb, config.get_view_color_width());
    vec![line; usize::from(config.get_view_color_height())].join("\n")
}

/// Single swatch row for list views.
pub fn format_list_color(config: &Config, rgb: Rgb) -> String {
    swatch_line(rgb, config.list_view_color_width())
}

/// Name with the approximate-match suffix when `is_exact` is false.
pub fn format_name<'a>(config: &Config, name: &'a str, is_exact: bool) -> Cow<'a, str> {
    if is_exact {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{name}{}", config.approx_name_suffix()))
    }
}

/// `#`-prefixed hex code in the configured case.
pub fn format_hex(config: &Config, hex: &str) -> String {
    if config.uppercase_hex_codes() {
        format!("#{}", hex.to_ascii_uppercase())
    } else {
        format!("#{}", hex.to_ascii_lowercase())
    }
}

/// RGB channels.
///
/// Red takes the degree column width and green and blue the percent column
/// width, so RGB rows stay aligned with HSL and HSV rows.
pub fn format_rgb(config: &Config, rgb: Rgb) -> String {
    let column = |value: u8, wide: bool| {
        if wide {
            format!("{value:<4}")
        } else {
            format!("{value:<3}")
        }
    };
    format!(
        "R:{} G:{} B:{}",
        column(rgb.r, config.display_degree_symbol()),
        column(rgb.g, config.display_percent_symbol()),
        column(rgb.b, config.display_percent_symbol()),
    )
}

pub fn format_hsl(config: &Config, hsl: Hsl) -> String {
    let d = degree_formatter(config);
    let p = percent_formatter(config);
    format!(
        "H:{} S:{} L:{}",
        d(hsl.h * 360.0),
        p(hsl.s * 100.0),
        p(hsl.l * 100.0)
    )
}

pub fn format_hsv(config: &Config, hsv: Hsv) -> String {
    let d = degree_formatter(config);
    let p = percent_formatter(config);
    format!(
        "H:{} S:{} V:{}",
        d(hsv.h * 360.0),
        p(hsv.s * 100.0),
        p(hsv.v * 100.0)
    )
}

pub fn format_cmyk(config: &Config, cmyk: Cmyk) -> String {
    let p = percent_formatter(config);
    format!(
        "C:{} M:{} Y:{} K:{}",
        p(cmyk.c * 100.0),
        p(cmyk.m * 100.0),
        p(cmyk.y * 100.0),
        p(cmyk.k * 100.0)
    )
}

#[cfg(test)]
mod tests {
    use color_config::Flags;
    use serde_json::json;

    use super::*;

    fn custom_config() -> Config {
        let mut config = Config::default();
        config
            .update(&json!({
                "uppercase_hex_codes": false,
                "approx_name_suffix": "*",
                "get_view_keys": ["name", "hex"],
                "list_view_keys": ["name", "hex"],
            }))
            .unwrap();
        config.set_flags(&Flags {
            units: Some(true),
            ..Flags::default()
        });
        config
    }

    #[test]
    fn cmyk() {
        let config = Config::default();
        let custom = custom_config();
        for (cmyk, plain, with_units) in [
            (
                Cmyk::new(0.000, 0.010, 0.020, 0.030),
                "C:0   M:1   Y:2   K:3  ",
                "C:0%   M:1%   Y:2%   K:3%  ",
            ),
            (
                Cmyk::new(0.104, 0.204, 0.304, 0.404),
                "C:10  M:20  Y:30  K:40 ",
                "C:10%  M:20%  Y:30%  K:40% ",
            ),
            (
                Cmyk::new(0.106, 0.206, 0.306, 0.406),
                "C:11  M:21  Y:31  K:41 ",
                "C:11%  M:21%  Y:31%  K:41% ",
            ),
            (
                Cmyk::new(1.0, 1.0, 1.0, 1.0),
                "C:100 M:100 Y:100 K:100",
                "C:100% M:100% Y:100% K:100%",
            ),
        ] {
            assert_eq!(format_cmyk(&config, cmyk), plain);
            assert_eq!(format_cmyk(&custom, cmyk), with_units);
        }
    }

    #[test]
    fn hex() {
        let config = Config::default();
        let custom = custom_config();
        for (hex, expected) in [
            ("ffffff", "#FFFFFF"),
            ("FFFFFF", "#FFFFFF"),
            ("0f0f0f", "#0F0F0F"),
            ("0F0F0F", "#0F0F0F"),
        ] {
            assert_eq!(format_hex(&config, hex), expected);
            assert_eq!(format_hex(&custom, hex), expected.to_ascii_lowercase());
        }
    }

    #[test]
    fn hsl_and_hsv() {
        let config = Config::default();
        let custom = custom_config();
        for ((h, s, l), plain, with_units) in [
            ((0.0, 0.010, 0.020), "H:0   S:1   L:2  ", "H:0°   S:1%   L:2%  "),
            ((0.5, 0.200, 0.300), "H:180 S:20  L:30 ", "H:180° S:20%  L:30% "),
            ((0.5, 0.206, 0.306), "H:180 S:21  L:31 ", "H:180° S:21%  L:31% "),
            ((1.0, 1.001, 1.001), "H:360 S:100 L:100", "H:360° S:100% L:100%"),
        ] {
            assert_eq!(format_hsl(&config, Hsl::new(h, s, l)), plain);
            assert_eq!(format_hsl(&custom, Hsl::new(h, s, l)), with_units);
            assert_eq!(
                format_hsv(&config, Hsv::new(h, s, l)),
                plain.replace('L', "V")
            );
            assert_eq!(
                format_hsv(&custom, Hsv::new(h, s, l)),
                with_units.replace('L', "V")
            );
        }
    }

    #[test]
    fn rgb() {
        let config = Config::default();
        let custom = custom_config();
        for (rgb, plain, with_units) in [
            (Rgb::new(0, 1, 2), "R:0   G:1   B:2  ", "R:0    G:1    B:2   "),
            (Rgb::new(10, 20, 30), "R:10  G:20  B:30 ", "R:10   G:20   B:30  "),
            (
                Rgb::new(255, 255, 255),
                "R:255 G:255 B:255",
                "R:255  G:255  B:255 ",
            ),
        ] {
            assert_eq!(format_rgb(&config, rgb), plain);
            assert_eq!(format_rgb(&custom, rgb), with_units);
        }
    }

    #[test]
    fn rgb_columns_follow_each_unit_toggle() {
        let mut config = Config::default();
        config
            .update(&json!({ "display_degree_symbol": true }))
            .unwrap();
        assert_eq!(format_rgb(&config, Rgb::new(0, 1, 2)), "R:0    G:1   B:2  ");
    }

    #[test]
    fn name() {
        let config = Config::default();
        let custom = custom_config();
        assert_eq!(format_name(&config, "foo", false), "foo~");
        assert_eq!(format_name(&config, "foo", true), "foo");
        assert_eq!(format_name(&custom, "foo", false), "foo*");
        assert_eq!(format_name(&custom, "foo", true), "foo");
    }

    #[test]
    fn swatches() {
        let config = Config::default();
        let row = format!("\x1b[48;2;1;2;3m{}\x1b[0m", " ".repeat(20));
        assert_eq!(format_list_color(&config, Rgb::new(1, 2, 3)), row);

        let block = format_get_color(&config, Rgb::new(1, 2, 3));
        assert_eq!(block.lines().count(), 10);
        assert!(block.lines().all(|line| line == row));
    }
}
