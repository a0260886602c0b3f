//! Conversions between RGB and the other supported color models.
//!
//! Every function here is pure. Fractional results are produced with the
//! standard HLS/HSV transforms; whenever a conversion lands back on 8-bit
//! RGB, each channel is rounded half to even.

#![allow(clippy::many_single_char_names)]

use color_standards::{NameTable, default_table, hex_channels};

use crate::error::{ColorError, Result};
use crate::inputs::HEX_PATTERN;
use crate::types::{Cmyk, Hsl, Hsv, Rgb};

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_channel(scaled: f64) -> u8 {
    // `as` saturates, so out-of-range input clamps to 0 or 255.
    scaled.round_ties_even() as u8
}

fn to_channel(unit: f64) -> u8 {
    round_channel(unit * 255.0)
}

fn to_unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

/// Converts CMYK (each component `0.0..=1.0`) to RGB.
#[must_use]
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let channel = |x: f64| round_channel(255.0 * (1.0 - x) * (1.0 - cmyk.k));
    Rgb::new(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
}

/// Converts RGB to CMYK.
///
/// Black is special-cased to `(0, 0, 0, 1)`; the general formula would
/// divide by zero there.
#[must_use]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    if rgb == Rgb::BLACK {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }
    let c = 1.0 - to_unit(rgb.r);
    let m = 1.0 - to_unit(rgb.g);
    let y = 1.0 - to_unit(rgb.b);
    let k = c.min(m).min(y);
    Cmyk::new(
        (c - k) / (1.0 - k),
        (m - k) / (1.0 - k),
        (y - k) / (1.0 - k),
        k,
    )
}

/// Decodes a six-digit hex code (no `#`, either case) to RGB.
///
/// # Errors
///
/// Returns [`ColorError::Input`] if `code` is not exactly six hex digits.
pub fn hex_to_rgb(code: &str) -> Result<Rgb> {
    hex_channels(code)
        .map(Rgb::from)
        .ok_or_else(|| ColorError::input("hex code", format!("a string matching {HEX_PATTERN}")))
}

/// Encodes RGB as an uppercase six-digit hex code without `#`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Hue of a non-gray color, as a fraction of a turn.
fn hue(r: f64, g: f64, b: f64, max: f64, range: f64) -> f64 {
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (h / 6.0).rem_euclid(1.0)
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Converts HSL (each component `0.0..=1.0`) to RGB.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        let gray = to_channel(l);
        return Rgb::new(gray, gray, gray);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;
    Rgb::new(
        to_channel(hue_channel(m1, m2, h + ONE_THIRD)),
        to_channel(hue_channel(m1, m2, h)),
        to_channel(hue_channel(m1, m2, h - ONE_THIRD)),
    )
}

/// Converts RGB to HSL.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = (to_unit(rgb.r), to_unit(rgb.g), to_unit(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if min == max {
        return Hsl::new(0.0, 0.0, l);
    }
    let range = max - min;
    let s = if l <= 0.5 {
        range / (max + min)
    } else {
        range / (2.0 - max - min)
    };
    Hsl::new(hue(r, g, b, max, range), s, l)
}

/// Converts HSV (each component `0.0..=1.0`) to RGB.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;
    if s == 0.0 {
        let gray = to_channel(v);
        return Rgb::new(gray, gray, gray);
    }
    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Converts RGB to HSV.
#[must_use]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = (to_unit(rgb.r), to_unit(rgb.g), to_unit(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if min == max {
        return Hsv::new(0.0, 0.0, max);
    }
    let range = max - min;
    Hsv::new(hue(r, g, b, max, range), range / max, max)
}

/// Looks up a CSS keyword.
///
/// # Errors
///
/// Returns [`ColorError::UnknownName`] if the keyword is not in the table.
pub fn name_to_rgb(name: &str) -> Result<Rgb> {
    let hex = default_table()
        .hex_for_name(name)
        .ok_or_else(|| ColorError::UnknownName {
            name: name.to_string(),
        })?;
    hex_to_rgb(hex)
}

/// Resolves RGB to the matching keyword(s) in the built-in table.
///
/// See [`rgb_to_names_in`].
#[must_use]
pub fn rgb_to_names(rgb: Rgb) -> (&'static [&'static str], bool) {
    rgb_to_names_in(default_table(), rgb)
}

/// Resolves RGB to keyword(s) in `table`, returning `(names, is_exact)`.
///
/// An exact hex match short-circuits. Otherwise every entry is scanned in
/// table order and the one with the smallest squared RGB distance wins;
/// on a tie the earlier entry is kept.
#[must_use]
pub fn rgb_to_names_in(table: &NameTable, rgb: Rgb) -> (&[&'static str], bool) {
    if let Some(names) = table.names_for_hex(&rgb_to_hex(rgb)) {
        return (names, true);
    }

    let mut nearest: Option<(u32, &[&'static str])> = None;
    for entry in table.entries() {
        let distance = rgb.distance_squared(entry.channels);
        if nearest.is_none_or(|(best, _)| distance < best) {
            nearest = Some((distance, entry.names.as_slice()));
        }
    }

    match nearest {
        Some((distance, names)) => {
            tracing::trace!(?rgb, distance, ?names, "resolved nearest color name");
            (names, false)
        }
        None => (&[], false),
    }
}

/// Expands a palette into RGB triples, in palette order.
///
/// # Errors
///
/// Returns [`ColorError::UnknownPalette`] if no palette has that name.
pub fn palette_to_rgbs(palette: &str) -> Result<Vec<Rgb>> {
    let codes = default_table()
        .palette(palette)
        .ok_or_else(|| ColorError::UnknownPalette {
            palette: palette.to_string(),
        })?;
    codes.iter().map(|code| hex_to_rgb(code)).collect()
}

/// Yields a lightness ramp for the hue and saturation of `hsl`.
///
/// With `size > 1` the ramp has `size` steps spanning lightness `0.0` to
/// `1.0` inclusive, so it always starts at black and ends at white. With
/// `size <= 1` it yields the single color at the given lightness.
#[allow(clippy::cast_precision_loss)]
pub fn hsl_to_rgb_shades(hsl: Hsl, size: usize) -> impl Iterator<Item = Rgb> + Clone {
    let last = size.checked_sub(1).filter(|&last| last > 0);
    let count = last.map_or(1, |last| last + 1);
    (0..count).map(move |index| {
        let l = last.map_or(hsl.l, |last| index as f64 / last as f64);
        hsl_to_rgb(Hsl { l, ..hsl })
    })
}
