//! Color model value types.
//!
//! Fractional models keep every component in `0.0..=1.0`; hue is stored as
//! a fraction of a full turn (degrees / 360). All of them serialize as plain
//! JSON arrays.

// r, g, b, h, s, l, v, c, m, y, k are the standard component names.
#![allow(clippy::many_single_char_names)]

use serde::Serialize;

/// 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance in RGB space.
    #[must_use]
    pub fn distance_squared(self, other: [u8; 3]) -> u32 {
        let delta = |a: u8, b: u8| (i32::from(a) - i32::from(b)).unsigned_abs().pow(2);
        delta(self.r, other[0]) + delta(self.g, other[1]) + delta(self.b, other[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(into = "[f64; 3]")]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl From<Hsl> for [f64; 3] {
    fn from(hsl: Hsl) -> Self {
        [hsl.h, hsl.s, hsl.l]
    }
}

/// Hue, saturation, value (brightness).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(into = "[f64; 3]")]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

impl From<Hsv> for [f64; 3] {
    fn from(hsv: Hsv) -> Self {
        [hsv.h, hsv.s, hsv.v]
    }
}

/// Cyan, magenta, yellow, key (black).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(into = "[f64; 4]")]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    #[must_use]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

impl From<Cmyk> for [f64; 4] {
    fn from(cmyk: Cmyk) -> Self {
        [cmyk.c, cmyk.m, cmyk.y, cmyk.k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance() {
        assert_eq!(Rgb::new(0, 0, 0).distance_squared([1, 2, 3]), 14);
        assert_eq!(Rgb::new(255, 0, 0).distance_squared([0, 0, 0]), 65_025);
        assert_eq!(Rgb::new(10, 10, 10).distance_squared([10, 10, 10]), 0);
    }

    #[test]
    fn serializes_as_arrays() {
        assert_eq!(serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap(), "[1,2,3]");
        assert_eq!(
            serde_json::to_string(&Cmyk::new(0.0, 0.0, 0.0, 1.0)).unwrap(),
            "[0.0,0.0,0.0,1.0]"
        );
    }
}
