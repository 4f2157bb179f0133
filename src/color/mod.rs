// File: ./src/color/mod.rs
// Conversions between hex strings, RGB and HSL
pub mod contrast;

pub use contrast::{
    ContrastGrade, contrast_ratio, format_ratio, relative_luminance, text_color_for_background,
};

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color '{0}': expected #RRGGBB")]
    InvalidHex(String),
}

/// sRGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// HSL color. Hue in degrees [0, 360), saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Wraps the hue into [0, 360) and clamps saturation/lightness to 100.
    pub fn new(h: i32, s: u8, l: u8) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Same saturation and lightness, hue turned by `degrees` (may be negative).
    pub fn rotate(&self, degrees: i32) -> Self {
        Self::new(self.h as i32 + degrees, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f64;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let l = (max + min) / 2.0;

    // Achromatic: channels are equal
    if rgb.r == rgb.g && rgb.g == rgb.b {
        return Hsl::new(0, 0, (l * 100.0).round() as u8);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) * 60.0
    } else if max == g {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    Hsl::new(
        h.round() as i32,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// Parses `#RRGGBB` (the `#` is optional, digits are case-insensitive).
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Ok(rgb_to_hsl(hex_to_rgb(hex)?))
}

/// Lower-case `#rrggbb` form of any accepted hex input.
pub fn canonical_hex(hex: &str) -> Result<String, ColorError> {
    Ok(rgb_to_hex(hex_to_rgb(hex)?))
}

/// Matches what a user may have typed so far: `#` plus up to six hex digits.
/// A missing leading `#` is tolerated.
pub fn is_partial_hex(text: &str) -> bool {
    let digits = text.strip_prefix('#').unwrap_or(text);
    digits.len() <= 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Prefixes `#` when missing. Returns `None` for text that can never become a color.
pub fn normalize_hex_input(text: &str) -> Option<String> {
    if !is_partial_hex(text) {
        return None;
    }
    if text.starts_with('#') {
        Some(text.to_string())
    } else {
        Some(format!("#{}", text))
    }
}
