//! Textual color parsing.
//!
//! Normalizes the color encodings found in SVG style declarations into an
//! [`Rgb`] sample. The fast path handles the three encodings editors emit
//! most (`#RRGGBB`, `#RGB`, integer `rgb()`); everything else goes through a
//! generic resolver backed by the [`palette`] crate (named colors, `hsl()`,
//! percentage `rgb()`, hex with alpha).
//!
//! Unparsable input is a normal outcome, never an error: callers simply skip
//! colors that yield `None`.
//!
//! # Example
//!
//! ```
//! use printsafe_core::{parse_color, Rgb};
//!
//! assert_eq!(parse_color("#FF00FF"), Some(Rgb::new(255, 0, 255)));
//! assert_eq!(parse_color("#f0c"), Some(Rgb::new(255, 0, 204)));
//! assert_eq!(parse_color("rgb(999,-5,10)"), Some(Rgb::new(255, 0, 10)));
//! assert_eq!(parse_color("teal"), Some(Rgb::new(0, 128, 128)));
//! assert_eq!(parse_color("none"), None);
//! ```

use crate::Rgb;
use palette::{FromColor, Hsl, Srgb};
use regex::Regex;
use std::sync::LazyLock;

static HEX6: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{6})$").expect("valid regex"));
static HEX3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{3})$").expect("valid regex"));
static RGB_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:rgb)\(\s*([+-]?\d+)\s*,\s*([+-]?\d+)\s*,\s*([+-]?\d+)\s*\)$")
        .expect("valid regex")
});
static FUNCTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(rgba?|hsla?)\(\s*(.*?)\s*\)$").expect("valid regex")
});

/// Parses a color string into an [`Rgb`] sample.
///
/// Returns `None` for empty input, `none`, and anything unparsable.
/// Integer `rgb()` components outside `[0, 255]` are clamped.
pub fn parse_color(value: &str) -> Option<Rgb> {
    let s = value.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        return None;
    }

    if let Some(m) = HEX6.captures(s) {
        let v = &m[1];
        return Some(Rgb::new(hex_pair(&v[0..2])?, hex_pair(&v[2..4])?, hex_pair(&v[4..6])?));
    }
    if let Some(m) = HEX3.captures(s) {
        let v = m[1].as_bytes();
        return Some(Rgb::new(hex_digit(v[0])?, hex_digit(v[1])?, hex_digit(v[2])?));
    }
    if let Some(m) = RGB_INT.captures(s) {
        return Some(Rgb::new(clamp_int(&m[1]), clamp_int(&m[2]), clamp_int(&m[3])));
    }

    resolve_generic(s)
}

fn hex_pair(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

/// Single hex digit, duplicated (`f` -> `ff`).
fn hex_digit(c: u8) -> Option<u8> {
    let v = (c as char).to_digit(16)? as u8;
    Some(v * 17)
}

fn clamp_int(s: &str) -> u8 {
    let v = s.parse::<i64>().unwrap_or(if s.starts_with('-') { i64::MIN } else { i64::MAX });
    v.clamp(0, 255) as u8
}

// ============================================================================
// Generic resolver
// ============================================================================

/// Resolves named colors, functional notations and hex-with-alpha.
fn resolve_generic(s: &str) -> Option<Rgb> {
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_alpha(hex);
    }

    if let Some(m) = FUNCTIONAL.captures(s) {
        let func = m[1].to_ascii_lowercase();
        let args = split_args(&m[2]);
        return match func.as_str() {
            "rgb" | "rgba" => parse_rgb_args(&args),
            _ => parse_hsl_args(&args),
        };
    }

    let lower = s.to_ascii_lowercase();
    palette::named::from_str(&lower).map(|c| Rgb::new(c.red, c.green, c.blue))
}

/// `#RGBA` and `#RRGGBBAA`; alpha is dropped.
fn parse_hex_alpha(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        4 => {
            let v = hex.as_bytes();
            Some(Rgb::new(hex_digit(v[0])?, hex_digit(v[1])?, hex_digit(v[2])?))
        }
        8 => Some(Rgb::new(hex_pair(&hex[0..2])?, hex_pair(&hex[2..4])?, hex_pair(&hex[4..6])?)),
        _ => None,
    }
}

/// Splits functional arguments on commas, whitespace and the `/` alpha separator.
fn split_args(body: &str) -> Vec<&str> {
    body.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|a| !a.is_empty())
        .collect()
}

fn parse_rgb_args(args: &[&str]) -> Option<Rgb> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let ch = |a: &str| -> Option<u8> {
        let v = match a.strip_suffix('%') {
            Some(p) => p.parse::<f64>().ok()? / 100.0 * 255.0,
            None => a.parse::<f64>().ok()?,
        };
        if !v.is_finite() {
            return None;
        }
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    Some(Rgb::new(ch(args[0])?, ch(args[1])?, ch(args[2])?))
}

fn parse_hsl_args(args: &[&str]) -> Option<Rgb> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hue = args[0].strip_suffix("deg").unwrap_or(args[0]).parse::<f32>().ok()?;
    let pct = |a: &str| -> Option<f32> {
        let v = a.strip_suffix('%').unwrap_or(a).parse::<f32>().ok()?;
        Some((v / 100.0).clamp(0.0, 1.0))
    };
    let (sat, light) = (pct(args[1])?, pct(args[2])?);
    if !hue.is_finite() {
        return None;
    }

    let rgb: Srgb<f32> = Srgb::from_color(Hsl::new_srgb(hue, sat, light));
    let rgb: Srgb<u8> = rgb.into_format();
    Some(Rgb::new(rgb.red, rgb.green, rgb.blue))
}
