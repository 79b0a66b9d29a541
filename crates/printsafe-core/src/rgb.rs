//! 8-bit RGB samples.
//!
//! [`Rgb`] is the one color value that flows through the whole pipeline:
//! parsed from style declarations, pushed through the device round trip,
//! compared for gamut distance and deduplicated into palettes.
//!
//! # Example
//!
//! ```
//! use printsafe_core::Rgb;
//!
//! let magenta = Rgb::new(255, 0, 255);
//! assert_eq!(magenta.to_hex(), "#FF00FF");
//! assert_eq!(magenta.distance(magenta), 0.0);
//! ```

use std::fmt;

/// An sRGB color with 8 bits per channel.
///
/// Immutable value type. Equality, ordering and hashing are by channel value,
/// so a `HashSet<Rgb>` deduplicates colors directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a neutral grey.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Channels as an array, the layout the transform engine consumes.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Uppercase `#RRGGBB` notation.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Euclidean distance in RGB channel space.
    ///
    /// Not a perceptual metric; it is the round-trip drift measure used by
    /// the gamut check.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Multiplies every channel by `k`, truncating toward zero.
    ///
    /// Results are clamped to the channel range so `k > 1.0` saturates.
    pub fn scale(self, k: f64) -> Rgb {
        let s = |c: u8| (f64::from(c) * k).clamp(0.0, 255.0) as u8;
        Rgb::new(s(self.r), s(self.g), s(self.b))
    }

    /// Linear interpolation toward `other`, truncating each channel.
    ///
    /// `t = 0.0` yields `self`, `t = 1.0` yields `other`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let l = |a: u8, b: u8| {
            let a = f64::from(a);
            (a + (f64::from(b) - a) * t).clamp(0.0, 255.0) as u8
        };
        Rgb::new(l(self.r, other.r), l(self.g, other.g), l(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}
