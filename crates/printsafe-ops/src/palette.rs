//! Printable palettes.
//!
//! Seeds (greys, a hue wheel at several lightness levels, skin tones) are
//! pushed through the device round trip; what comes back is by construction
//! reproducible on the device. The result is written as a GIMP palette,
//! which Inkscape loads as swatches.

use printsafe_core::{Rgb, RoundTrip};
use std::fmt::Write as _;
use tracing::debug;

/// Grey ramp seeds.
pub const GRAY_LEVELS: [u8; 9] = [0, 32, 64, 96, 128, 160, 192, 224, 248];

/// Closed hue loop; the last anchor repeats the first.
pub const HUE_ANCHORS: [Rgb; 9] = [
    Rgb::new(255, 40, 40),
    Rgb::new(255, 140, 30),
    Rgb::new(255, 225, 35),
    Rgb::new(60, 200, 50),
    Rgb::new(40, 200, 200),
    Rgb::new(60, 100, 230),
    Rgb::new(170, 70, 200),
    Rgb::new(230, 50, 120),
    Rgb::new(255, 40, 40),
];

/// Light to dark skin tone seeds.
pub const SKIN_TONES: [Rgb; 5] = [
    Rgb::new(244, 219, 196),
    Rgb::new(210, 170, 140),
    Rgb::new(172, 126, 98),
    Rgb::new(130, 89, 66),
    Rgb::new(92, 62, 47),
];

/// Default palette name prefix.
pub const DEFAULT_PALETTE_NAME: &str = "PrintSafe";

/// Builds the seed list.
///
/// `density` sets the interpolation steps between hue anchors (clamped to
/// 3..=12) and, at 6 or more, adds a third lightness level.
pub fn palette_seeds(density: u32, include_gray: bool, include_skin: bool) -> Vec<Rgb> {
    let steps = density.clamp(3, 12);
    let levels: &[f64] = if density >= 6 {
        &[0.85, 0.65, 0.45]
    } else {
        &[0.8, 0.6]
    };

    let mut seeds = Vec::new();
    if include_gray {
        seeds.extend(GRAY_LEVELS.iter().map(|&v| Rgb::gray(v)));
    }
    for pair in HUE_ANCHORS.windows(2) {
        for s in 0..steps {
            let base = pair[0].lerp(pair[1], f64::from(s) / f64::from(steps));
            seeds.extend(levels.iter().map(|&k| base.scale(k)));
        }
    }
    if include_skin {
        seeds.extend(SKIN_TONES);
    }
    seeds
}

/// A named, deduplicated list of printable colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<Rgb>,
}

impl Palette {
    /// Round-trips `seeds` and keeps each result once, in first-seen order.
    ///
    /// The palette is named `{name_hint}_{profile_base}`.
    pub fn build<O: RoundTrip + ?Sized>(
        oracle: &O,
        name_hint: &str,
        profile_base: &str,
        seeds: &[Rgb],
    ) -> Self {
        let mut seen = std::collections::HashSet::with_capacity(seeds.len());
        let colors: Vec<Rgb> = seeds
            .iter()
            .map(|&rgb| oracle.round_trip(rgb))
            .filter(|rgb| seen.insert(*rgb))
            .collect();
        debug!(seeds = seeds.len(), colors = colors.len(), "palette built");
        Self {
            name: format!("{name_hint}_{profile_base}"),
            colors,
        }
    }

    /// Palette name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Colors in order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` if there are no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// File name the palette is saved under.
    pub fn file_name(&self) -> String {
        format!("{}.gpl", self.name)
    }

    /// Renders the palette in GIMP `.gpl` format.
    pub fn to_gpl(&self) -> String {
        let mut out = String::with_capacity(64 + self.colors.len() * 24);
        out.push_str("GIMP Palette\n");
        let _ = writeln!(out, "Name: {}", self.name);
        out.push_str("# Generated by Print-Safe\n");
        for c in &self.colors {
            let _ = writeln!(out, "{:3} {:3} {:3}\t{},{},{}", c.r, c.g, c.b, c.r, c.g, c.b);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl RoundTrip for Identity {
        fn round_trip(&self, rgb: Rgb) -> Rgb {
            rgb
        }
    }

    /// Snaps channels to multiples of 64, collapsing many seeds.
    struct Coarse;

    impl RoundTrip for Coarse {
        fn round_trip(&self, rgb: Rgb) -> Rgb {
            Rgb::new(rgb.r & 0xC0, rgb.g & 0xC0, rgb.b & 0xC0)
        }
    }

    #[test]
    fn test_seed_counts() {
        // 8 anchor pairs x steps x levels
        assert_eq!(palette_seeds(3, false, false).len(), 8 * 3 * 2);
        assert_eq!(palette_seeds(7, false, false).len(), 8 * 7 * 3);
        assert_eq!(palette_seeds(7, true, true).len(), 9 + 8 * 7 * 3 + 5);
        // steps clamp at 12
        assert_eq!(palette_seeds(40, false, false).len(), 8 * 12 * 3);
    }

    #[test]
    fn test_seed_order_and_values() {
        let seeds = palette_seeds(3, true, true);
        assert_eq!(seeds[0], Rgb::BLACK);
        assert_eq!(seeds[8], Rgb::gray(248));
        // first anchor at t = 0, k = 0.8: (204, 32, 32)
        assert_eq!(seeds[9], Rgb::new(204, 32, 32));
        // k = 0.6: (153, 24, 24)
        assert_eq!(seeds[10], Rgb::new(153, 24, 24));
        // t = 1/3 toward (255,140,30): (255, 73, 36) -> x0.8 = (204, 58, 28)
        assert_eq!(seeds[11], Rgb::new(204, 58, 28));
        assert_eq!(*seeds.last().unwrap(), Rgb::new(92, 62, 47));
    }

    #[test]
    fn test_build_dedups_in_order() {
        let seeds = [Rgb::new(10, 10, 10), Rgb::new(70, 0, 0), Rgb::new(5, 5, 5), Rgb::new(100, 0, 0)];
        let p = Palette::build(&Coarse, "PrintSafe", "FOGRA39", &seeds);
        assert_eq!(p.colors(), &[Rgb::BLACK, Rgb::new(64, 0, 0)]);
        assert_eq!(p.name(), "PrintSafe_FOGRA39");
        assert_eq!(p.file_name(), "PrintSafe_FOGRA39.gpl");
    }

    #[test]
    fn test_gpl_format() {
        let p = Palette::build(&Identity, "X", "p", &[Rgb::new(5, 120, 255), Rgb::BLACK]);
        assert_eq!(
            p.to_gpl(),
            "GIMP Palette\nName: X_p\n# Generated by Print-Safe\n  5 120 255\t5,120,255\n  0   0   0\t0,0,0\n"
        );
    }

    #[test]
    fn test_deterministic() {
        let seeds = palette_seeds(3, false, false);
        let a = Palette::build(&Coarse, "PrintSafe", "p", &seeds);
        let b = Palette::build(&Coarse, "PrintSafe", "p", &seeds);
        assert_eq!(a, b);
        assert_eq!(a.to_gpl(), b.to_gpl());
    }
}
