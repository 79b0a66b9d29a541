//! Gamut checks over a color round trip.
//!
//! A device reproduces a color faithfully when sending it to device space and
//! back lands near where it started. [`RoundTrip`] is the seam for that
//! conversion: `printsafe-icc` implements it with Little CMS transforms, and
//! tests implement it with plain functions.
//!
//! The drift measure is the Euclidean RGB distance ([`Rgb::distance`]); a
//! sample is out of gamut when the drift strictly exceeds the threshold.
//! [`DEFAULT_THRESHOLD`] is an empirical perceptible-shift cutoff, not a
//! calibrated perceptual tolerance.
//!
//! # Example
//!
//! ```
//! use printsafe_core::{Rgb, RoundTrip, DEFAULT_THRESHOLD};
//!
//! /// A device that cannot print pure red.
//! struct DullRed;
//!
//! impl RoundTrip for DullRed {
//!     fn round_trip(&self, rgb: Rgb) -> Rgb {
//!         if rgb == Rgb::new(255, 0, 0) { Rgb::new(180, 40, 30) } else { rgb }
//!     }
//! }
//!
//! let (out, back) = DullRed.is_out_of_gamut(Rgb::new(255, 0, 0), DEFAULT_THRESHOLD);
//! assert!(out);
//! assert_eq!(back, Rgb::new(180, 40, 30));
//! ```

use crate::Rgb;

/// Default round-trip tolerance in RGB channel units.
pub const DEFAULT_THRESHOLD: f64 = 20.0;

/// Outcome of pushing one sample through a [`RoundTrip`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutCheck {
    /// The sample as given.
    pub original: Rgb,
    /// The sample after device space and back.
    pub round_tripped: Rgb,
    /// Euclidean RGB distance between the two.
    pub distance: f64,
}

impl GamutCheck {
    /// Builds a check from a sample and its round-tripped value.
    pub fn new(original: Rgb, round_tripped: Rgb) -> Self {
        Self {
            original,
            round_tripped,
            distance: original.distance(round_tripped),
        }
    }

    /// `true` when the drift strictly exceeds `threshold`.
    #[inline]
    pub fn is_out_of_gamut(&self, threshold: f64) -> bool {
        self.distance > threshold
    }
}

/// A source RGB -> device -> source RGB conversion.
///
/// Implementations must be pure: the same input always yields the same
/// output for the lifetime of the value.
pub trait RoundTrip {
    /// Converts one sample to device space and back.
    fn round_trip(&self, rgb: Rgb) -> Rgb;

    /// Round-trips `rgb` and measures the drift.
    fn check(&self, rgb: Rgb) -> GamutCheck {
        GamutCheck::new(rgb, self.round_trip(rgb))
    }

    /// Returns whether `rgb` drifts more than `threshold`, plus the
    /// round-tripped value.
    fn is_out_of_gamut(&self, rgb: Rgb, threshold: f64) -> (bool, Rgb) {
        let check = self.check(rgb);
        (check.is_out_of_gamut(threshold), check.round_tripped)
    }
}

impl<T: RoundTrip + ?Sized> RoundTrip for &T {
    fn round_trip(&self, rgb: Rgb) -> Rgb {
        (**self).round_trip(rgb)
    }
}

impl<T: RoundTrip + ?Sized> RoundTrip for Box<T> {
    fn round_trip(&self, rgb: Rgb) -> Rgb {
        (**self).round_trip(rgb)
    }
}
