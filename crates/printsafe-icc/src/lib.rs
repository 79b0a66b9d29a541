//! # printsafe-icc
//!
//! Device round trips through a CMYK output profile.
//!
//! This crate wraps Little CMS 2 (via the `lcms2` crate) just far enough to
//! answer one question: does an sRGB color survive a trip to the device's
//! CMYK space and back?
//!
//! # Example
//!
//! ```rust,no_run
//! use printsafe_core::{Rgb, RoundTrip, DEFAULT_THRESHOLD};
//! use printsafe_icc::{GamutOracle, Intent};
//! use std::path::Path;
//!
//! let oracle = GamutOracle::from_file(Path::new("CoatedFOGRA39.icc"), Intent::default()).unwrap();
//!
//! let (out, back) = oracle.is_out_of_gamut(Rgb::new(0, 255, 0), DEFAULT_THRESHOLD);
//! if out {
//!     println!("pure green prints as {back}");
//! }
//! ```
//!
//! # Rendering intent
//!
//! No intent is selected by the host; the transforms use the engine default
//! ([`Intent::Perceptual`]). Other intents are available for callers that want
//! them, but the default is kept as-is.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod gamut;
mod profile;
mod transform;

pub use error::{IccError, IccResult};
pub use gamut::GamutOracle;
pub use profile::Profile;
pub use transform::DeviceTransforms;

use std::str::FromStr;

/// Rendering intent for device transforms.
///
/// Determines how out-of-gamut colors are mapped into the device gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    /// Compresses the source gamut to fit the destination.
    ///
    /// Engine default when nothing else is requested.
    #[default]
    Perceptual,

    /// Clips out-of-gamut colors to the nearest reproducible color.
    RelativeColorimetric,

    /// Maintains saturation at the expense of accuracy.
    Saturation,

    /// Like relative colorimetric, without white point adaptation.
    AbsoluteColorimetric,
}

impl Intent {
    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Perceptual => "perceptual",
            Intent::RelativeColorimetric => "relative",
            Intent::Saturation => "saturation",
            Intent::AbsoluteColorimetric => "absolute",
        }
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perceptual" | "0" => Ok(Intent::Perceptual),
            "relative" | "relative-colorimetric" | "relative_colorimetric" | "1" => {
                Ok(Intent::RelativeColorimetric)
            }
            "saturation" | "2" => Ok(Intent::Saturation),
            "absolute" | "absolute-colorimetric" | "absolute_colorimetric" | "3" => {
                Ok(Intent::AbsoluteColorimetric)
            }
            other => Err(format!(
                "unknown rendering intent '{other}'. Use: perceptual, relative, saturation, absolute"
            )),
        }
    }
}

impl From<Intent> for lcms2::Intent {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Perceptual => lcms2::Intent::Perceptual,
            Intent::RelativeColorimetric => lcms2::Intent::RelativeColorimetric,
            Intent::Saturation => lcms2::Intent::Saturation,
            Intent::AbsoluteColorimetric => lcms2::Intent::AbsoluteColorimetric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_parse() {
        assert_eq!("perceptual".parse::<Intent>(), Ok(Intent::Perceptual));
        assert_eq!("Relative".parse::<Intent>(), Ok(Intent::RelativeColorimetric));
        assert_eq!("3".parse::<Intent>(), Ok(Intent::AbsoluteColorimetric));
        assert!("vivid".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_roundtrip_names() {
        for intent in [
            Intent::Perceptual,
            Intent::RelativeColorimetric,
            Intent::Saturation,
            Intent::AbsoluteColorimetric,
        ] {
            assert_eq!(intent.as_str().parse::<Intent>(), Ok(intent));
        }
        assert_eq!(Intent::default(), Intent::Perceptual);
    }
}
