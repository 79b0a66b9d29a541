//! The gamut oracle: sRGB -> device CMYK -> sRGB.

use crate::{DeviceTransforms, IccResult, Intent, Profile};
use printsafe_core::{Rgb, RoundTrip};
use std::path::Path;
use tracing::debug;

/// Round-trips sRGB samples through a CMYK device profile.
///
/// Built once per validation or palette run. Conversions are single pixels;
/// nothing is cached beyond the two transforms themselves.
///
/// # Example
///
/// ```rust,no_run
/// use printsafe_core::{Rgb, RoundTrip};
/// use printsafe_icc::{GamutOracle, Intent};
/// use std::path::Path;
///
/// let oracle = GamutOracle::from_file(Path::new("press.icc"), Intent::default()).unwrap();
/// let check = oracle.check(Rgb::new(255, 0, 0));
/// println!("{} -> {} (drift {:.1})", check.original, check.round_tripped, check.distance);
/// ```
#[derive(Debug)]
pub struct GamutOracle {
    transforms: DeviceTransforms,
    device: Profile,
}

impl GamutOracle {
    /// Loads the device profile at `path` and builds the round trip.
    ///
    /// # Errors
    ///
    /// Fails if the profile cannot be loaded, is not CMYK, or no transform
    /// variant can be built.
    pub fn from_file(path: &Path, intent: Intent) -> IccResult<Self> {
        let device = Profile::from_file(path)?;
        Self::new(device, intent)
    }

    /// Builds the round trip for an already loaded device profile.
    pub fn new(device: Profile, intent: Intent) -> IccResult<Self> {
        let transforms = DeviceTransforms::new(&Profile::srgb(), &device, intent)?;
        debug!(
            profile = %device.description(),
            intent = transforms.intent().as_str(),
            "gamut oracle ready"
        );
        Ok(Self { transforms, device })
    }

    /// The destination device profile.
    pub fn device(&self) -> &Profile {
        &self.device
    }

    /// Intent the transforms were built with.
    pub fn intent(&self) -> Intent {
        self.transforms.intent()
    }
}

impl RoundTrip for GamutOracle {
    fn round_trip(&self, rgb: Rgb) -> Rgb {
        let cmyk = self.transforms.rgb_to_cmyk(rgb);
        self.transforms.cmyk_to_rgb(cmyk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IccError;
    use printsafe_core::DEFAULT_THRESHOLD;
    use std::path::PathBuf;

    #[test]
    fn test_missing_profile_fails() {
        let err = GamutOracle::from_file(Path::new("/nonexistent/press.icc"), Intent::default())
            .unwrap_err();
        assert!(matches!(err, IccError::Io(_)));
    }

    #[test]
    fn test_rgb_profile_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sRGB.icc");
        std::fs::write(&path, Profile::srgb().to_icc().unwrap()).unwrap();

        let err = GamutOracle::from_file(&path, Intent::default()).unwrap_err();
        assert!(matches!(err, IccError::ColorSpaceMismatch { .. }));
    }

    /// Exercises a real CMYK profile when one is provided through
    /// `PRINTSAFE_TEST_CMYK_ICC`; skipped otherwise.
    #[test]
    fn test_real_cmyk_profile() {
        let Some(path) = std::env::var_os("PRINTSAFE_TEST_CMYK_ICC").map(PathBuf::from) else {
            eprintln!("SKIP: PRINTSAFE_TEST_CMYK_ICC not set");
            return;
        };
        let oracle = GamutOracle::from_file(&path, Intent::default()).unwrap();
        assert!(oracle.device().is_cmyk());

        // Pure functions of their input.
        let red = Rgb::new(255, 0, 0);
        assert_eq!(oracle.check(red), oracle.check(red));
        assert_eq!(
            oracle.is_out_of_gamut(red, DEFAULT_THRESHOLD),
            oracle.is_out_of_gamut(red, DEFAULT_THRESHOLD)
        );

        // Mid grey prints on any sane press profile.
        let grey = Rgb::gray(128);
        assert!(!oracle.is_out_of_gamut(grey, DEFAULT_THRESHOLD).0);
    }
}
