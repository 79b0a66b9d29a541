//! sRGB <-> device CMYK transforms.

use crate::{IccError, IccResult, Intent, Profile};
use lcms2::{Flags, PixelFormat, Transform as LcmsTransform};
use printsafe_core::Rgb;
use tracing::{debug, trace};

/// The ways a transform pair is attempted, in order.
///
/// Some device profiles only carry tables for a subset of intents, and some
/// fail pipeline optimization; each later variant relaxes one of those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    /// Requested intent, default flags.
    Requested,
    /// Requested intent, optimization disabled.
    Unoptimized,
    /// Engine default intent, optimization disabled.
    DefaultIntent,
}

const VARIANTS: [Variant; 3] = [Variant::Requested, Variant::Unoptimized, Variant::DefaultIntent];

/// A pair of 8-bit transforms between sRGB and a CMYK device profile.
///
/// Built once per run; every conversion is one pixel through the forward
/// transform and one back through the inverse.
///
/// # Example
///
/// ```rust,no_run
/// use printsafe_icc::{DeviceTransforms, Intent, Profile};
/// use printsafe_core::Rgb;
/// use std::path::Path;
///
/// let device = Profile::from_file(Path::new("press.icc")).unwrap();
/// let xf = DeviceTransforms::new(&Profile::srgb(), &device, Intent::Perceptual).unwrap();
///
/// let cmyk = xf.rgb_to_cmyk(Rgb::new(255, 0, 0));
/// let back = xf.cmyk_to_rgb(cmyk);
/// ```
pub struct DeviceTransforms {
    forward: LcmsTransform<[u8; 3], [u8; 4]>,
    inverse: LcmsTransform<[u8; 4], [u8; 3]>,
    intent: Intent,
}

impl DeviceTransforms {
    /// Builds the forward (RGB -> CMYK) and inverse (CMYK -> RGB) transforms.
    ///
    /// Tries each construction variant in turn and keeps the first pair that
    /// builds completely. Never returns a half-built pair.
    ///
    /// # Errors
    ///
    /// [`IccError::ColorSpaceMismatch`] if `device` is not CMYK or `source`
    /// is not RGB; [`IccError::TransformFailed`] listing every attempt if no
    /// variant succeeds.
    pub fn new(source: &Profile, device: &Profile, intent: Intent) -> IccResult<Self> {
        if !source.is_rgb() {
            return Err(IccError::ColorSpaceMismatch {
                expected: "RgbData".into(),
                actual: source.color_space(),
            });
        }
        if !device.is_cmyk() {
            return Err(IccError::ColorSpaceMismatch {
                expected: "CmykData".into(),
                actual: device.color_space(),
            });
        }

        let mut failures = Vec::new();
        for variant in VARIANTS {
            if variant == Variant::DefaultIntent && intent == Intent::default() {
                continue;
            }
            match Self::build(source, device, intent, variant) {
                Ok(pair) => {
                    debug!(?variant, intent = pair.intent.as_str(), "device transforms built");
                    return Ok(pair);
                }
                Err(e) => {
                    trace!(?variant, error = %e, "transform variant failed");
                    failures.push(format!("{variant:?}: {e}"));
                }
            }
        }

        Err(IccError::TransformFailed(format!(
            "no compatible transform for '{}' ({})",
            device.description(),
            failures.join("; ")
        )))
    }

    fn build(
        source: &Profile,
        device: &Profile,
        intent: Intent,
        variant: Variant,
    ) -> Result<Self, lcms2::Error> {
        let intent = match variant {
            Variant::DefaultIntent => Intent::default(),
            Variant::Requested | Variant::Unoptimized => intent,
        };

        let (forward, inverse) = if variant == Variant::Requested {
            (
                LcmsTransform::new(
                    &source.inner,
                    PixelFormat::RGB_8,
                    &device.inner,
                    PixelFormat::CMYK_8,
                    intent.into(),
                )?,
                LcmsTransform::new(
                    &device.inner,
                    PixelFormat::CMYK_8,
                    &source.inner,
                    PixelFormat::RGB_8,
                    intent.into(),
                )?,
            )
        } else {
            (
                LcmsTransform::new_flags(
                    &source.inner,
                    PixelFormat::RGB_8,
                    &device.inner,
                    PixelFormat::CMYK_8,
                    intent.into(),
                    Flags::NO_OPTIMIZE,
                )?,
                LcmsTransform::new_flags(
                    &device.inner,
                    PixelFormat::CMYK_8,
                    &source.inner,
                    PixelFormat::RGB_8,
                    intent.into(),
                    Flags::NO_OPTIMIZE,
                )?,
            )
        };

        Ok(Self { forward, inverse, intent })
    }

    /// Intent the pair was actually built with.
    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// Converts one sRGB sample to device CMYK.
    pub fn rgb_to_cmyk(&self, rgb: Rgb) -> [u8; 4] {
        let src = [rgb.to_array()];
        let mut dst = [[0u8; 4]];
        self.forward.transform_pixels(&src, &mut dst);
        dst[0]
    }

    /// Converts one device CMYK sample back to sRGB.
    pub fn cmyk_to_rgb(&self, cmyk: [u8; 4]) -> Rgb {
        let src = [cmyk];
        let mut dst = [[0u8; 3]];
        self.inverse.transform_pixels(&src, &mut dst);
        Rgb::from(dst[0])
    }
}

impl std::fmt::Debug for DeviceTransforms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceTransforms")
            .field("intent", &self.intent)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_rgb_device() {
        let err = DeviceTransforms::new(&Profile::srgb(), &Profile::srgb(), Intent::Perceptual)
            .unwrap_err();
        match err {
            IccError::ColorSpaceMismatch { expected, actual } => {
                assert_eq!(expected, "CmykData");
                assert_eq!(actual, "RgbData");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_variant_order() {
        assert_eq!(VARIANTS[0], Variant::Requested);
        assert_eq!(VARIANTS[2], Variant::DefaultIntent);
    }
}
