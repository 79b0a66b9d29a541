//! ICC profile wrapper.

use crate::{IccError, IccResult};
use lcms2::{ColorSpaceSignature, Profile as LcmsProfile};
use std::path::{Path, PathBuf};

/// An ICC color profile.
///
/// Either the destination device profile loaded from disk, or the built-in
/// sRGB profile used as the source side of every round trip.
///
/// # Example
///
/// ```rust,no_run
/// use printsafe_icc::Profile;
/// use std::path::Path;
///
/// let profile = Profile::from_file(Path::new("press.icc")).unwrap();
/// assert!(profile.is_cmyk());
/// println!("{} ({})", profile.description(), profile.base_name());
/// ```
pub struct Profile {
    /// Internal lcms2 profile handle.
    pub(crate) inner: LcmsProfile,
    /// Where the profile was loaded from, if from a file.
    path: Option<PathBuf>,
}

impl Profile {
    /// Loads a profile from an ICC file.
    ///
    /// # Errors
    ///
    /// [`IccError::Io`] when the file cannot be accessed,
    /// [`IccError::LoadFailed`] when it is not a usable profile.
    pub fn from_file(path: &Path) -> IccResult<Self> {
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Err(IccError::LoadFailed(format!("{}: not a file", path.display())));
        }
        let inner = LcmsProfile::new_file(path)
            .map_err(|e| IccError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            inner,
            path: Some(path.to_path_buf()),
        })
    }

    /// The standard IEC 61966-2-1 sRGB profile.
    pub fn srgb() -> Self {
        Self {
            inner: LcmsProfile::new_srgb(),
            path: None,
        }
    }

    /// Returns the profile description.
    pub fn description(&self) -> String {
        self.inner
            .info(lcms2::InfoType::Description, lcms2::Locale::none())
            .unwrap_or_default()
    }

    /// Returns the color space signature.
    pub fn color_space(&self) -> String {
        format!("{:?}", self.inner.color_space())
    }

    /// Returns true if this is an RGB profile.
    pub fn is_rgb(&self) -> bool {
        matches!(self.inner.color_space(), ColorSpaceSignature::RgbData)
    }

    /// Returns true if this is a CMYK profile.
    pub fn is_cmyk(&self) -> bool {
        matches!(self.inner.color_space(), ColorSpaceSignature::CmykData)
    }

    /// Path the profile was loaded from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name without extension, used to name generated palettes.
    ///
    /// Falls back to the description (or `"profile"`) for in-memory profiles.
    pub fn base_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| {
                let desc = self.description();
                if desc.is_empty() { "profile".to_string() } else { desc }
            })
    }

    /// Exports the profile as ICC data.
    pub fn to_icc(&self) -> IccResult<Vec<u8>> {
        self.inner
            .icc()
            .map_err(|e| IccError::InvalidProfile(e.to_string()))
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("description", &self.description())
            .field("color_space", &self.color_space())
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb() {
        let profile = Profile::srgb();
        assert!(profile.is_rgb());
        assert!(!profile.is_cmyk());
        assert!(!profile.description().is_empty());
        assert!(profile.path().is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = Profile::from_file(Path::new("/nonexistent/press.icc")).unwrap_err();
        assert!(matches!(err, IccError::Io(_)));
    }

    #[test]
    fn test_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.icc");
        std::fs::write(&path, b"definitely not an icc profile").unwrap();
        let err = Profile::from_file(&path).unwrap_err();
        assert!(matches!(err, IccError::LoadFailed(_)));
    }

    #[test]
    fn test_file_roundtrip_and_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("My Screen.icm");
        std::fs::write(&path, Profile::srgb().to_icc().unwrap()).unwrap();

        let loaded = Profile::from_file(&path).unwrap();
        assert!(loaded.is_rgb());
        assert_eq!(loaded.base_name(), "My Screen");
        assert_eq!(loaded.path(), Some(path.as_path()));
    }
}
