//! Run configuration.

use crate::palette::DEFAULT_PALETTE_NAME;
use crate::OpsError;
use printsafe_core::DEFAULT_THRESHOLD;
use printsafe_icc::Intent;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What a run does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Flag elements whose paint does not survive the device round trip.
    #[default]
    Validate,
    /// Generate a printable palette for the device.
    Palette,
    /// Remove flags and restore prior strokes.
    Clear,
}

impl Action {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Validate => "validate",
            Action::Palette => "palette",
            Action::Clear => "clear",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "validate" => Ok(Action::Validate),
            "palette" => Ok(Action::Palette),
            "clear" => Ok(Action::Clear),
            other => Err(OpsError::UnknownAction(other.to_string())),
        }
    }
}

/// Options for one run.
///
/// `Default` gives the documented defaults; call [`RunOptions::normalized`]
/// before use to bring host-supplied values into range.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Action to perform.
    pub action: Action,
    /// Destination CMYK profile.
    pub icc_path: Option<PathBuf>,
    /// Marker stroke width in pixels.
    pub flag_width_px: u32,
    /// Palette name prefix.
    pub palette_name: String,
    /// Palette density.
    pub palette_density: u32,
    /// Add the grey ramp to the palette.
    pub include_gray: bool,
    /// Add skin tones to the palette.
    pub include_skin: bool,
    /// Round-trip drift above which a sample is out of gamut.
    pub threshold: f64,
    /// Rendering intent for the device transforms.
    pub intent: Intent,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            action: Action::default(),
            icc_path: None,
            flag_width_px: 6,
            palette_name: DEFAULT_PALETTE_NAME.to_string(),
            palette_density: 7,
            include_gray: true,
            include_skin: false,
            threshold: DEFAULT_THRESHOLD,
            intent: Intent::default(),
        }
    }
}

impl RunOptions {
    /// Clamps values into range: width at least 1, density 3..=10, a blank
    /// name or path treated as unset, a non-finite or negative threshold
    /// replaced by the default.
    pub fn normalized(mut self) -> Self {
        self.flag_width_px = self.flag_width_px.max(1);
        self.palette_density = self.palette_density.clamp(3, 10);
        let name = self.palette_name.trim();
        self.palette_name = if name.is_empty() {
            DEFAULT_PALETTE_NAME.to_string()
        } else {
            name.to_string()
        };
        self.icc_path = self
            .icc_path
            .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty());
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            self.threshold = DEFAULT_THRESHOLD;
        }
        self
    }
}
