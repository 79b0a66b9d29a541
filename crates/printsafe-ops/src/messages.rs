//! Status messages shown to the user.

use crate::ValidationReport;
use std::fmt::Display;
use std::path::Path;

/// Shown when no usable profile path was given.
pub const BAD_PROFILE: &str =
    "Choose a valid CMYK ICC (.icc/.icm). On Windows: C:\\Windows\\System32\\spool\\drivers\\color";

/// After `clear`.
pub fn cleared(count: usize) -> String {
    format!("Cleared flags on {count} object(s).")
}

/// After `validate`.
pub fn validated(report: &ValidationReport) -> String {
    match (report.flagged, &report.example) {
        (0, _) => "All sampled colors (incl. gradient stops) appear within gamut for this ICC.".into(),
        (1, Some(check)) => format!(
            "Found 1 object out of gamut. Marked with magenta outline (e.g. {} → {}).",
            check.original, check.round_tripped
        ),
        (n, _) => format!("Found {n} object(s) with out-of-gamut colors. Marked with magenta outline."),
    }
}

/// When the device transforms cannot be built for `validate`.
pub fn transform_failed(err: &dyn Display) -> String {
    format!("Failed to use ICC profile:\n{err}")
}

/// After a palette was saved.
pub fn palette_written(path: &Path) -> String {
    format!("Palette written:\n{}\n(Load via View → Swatches.)", path.display())
}

/// When the palette could not be built or saved.
pub fn palette_failed(err: &dyn Display) -> String {
    format!("Palette generation failed:\n{err}")
}
