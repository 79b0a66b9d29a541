//! `palette` action

use super::load_oracle;
use anyhow::{bail, Context, Result};
use printsafe_ops::{messages, OpsError, Outcome, Palette, RunOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Per-user Inkscape palette directory.
pub fn default_palette_dir() -> Result<PathBuf> {
    let dir = if cfg!(windows) {
        dirs::config_dir().map(|appdata| appdata.join("Inkscape").join("palettes"))
    } else {
        dirs::home_dir().map(|home| home.join(".config").join("inkscape").join("palettes"))
    };
    dir.context("Cannot determine the user palette directory")
}

/// Writes `palette` into `dir` (created if missing) and returns the path.
///
/// The text goes to a temporary sibling first and is renamed into place, so
/// a failed write never leaves a truncated palette under the final name.
pub fn save(palette: &Palette, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create: {}", dir.display()))?;
    let path = dir.join(palette.file_name());
    let tmp = dir.join(format!(".{}.tmp", palette.file_name()));

    fs::write(&tmp, palette.to_gpl()).with_context(|| format!("Failed to write: {}", tmp.display()))?;
    if let Err(err) = fs::rename(&tmp, &path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("Failed to save: {}", path.display()));
    }
    Ok(path)
}

/// Builds and saves the palette, returning the status message.
///
/// Failures after the profile path check are reported, not raised.
pub fn run(opts: &RunOptions, dir: Option<&Path>) -> Result<String> {
    let palette = match printsafe_ops::run(None, opts, load_oracle) {
        Ok(Outcome::PaletteBuilt(palette)) => palette,
        Ok(other) => bail!("unexpected outcome: {other:?}"),
        Err(OpsError::InvalidProfilePath(path)) => {
            warn!(?path, "abort: bad ICC");
            return Ok(messages::BAD_PROFILE.to_string());
        }
        Err(err) => {
            warn!(error = %err, "palette FAIL");
            return Ok(messages::palette_failed(&err));
        }
    };

    let saved = match dir {
        Some(dir) => save(&palette, dir),
        None => default_palette_dir().and_then(|dir| save(&palette, &dir)),
    };
    match saved {
        Ok(path) => {
            info!(path = %path.display(), colors = palette.len(), "palette OK");
            Ok(messages::palette_written(&path))
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "palette FAIL");
            Ok(messages::palette_failed(&format!("{err:#}")))
        }
    }
}
