//! # printsafe-ops
//!
//! The three Print-Safe actions over an SVG document:
//!
//! - **validate**: resolve each element's `fill` and `stroke` to color
//!   samples (gradient stops included), round-trip them through the device
//!   profile and flag elements whose colors drift;
//! - **clear**: remove flags and restore the strokes they replaced;
//! - **palette**: build a palette of colors that survive the round trip.
//!
//! Everything here works against the [`RoundTrip`] trait, so the device can be
//! a real profile (`printsafe_icc::GamutOracle`) or any other oracle.
//!
//! # Example
//!
//! ```
//! use printsafe_core::{Rgb, RoundTrip};
//! use printsafe_ops::{run, Action, Outcome, RunOptions};
//! use printsafe_svg::Document;
//!
//! let mut doc = Document::parse(
//!     r#"<svg><rect style="fill:#000;stroke:#FF00FF;stroke-width:6px" data-printsafe-flag="1"/></svg>"#,
//! ).unwrap();
//!
//! let opts = RunOptions { action: Action::Clear, ..RunOptions::default() };
//! let never = |_: &std::path::Path, _| -> printsafe_icc::IccResult<Box<dyn RoundTrip>> {
//!     unreachable!("clear needs no profile")
//! };
//! let outcome = run(Some(&mut doc), &opts, never).unwrap();
//!
//! assert_eq!(outcome, Outcome::Cleared(1));
//! assert_eq!(doc.to_xml_string().unwrap(), r#"<svg><rect style="fill:#000"/></svg>"#);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod flag;
pub mod messages;
mod options;
pub mod paint;
pub mod palette;
pub mod validate;

pub use error::{OpsError, OpsResult};
pub use flag::{clear_element, clear_flags, flag_element, FlagState};
pub use options::{Action, RunOptions};
pub use paint::{parse_paint, resolve_paint, Paint};
pub use palette::{palette_seeds, Palette};
pub use validate::{validate, ValidationReport};

use printsafe_core::RoundTrip;
use printsafe_icc::{IccResult, Intent};
use printsafe_svg::Document;
use std::path::Path;
use tracing::info;

/// What a run did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Validation finished; the document may have been modified.
    Validated(ValidationReport),
    /// This many flags were cleared.
    Cleared(usize),
    /// A palette was built; saving it is up to the caller.
    PaletteBuilt(Palette),
}

/// Runs one action.
///
/// `opts` is normalized first. The oracle is built through `oracle_factory`
/// from the profile path and intent, only for actions that need it and only
/// after the path is known to be a file. The document is modified in place;
/// nothing else is written.
///
/// # Errors
///
/// - [`OpsError::MissingDocument`] for `validate`/`clear` without a document
/// - [`OpsError::InvalidProfilePath`] if a profile is needed and missing
/// - [`OpsError::Icc`] if the factory fails; the document is untouched then
pub fn run<O, F>(doc: Option<&mut Document>, opts: &RunOptions, oracle_factory: F) -> OpsResult<Outcome>
where
    O: RoundTrip,
    F: FnOnce(&Path, Intent) -> IccResult<O>,
{
    let opts = opts.clone().normalized();
    info!(action = %opts.action, "run");

    match opts.action {
        Action::Clear => {
            let doc = doc.ok_or(OpsError::MissingDocument("clear"))?;
            let count = clear_flags(doc, opts.flag_width_px);
            info!(count, "flags cleared");
            Ok(Outcome::Cleared(count))
        }
        Action::Palette => {
            let path = profile_path(&opts)?;
            let oracle = oracle_factory(path, opts.intent)?;
            let seeds = palette_seeds(opts.palette_density, opts.include_gray, opts.include_skin);
            let palette = Palette::build(&oracle, &opts.palette_name, &profile_base(path), &seeds);
            info!(name = palette.name(), colors = palette.len(), "palette ready");
            Ok(Outcome::PaletteBuilt(palette))
        }
        Action::Validate => {
            let doc = doc.ok_or(OpsError::MissingDocument("validate"))?;
            let path = profile_path(&opts)?;
            let oracle = oracle_factory(path, opts.intent)?;
            let report = validate(doc, &oracle, opts.threshold, opts.flag_width_px);
            info!(flagged = report.flagged, "validation finished");
            Ok(Outcome::Validated(report))
        }
    }
}

fn profile_path(opts: &RunOptions) -> OpsResult<&Path> {
    opts.icc_path
        .as_deref()
        .filter(|p| p.is_file())
        .ok_or_else(|| OpsError::InvalidProfilePath(opts.icc_path.clone()))
}

/// Profile file name without extension.
pub fn profile_base(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
