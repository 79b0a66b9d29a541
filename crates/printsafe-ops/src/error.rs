//! Error types for document actions.

use printsafe_icc::IccError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for document actions.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors that abort an action.
///
/// Colors that fail to parse are not errors; they are skipped by the paint
/// resolver.
#[derive(Debug, Error)]
pub enum OpsError {
    /// No profile given, or the path is not a readable file.
    #[error("invalid ICC profile path: {}", .0.as_ref().map_or("<none>".into(), |p| p.display().to_string()))]
    InvalidProfilePath(Option<PathBuf>),

    /// Profile could not be loaded or the transforms could not be built.
    #[error(transparent)]
    Icc(#[from] IccError),

    /// Action needs a document and none was given.
    #[error("action '{0}' needs a document")]
    MissingDocument(&'static str),

    /// Unknown action name.
    #[error("unknown action '{0}' (expected validate, palette or clear)")]
    UnknownAction(String),
}
