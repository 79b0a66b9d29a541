//! SVG document error types.

use thiserror::Error;

/// Result type for document operations.
pub type SvgResult<T> = Result<T, SvgError>;

/// Errors that can occur while reading or writing a document.
#[derive(Debug, Error)]
pub enum SvgError {
    /// Malformed XML.
    #[error("XML error at byte {position}: {message}")]
    Xml {
        /// Byte offset where the reader stopped.
        position: u64,
        /// Reader message.
        message: String,
    },

    /// Closing tag without a matching opening tag.
    #[error("unexpected closing tag </{0}>")]
    UnexpectedEnd(String),

    /// Input ended with elements still open.
    #[error("unclosed element <{0}>")]
    Unclosed(String),

    /// Document has no root element.
    #[error("document has no root element")]
    NoRoot,

    /// Serialization failure.
    #[error("write error: {0}")]
    Write(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
