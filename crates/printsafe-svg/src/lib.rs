//! Owned SVG documents for paint inspection and in-place editing.
//!
//! Documents are parsed with `quick-xml` into an arena tree that keeps
//! comments, whitespace and processing instructions, so an untouched
//! document writes back essentially byte for byte. Elements expose their
//! attributes and parsed `style` through the [`Styled`] trait; identifiers
//! are indexed for paint-server lookup.
//!
//! # Example
//!
//! ```
//! use printsafe_svg::{Document, Styled};
//!
//! let mut doc = Document::parse(r#"<svg><rect id="r" style="fill:red"/></svg>"#).unwrap();
//! let rect = doc.get_element_by_id("r").unwrap();
//!
//! let el = doc.element_mut(rect).unwrap();
//! let mut style = el.style();
//! style.set("stroke", "#FF00FF");
//! el.set_style(&style);
//!
//! assert_eq!(
//!     doc.to_xml_string().unwrap(),
//!     r#"<svg><rect id="r" style="fill:red;stroke:#FF00FF"/></svg>"#
//! );
//! ```

#![warn(missing_docs)]

mod document;
mod error;
mod reader;
mod style;
mod writer;

pub use document::{Declaration, Document, Element, NodeId, NodeKind, Styled};
pub use error::{SvgError, SvgResult};
pub use style::Style;
