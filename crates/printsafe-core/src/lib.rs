//! # printsafe-core
//!
//! Core types shared by every printsafe crate.
//!
//! - [`Rgb`] - 8-bit RGB sample, hashed and compared by value
//! - [`parse_color`] - textual color normalization (hex, `rgb()`, named, `hsl()`)
//! - [`RoundTrip`] - the color-conversion oracle seam used by validation and
//!   palette generation
//!
//! ## Crate Structure
//!
//! ```text
//! printsafe-core (this crate)
//!    ^
//!    |
//!    +-- printsafe-icc (lcms2 round trip through a CMYK profile)
//!    +-- printsafe-ops (paint resolution, flagging, palettes)
//!    +-- printsafe-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamut;
pub mod parse;
pub mod rgb;

pub use gamut::{GamutCheck, RoundTrip, DEFAULT_THRESHOLD};
pub use parse::parse_color;
pub use rgb::Rgb;

/// Prelude module for convenient imports.
///
/// ```
/// use printsafe_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::gamut::{GamutCheck, RoundTrip, DEFAULT_THRESHOLD};
    pub use crate::parse::parse_color;
    pub use crate::rgb::Rgb;
}
