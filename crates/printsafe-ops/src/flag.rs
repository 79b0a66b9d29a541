//! Marking and unmarking elements.
//!
//! A flagged element carries a magenta stroke plus three attributes: the flag
//! itself and the `stroke`/`stroke-width` it had before it was first flagged.
//! Flagging twice never re-captures; clearing restores what was captured and
//! drops all three attributes.

use printsafe_svg::{Document, Styled};
use tracing::{debug, trace};

/// Stroke color applied to flagged elements.
pub const MARKER_COLOR: &str = "#FF00FF";

/// Attribute marking an element as flagged.
pub const FLAG_ATTR: &str = "data-printsafe-flag";

/// Value of [`FLAG_ATTR`] on flagged elements.
pub const FLAG_VALUE: &str = "1";

/// Saved `stroke` of a flagged element.
pub const OLD_STROKE_ATTR: &str = "data-ps-oldstroke";

/// Saved `stroke-width` of a flagged element.
pub const OLD_WIDTH_ATTR: &str = "data-ps-oldstrokewidth";

/// Flag state as persisted on an element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlagState {
    /// Not flagged.
    #[default]
    Unflagged,
    /// Flagged, with whatever was saved at the time.
    Flagged {
        /// `stroke` before flagging, if it was set.
        saved_stroke: Option<String>,
        /// `stroke-width` before flagging, if it was set.
        saved_width: Option<String>,
    },
}

impl FlagState {
    /// Reads the state from an element's attributes.
    pub fn of<S: Styled + ?Sized>(el: &S) -> Self {
        if el.attr(FLAG_ATTR) != Some(FLAG_VALUE) {
            return FlagState::Unflagged;
        }
        FlagState::Flagged {
            saved_stroke: el.attr(OLD_STROKE_ATTR).map(str::to_string),
            saved_width: el.attr(OLD_WIDTH_ATTR).map(str::to_string),
        }
    }

    /// `true` for [`FlagState::Flagged`].
    pub fn is_flagged(&self) -> bool {
        matches!(self, FlagState::Flagged { .. })
    }
}

/// Marker stroke width, at least one pixel.
pub fn marker_width(width_px: u32) -> String {
    format!("{}px", width_px.max(1))
}

/// Flags `el`.
///
/// Saves the current `stroke` and `stroke-width` unless the element is
/// already flagged, then applies the marker. Returns `true` if the element
/// was not flagged before.
pub fn flag_element<S: Styled + ?Sized>(el: &mut S, width_px: u32) -> bool {
    let mut style = el.style();
    let fresh = !FlagState::of(el).is_flagged();
    if fresh {
        if let Some(stroke) = style.get("stroke") {
            el.set_attr(OLD_STROKE_ATTR, stroke);
        }
        if let Some(width) = style.get("stroke-width") {
            el.set_attr(OLD_WIDTH_ATTR, width);
        }
    }
    style.set("stroke", MARKER_COLOR);
    style.set("stroke-width", marker_width(width_px));
    el.set_style(&style);
    el.set_attr(FLAG_ATTR, FLAG_VALUE);
    fresh
}

/// Clears the flag on `el`, restoring what was saved.
///
/// Without a saved value, `stroke` is removed only while it still is the
/// marker color. An unsaved `stroke-width` is removed while the marker stroke
/// is still in place, whatever width it was flagged with, or when it equals
/// the marker width for `width_px`; anything else was set after flagging and
/// is kept. Returns `false` and leaves the element alone if it is not flagged.
pub fn clear_element<S: Styled + ?Sized>(el: &mut S, width_px: u32) -> bool {
    let FlagState::Flagged { saved_stroke, saved_width } = FlagState::of(el) else {
        return false;
    };
    let mut style = el.style();
    let marked = style
        .get("stroke")
        .is_some_and(|s| s.trim().eq_ignore_ascii_case(MARKER_COLOR));

    match saved_stroke {
        Some(stroke) => style.set("stroke", stroke),
        None if marked => {
            style.remove("stroke");
        }
        None => {}
    }
    match saved_width {
        Some(width) => style.set("stroke-width", width),
        None => {
            let current = style.get("stroke-width").map(str::trim);
            if current.is_some() && (marked || current == Some(marker_width(width_px).as_str())) {
                style.remove("stroke-width");
            }
        }
    }

    el.set_style(&style);
    for attr in [FLAG_ATTR, OLD_STROKE_ATTR, OLD_WIDTH_ATTR] {
        el.remove_attr(attr);
    }
    true
}

/// Clears every flagged element in document order and returns the count.
pub fn clear_flags(doc: &mut Document, width_px: u32) -> usize {
    let mut count = 0;
    for node in doc.elements() {
        if let Some(el) = doc.element_mut(node) {
            if clear_element(el, width_px) {
                trace!(element = el.name(), "flag cleared");
                count += 1;
            }
        }
    }
    debug!(count, "clear done");
    count
}
