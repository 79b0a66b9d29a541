//! Paint values to concrete color samples.
//!
//! A `fill` or `stroke` value is either nothing, a solid color, or a
//! reference to a paint server. Gradients contribute one sample per `<stop>`;
//! a gradient without stops of its own inherits them through `href`.

use printsafe_core::{parse_color, Rgb};
use printsafe_svg::{Document, NodeId, Styled};
use std::collections::HashSet;
use tracing::trace;

/// A parsed paint value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// `none`, or no value.
    None,
    /// A color value, not yet parsed.
    Solid(String),
    /// `url(#id)`, with any fallback color dropped.
    Server {
        /// Referenced identifier, without `#`.
        id: String,
    },
}

/// Parses a `fill`/`stroke` value.
///
/// ```
/// use printsafe_ops::{parse_paint, Paint};
///
/// assert_eq!(parse_paint(" none "), Paint::None);
/// assert_eq!(parse_paint("url('#grad') red"), Paint::Server { id: "grad".into() });
/// assert_eq!(parse_paint("#f00"), Paint::Solid("#f00".into()));
/// ```
pub fn parse_paint(value: &str) -> Paint {
    let s = value.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        return Paint::None;
    }
    let Some(rest) = s.strip_prefix("url(") else {
        return Paint::Solid(s.to_string());
    };
    let inner = rest.split_once(')').map_or(rest, |(inner, _)| inner);
    let inner = inner.trim().trim_matches(|c| c == '"' || c == '\'');
    match inner.split_once('#') {
        Some((_, id)) if !id.trim().is_empty() => Paint::Server {
            id: id.trim().to_string(),
        },
        _ => Paint::None,
    }
}

/// Returns the concrete samples a paint value stands for.
///
/// Unparsable colors and unresolvable references yield no samples. The
/// document is only read.
pub fn resolve_paint(doc: &Document, value: &str) -> Vec<Rgb> {
    match parse_paint(value) {
        Paint::None => Vec::new(),
        Paint::Solid(s) => parse_color(&s).into_iter().collect(),
        Paint::Server { id } => gradient_stops(doc, &id),
    }
}

/// Looks up `id` through the index, then structurally.
fn lookup(doc: &Document, id: &str) -> Option<NodeId> {
    doc.get_element_by_id(id).or_else(|| doc.find_by_id(id))
}

fn gradient_stops(doc: &Document, id: &str) -> Vec<Rgb> {
    let mut visited = HashSet::new();
    let mut current = id.to_string();

    loop {
        if !visited.insert(current.clone()) {
            trace!(id = %current, "paint server reference cycle");
            return Vec::new();
        }
        let Some(node) = lookup(doc, &current) else {
            trace!(id = %current, "unresolved paint server");
            return Vec::new();
        };

        let stops: Vec<NodeId> = doc
            .child_elements(node)
            .filter(|&c| doc.element(c).is_some_and(|el| el.local_name() == "stop"))
            .collect();
        if !stops.is_empty() {
            return stops.into_iter().filter_map(|s| stop_color(doc, s)).collect();
        }

        let Some(next) = doc.element(node).and_then(href_target) else {
            return Vec::new();
        };
        current = next;
    }
}

/// `href` (SVG 2) or `xlink:href`, local references only.
fn href_target<S: Styled + ?Sized>(el: &S) -> Option<String> {
    let href = el.attr("href").or_else(|| el.attr("xlink:href"))?;
    let id = href.trim().strip_prefix('#')?;
    (!id.is_empty()).then(|| id.to_string())
}

fn stop_color(doc: &Document, stop: NodeId) -> Option<Rgb> {
    let el = doc.element(stop)?;
    let style = el.style();
    // Inline style overrides the presentation attribute.
    match style.get("stop-color") {
        Some(value) => parse_color(value),
        None => el.attr("stop-color").and_then(parse_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(src: &str) -> Document {
        Document::parse(src).unwrap()
    }

    #[test]
    fn test_parse_paint() {
        assert_eq!(parse_paint(""), Paint::None);
        assert_eq!(parse_paint("NONE"), Paint::None);
        assert_eq!(parse_paint("url(#a)"), Paint::Server { id: "a".into() });
        assert_eq!(parse_paint("url( \"#b\" )"), Paint::Server { id: "b".into() });
        assert_eq!(parse_paint("url(#c) #fff"), Paint::Server { id: "c".into() });
        assert_eq!(parse_paint("url(other.svg#d)"), Paint::Server { id: "d".into() });
        assert_eq!(parse_paint("url(#)"), Paint::None);
        assert_eq!(parse_paint("red"), Paint::Solid("red".into()));
    }

    #[test]
    fn test_solid() {
        let d = doc("<svg/>");
        assert_eq!(resolve_paint(&d, "#00FF00"), vec![Rgb::new(0, 255, 0)]);
        assert!(resolve_paint(&d, "currentColor").is_empty());
        assert!(resolve_paint(&d, "none").is_empty());
    }

    #[test]
    fn test_gradient_stops_in_order() {
        let d = doc(r##"<svg><defs>
            <linearGradient id="g">
              <stop offset="0" stop-color="#ff0000"/>
              <stop offset="0.5" style="stop-color:#00ff00;stop-opacity:1"/>
              <stop offset="0.7" stop-color="bogus"/>
              <stop offset="1" stop-color="#000" style="stop-color:#0000ff"/>
            </linearGradient></defs></svg>"##);
        assert_eq!(
            resolve_paint(&d, "url(#g)"),
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]
        );
    }

    #[test]
    fn test_href_inheritance() {
        let d = doc(r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><defs>
            <linearGradient id="vector"><stop stop-color="#123456"/></linearGradient>
            <radialGradient id="mid" href="#vector"/>
            <linearGradient id="use" xlink:href="#mid"/>
            </defs></svg>"##);
        assert_eq!(resolve_paint(&d, "url(#use)"), vec![Rgb::new(0x12, 0x34, 0x56)]);
    }

    #[test]
    fn test_href_cycle_terminates() {
        let d = doc(r##"<svg><linearGradient id="a" href="#b"/><linearGradient id="b" href="#a"/></svg>"##);
        assert!(resolve_paint(&d, "url(#a)").is_empty());
    }

    #[test]
    fn test_missing_reference() {
        let d = doc("<svg/>");
        assert!(resolve_paint(&d, "url(#nowhere)").is_empty());
    }

    #[test]
    fn test_found_structurally_when_index_is_stale() {
        let mut d = doc(r##"<svg><linearGradient id="old"><stop stop-color="#fff"/></linearGradient></svg>"##);
        let grad = d.get_element_by_id("old").unwrap();
        d.element_mut(grad).unwrap().set_attr("id", "new");
        assert_eq!(resolve_paint(&d, "url(#new)"), vec![Rgb::WHITE]);
    }
}
