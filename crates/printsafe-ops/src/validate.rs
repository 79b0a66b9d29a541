//! Gamut validation over a document.

use crate::flag::{flag_element, FlagState, OLD_STROKE_ATTR};
use crate::paint::resolve_paint;
use printsafe_core::{GamutCheck, RoundTrip};
use printsafe_svg::{Document, Element, NodeId, Style, Styled};
use tracing::{debug, trace};

/// Paint properties checked on every element, in order.
pub const PAINT_PROPERTIES: [&str; 2] = ["fill", "stroke"];

/// Result of a validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Number of elements flagged by this pass.
    pub flagged: usize,
    /// The failing sample of the first flagged element.
    pub example: Option<GamutCheck>,
}

impl ValidationReport {
    /// `true` if nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.flagged == 0
    }
}

/// Value of a paint property: inline style first, then the presentation
/// attribute of the same name. On an already flagged element the live stroke
/// is the marker, so the stroke it replaced is checked instead.
fn paint_value(el: &Element, style: &Style, prop: &str) -> Option<String> {
    let value = if prop == "stroke" && FlagState::of(el).is_flagged() {
        el.attr(OLD_STROKE_ATTR).or_else(|| el.attr(prop))
    } else {
        style.get(prop).or_else(|| el.attr(prop))
    };
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// First out-of-gamut sample on `node`, checking [`PAINT_PROPERTIES`] in
/// order and stopping at the first failure.
fn first_failure<O: RoundTrip + ?Sized>(
    doc: &Document,
    node: NodeId,
    oracle: &O,
    threshold: f64,
) -> Option<GamutCheck> {
    let el = doc.element(node)?;
    let style = el.style();
    for prop in PAINT_PROPERTIES {
        let Some(value) = paint_value(el, &style, prop) else {
            continue;
        };
        for sample in resolve_paint(doc, &value) {
            let check = oracle.check(sample);
            if check.is_out_of_gamut(threshold) {
                trace!(
                    element = el.name(),
                    prop,
                    before = %check.original,
                    after = %check.round_tripped,
                    distance = check.distance,
                    "out of gamut"
                );
                return Some(check);
            }
        }
    }
    None
}

/// Flags every element with an out-of-gamut paint sample.
///
/// Elements are visited in document order. An element is flagged at most once
/// per pass; paint servers themselves are never modified.
pub fn validate<O: RoundTrip + ?Sized>(
    doc: &mut Document,
    oracle: &O,
    threshold: f64,
    width_px: u32,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    for node in doc.elements() {
        let Some(check) = first_failure(doc, node, oracle, threshold) else {
            continue;
        };
        if let Some(el) = doc.element_mut(node) {
            flag_element(el, width_px);
            report.flagged += 1;
            report.example.get_or_insert(check);
        }
    }
    debug!(flagged = report.flagged, "validation done");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::FLAG_ATTR;
    use printsafe_core::{Rgb, DEFAULT_THRESHOLD};

    /// Pure red and pure blue drift; everything else prints.
    struct NoPrimaries;

    impl RoundTrip for NoPrimaries {
        fn round_trip(&self, rgb: Rgb) -> Rgb {
            match (rgb.r, rgb.g, rgb.b) {
                (255, 0, 0) => Rgb::new(180, 40, 30),
                (0, 0, 255) => Rgb::new(40, 50, 160),
                _ => rgb,
            }
        }
    }

    fn run(src: &str) -> (Document, ValidationReport) {
        let mut doc = Document::parse(src).unwrap();
        let report = validate(&mut doc, &NoPrimaries, DEFAULT_THRESHOLD, 6);
        (doc, report)
    }

    fn flagged(doc: &Document, id: &str) -> bool {
        let n = doc.get_element_by_id(id).unwrap();
        doc.element(n).unwrap().attr(FLAG_ATTR) == Some("1")
    }

    #[test]
    fn test_in_gamut_document_untouched() {
        let src = r##"<svg><rect id="a" style="fill:#808080;stroke:#00ff00"/></svg>"##;
        let (doc, report) = run(src);
        assert!(report.is_clean());
        assert!(report.example.is_none());
        assert_eq!(doc.to_xml_string().unwrap(), src);
    }

    #[test]
    fn test_red_fill_flagged() {
        let (doc, report) = run(r##"<svg><rect id="r" style="fill:#FF0000;stroke:none"/></svg>"##);
        assert_eq!(report.flagged, 1);
        let check = report.example.unwrap();
        assert_eq!(check.original, Rgb::new(255, 0, 0));
        assert_eq!(check.round_tripped, Rgb::new(180, 40, 30));

        let r = doc.get_element_by_id("r").unwrap();
        let el = doc.element(r).unwrap();
        assert_eq!(el.attr("style"), Some("fill:#FF0000;stroke:#FF00FF;stroke-width:6px"));
        assert_eq!(el.attr(OLD_STROKE_ATTR), Some("none"));
    }

    #[test]
    fn test_presentation_attribute_is_checked() {
        let (doc, report) = run(r##"<svg><circle id="c" fill="blue"/><circle id="d" fill="blue" style="fill:gray"/></svg>"##);
        assert_eq!(report.flagged, 1);
        assert!(flagged(&doc, "c"));
        assert!(!flagged(&doc, "d"));
    }

    #[test]
    fn test_gradient_stop_flags_user_not_gradient() {
        let (doc, report) = run(r##"<svg>
            <linearGradient id="g"><stop id="s0" stop-color="#808080"/><stop id="s1" stop-color="#0000ff"/></linearGradient>
            <rect id="r" style="fill:url(#g)"/>
            <rect id="ok" style="fill:url(#missing);stroke:#808080"/>
            </svg>"##);
        assert_eq!(report.flagged, 1);
        assert!(flagged(&doc, "r"));
        assert!(!flagged(&doc, "ok"));
        assert!(!flagged(&doc, "g"));
        assert!(!flagged(&doc, "s1"));
        assert_eq!(report.example.unwrap().original, Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_first_example_is_kept() {
        let (_, report) = run(r##"<svg><rect style="stroke:blue"/><rect style="fill:red"/></svg>"##);
        assert_eq!(report.flagged, 2);
        assert_eq!(report.example.unwrap().original, Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_revalidation_ignores_marker() {
        let (mut doc, _) = run(r##"<svg><rect id="r" style="fill:red;stroke:#808080"/></svg>"##);
        let r = doc.get_element_by_id("r").unwrap();
        let mut style = doc.element(r).unwrap().style();
        style.set("fill", "#808080");
        doc.element_mut(r).unwrap().set_style(&style);

        // Magenta drifts under this oracle; the saved grey does not.
        struct NoMagenta;
        impl RoundTrip for NoMagenta {
            fn round_trip(&self, rgb: Rgb) -> Rgb {
                if rgb == Rgb::new(255, 0, 255) { Rgb::new(200, 40, 150) } else { rgb }
            }
        }
        let report = validate(&mut doc, &NoMagenta, DEFAULT_THRESHOLD, 6);
        assert!(report.is_clean());
    }

    #[test]
    fn test_flagged_element_checks_saved_stroke_only() {
        let (mut doc, first) = run(r##"<svg><rect id="r" style="fill:red;stroke:#808080"/></svg>"##);
        assert_eq!(first.flagged, 1);

        // Stroke edited to an out-of-gamut color while still flagged.
        let r = doc.get_element_by_id("r").unwrap();
        let mut style = doc.element(r).unwrap().style();
        style.set("fill", "#808080");
        style.set("stroke", "blue");
        doc.element_mut(r).unwrap().set_style(&style);

        let report = validate(&mut doc, &NoPrimaries, DEFAULT_THRESHOLD, 6);
        assert!(report.is_clean());
        let el = doc.element(r).unwrap();
        assert_eq!(el.attr("style"), Some("fill:#808080;stroke:blue;stroke-width:6px"));
        assert_eq!(el.attr(OLD_STROKE_ATTR), Some("#808080"));
        assert!(flagged(&doc, "r"));
    }

    #[test]
    fn test_threshold_respected() {
        let mut doc = Document::parse(r##"<svg><rect id="r" style="fill:red"/></svg>"##).unwrap();
        let report = validate(&mut doc, &NoPrimaries, 500.0, 6);
        assert!(report.is_clean());
    }
}
