//! Whole-document round trips through the reader and writer.

use printsafe_svg::{Document, Styled};

const INKSCAPE: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!-- Created with Inkscape (http://www.inkscape.org/) -->
<svg
   width="210mm"
   height="297mm"
   viewBox="0 0 210 297"
   version="1.1"
   id="svg5"
   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
   xmlns:xlink="http://www.w3.org/1999/xlink"
   xmlns="http://www.w3.org/2000/svg">
  <defs id="defs2">
    <linearGradient id="lg1" inkscape:collect="always">
      <stop style="stop-color:#00ff00;stop-opacity:1" offset="0" id="s1"/>
      <stop style="stop-color:#0000ff;stop-opacity:1" offset="1" id="s2"/>
    </linearGradient>
    <linearGradient xlink:href="#lg1" id="lg2" x1="0" y1="0" x2="1" y2="0"/>
  </defs>
  <g inkscape:label="Layer 1" inkscape:groupmode="layer" id="layer1">
    <rect style="fill:url(#lg2);stroke:none" id="rect1" width="50" height="40" x="10" y="10"/>
    <text id="t1" x="5" y="80">Fish &amp; Chips</text>
  </g>
</svg>
"##;

#[test]
fn untouched_document_is_preserved() {
    let doc = Document::parse(INKSCAPE).unwrap();
    let out = doc.to_xml_string().unwrap();
    let again = Document::parse(&out).unwrap();
    assert_eq!(again.to_xml_string().unwrap(), out);

    // Only attribute whitespace is normalized; the rest is byte for byte.
    assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#));
    assert!(out.contains("<!-- Created with Inkscape (http://www.inkscape.org/) -->"));
    assert!(out.contains(r#"<stop style="stop-color:#00ff00;stop-opacity:1" offset="0" id="s1"/>"#));
    assert!(out.contains("Fish &amp; Chips"));
    assert!(out.ends_with("</svg>\n"));
}

#[test]
fn edit_touches_only_the_edited_attribute() {
    let mut doc = Document::parse(INKSCAPE).unwrap();
    let rect = doc.get_element_by_id("rect1").unwrap();
    let el = doc.element_mut(rect).unwrap();
    let mut style = el.style();
    style.set("stroke", "#FF00FF");
    el.set_style(&style);
    el.set_attr("data-printsafe-flag", "1");

    let out = doc.to_xml_string().unwrap();
    assert!(out.contains(
        r##"<rect style="fill:url(#lg2);stroke:#FF00FF" id="rect1" width="50" height="40" x="10" y="10" data-printsafe-flag="1"/>"##
    ));
    assert!(out.contains(r##"<linearGradient xlink:href="#lg1" id="lg2" x1="0" y1="0" x2="1" y2="0"/>"##));
}

#[test]
fn ids_and_structure() {
    let doc = Document::parse(INKSCAPE).unwrap();
    let lg2 = doc.get_element_by_id("lg2").unwrap();
    assert_eq!(doc.element(lg2).unwrap().attr("xlink:href"), Some("#lg1"));
    let lg1 = doc.get_element_by_id("lg1").unwrap();
    assert_eq!(doc.child_elements(lg1).count(), 2);
    assert!(doc.child_elements(lg2).next().is_none());
}
