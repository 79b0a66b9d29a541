//! Document parsing.

use crate::document::{Declaration, Element, NodeId, NodeKind};
use crate::{Document, SvgError, SvgResult, Styled};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;
use tracing::trace;

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn element_from(e: &BytesStart, self_closing: bool) -> SvgResult<Element> {
    let mut el = Element::new(lossy(e.name().as_ref()));
    el.self_closing = self_closing;
    for attr in e.attributes() {
        let attr = attr.map_err(|err| SvgError::Xml {
            position: 0,
            message: format!("bad attribute in <{}>: {err}", el.name()),
        })?;
        let key = lossy(attr.key.as_ref());
        let raw = lossy(&attr.value);
        let value = match quick_xml::escape::unescape(&raw) {
            Ok(v) => v.into_owned(),
            Err(_) => raw.clone(),
        };
        el.set_attr(&key, &value);
    }
    Ok(el)
}

impl Document {
    /// Parses a document from a string.
    ///
    /// Whitespace, comments, processing instructions and entity references
    /// are preserved so that [`Document::to_xml_string`] reproduces the input
    /// apart from attribute quoting.
    pub fn parse(src: &str) -> SvgResult<Self> {
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        let mut xml = Reader::from_str(src);

        let mut doc = Document::new();
        let mut stack: Vec<NodeId> = vec![Document::DOCUMENT];

        loop {
            let parent = stack.last().copied().unwrap_or(Document::DOCUMENT);
            match xml.read_event() {
                Ok(Event::Start(e)) => {
                    let el = element_from(&e, false)?;
                    let id = doc.append(parent, NodeKind::Element(el));
                    stack.push(id);
                }
                Ok(Event::Empty(e)) => {
                    let el = element_from(&e, true)?;
                    doc.append(parent, NodeKind::Element(el));
                }
                Ok(Event::End(e)) => {
                    if stack.len() <= 1 {
                        return Err(SvgError::UnexpectedEnd(lossy(e.name().as_ref())));
                    }
                    stack.pop();
                }
                Ok(Event::Text(e)) => doc.push_text(parent, &lossy(&e)),
                Ok(Event::GeneralRef(e)) => doc.push_text(parent, &format!("&{};", lossy(&e))),
                Ok(Event::CData(e)) => {
                    doc.append(parent, NodeKind::CData(lossy(&e)));
                }
                Ok(Event::Comment(e)) => {
                    doc.append(parent, NodeKind::Comment(lossy(&e)));
                }
                Ok(Event::PI(e)) => {
                    doc.append(parent, NodeKind::ProcessingInstruction(lossy(&e)));
                }
                Ok(Event::Decl(e)) => {
                    let decl = Declaration {
                        version: e.version().map(|v| lossy(&v)).unwrap_or_else(|_| "1.0".into()),
                        encoding: e.encoding().and_then(Result::ok).map(|v| lossy(&v)),
                        standalone: e.standalone().and_then(Result::ok).map(|v| lossy(&v)),
                    };
                    doc.append(parent, NodeKind::Declaration(decl));
                }
                Ok(Event::DocType(e)) => {
                    doc.append(parent, NodeKind::DocType(lossy(&e)));
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(SvgError::Xml {
                        position: xml.error_position(),
                        message: e.to_string(),
                    });
                }
            }
        }

        if stack.len() > 1 {
            let open = stack
                .last()
                .and_then(|&n| doc.element(n))
                .map(|el| el.name().to_string())
                .unwrap_or_default();
            return Err(SvgError::Unclosed(open));
        }
        if doc.root().is_none() {
            return Err(SvgError::NoRoot);
        }

        trace!(nodes = doc.len(), ids = doc.ids.len(), "document parsed");
        Ok(doc)
    }

    /// Reads and parses a document file.
    pub fn from_file(path: &Path) -> SvgResult<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::parse(&src)
    }

    /// Appends raw text, merging with a preceding text node.
    fn push_text(&mut self, parent: NodeId, raw: &str) {
        if let Some(&last) = self.nodes[parent.0].children.last() {
            if let NodeKind::Text(t) = &mut self.nodes[last.0].kind {
                t.push_str(raw);
                return;
            }
        }
        self.append(parent, NodeKind::Text(raw.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structure() {
        let doc = Document::parse(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg">
  <defs><linearGradient id="g"><stop offset="0" stop-color="#fff"/></linearGradient></defs>
  <rect id="r" style="fill:url(#g)"/>
</svg>"##,
        )
        .unwrap();

        let root = doc.root().unwrap();
        assert_eq!(doc.element(root).unwrap().name(), "svg");
        let grad = doc.get_element_by_id("g").unwrap();
        assert_eq!(doc.element(grad).unwrap().local_name(), "linearGradient");
        let rect = doc.get_element_by_id("r").unwrap();
        assert_eq!(doc.element(rect).unwrap().attr("style"), Some("fill:url(#g)"));
    }

    #[test]
    fn test_attribute_unescaped() {
        let doc = Document::parse(r#"<svg><text id="t" data-x="a &amp; b &quot;c&quot;"/></svg>"#)
            .unwrap();
        let t = doc.get_element_by_id("t").unwrap();
        assert_eq!(doc.element(t).unwrap().attr("data-x"), Some(r#"a & b "c""#));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(Document::parse(""), Err(SvgError::NoRoot)));
        assert!(matches!(Document::parse("<!-- only -->"), Err(SvgError::NoRoot)));
        assert!(matches!(Document::parse("<svg><g></svg>"), Err(SvgError::Xml { .. })));
        assert!(matches!(
            Document::parse("<svg>"),
            Err(SvgError::Unclosed(_) | SvgError::Xml { .. })
        ));
    }

    #[test]
    fn test_bom_is_skipped() {
        let doc = Document::parse("\u{feff}<svg/>").unwrap();
        assert!(doc.root().is_some());
    }
}
