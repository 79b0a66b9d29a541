//! Document serialization.

use crate::document::{NodeId, NodeKind};
use crate::{Document, SvgError, SvgResult};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_err(e: impl std::fmt::Display) -> SvgError {
    SvgError::Write(e.to_string())
}

impl Document {
    /// Serializes the document to a string.
    pub fn to_xml_string(&self) -> SvgResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(write_err)
    }

    /// Writes the document to a file.
    pub fn to_file(&self, path: &Path) -> SvgResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the document to any writer.
    ///
    /// No indentation is added; whitespace comes only from the text nodes
    /// that were read.
    pub fn write_to<W: Write>(&self, writer: W) -> SvgResult<()> {
        let mut xml = Writer::new(writer);
        for &child in self.children(Document::DOCUMENT) {
            self.write_node(&mut xml, child)?;
        }
        Ok(())
    }

    fn write_node<W: Write>(&self, xml: &mut Writer<W>, id: NodeId) -> SvgResult<()> {
        let event = match &self.nodes[id.0].kind {
            NodeKind::Document => return Ok(()),
            NodeKind::Element(el) => {
                let mut start = BytesStart::new(el.name());
                for (k, v) in el.attributes() {
                    start.push_attribute((k, v));
                }
                let children = self.children(id);
                if el.self_closing && children.is_empty() {
                    xml.write_event(Event::Empty(start)).map_err(write_err)?;
                    return Ok(());
                }
                xml.write_event(Event::Start(start)).map_err(write_err)?;
                for &child in children {
                    self.write_node(xml, child)?;
                }
                Event::End(BytesEnd::new(el.name()))
            }
            NodeKind::Text(raw) => Event::Text(BytesText::from_escaped(raw.as_str())),
            NodeKind::CData(s) => Event::CData(BytesCData::new(s.as_str())),
            NodeKind::Comment(s) => Event::Comment(BytesText::from_escaped(s.as_str())),
            NodeKind::ProcessingInstruction(s) => Event::PI(BytesPI::new(s.as_str())),
            NodeKind::Declaration(d) => Event::Decl(BytesDecl::new(
                &d.version,
                d.encoding.as_deref(),
                d.standalone.as_deref(),
            )),
            NodeKind::DocType(s) => Event::DocType(BytesText::from_escaped(s.as_str())),
        };
        xml.write_event(event).map_err(write_err)?;
        Ok(())
    }
}
