//! Data file writing
//!
//! FTL's own files use a fixed convention: tab indentation, one tag per
//! line, except that a tag whose only content is text stays on a single
//! line. Output is a pure function of the tree, so reprinting an unchanged
//! tree is byte-identical.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::document::{Document, NodeId, NodeKind};
use crate::error::Result;

/// Escape only the characters required in XML text content (not attributes).
/// In text content, only < and & need escaping. Apostrophes and quotes are fine.
fn escape_text_minimal(s: &str) -> Cow<'_, str> {
    if s.contains('&') || s.contains('<') {
        Cow::Owned(s.replace('&', "&amp;").replace('<', "&lt;"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Serialize a document to the FTL formatting convention.
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_document(doc: &Document) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b'\t', 1);

    // XML declaration
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    for &child in doc.children(doc.document_node()) {
        write_node(&mut writer, doc, child)?;
    }

    let mut xml = String::from_utf8(output)?;
    // Add trailing newline
    xml.push('\n');
    Ok(xml)
}

/// Serialize a document and write it to disk.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_data_file<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let xml = serialize_document(doc)?;
    fs::write(path, xml)?;
    Ok(())
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, doc: &Document, id: NodeId) -> Result<()> {
    match &doc.node(id).kind {
        NodeKind::Document => {}
        NodeKind::Comment(text) => {
            // Comments pass through verbatim
            writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?;
        }
        NodeKind::Element(element) => {
            let mut start = BytesStart::new(element.tag.as_str());
            for (key, value) in &element.attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }

            let children = doc.children(id);
            if let Some(text) = element.text.as_deref() {
                // Text-only tag, kept on one line
                writer.write_event(Event::Start(start.borrow()))?;
                let escaped = escape_text_minimal(text);
                writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
                writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
            } else if children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start.borrow()))?;
                for &child in children {
                    write_node(writer, doc, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
            }
        }
    }
    Ok(())
}
