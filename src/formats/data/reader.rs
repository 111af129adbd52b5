//! Data file reading

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::document::{Document, Element, NodeId};
use crate::error::{Error, Result};

/// Parse repaired document text into a tree.
///
/// Mismatched end-tag names are tolerated (any end event closes the current
/// element), matching how permissive the game itself is about its data.
///
/// # Errors
/// Returns an error if the XML is malformed beyond recovery.
pub fn parse_document(content: &str) -> Result<Document> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);
    reader.check_end_names(false);

    let mut doc = Document::new();
    let mut stack = vec![doc.document_node()];
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let element = element_from_start(&e)?;
                let parent = stack.last().copied().unwrap_or_else(|| doc.document_node());
                let id = doc.append_element(parent, element);
                stack.push(id);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e)?;
                let parent = stack.last().copied().unwrap_or_else(|| doc.document_node());
                doc.append_element(parent, element);
            }
            Ok(Event::End(_)) => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape()?;
                append_text(&mut doc, &stack, &text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&mut doc, &stack, &text);
            }
            Ok(Event::Comment(e)) => {
                let parent = stack.last().copied().unwrap_or_else(|| doc.document_node());
                doc.append_comment(parent, String::from_utf8_lossy(&e).into_owned());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::Xml(e)),
        }
        buf.clear();
    }

    Ok(doc)
}

fn element_from_start(e: &BytesStart) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.insert(key, value);
    }
    Ok(element)
}

/// Attach text to the currently open element. Text hanging outside the root
/// or mixed in with element children is dropped (the tree keeps text and
/// child elements mutually exclusive).
fn append_text(doc: &mut Document, stack: &[NodeId], text: &str) {
    if text.is_empty() {
        return;
    }
    let Some(&current) = stack.last() else {
        return;
    };
    if current == doc.document_node() || !doc.children(current).is_empty() {
        return;
    }
    if let Some(element) = doc.element_mut(current) {
        match &mut element.text {
            Some(existing) => existing.push_str(text),
            None => element.text = Some(text.to_string()),
        }
    }
}
