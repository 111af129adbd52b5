//! Identifier derivation
//!
//! Every externalized string is keyed by a short, human-recognizable id
//! derived from where the text sits in the tree: the tag, the ancestor
//! directly below the `FTL` root (the "top parent"), branching `choice`
//! ancestors along the way, and the position among same-named siblings.
//! Ids are unique by construction on a best-effort basis; vanilla-style
//! names take priority over guaranteed uniqueness.
//!
//! Derivation is a pure function over the tree, so a node whose position
//! matches no known pattern simply yields `None` and is left alone.

use std::fmt::Write;

use crate::formats::data::{Document, Element, NodeId};

/// Tags whose text content can be externalized.
pub const LOCALIZABLE_TAGS: [&str; 10] = [
    "text",
    "class",
    "desc",
    "title",
    "short",
    "tooltip",
    "unlock",
    "flavorType",
    "power",
    "crewMember",
];

/// The descriptive tags of a `*Blueprint` definition.
pub const BLUEPRINT_TAGS: [&str; 7] = [
    "class",
    "desc",
    "title",
    "short",
    "tooltip",
    "unlock",
    "flavorType",
];

/// Whether a tag's text content is a candidate for externalization.
#[must_use]
pub fn is_localizable_tag(tag: &str) -> bool {
    LOCALIZABLE_TAGS.contains(&tag)
}

/// Whether a tag is one of the blueprint-descriptive tags.
#[must_use]
pub fn is_blueprint_tag(tag: &str) -> bool {
    BLUEPRINT_TAGS.contains(&tag)
}

/// Synonym used when an ancestor tag closes out an id path fragment.
/// The event outcome wrappers all read as plain `text` in vanilla names.
fn parent_synonym(tag: &str) -> &str {
    match tag {
        "event" | "destroyed" | "deadCrew" | "escape" | "gotaway" | "surrender" => "text",
        "removeCrew" => "clone",
        other => other,
    }
}

/// `_<name>` when the element carries an explicit name attribute.
fn name_suffix(element: &Element) -> String {
    element
        .attr("name")
        .map(|name| format!("_{name}"))
        .unwrap_or_default()
}

/// `_<n>` for the n-th same-named sibling; nothing for the first.
fn ordinal_suffix(ordinal: usize) -> String {
    if ordinal > 1 {
        format!("_{ordinal}")
    } else {
        String::new()
    }
}

/// Path fragment for a node under an event-like top parent: one `_c<n>`
/// per branching `choice` ancestor (first branches unnumbered), closed out
/// by the immediate parent's (mapped) tag name.
///
/// `path` is the ancestor chain, closest first; the last entry is the
/// level the fragment hangs off and is not scanned for choices.
fn child_path(doc: &Document, path: &[NodeId]) -> String {
    let mut fragment = String::new();
    for &ancestor in path[..path.len() - 1].iter().rev() {
        if doc
            .element(ancestor)
            .is_some_and(|element| element.tag == "choice")
        {
            let ordinal = doc.sibling_ordinal(ancestor);
            if ordinal > 1 {
                let _ = write!(fragment, "_c{ordinal}");
            }
        }
    }
    let closest = doc
        .element(path[0])
        .map(|element| parent_synonym(&element.tag))
        .unwrap_or_default();
    fragment.push('_');
    fragment.push_str(closest);
    fragment
}

/// Derive an identifier for a text-bearing node, or `None` when its
/// structural position matches no recognized pattern.
#[must_use]
pub fn derive_text_id(doc: &Document, node: NodeId) -> Option<String> {
    let element = doc.element(node)?;
    let chain = doc.ancestor_elements(node);
    if chain.len() < 2 {
        return None;
    }
    // Everything below the FTL root; the last entry is the top parent.
    let elders = &chain[..chain.len() - 1];
    let top = doc.element(elders[elders.len() - 1])?;

    match element.tag.as_str() {
        "text" if !element.attributes.contains_key("name") => match top.tag.as_str() {
            "textList" => Some(format!(
                "text{}{}",
                name_suffix(top),
                ordinal_suffix(doc.sibling_ordinal(node))
            )),
            "event" => Some(format!("event{}{}", name_suffix(top), child_path(doc, elders))),
            "eventList" => {
                if elders.len() < 2 {
                    return None;
                }
                let below_list = elders[elders.len() - 2];
                Some(format!(
                    "event{}{}{}",
                    name_suffix(top),
                    ordinal_suffix(doc.sibling_ordinal(below_list)),
                    child_path(doc, &elders[..elders.len() - 1])
                ))
            }
            "ship" => {
                if elders.len() < 2 {
                    return None;
                }
                let below_ship = doc.element(elders[elders.len() - 2])?;
                Some(format!(
                    "ship{}_{}{}",
                    name_suffix(top),
                    below_ship.tag,
                    child_path(doc, &elders[..elders.len() - 1])
                ))
            }
            _ => None,
        },
        tag if is_blueprint_tag(tag) => top
            .tag
            .strip_suffix("Blueprint")
            .map(|kind| format!("{kind}{}_{}", name_suffix(top), element.tag)),
        "power" => {
            if top.tag == "crewBlueprint"
                && doc
                    .element(elders[0])
                    .is_some_and(|parent| parent.tag == "powerList")
            {
                let ordinal = doc.sibling_ordinal(node);
                let digits = if ordinal > 1 {
                    ordinal.to_string()
                } else {
                    String::new()
                };
                Some(format!("crew{}_power{digits}", name_suffix(top)))
            } else {
                None
            }
        }
        "crewMember" => element
            .text
            .as_ref()
            .map(|text| format!("name_crewMember_{text}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::data::parse_document;

    /// Derive the id for the n-th node (document order) with the given tag.
    fn derive_nth(xml: &str, tag: &str, index: usize) -> Option<String> {
        let doc = parse_document(xml).unwrap();
        let nodes = doc.find_elements(|d, id| d.element(id).is_some_and(|e| e.tag == tag));
        derive_text_id(&doc, nodes[index])
    }

    #[test]
    fn test_event_text() {
        let id = derive_nth("<FTL><event><text>Hello</text></event></FTL>", "text", 0);
        assert_eq!(id.as_deref(), Some("event_text"));
    }

    #[test]
    fn test_event_name_and_outcome_synonyms() {
        let xml = "<FTL><event name=\"PIRATE\"><destroyed><text>Boom</text></destroyed></event></FTL>";
        assert_eq!(derive_nth(xml, "text", 0).as_deref(), Some("event_PIRATE_text"));

        let xml = "<FTL><event name=\"PIRATE\"><removeCrew><text>Gone</text></removeCrew></event></FTL>";
        assert_eq!(
            derive_nth(xml, "text", 0).as_deref(),
            Some("event_PIRATE_clone")
        );
    }

    #[test]
    fn test_choice_ordinals() {
        let xml = "<FTL><event name=\"TEST\">\
            <choice><text>a</text></choice>\
            <choice><text>b</text></choice>\
            <choice><text>c</text></choice>\
            </event></FTL>";
        assert_eq!(derive_nth(xml, "text", 0).as_deref(), Some("event_TEST_choice"));
        assert_eq!(
            derive_nth(xml, "text", 1).as_deref(),
            Some("event_TEST_c2_choice")
        );
        assert_eq!(
            derive_nth(xml, "text", 2).as_deref(),
            Some("event_TEST_c3_choice")
        );
    }

    #[test]
    fn test_nested_choice_event() {
        let xml = "<FTL><event name=\"TEST\">\
            <choice/>\
            <choice><event><text>deep</text></event></choice>\
            </event></FTL>";
        assert_eq!(
            derive_nth(xml, "text", 0).as_deref(),
            Some("event_TEST_c2_text")
        );
    }

    #[test]
    fn test_text_list_ordinals() {
        let xml = "<FTL><textList name=\"GREETINGS\">\
            <text>hi</text><text>hey</text></textList></FTL>";
        assert_eq!(derive_nth(xml, "text", 0).as_deref(), Some("text_GREETINGS"));
        assert_eq!(
            derive_nth(xml, "text", 1).as_deref(),
            Some("text_GREETINGS_2")
        );
    }

    #[test]
    fn test_event_list() {
        let xml = "<FTL><eventList name=\"LIST\">\
            <event><text>a</text></event>\
            <event><text>b</text></event>\
            </eventList></FTL>";
        assert_eq!(derive_nth(xml, "text", 0).as_deref(), Some("event_LIST_text"));
        assert_eq!(
            derive_nth(xml, "text", 1).as_deref(),
            Some("event_LIST_2_text")
        );
    }

    #[test]
    fn test_ship_sections() {
        let xml = "<FTL><ship name=\"KESTREL\">\
            <destroyed><text>lost</text></destroyed></ship></FTL>";
        assert_eq!(
            derive_nth(xml, "text", 0).as_deref(),
            Some("ship_KESTREL_destroyed_text")
        );
    }

    #[test]
    fn test_blueprint_tags() {
        let xml = "<FTL><weaponBlueprint name=\"LASER\"><title>Burst</title></weaponBlueprint></FTL>";
        assert_eq!(
            derive_nth(xml, "title", 0).as_deref(),
            Some("weapon_LASER_title")
        );
    }

    #[test]
    fn test_crew_power_list() {
        let xml = "<FTL><crewBlueprint name=\"engi\"><powerList>\
            <power>One</power><power>Two</power></powerList></crewBlueprint></FTL>";
        assert_eq!(derive_nth(xml, "power", 0).as_deref(), Some("crew_engi_power"));
        assert_eq!(
            derive_nth(xml, "power", 1).as_deref(),
            Some("crew_engi_power2")
        );
    }

    #[test]
    fn test_crew_member_uses_literal_text() {
        let xml = "<FTL><ship><crew><crewMember>Thomas</crewMember></crew></ship></FTL>";
        assert_eq!(
            derive_nth(xml, "crewMember", 0).as_deref(),
            Some("name_crewMember_Thomas")
        );
    }

    #[test]
    fn test_unrecognized_positions_yield_none() {
        // Directly under the root: no top parent to dispatch on.
        assert_eq!(derive_nth("<FTL><text>hi</text></FTL>", "text", 0), None);
        // Directly under an eventList: the original data never does this.
        assert_eq!(
            derive_nth("<FTL><eventList><text>hi</text></eventList></FTL>", "text", 0),
            None
        );
        // Pre-named text nodes are already externalized.
        assert_eq!(
            derive_nth(
                "<FTL><event><text name=\"done\">hi</text></event></FTL>",
                "text",
                0
            ),
            None
        );
        // Unknown top parent.
        assert_eq!(
            derive_nth("<FTL><mystery><text>hi</text></mystery></FTL>", "text", 0),
            None
        );
    }
}
