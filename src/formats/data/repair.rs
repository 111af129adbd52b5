//! Pre-parse repair for near-well-formed data files
//!
//! Vanilla FTL data files routinely omit the root wrapper tag and carry
//! comments with too many dashes. Both trip a conforming XML parser, so the
//! raw text is patched before parsing. This does not rescue genuinely broken
//! markup (unbalanced tags elsewhere stay as they are).

/// Root wrapper tag used by FTL data files.
pub const ROOT_TAG: &str = "FTL";

/// Patch up raw document text so the parser accepts it:
///
/// 1. insert an opening `<root>` when none is present - right after a
///    leading XML declaration if there is one, otherwise at the very start;
/// 2. append a closing `</root>` when none is present;
/// 3. normalize malformed comment delimiters (`<!---` and `--->`).
#[must_use]
pub fn repair_document(raw: &str, root: &str) -> String {
    let mut doc = raw.to_string();
    if !doc.contains(&format!("<{root}>")) {
        match doc.find("?>") {
            Some(position) => doc.insert_str(position + 2, &format!("<{root}>")),
            None => doc.insert_str(0, &format!("<{root}>")),
        }
    }
    if !doc.contains(&format!("</{root}>")) {
        doc.push_str(&format!("</{root}>"));
    }
    doc.replace("<!---", "<!-- -").replace("--->", "- -->")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_bare_fragment() {
        assert_eq!(
            repair_document("<event/>", "FTL"),
            "<FTL><event/></FTL>"
        );
    }

    #[test]
    fn test_inserts_root_after_declaration() {
        let raw = "<?xml version=\"1.0\" encoding=\"utf-8\"?><event/>";
        assert_eq!(
            repair_document(raw, "FTL"),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?><FTL><event/></FTL>"
        );
    }

    #[test]
    fn test_appends_missing_closing_root() {
        assert_eq!(
            repair_document("<FTL><event/>", "FTL"),
            "<FTL><event/></FTL>"
        );
    }

    #[test]
    fn test_well_formed_input_untouched() {
        let raw = "<FTL><event/></FTL>";
        assert_eq!(repair_document(raw, "FTL"), raw);
    }

    #[test]
    fn test_normalizes_comment_dashes() {
        assert_eq!(
            repair_document("<FTL><!--- note ---></FTL>", "FTL"),
            "<FTL><!-- - note - --></FTL>"
        );
    }
}
