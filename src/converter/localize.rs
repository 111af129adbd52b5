//! Localize: move inline text strings out of data files
//!
//! Two dictionary passes over the loaded trees. The first collects strings
//! that are already externalized (named `text` nodes), so their ids can be
//! reused and their entries re-emitted. The second finds inline strings,
//! derives an id for each, blanks the node and leaves the id behind as an
//! `id` attribute. Mutated trees are rewritten, and the dictionary is
//! flushed into synthesized text files.

use std::path::Path;

use tracing::{debug, info, warn};

use super::dictionary::LocaleDictionary;
use super::resolve_language;
use crate::error::Result;
use crate::formats::data::{
    DataFile, Document, Element, NodeId, load_data_dir, write_data_file,
};
use crate::naming::{derive_text_id, is_localizable_tag};
use crate::utils::{check_dir, ensure_dir};

/// Comment carried at the top of every synthesized text file.
const COPYRIGHT_COMMENT: &str = " Copyright (c) 2012 by Subset Games. All rights reserved ";

/// Category substrings matched against source file names in split mode,
/// with the result file each one feeds. Order matters: entries are consumed
/// by the first category that matches.
const CATEGORY_FILES: [(&str, &str); 6] = [
    ("event", "text_events.xml.append"),
    ("blueprint", "text_blueprints.xml.append"),
    ("achievement", "text_achievements.xml.append"),
    ("sector", "text_sectorname.xml.append"),
    ("tooltip", "text_tooltips.xml.append"),
    ("tutorial", "text_tutorial.xml.append"),
];

/// Aggregate counters for one `localize` run.
#[derive(Debug, Clone, Default)]
pub struct LocalizeReport {
    /// Data files successfully parsed.
    pub files_parsed: usize,
    /// Already-externalized strings collected from text files.
    pub entries_copied: usize,
    /// Fresh identifiers assigned to inline strings.
    pub ids_assigned: usize,
    /// Inline strings that reused an existing identifier.
    pub repeats: usize,
    /// Doubly defined text values (later entry overwrote the earlier one).
    pub collisions: usize,
    /// Mutated data files written to the output directory.
    pub files_written: usize,
    /// Synthesized text files written.
    pub result_files: usize,
    /// Trees that could not be written out.
    pub files_failed: usize,
}

/// A `text` node that is already externalized: it has both literal text
/// and an explicit name.
fn is_locale_entry(doc: &Document, id: NodeId) -> bool {
    doc.element(id).is_some_and(|element| {
        element.tag == "text" && element.text.is_some() && element.attributes.contains_key("name")
    })
}

/// An inline string that still needs externalizing: a localizable tag with
/// non-empty, not purely numeric text, and not a pre-named `text` node.
fn needs_localization(doc: &Document, id: NodeId) -> bool {
    let Some(element) = doc.element(id) else {
        return false;
    };
    if !is_localizable_tag(&element.tag) {
        return false;
    }
    let Some(text) = element.text.as_deref() else {
        return false;
    };
    if text.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    element.tag != "text" || !element.attributes.contains_key("name")
}

/// Prepare data files for localization: move every inline text string into
/// separate per-language text file(s), leaving id placeholders behind.
///
/// * `workdir` - directory holding the input data files.
/// * `outputdir` - created if absent; mutated data files and the result
///   text file(s) land here.
/// * `language_attr` - `language` attribute for the result file(s);
///   unsupported values mean no language attribute at all.
/// * `check_same_strings` - reuse one identifier for exactly equal strings.
/// * `split_result` - split the result into category files by source file
///   name instead of one combined file.
///
/// # Errors
/// Returns an error when `workdir` is not a directory, when `outputdir`
/// exists as a file, or when a result file cannot be written. Per-tree
/// write failures are counted, not raised.
pub fn localize<P: AsRef<Path>>(
    workdir: P,
    outputdir: P,
    language_attr: &str,
    check_same_strings: bool,
    split_result: bool,
) -> Result<LocalizeReport> {
    check_dir(&workdir)?;
    ensure_dir(&outputdir)?;
    let language = resolve_language(language_attr);

    let mut files = load_data_dir(&workdir)?;
    let mut report = LocalizeReport {
        files_parsed: files.len(),
        ..LocalizeReport::default()
    };

    let mut dictionary = LocaleDictionary::new();
    fill_dictionary(&files, &mut dictionary, &mut report);
    assign_ids(
        &mut files,
        &mut dictionary,
        &mut report,
        outputdir.as_ref(),
        check_same_strings,
    );
    write_result_files(
        &mut dictionary,
        &mut report,
        outputdir.as_ref(),
        language,
        split_result,
    )?;

    info!(
        "localize finished: {} new ids, {} repeats, {} collisions",
        report.ids_assigned, report.repeats, report.collisions
    );
    Ok(report)
}

/// First pass: copy strings that are already externalized, so the result
/// files re-emit them and dedup can reuse their ids.
fn fill_dictionary(files: &[DataFile], dictionary: &mut LocaleDictionary, report: &mut LocalizeReport) {
    for file in files {
        let mut copied = 0usize;
        let mut doubled = 0usize;
        for id in file.document.find_elements(is_locale_entry) {
            let Some(element) = file.document.element(id) else {
                continue;
            };
            let (Some(text), Some(name)) = (element.text.clone(), element.attr("name")) else {
                continue;
            };
            if dictionary.insert(text, name.to_string(), file.filename.clone()) {
                doubled += 1;
            }
            copied += 1;
        }
        if copied > 0 {
            debug!("copied {copied} strings from {}", file.filename);
            report.entries_copied += copied;
        }
        if doubled > 0 {
            warn!("found {doubled} doubly defined strings in {}", file.filename);
            report.collisions += doubled;
        }
    }
    info!("finished copying already localized text ({} entries)", dictionary.len());
}

/// Second pass: find inline strings, give each an id, blank the node and
/// rewrite every mutated tree.
fn assign_ids(
    files: &mut [DataFile],
    dictionary: &mut LocaleDictionary,
    report: &mut LocalizeReport,
    outputdir: &Path,
    check_same_strings: bool,
) {
    for file in files {
        let mut assigned = 0usize;
        let mut repeated = 0usize;
        for node in file.document.find_elements(needs_localization) {
            let Some(text) = file.document.element(node).and_then(|e| e.text.clone()) else {
                continue;
            };
            let existing = if check_same_strings {
                dictionary.id_for_text(&text).map(str::to_owned)
            } else {
                None
            };
            if let Some(known) = existing {
                externalize(&mut file.document, node, known);
                repeated += 1;
            } else if let Some(fresh) = derive_text_id(&file.document, node) {
                if dictionary.insert(text, fresh.clone(), file.filename.clone()) {
                    report.collisions += 1;
                }
                externalize(&mut file.document, node, fresh);
                assigned += 1;
            }
        }

        if assigned > 0 {
            debug!("copied {assigned} strings from {}", file.filename);
        }
        if repeated > 0 {
            debug!("found {repeated} repeats in {}", file.filename);
        }
        report.ids_assigned += assigned;
        report.repeats += repeated;

        if assigned + repeated > 0 {
            match write_data_file(&file.document, outputdir.join(&file.filename)) {
                Ok(()) => report.files_written += 1,
                Err(err) => {
                    warn!("failed to write {}: {err}", file.filename);
                    report.files_failed += 1;
                }
            }
        }
    }
    info!("finished copying new text");
}

/// Blank a node's text and leave the identifier behind.
fn externalize(doc: &mut Document, node: NodeId, id: String) {
    if let Some(element) = doc.element_mut(node) {
        element.text = None;
        element.attributes.insert("id".to_string(), id);
    }
}

fn write_result_files(
    dictionary: &mut LocaleDictionary,
    report: &mut LocalizeReport,
    outputdir: &Path,
    language: Option<&str>,
    split_result: bool,
) -> Result<()> {
    if split_result {
        for (category, filename) in CATEGORY_FILES {
            write_locale_file(dictionary, outputdir, filename, Some(category), language)?;
            report.result_files += 1;
        }
        write_locale_file(dictionary, outputdir, "text_misc.xml.append", None, language)?;
        report.result_files += 1;
    } else {
        let filename = match language {
            Some(lang) => format!("text-{lang}.xml"),
            None => "text_misc.xml".to_string(),
        };
        write_locale_file(dictionary, outputdir, &filename, None, language)?;
        report.result_files += 1;
    }
    Ok(())
}

/// Synthesize one text file from the dictionary entries matching `source_filter`.
/// Written entries are consumed, so later files never repeat them.
fn write_locale_file(
    dictionary: &mut LocaleDictionary,
    outputdir: &Path,
    filename: &str,
    source_filter: Option<&str>,
    language: Option<&str>,
) -> Result<()> {
    let mut doc = Document::new();
    doc.append_comment(doc.document_node(), COPYRIGHT_COMMENT);
    let root = doc.append_element(doc.document_node(), Element::new("FTL"));
    for (text, entry) in dictionary.drain_matching(source_filter) {
        let mut element = Element::new("text");
        element.text = Some(text);
        element.attributes.insert("name".to_string(), entry.id);
        if let Some(lang) = language {
            element
                .attributes
                .insert("language".to_string(), lang.to_string());
        }
        doc.append_element(root, element);
    }
    write_data_file(&doc, outputdir.join(filename))?;
    info!("finished creating result file {filename}");
    Ok(())
}
