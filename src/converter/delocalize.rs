//! Delocalize: put externalized text strings back into data files
//!
//! The inverse pass, for convenient editing. A forward dictionary is built
//! from every text file entry carrying the requested language, then id
//! placeholders in the data files are swapped back for their strings. An id
//! with no translation gets a sentinel instead, so missing strings are easy
//! to grep for afterwards.

use std::path::Path;

use tracing::{debug, info, warn};

use super::dictionary::TextDictionary;
use super::resolve_language;
use crate::error::Result;
use crate::formats::data::{DataFile, Document, NodeId, load_data_dir, write_data_file};
use crate::naming::is_localizable_tag;
use crate::utils::{check_dir, ensure_dir};

/// Reserved id that keeps its placeholder form unless explicitly replaced.
const CONTINUE_ID: &str = "continue";

/// Aggregate counters for one `delocalize` run.
#[derive(Debug, Clone, Default)]
pub struct DelocalizeReport {
    /// Data files successfully parsed.
    pub files_parsed: usize,
    /// Translations collected for the requested language.
    pub entries_saved: usize,
    /// Doubly defined identifiers (later entry overwrote the earlier one).
    pub collisions: usize,
    /// Placeholders replaced with text (sentinel fills included).
    pub replacements: usize,
    /// Placeholders with no translation, filled with the sentinel.
    pub missing: usize,
    /// Mutated data files written to the output directory.
    pub files_written: usize,
    /// Trees that could not be written out.
    pub files_failed: usize,
}

/// A text file entry for the requested language: literal text, a `name`
/// attribute, and either a matching `language` attribute or none at all
/// when no specific language was requested.
fn is_translation_for(doc: &Document, id: NodeId, language: Option<&str>) -> bool {
    doc.element(id).is_some_and(|element| {
        element.tag == "text"
            && element.text.is_some()
            && element.attributes.contains_key("name")
            && match element.attr("language") {
                Some(lang) => Some(lang) == language,
                None => language.is_none(),
            }
    })
}

/// A placeholder waiting for its text: a localizable tag with no content
/// and an `id` attribute.
fn needs_delocalization(doc: &Document, id: NodeId, ignore_continue: bool) -> bool {
    doc.element(id).is_some_and(|element| {
        is_localizable_tag(&element.tag)
            && element.text.is_none()
            && element.attr("id").is_some_and(|placeholder| {
                !ignore_continue || placeholder != CONTINUE_ID
            })
    })
}

/// Make data files convenient to edit again: insert text strings from the
/// text files directly into the data files.
///
/// * `workdir` - directory holding the input data and text files.
/// * `outputdir` - created if absent; mutated data files land here.
/// * `language_attr` - which `language` attribute to read translations
///   for; unsupported values select entries with no language attribute.
/// * `empty_string` - written verbatim when an id has no translation.
/// * `ignore_continue` - keep the reserved `continue` id as a placeholder.
///
/// # Errors
/// Returns an error when `workdir` is not a directory or `outputdir`
/// exists as a file. Per-tree write failures are counted, not raised.
pub fn delocalize<P: AsRef<Path>>(
    workdir: P,
    outputdir: P,
    language_attr: &str,
    empty_string: &str,
    ignore_continue: bool,
) -> Result<DelocalizeReport> {
    check_dir(&workdir)?;
    ensure_dir(&outputdir)?;
    let language = resolve_language(language_attr);

    let mut files = load_data_dir(&workdir)?;
    let mut report = DelocalizeReport {
        files_parsed: files.len(),
        ..DelocalizeReport::default()
    };

    let mut dictionary = TextDictionary::new();
    fill_dictionary(&files, &mut dictionary, language, &mut report);
    replace_ids(
        &mut files,
        &dictionary,
        &mut report,
        outputdir.as_ref(),
        empty_string,
        ignore_continue,
    );

    info!(
        "delocalize finished: {} replacements, {} missing",
        report.replacements, report.missing
    );
    Ok(report)
}

/// Collect every translation for the requested language.
fn fill_dictionary(
    files: &[DataFile],
    dictionary: &mut TextDictionary,
    language: Option<&str>,
    report: &mut DelocalizeReport,
) {
    for file in files {
        let mut saved = 0usize;
        let mut doubled = 0usize;
        for id in file
            .document
            .find_elements(|doc, node| is_translation_for(doc, node, language))
        {
            let Some(element) = file.document.element(id) else {
                continue;
            };
            let (Some(text), Some(name)) = (element.text.clone(), element.attr("name")) else {
                continue;
            };
            if dictionary.insert(name.to_string(), text) {
                doubled += 1;
            }
            saved += 1;
        }
        if saved > 0 {
            debug!("saved {saved} strings from {}", file.filename);
            report.entries_saved += saved;
        }
        if doubled > 0 {
            warn!("found {doubled} doubly defined strings in {}", file.filename);
            report.collisions += doubled;
        }
    }
    info!(
        "finished filling the dictionary with text strings ({} entries)",
        dictionary.len()
    );
}

/// Swap id placeholders back for their strings and rewrite mutated trees.
fn replace_ids(
    files: &mut [DataFile],
    dictionary: &TextDictionary,
    report: &mut DelocalizeReport,
    outputdir: &Path,
    empty_string: &str,
    ignore_continue: bool,
) {
    for file in files {
        let mut replaced = 0usize;
        for node in file
            .document
            .find_elements(|doc, id| needs_delocalization(doc, id, ignore_continue))
        {
            let Some(element) = file.document.element_mut(node) else {
                continue;
            };
            let Some(placeholder) = element.attributes.shift_remove("id") else {
                continue;
            };
            match dictionary.get(&placeholder) {
                Some(text) => element.text = Some(text.to_string()),
                None => {
                    element.text = Some(empty_string.to_string());
                    report.missing += 1;
                }
            }
            replaced += 1;
        }

        if replaced > 0 {
            debug!("replaced {replaced} strings in {}", file.filename);
            report.replacements += replaced;
            match write_data_file(&file.document, outputdir.join(&file.filename)) {
                Ok(()) => report.files_written += 1,
                Err(err) => {
                    warn!("failed to write {}: {err}", file.filename);
                    report.files_failed += 1;
                }
            }
        }
    }
    info!("finished replacing ids with text strings");
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_basic_substitution() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write(dir.path(), "events.xml", "<event><text id=\"event_text\"/></event>");
        write(
            dir.path(),
            "text-ru.xml",
            "<FTL><text name=\"event_text\" language=\"ru\">Привет</text></FTL>",
        );

        let report =
            delocalize(&dir.path().to_path_buf(), &out, "ru", "TEXT_NOT_FOUND", true).unwrap();
        assert_eq!(report.entries_saved, 1);
        assert_eq!(report.replacements, 1);
        assert_eq!(report.missing, 0);

        let data = fs::read_to_string(out.join("events.xml")).unwrap();
        assert!(data.contains("<text>Привет</text>"));
        assert!(!data.contains("id="));
    }

    #[test]
    fn test_missing_translation_gets_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write(dir.path(), "events.xml", "<event><text id=\"event_text\"/></event>");

        let report =
            delocalize(&dir.path().to_path_buf(), &out, "ru", "TEXT_NOT_FOUND", true).unwrap();
        assert_eq!(report.replacements, 1);
        assert_eq!(report.missing, 1);

        let data = fs::read_to_string(out.join("events.xml")).unwrap();
        assert!(data.contains("<text>TEXT_NOT_FOUND</text>"));
        assert!(!data.contains("id="));
    }

    #[test]
    fn test_language_filter() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write(dir.path(), "events.xml", "<event><text id=\"event_text\"/></event>");
        write(
            dir.path(),
            "text-de.xml",
            "<FTL><text name=\"event_text\" language=\"de\">Hallo</text></FTL>",
        );

        let report =
            delocalize(&dir.path().to_path_buf(), &out, "ru", "TEXT_NOT_FOUND", true).unwrap();
        assert_eq!(report.entries_saved, 0);
        assert_eq!(report.missing, 1);
    }

    #[test]
    fn test_no_language_matches_unattributed_entries() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write(dir.path(), "events.xml", "<event><text id=\"event_text\"/></event>");
        write(
            dir.path(),
            "text_misc.xml",
            "<FTL><text name=\"event_text\">Hello</text></FTL>",
        );

        // "none" is not a supported code, so no specific language is selected.
        let report =
            delocalize(&dir.path().to_path_buf(), &out, "none", "TEXT_NOT_FOUND", true).unwrap();
        assert_eq!(report.entries_saved, 1);
        assert_eq!(report.missing, 0);

        let data = fs::read_to_string(out.join("events.xml")).unwrap();
        assert!(data.contains("<text>Hello</text>"));
    }

    #[test]
    fn test_continue_placeholder_is_reserved() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write(
            dir.path(),
            "events.xml",
            "<event><choice><text id=\"continue\"/></choice></event>",
        );

        let report =
            delocalize(&dir.path().to_path_buf(), &out, "ru", "TEXT_NOT_FOUND", true).unwrap();
        assert_eq!(report.replacements, 0);
        assert_eq!(report.files_written, 0);

        // ...unless the caller asks for it to be replaced too.
        let out2 = dir.path().join("out2");
        let report =
            delocalize(&dir.path().to_path_buf(), &out2, "ru", "TEXT_NOT_FOUND", false).unwrap();
        assert_eq!(report.replacements, 1);
        let data = fs::read_to_string(out2.join("events.xml")).unwrap();
        assert!(data.contains("<text>TEXT_NOT_FOUND</text>"));
    }

    #[test]
    fn test_duplicate_ids_counted_last_wins() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write(dir.path(), "events.xml", "<event><text id=\"event_text\"/></event>");
        write(
            dir.path(),
            "text-ru.xml",
            "<FTL><text name=\"event_text\" language=\"ru\">first</text>\
             <text name=\"event_text\" language=\"ru\">second</text></FTL>",
        );

        let report =
            delocalize(&dir.path().to_path_buf(), &out, "ru", "TEXT_NOT_FOUND", true).unwrap();
        assert_eq!(report.collisions, 1);

        let data = fs::read_to_string(out.join("events.xml")).unwrap();
        assert!(data.contains("<text>second</text>"));
    }
}
