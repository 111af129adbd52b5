//! FTL data XML format module
//!
//! Loading, repairing, parsing and printing of the game's data files.

mod document;
mod reader;
mod repair;
mod writer;

use std::fs;
use std::path::Path;

use tracing::{info, warn};

pub use document::{Document, Element, Node, NodeId, NodeKind};
pub use reader::parse_document;
pub use repair::{ROOT_TAG, repair_document};
pub use writer::{serialize_document, write_data_file};

use crate::error::Result;
use crate::utils::check_dir;

/// File name suffixes recognized as game data.
pub const DATA_SUFFIXES: [&str; 3] = [".xml", ".xml.append", ".xml.rawclobber"];

/// A parsed tree paired with the file name it came from. The pairing
/// survives mutation and names the output file on write.
#[derive(Debug, Clone)]
pub struct DataFile {
    /// The parsed (and possibly mutated) tree.
    pub document: Document,
    /// File name relative to the work directory.
    pub filename: String,
}

/// Whether a file name carries one of the recognized data suffixes.
#[must_use]
pub fn is_data_filename(name: &str) -> bool {
    DATA_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Load every data file in a directory, in sorted filename order.
///
/// Decoding is lossy and each file is repaired before parsing. Files that
/// still fail to parse (or cannot be read) are skipped with a warning
/// rather than aborting the batch.
///
/// # Errors
/// Returns [`crate::Error::DirectoryNotFound`] when `workdir` is not a
/// directory.
pub fn load_data_dir<P: AsRef<Path>>(workdir: P) -> Result<Vec<DataFile>> {
    let workdir = workdir.as_ref();
    check_dir(workdir)?;
    let mut names: Vec<String> = fs::read_dir(workdir)?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_data_filename(name))
        .collect();
    names.sort();

    let mut files = Vec::new();
    for filename in names {
        let raw = match fs::read(workdir.join(&filename)) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("skipping unreadable file {filename}: {err}");
                continue;
            }
        };
        let content = String::from_utf8_lossy(&raw);
        let repaired = repair_document(&content, ROOT_TAG);
        match parse_document(&repaired) {
            Ok(document) => files.push(DataFile { document, filename }),
            Err(err) => warn!("skipping unparsable file {filename}: {err}"),
        }
    }
    info!("finished parsing xml files ({} loaded)", files.len());
    Ok(files)
}
