//! Error types for `ftloc`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `ftloc` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Directory Errors ====================
    /// The work directory does not exist or is not a directory.
    #[error("directory not found: {}", .path.display())]
    DirectoryNotFound {
        /// The path that was expected to be a directory.
        path: PathBuf,
    },

    /// The output path exists but is a file, not a directory.
    #[error("output path is not a directory: {}", .path.display())]
    OutputPathIsFile {
        /// The conflicting path.
        path: PathBuf,
    },

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttr(String),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(err.to_string())
    }
}

/// A specialized Result type for `ftloc` operations.
pub type Result<T> = std::result::Result<T, Error>;
