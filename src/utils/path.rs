//! Path utilities

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Fail unless `path` is an existing directory.
///
/// # Errors
/// Returns [`Error::DirectoryNotFound`] otherwise.
pub fn check_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::DirectoryNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Make sure `path` is a directory, creating it when absent.
///
/// # Errors
/// Returns [`Error::OutputPathIsFile`] when the path exists but is not a
/// directory.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(Error::OutputPathIsFile {
                path: path.to_path_buf(),
            })
        }
    } else {
        fs::create_dir_all(path)?;
        Ok(())
    }
}
