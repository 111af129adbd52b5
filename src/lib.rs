//! # ftloc
//!
//! Localization round-trip tools for FTL: Faster Than Light game data.
//!
//! FTL keeps its events, blueprints and other data in near-well-formed XML
//! files. Translatable strings can live in two forms: inline inside the data
//! tags, or externalized into per-language text files where each string is
//! keyed by a stable, structurally derived identifier. This crate converts
//! between the two forms in both directions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ftloc::converter;
//!
//! // Move inline strings out of the data files into text-ru.xml,
//! // replacing each with an id placeholder.
//! let report = converter::localize("data", "result0", "ru", true, false)?;
//! println!("assigned {} new ids", report.ids_assigned);
//!
//! // ...and put them back, for convenient editing.
//! converter::delocalize("result0", "result1", "ru", "TEXT_NOT_FOUND", true)?;
//! # Ok::<(), ftloc::Error>(())
//! ```
//!
//! ## Using the Prelude
//!
//! ```
//! use ftloc::prelude::*;
//!
//! // Now you have access to:
//! // - localize, delocalize and their reports
//! // - Document, Element, DataFile and the loader
//! // - derive_text_id and the tag sets
//! // - Error, Result, and more
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `ftloc` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod naming;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::data::{
        DataFile, Document, Element, NodeId, NodeKind, load_data_dir, parse_document,
        repair_document, serialize_document,
    };
    pub use crate::naming::{derive_text_id, is_blueprint_tag, is_localizable_tag};

    pub use crate::converter::{
        DelocalizeReport, LocaleDictionary, LocalizeReport, SUPPORTED_LANGUAGES, TextDictionary,
        delocalize, localize, resolve_language,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
