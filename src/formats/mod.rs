//! File format handlers for FTL game data

pub mod data;

// Re-export main document types
pub use data::{DataFile, Document, Element, Node, NodeId, NodeKind};
pub use data::{load_data_dir, parse_document, repair_document, serialize_document};
