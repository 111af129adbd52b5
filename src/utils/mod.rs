//! Utility helpers

pub mod path;

pub use path::{check_dir, ensure_dir};
