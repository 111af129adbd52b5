//! Localization dictionaries
//!
//! Two directions, two shapes. `LocaleDictionary` (localize) maps a text
//! value to the identifier and source file that own it; `TextDictionary`
//! (delocalize) maps an identifier to its text for one chosen language.
//! Both keep insertion order, and both handle duplicate keys the same way:
//! the later entry overwrites, the caller counts the collision.

use indexmap::IndexMap;

/// One externalized string: its identifier and the file it was found in.
#[derive(Debug, Clone)]
pub struct LocaleEntry {
    /// The derived (or pre-existing) identifier.
    pub id: String,
    /// File name the entry came from; drives category partitioning.
    pub source: String,
}

/// Text value -> entry, for the localize direction.
#[derive(Debug, Clone, Default)]
pub struct LocaleDictionary {
    entries: IndexMap<String, LocaleEntry>,
}

impl LocaleDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct text values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a text value. Returns true when the value was already present
    /// (doubly defined); the new entry overwrites the old one either way.
    pub fn insert(&mut self, text: String, id: String, source: String) -> bool {
        self.entries.insert(text, LocaleEntry { id, source }).is_some()
    }

    /// Identifier already assigned to this exact text value, if any.
    #[must_use]
    pub fn id_for_text(&self, text: &str) -> Option<&str> {
        self.entries.get(text).map(|entry| entry.id.as_str())
    }

    /// Remove and return every entry whose source file name contains
    /// `source_filter`, in insertion order. `None` matches everything.
    pub fn drain_matching(&mut self, source_filter: Option<&str>) -> Vec<(String, LocaleEntry)> {
        let keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| {
                source_filter.is_none_or(|filter| entry.source.contains(filter))
            })
            .map(|(text, _)| text.clone())
            .collect();
        keys.into_iter()
            .filter_map(|key| self.entries.shift_remove_entry(&key))
            .collect()
    }
}

/// Identifier -> text, for the delocalize direction.
#[derive(Debug, Clone, Default)]
pub struct TextDictionary {
    entries: IndexMap<String, String>,
}

impl TextDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a translation. Returns true when the identifier was already
    /// present; the new text silently overwrites the old one either way.
    pub fn insert(&mut self, id: String, text: String) -> bool {
        self.entries.insert(id, text).is_some()
    }

    /// Text for an identifier, if this language has one.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }
}
