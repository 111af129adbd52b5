//! Inline <-> externalized conversion engines
//!
//! `localize` moves inline strings out of the data files into per-language
//! text files; `delocalize` puts them back. Each call owns its own tree set
//! and dictionary and runs as one sequential pass.

pub mod dictionary;

mod delocalize;
mod localize;

pub use delocalize::{DelocalizeReport, delocalize};
pub use dictionary::{LocaleDictionary, LocaleEntry, TextDictionary};
pub use localize::{LocalizeReport, localize};

/// Language codes FTL ships translations for.
pub const SUPPORTED_LANGUAGES: [&str; 8] = ["de", "es", "fr", "it", "pl", "pt", "ru", "zh-Hans"];

/// Resolve a requested language attribute against the supported set.
/// Anything else means "no specific language" rather than an error.
#[must_use]
pub fn resolve_language(attr: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES.into_iter().find(|&lang| lang == attr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_resolution() {
        assert_eq!(resolve_language("ru"), Some("ru"));
        assert_eq!(resolve_language("zh-Hans"), Some("zh-Hans"));
        assert_eq!(resolve_language("en"), None);
        assert_eq!(resolve_language(""), None);
    }
}
