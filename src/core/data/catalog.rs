use std::collections::HashMap;

use crate::core::{Document, flatten};

/// Reserved key holding the display name of a language.
pub const LANGUAGE_NAME_KEY: &str = "NAME";

/// Placeholder shown when a catalog does not define [`LANGUAGE_NAME_KEY`].
pub const UNKNOWN_LANGUAGE_NAME: &str = "unknown";

/// Flattened translation strings, keyed by dotted path (e.g. "HOME.TITLE").
pub type StringMap = HashMap<String, String>;

/// All translation strings of one language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Identifier of the language, derived from the file stem (e.g. "fr").
    pub language_key: String,
    /// Display name from the reserved `NAME` key.
    ///
    /// Extension overlays usually omit it, so absence is not an error.
    pub language_name: Option<String>,
    pub strings: StringMap,
}

impl Catalog {
    pub fn new(language_key: impl Into<String>, strings: StringMap) -> Self {
        let language_name = strings.get(LANGUAGE_NAME_KEY).cloned();
        Self {
            language_key: language_key.into(),
            language_name,
            strings,
        }
    }

    pub fn from_document(language_key: impl Into<String>, document: &Document) -> Self {
        Self::new(language_key, flatten(document, ""))
    }

    pub fn display_name(&self) -> &str {
        self.language_name.as_deref().unwrap_or(UNKNOWN_LANGUAGE_NAME)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
