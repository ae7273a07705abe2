use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;

use crate::core::{Catalog, Document, DocumentParseError};

/// Language file used as the reference when none is given explicitly.
pub const DEFAULT_ORIGINAL_STEM: &str = "en";

/// Parse JSON translation text into a document.
///
/// Namespaces may nest to any depth: serde_json's recursion limit is lifted
/// and the stack grows on demand while deserializing.
pub fn parse_document(content: &str, path: &Path) -> Result<Document, DocumentParseError> {
    let json = parse_unbounded(content).map_err(|source| DocumentParseError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    Document::from_json(json).map_err(|source| DocumentParseError::Unsupported {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_unbounded(content: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Read and flatten the translation file at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog, DocumentParseError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_document(&content, path)?;
    Ok(Catalog::from_document(extract_language_key(path), &document))
}

/// Extracts the language key from a filename.
///
/// Examples:
/// - "en.json" -> "en"
/// - "pt_BR.json" -> "pt_BR"
/// - "/path/to/translations/ja.json" -> "ja"
pub fn extract_language_key(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Path of the reference file which sits next to `translated`.
///
/// The reference keeps the translated file's extension:
/// "/x/y/fr.json" -> "/x/y/en.json".
pub fn default_original_path(translated: &Path) -> PathBuf {
    let file_name = match translated.extension() {
        Some(ext) => format!("{}.{}", DEFAULT_ORIGINAL_STEM, ext.to_string_lossy()),
        None => DEFAULT_ORIGINAL_STEM.to_string(),
    };
    translated.with_file_name(file_name)
}
