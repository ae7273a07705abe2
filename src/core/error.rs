use std::{io, path::PathBuf};

use thiserror::Error;

/// A translation file could not be turned into a catalog.
///
/// Always fatal: nothing is compared once either file fails to load.
#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("failed to read translation file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse translation file {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported value in translation file {path:?}")]
    Unsupported {
        path: PathBuf,
        #[source]
        source: UnsupportedValue,
    },
}

/// A JSON value which is neither a string nor an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} found at {}, expected a string or an object", .kind, display_key(.key))]
pub struct UnsupportedValue {
    /// Dotted path of the offending value (empty for the document root).
    pub key: String,
    /// JSON kind of the offending value (e.g. "number").
    pub kind: &'static str,
}

fn display_key(key: &str) -> String {
    if key.is_empty() {
        "document root".to_string()
    } else {
        format!("\"{}\"", key)
    }
}
