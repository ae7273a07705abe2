use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::UnsupportedValue;

/// A parsed translation file before flattening.
///
/// Translation files are trees: every leaf is a translation string and every
/// inner node is a namespace grouping related strings under a shared prefix.
///
/// ```json
/// {
///     "NAME": "English",
///     "HOME": {
///         "TITLE": "Home",
///         "ACTION_LOGOUT": "Logout"
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// A translation string: `"TITLE": "Home"`
    Leaf(String),

    /// A namespace of nested documents: `"HOME": { ... }`
    Namespace(BTreeMap<String, Document>),
}

impl Document {
    /// Convert a JSON value into a document.
    ///
    /// Only strings and objects are meaningful in a translation file. Any other
    /// value is rejected along with the dotted path at which it was found.
    pub fn from_json(value: Value) -> Result<Self, UnsupportedValue> {
        from_json_at(value, String::new())
    }

    /// Number of translation strings (leaves) in this document.
    #[cfg(test)]
    pub fn leaf_count(&self) -> usize {
        match self {
            Document::Leaf(_) => 1,
            Document::Namespace(children) => children.values().map(Document::leaf_count).sum(),
        }
    }
}

fn from_json_at(value: Value, path: String) -> Result<Document, UnsupportedValue> {
    match value {
        Value::String(s) => Ok(Document::Leaf(s)),
        Value::Object(map) => {
            let mut children = BTreeMap::new();
            for (name, child) in map {
                let child_path = if path.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", path, name)
                };
                children.insert(name, from_json_at(child, child_path)?);
            }
            Ok(Document::Namespace(children))
        }
        other => Err(UnsupportedValue {
            key: path,
            kind: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
