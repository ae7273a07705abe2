//! Namespace flattening.
//!
//! Turns a [`Document`] tree into a single-level map whose keys are the
//! `.`-joined namespace names leading to each translation string:
//!
//! ```text
//! { "TOP": { "LETTERS": { "A": "A" }, "NUMBERS": { "ONE": "1" } } }
//!   -> { "TOP.LETTERS.A": "A", "TOP.NUMBERS.ONE": "1" }
//! ```

use crate::core::{Document, StringMap};

/// Flatten `document` with every key placed under `prefix`.
///
/// A leaf is stored under `prefix` itself, so a bare string at the root of a
/// document ends up under the empty key.
pub fn flatten(document: &Document, prefix: &str) -> StringMap {
    let mut strings = StringMap::new();
    flatten_into(document, prefix.to_string(), &mut strings);
    strings
}

fn flatten_into(document: &Document, prefix: String, strings: &mut StringMap) {
    match document {
        Document::Leaf(value) => {
            strings.insert(prefix, value.clone());
        }
        Document::Namespace(children) => {
            for (name, child) in children {
                let child_prefix = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten_into(child, child_prefix, strings);
            }
        }
    }
}
