//! Comparison rules for translation catalogs.
//!
//! Each rule is a pure function taking only the strings it needs and
//! returning the sorted keys it flags. [`compare`] runs the enabled rules
//! against two catalogs after applying the exclusion rules.
//!
//! ## Module Structure
//!
//! - `missing`: Strings the translation fails to define
//! - `unused`: Strings the translation defines but nothing requests
//! - `copied`: Strings identical to the original language

pub mod copied;
pub mod missing;
pub mod unused;

use serde::Serialize;

use crate::{
    config::ExclusionRules,
    core::{Catalog, StringMap},
};

pub use copied::check_copied;
pub use missing::check_missing;
pub use unused::check_unused;

/// Which checks to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub check_missing: bool,
    pub check_unused: bool,
    /// Prone to false positives, so disabled by default.
    pub check_copied: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            check_missing: true,
            check_unused: true,
            check_copied: false,
        }
    }
}

/// Keys flagged by each check, each list sorted.
///
/// Disabled checks always yield an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub missing_keys: Vec<String>,
    pub unused_keys: Vec<String>,
    pub copied_keys: Vec<String>,
}

impl Comparison {
    pub fn error_count(&self) -> usize {
        self.missing_keys.len() + self.unused_keys.len() + self.copied_keys.len()
    }

    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

/// Compare a translation against the original language.
///
/// Expected-missing keys are removed from the original strings before any
/// check runs, so a translation redefining one of them is flagged as unused.
/// Neither catalog is modified.
pub fn compare(
    original: &Catalog,
    translated: &Catalog,
    options: &CheckOptions,
    rules: &ExclusionRules,
) -> Comparison {
    let original_strings = strip_expected_missing(&original.strings, rules);
    let translated_strings = &translated.strings;

    Comparison {
        missing_keys: if options.check_missing {
            check_missing(&original_strings, translated_strings)
        } else {
            Vec::new()
        },
        unused_keys: if options.check_unused {
            check_unused(&original_strings, translated_strings)
        } else {
            Vec::new()
        },
        copied_keys: if options.check_copied {
            check_copied(&original_strings, translated_strings, rules)
        } else {
            Vec::new()
        },
    }
}

/// Copy of `strings` without the keys a base layer is expected to supply.
pub fn strip_expected_missing(strings: &StringMap, rules: &ExclusionRules) -> StringMap {
    strings
        .iter()
        .filter(|(key, _)| !rules.is_expected_missing(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
