//! Copied string detection rule.
//!
//! Detects translation values that are identical to the original language,
//! which may indicate that the text was copied without being translated.
//! Values which are legitimately the same in every language (references,
//! numbers, protocol names, the product name) are excluded.

use crate::{config::ExclusionRules, core::StringMap};

/// Check for strings which MIGHT be untranslated.
///
/// # Arguments
/// * `original` - Original strings, with expected-missing keys already removed
/// * `translated` - Strings of the translation being validated
/// * `rules` - Exclusion rules; original values matching the expected-copied
///   pattern are skipped
///
/// # Returns
/// Sorted keys whose translated value is byte-identical to the original one
pub fn check_copied(
    original: &StringMap,
    translated: &StringMap,
    rules: &ExclusionRules,
) -> Vec<String> {
    let mut copied: Vec<String> = original
        .iter()
        .filter(|(key, value)| translated.get(*key) == Some(*value))
        .filter(|(_, value)| !rules.is_expected_copied(value))
        .map(|(key, _)| key.clone())
        .collect();
    copied.sort();
    copied
}
