//! Missing string detection rule.
//!
//! Detects strings defined by the original language (and thus needed by the
//! application) which the translation fails to define.

use crate::core::StringMap;

/// Check for missing strings.
///
/// # Arguments
/// * `original` - Original strings, with expected-missing keys already removed
/// * `translated` - Strings of the translation being validated
///
/// # Returns
/// Keys present in `original` but not in `translated`, sorted
pub fn check_missing(original: &StringMap, translated: &StringMap) -> Vec<String> {
    let mut missing: Vec<String> = original
        .keys()
        .filter(|key| !translated.contains_key(*key))
        .cloned()
        .collect();
    missing.sort();
    missing
}
