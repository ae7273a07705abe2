//! Unused string detection rule.
//!
//! Detects strings defined by the translation which the original language
//! does not define, so nothing in the application requests them. This also
//! covers expected-missing keys which a translation redefines.

use crate::core::StringMap;

/// Check for unused strings.
///
/// Finds all keys defined by `translated` which are absent from `original`.
///
/// # Returns
/// Sorted keys present in `translated` but not in `original`
pub fn check_unused(original: &StringMap, translated: &StringMap) -> Vec<String> {
    let mut unused: Vec<String> = translated
        .keys()
        .filter(|key| !original.contains_key(*key))
        .cloned()
        .collect();
    unused.sort();
    unused
}
