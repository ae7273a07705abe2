//! File parsers for translation files.
//!
//! - `json`: JSON translation file loader

pub mod json;
