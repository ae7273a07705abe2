//! Data types shared by the loader, the rules and the reporter.

mod catalog;
mod document;

pub use catalog::{Catalog, LANGUAGE_NAME_KEY, StringMap, UNKNOWN_LANGUAGE_NAME};
pub use document::Document;
