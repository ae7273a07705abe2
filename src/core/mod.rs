//! Core loading pipeline: raw file -> [`Document`] -> flattened [`Catalog`].
//!
//! ## Module Structure
//!
//! - `data`: Document and catalog types
//! - `error`: Load errors
//! - `flatten`: Namespace flattening
//! - `parsers`: Translation file parsers

pub mod data;
pub mod error;
pub mod flatten;
pub mod parsers;

pub use data::{Catalog, Document, LANGUAGE_NAME_KEY, StringMap, UNKNOWN_LANGUAGE_NAME};
pub use error::{DocumentParseError, UnsupportedValue};
pub use flatten::flatten;
pub use parsers::json::{default_original_path, load_catalog};
