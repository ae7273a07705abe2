//! Transcheck - translation catalog comparison
//!
//! Transcheck compares a translated JSON translation file against the
//! original language it was translated from, reporting strings which are
//! missing from the translation, strings the translation defines but the
//! original does not, and (optionally) strings copied verbatim without being
//! translated.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit codes)
//! - `config`: Exclusion rules and their optional config file
//! - `core`: Loading and flattening translation files into catalogs
//! - `rules`: The missing, unused and copied checks

pub mod cli;
pub mod config;
pub mod core;
pub mod rules;
