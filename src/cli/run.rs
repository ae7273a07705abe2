use std::path::PathBuf;

use anyhow::Result;

use super::args::Arguments;
use crate::{
    config::Config,
    core::{Catalog, default_original_path, load_catalog},
    rules::{Comparison, compare},
};

/// Everything the reporter needs from one run.
#[derive(Debug)]
pub struct RunResult {
    pub original_path: PathBuf,
    pub translated_path: PathBuf,
    pub original: Catalog,
    pub translated: Catalog,
    /// Expected-missing keys found in (and ignored from) the original.
    pub expected_missing_dropped: usize,
    pub comparison: Comparison,
}

/// Load both catalogs and compare them.
///
/// Fails before comparing anything if either file (or the config file)
/// cannot be loaded.
pub fn run(args: &Arguments) -> Result<RunResult> {
    let config = Config::load_or_default(args.config.as_deref())?;
    let rules = config.exclusion_rules()?;

    let original_path = args
        .original
        .clone()
        .unwrap_or_else(|| default_original_path(&args.translated));
    let translated_path = args.translated.clone();

    let original = load_catalog(&original_path)?;
    let translated = load_catalog(&translated_path)?;

    let expected_missing_dropped = original
        .strings
        .keys()
        .filter(|key| rules.is_expected_missing(key))
        .count();
    let comparison = compare(&original, &translated, &args.check_options(), &rules);

    Ok(RunResult {
        original_path,
        translated_path,
        original,
        translated,
        expected_missing_dropped,
        comparison,
    })
}
