//! Report formatting and printing utilities.
//!
//! The text report lists each category of discrepancy under its own header,
//! one key per line. The JSON report carries the same data for tooling.
//! Kept separate from the comparison so transcheck can be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{args::OutputFormat, run::RunResult};
use crate::{core::Catalog, rules::Comparison};

const MISSING_HEADER: &str =
    "The following strings are missing from the translation and should be added:";

const UNUSED_HEADER: &str = "The following strings are either NOT defined for the original \
     language or are expected to be inherited from the original language and should be removed:";

const COPIED_HEADER: &str =
    "The following strings are identical to the original language and MIGHT be untranslated:";

/// Print the report for `result` to stdout in the requested format.
pub fn print(result: &RunResult, format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => report_to(
            &result.original,
            &result.translated,
            &result.comparison,
            &mut stdout,
        ),
        OutputFormat::Json => {
            let json = json_report(&result.original, &result.translated, &result.comparison)?;
            let _ = writeln!(stdout, "{}", json);
        }
    }
    Ok(())
}

/// Print the text report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(
    original: &Catalog,
    translated: &Catalog,
    comparison: &Comparison,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "Original language: {} ({})",
        original.language_key,
        original.display_name()
    );
    let _ = writeln!(
        writer,
        "Translation language: {} ({})",
        translated.language_key,
        translated.display_name()
    );

    print_section(MISSING_HEADER, &comparison.missing_keys, writer);
    print_section(UNUSED_HEADER, &comparison.unused_keys, writer);
    print_section(COPIED_HEADER, &comparison.copied_keys, writer);

    let _ = writeln!(writer);
    let errors = comparison.error_count();
    if errors > 0 {
        let _ = writeln!(
            writer,
            "{}",
            format!("{} error(s) total.", errors).bold().red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{}",
            "Check completed successfully. No errors.".green()
        );
    }
}

fn print_section<W: Write>(header: &str, keys: &[String], writer: &mut W) {
    if keys.is_empty() {
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", header.bold().yellow());
    let _ = writeln!(writer);
    for key in keys {
        let _ = writeln!(writer, "    {}", key);
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    original: LanguageSummary<'a>,
    translated: LanguageSummary<'a>,
    #[serde(flatten)]
    comparison: &'a Comparison,
    error_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguageSummary<'a> {
    language_key: &'a str,
    language_name: Option<&'a str>,
    string_count: usize,
}

impl<'a> From<&'a Catalog> for LanguageSummary<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Self {
            language_key: &catalog.language_key,
            language_name: catalog.language_name.as_deref(),
            string_count: catalog.len(),
        }
    }
}

/// Render the machine-readable report.
pub fn json_report(
    original: &Catalog,
    translated: &Catalog,
    comparison: &Comparison,
) -> Result<String> {
    let report = JsonReport {
        original: original.into(),
        translated: translated.into(),
        comparison,
        error_count: comparison.error_count(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Print what was loaded and how it was filtered (`-v`).
pub fn print_diagnostics(result: &RunResult) {
    print_diagnostics_to(result, &mut io::stderr().lock());
}

/// Print diagnostics to a custom writer.
pub fn print_diagnostics_to<W: Write>(result: &RunResult, writer: &mut W) {
    let label = "info:".bold().cyan();
    let _ = writeln!(
        writer,
        "{} loaded {} string(s) from {}",
        label,
        result.original.len(),
        result.original_path.display()
    );
    let _ = writeln!(
        writer,
        "{} loaded {} string(s) from {}",
        label,
        result.translated.len(),
        result.translated_path.display()
    );
    if result.expected_missing_dropped > 0 {
        let _ = writeln!(
            writer,
            "{} ignoring {} string(s) inherited from the base translation",
            label, result.expected_missing_dropped
        );
    }
}
