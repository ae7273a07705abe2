//! CLI argument definitions using clap.
//!
//! ```text
//! transcheck [OPTIONS] [ORIGINAL] <TRANSLATED>
//! ```
//!
//! When only one path is given it is TRANSLATED, and ORIGINAL defaults to
//! `en.<ext>` in the same directory.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::rules::CheckOptions;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Compares two JSON translation files, listing the strings which appear to be missing or incorrect",
    long_about = None,
    allow_missing_positional = true
)]
pub struct Arguments {
    /// Reference translation containing every string the application uses
    /// [default: en.<ext> next to TRANSLATED]
    #[arg(value_name = "ORIGINAL")]
    pub original: Option<PathBuf>,

    /// Translation to compare against ORIGINAL
    #[arg(value_name = "TRANSLATED")]
    pub translated: PathBuf,

    /// Disable checking for strings missing from TRANSLATED
    #[arg(long)]
    pub no_missing: bool,

    /// Disable checking for strings in TRANSLATED that ORIGINAL does not define
    #[arg(long)]
    pub no_unused: bool,

    /// Check for strings identical to ORIGINAL (may report false positives)
    #[arg(long)]
    pub check_copied: bool,

    /// JSON file tuning expected-missing keys and expected-copied patterns
    #[arg(long, env = "TRANSCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            check_missing: !self.no_missing,
            check_unused: !self.no_unused,
            check_copied: self.check_copied,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Machine-readable JSON report
    Json,
}
