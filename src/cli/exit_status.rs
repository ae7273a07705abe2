use std::process::ExitCode;

use crate::rules::Comparison;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Comparison completed, no discrepancies found
/// - `Failure` (1): Comparison completed but found discrepancies
/// - `Error` (2): A translation or config file could not be loaded
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Comparison completed, no discrepancies found.
    Success,
    /// Comparison completed but found discrepancies.
    Failure,
    /// A translation or config file could not be loaded.
    Error,
}

impl ExitStatus {
    pub fn from_comparison(comparison: &Comparison) -> Self {
        if comparison.error_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
