//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `exit_status`: Process exit codes
//! - `report`: Text and JSON report output
//! - `run`: Loads both catalogs and runs the comparison

use anyhow::Result;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;
pub use run::{RunResult, run};

/// Run one comparison and print its report.
///
/// Returns `Err` only when a file cannot be loaded; discrepancies are
/// reported through the returned [`ExitStatus`].
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run(&args)?;

    if args.verbose {
        report::print_diagnostics(&result);
    }
    report::print(&result, args.format)?;

    Ok(ExitStatus::from_comparison(&result.comparison))
}
