//! Command implementations for the BOM processor CLI
//!
//! Each command lives in its own module:
//! - `convert`: full pipeline from CSV to JSON
//! - `validate`: header and row checks without output
//! - `version`: version banner

pub mod convert;
pub mod shared;
pub mod validate;
pub mod version;

pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the handler for the parsed subcommand
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Convert(convert_args)) => convert::run_convert(convert_args),
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args),
        Some(Commands::Version) => version::run_version(),
        None => Err(Error::configuration("No command given")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_stats_re_export() {
        let stats = ProcessingStats::default();
        assert_eq!(stats.files_processed, 0);
        assert_eq!(stats.bytes_written, 0);
    }

    #[test]
    fn test_run_without_command() {
        let err = run(Args { command: None }).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
