//! CLI subcommand definitions

use chrono::NaiveDate;
use clap::Subcommand;

use crate::error::AppError;
use crate::utils::parse_date;

use super::Cli;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Write reports for every day from START to END (inclusive)
    Range {
        /// First day (YYYYMMDD or YYYY-MM-DD)
        start: String,
        /// Last day (YYYYMMDD or YYYY-MM-DD)
        end: String,
    },
    /// Write reports for the days around today (default: just today)
    Recent {
        /// Days before today to include
        #[arg(long, default_value_t = 0)]
        before: u64,
        /// Days after today to include
        #[arg(long, default_value_t = 0)]
        after: u64,
    },
    /// List the project directories that would be queried
    Scan,
}

/// What the invocation asks for, with dates already parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunCommand {
    Range { start: NaiveDate, end: NaiveDate },
    Recent { before: u64, after: u64 },
    Scan,
}

/// Normalize subcommands and the bare `daylog START END` form.
/// No command and no dates means today's report.
pub(crate) fn parse_command(cli: &Cli) -> Result<RunCommand, AppError> {
    match (&cli.command, &cli.start, &cli.end) {
        (Some(Commands::Range { start, end }), _, _) => Ok(RunCommand::Range {
            start: parse_date(start)?,
            end: parse_date(end)?,
        }),
        (Some(Commands::Recent { before, after }), _, _) => Ok(RunCommand::Recent {
            before: *before,
            after: *after,
        }),
        (Some(Commands::Scan), _, _) => Ok(RunCommand::Scan),
        (None, Some(start), Some(end)) => Ok(RunCommand::Range {
            start: parse_date(start)?,
            end: parse_date(end)?,
        }),
        (None, _, _) => Ok(RunCommand::Recent {
            before: 0,
            after: 0,
        }),
    }
}
