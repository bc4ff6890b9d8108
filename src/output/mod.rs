mod format;
mod table;
mod writer;

pub(crate) use table::{SummaryTableOptions, print_summary_table};
pub(crate) use writer::{report_path, write_report};
