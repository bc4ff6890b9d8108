//! History sources
//!
//! Discovers project directories and runs the per-directory history query
//! over them.

pub(crate) mod git;
pub(crate) mod runner;
pub(crate) mod scanner;

pub(crate) use git::{GitLog, HistoryQuery};
pub(crate) use runner::{build_pool, run_on_dirs};
pub(crate) use scanner::{ScanOptions, find_project_dirs};
