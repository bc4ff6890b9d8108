/// Date format used for report file names and window bounds: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extension of the per-day report files
pub(crate) const REPORT_EXTENSION: &str = "txt";

/// Entry whose presence marks a directory as a project root
pub(crate) const DEFAULT_MARKER: &str = ".git";

/// Version-control program used for history queries
pub(crate) const DEFAULT_GIT: &str = "git";

/// Upper bound on concurrently running history queries
pub(crate) const DEFAULT_JOBS: usize = 8;

/// Folder reports are written to when nothing else is configured
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "history";

/// `git log` pretty format: abbreviated hash, committer date, subject
pub(crate) const LOG_FORMAT: &str = "format:%h %ci %s";

/// Start and end (hour, minute) of the wall-clock day handed to the query
pub(crate) const DAY_START: (u32, u32) = (0, 0);
pub(crate) const DAY_END: (u32, u32) = (23, 59);
