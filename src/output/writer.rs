use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::REPORT_EXTENSION;
use crate::error::AppError;
use crate::utils::format_date;

/// `<folder>/<YYYY-MM-DD>.txt`
pub(crate) fn report_path(folder: &Path, date: NaiveDate) -> PathBuf {
    folder.join(format!("{}.{REPORT_EXTENSION}", format_date(date)))
}

/// Write `content` to `path`, replacing any previous file.
///
/// Not atomic: a crash mid-write leaves a partial report. The parent folder
/// must already exist.
pub(crate) fn write_report(path: &Path, content: &str) -> Result<PathBuf, AppError> {
    fs::write(path, content).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}
