//! Day-range driver
//!
//! Runs scan → query → format → write for one day at a time. Days never
//! overlap: the next day starts only after the previous report is on disk.

use chrono::NaiveDate;
use rayon::ThreadPool;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::core::{DaySummary, DayWindow, HistoryRecord, format_history, report_failures};
use crate::error::AppError;
use crate::output::{report_path, write_report};
use crate::source::{HistoryQuery, ScanOptions, find_project_dirs, run_on_dirs};
use crate::utils::{Timezone, days_in_range, format_date};

/// Everything one run needs to produce reports
pub(crate) struct Pipeline {
    pub(crate) root: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) scan: ScanOptions,
    pub(crate) query: Box<dyn HistoryQuery>,
    pub(crate) timezone: Timezone,
    pub(crate) pool: ThreadPool,
}

impl Pipeline {
    /// Write one report per day in `[start, end]`, oldest first.
    ///
    /// A reversed range writes nothing. The first write failure stops the
    /// sweep; reports already written stay on disk.
    pub(crate) fn write_dir_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DaySummary>, AppError> {
        let days = days_in_range(start, end);
        debug!(days = days.len(), "processing range");

        let mut summaries = Vec::with_capacity(days.len());
        for date in days {
            summaries.push(self.write_day(date)?);
        }
        Ok(summaries)
    }

    /// Query every project directory for `date` and write `<date>.txt`
    pub(crate) fn write_day(&self, date: NaiveDate) -> Result<DaySummary, AppError> {
        let window = DayWindow::for_date(date, self.timezone);
        let file_id = format_date(window.date);
        let report = report_path(&self.output, window.date);
        info!("writing {file_id}");

        let start = Instant::now();
        let records = self.collect_history(&window)?;
        report_failures(&file_id, &records);

        let content = format_history(&records);
        let report = write_report(&report, &content)?;
        debug!(
            date = %file_id,
            directories = records.len(),
            bytes = content.len(),
            "day done ({:.2}ms)",
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(DaySummary::from_records(file_id, report, &records))
    }

    /// Discover project directories and run the query in each
    fn collect_history(&self, window: &DayWindow) -> Result<Vec<HistoryRecord>, AppError> {
        let dirs = find_project_dirs(&self.root, &self.scan)?;
        debug!(root = %self.root.display(), found = dirs.len(), "scanned for projects");

        let query = self.query.as_ref();
        Ok(run_on_dirs(
            &self.pool,
            &dirs,
            |dir| {
                debug!("{}", query.describe(dir, window));
                query.command(dir, window)
            },
            |dir, outcome| HistoryRecord::new(dir.to_path_buf(), outcome),
        ))
    }
}
