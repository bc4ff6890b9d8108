//! Core data types shared by the scanner, runner, formatter and driver

use chrono::{NaiveDate, NaiveTime};
use std::path::PathBuf;
use thiserror::Error;

use crate::consts::{DAY_END, DAY_START};
use crate::utils::Timezone;

/// Wall-clock bounds of one calendar day, rendered for the query tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayWindow {
    pub(crate) date: NaiveDate,
    pub(crate) start: String,
    pub(crate) end: String,
}

impl DayWindow {
    pub(crate) fn for_date(date: NaiveDate, timezone: Timezone) -> Self {
        let bound = |(h, m): (u32, u32)| {
            let time = NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
            timezone.format_bound(date.and_time(time))
        };
        Self {
            date,
            start: bound(DAY_START),
            end: bound(DAY_END),
        }
    }
}

/// Why a history query produced no usable output
#[derive(Debug, Error)]
pub(crate) enum QueryFailure {
    #[error("failed to launch: {0}")]
    Spawn(std::io::Error),

    #[error("exited with {}: {stderr}", exit_label(.code))]
    Exit { code: Option<i32>, stderr: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "signal".to_string(),
    }
}

/// Result of running the history query in one directory
#[derive(Debug)]
pub(crate) enum QueryOutcome {
    Success(String),
    Failure(QueryFailure),
}

impl QueryOutcome {
    /// Output worth reporting: successful and non-empty
    pub(crate) fn output(&self) -> Option<&str> {
        match self {
            QueryOutcome::Success(out) if !out.is_empty() => Some(out),
            _ => None,
        }
    }
}

/// One directory's query outcome for one day
#[derive(Debug)]
pub(crate) struct HistoryRecord {
    pub(crate) dir: PathBuf,
    pub(crate) outcome: QueryOutcome,
}

impl HistoryRecord {
    pub(crate) fn new(dir: PathBuf, outcome: QueryOutcome) -> Self {
        Self { dir, outcome }
    }

    pub(crate) fn failure(&self) -> Option<&QueryFailure> {
        match &self.outcome {
            QueryOutcome::Failure(f) => Some(f),
            QueryOutcome::Success(_) => None,
        }
    }
}

/// What one day's pipeline did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DaySummary {
    pub(crate) date: String,
    pub(crate) report: PathBuf,
    /// Project directories queried
    pub(crate) directories: usize,
    /// Directories that reported at least one commit
    pub(crate) active: usize,
    /// Commit lines written to the report
    pub(crate) commits: usize,
    pub(crate) failed: usize,
}

impl DaySummary {
    pub(crate) fn from_records(date: String, report: PathBuf, records: &[HistoryRecord]) -> Self {
        let mut summary = DaySummary {
            date,
            report,
            directories: records.len(),
            ..Default::default()
        };
        for record in records {
            if let Some(out) = record.outcome.output() {
                summary.active += 1;
                summary.commits += out.lines().count();
            } else if record.failure().is_some() {
                summary.failed += 1;
            }
        }
        summary
    }
}
