//! Core module - per-day pipeline and the types it passes around

mod driver;
mod formatter;
mod types;

pub(crate) use driver::Pipeline;
pub(crate) use formatter::{format_history, report_failures};
pub(crate) use types::{DaySummary, DayWindow, HistoryRecord, QueryFailure, QueryOutcome};
