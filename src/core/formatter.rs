use std::fmt::Write;

use tracing::warn;

use crate::core::{HistoryRecord, QueryFailure};

/// Concatenate one day's records into the report body.
///
/// Each directory with output becomes `<dir>:` followed by its output with
/// every line tab-indented. Failed and empty records are left out.
pub(crate) fn format_history(records: &[HistoryRecord]) -> String {
    let mut content = String::new();
    for record in records {
        let Some(output) = record.outcome.output() else {
            continue;
        };
        let _ = writeln!(
            content,
            "{}:\n\t{}",
            record.dir.display(),
            output.replace('\n', "\n\t")
        );
    }
    content
}

/// Failed records, in record order
pub(crate) fn failures(records: &[HistoryRecord]) -> Vec<(&HistoryRecord, &QueryFailure)> {
    records
        .iter()
        .filter_map(|r| r.failure().map(|f| (r, f)))
        .collect()
}

/// Log every failed directory so a missing section is never silent
pub(crate) fn report_failures(date: &str, records: &[HistoryRecord]) {
    for (record, failure) in failures(records) {
        warn!(date, dir = %record.dir.display(), "history query failed: {failure}");
    }
}
