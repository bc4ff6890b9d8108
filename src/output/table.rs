use comfy_table::{Cell, Color};
use std::path::Path;

use crate::core::DaySummary;
use crate::output::format::{create_styled_table, format_count, header_cell, right_cell, styled_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SummaryTableOptions {
    pub(crate) use_color: bool,
    pub(crate) elapsed_ms: Option<f64>,
}

fn build_table(summaries: &[DaySummary], use_color: bool) -> comfy_table::Table {
    let mut table = create_styled_table();
    table.set_header(
        ["Date", "Repos", "Active", "Commits", "Failed", "Report"]
            .map(|h| header_cell(h, use_color)),
    );

    let red = if use_color { Some(Color::Red) } else { None };
    let cyan = if use_color { Some(Color::Cyan) } else { None };
    let mut total = DaySummary::default();

    for day in summaries {
        let failed_color = if day.failed > 0 { red } else { None };
        table.add_row(vec![
            Cell::new(&day.date),
            right_cell(&format_count(day.directories), None, false),
            right_cell(&format_count(day.active), None, false),
            right_cell(&format_count(day.commits), None, false),
            right_cell(&format_count(day.failed), failed_color, false),
            Cell::new(file_name(&day.report)),
        ]);
        total.active += day.active;
        total.commits += day.commits;
        total.failed += day.failed;
    }

    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        Cell::new(""),
        right_cell(&format_count(total.active), cyan, true),
        right_cell(&format_count(total.commits), cyan, true),
        right_cell(&format_count(total.failed), if total.failed > 0 { red } else { cyan }, true),
        Cell::new(""),
    ]);
    table
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Print the per-day table followed by a one-line summary
pub(crate) fn print_summary_table(summaries: &[DaySummary], output: &Path, options: SummaryTableOptions) {
    if summaries.is_empty() {
        println!("No days in range; nothing written.");
        return;
    }

    let table = build_table(summaries, options.use_color);
    println!("\n  Commit History\n");
    println!("{table}");

    let stats_text = format!(
        "{} report(s) written to {}",
        format_count(summaries.len()),
        output.display()
    );
    match options.elapsed_ms {
        Some(ms) if options.use_color => println!("\n  {stats_text} | \x1b[36m{ms:.0}ms\x1b[0m\n"),
        Some(ms) => println!("\n  {stats_text} | {ms:.0}ms\n"),
        None => println!("\n  {stats_text}\n"),
    }
}
