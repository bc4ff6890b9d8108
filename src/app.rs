use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::cli::{Cli, RunCommand, parse_command};
use crate::consts::{DEFAULT_GIT, DEFAULT_JOBS, DEFAULT_MARKER, DEFAULT_OUTPUT_DIR};
use crate::core::{DaySummary, Pipeline};
use crate::error::AppError;
use crate::output::{SummaryTableOptions, print_summary_table};
use crate::source::{GitLog, ScanOptions, build_pool, find_project_dirs};
use crate::utils::{Timezone, format_date, relative_range};

/// Fully resolved run configuration
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) root: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) author: Option<String>,
    pub(crate) jobs: usize,
    pub(crate) timezone: Timezone,
    pub(crate) scan: ScanOptions,
    pub(crate) git: String,
}

impl Settings {
    /// Apply built-in defaults to whatever flags, environment and config left unset
    pub(crate) fn resolve(cli: &Cli) -> Result<Self, AppError> {
        let marker = cli.marker.clone().unwrap_or_else(|| DEFAULT_MARKER.to_string());
        Ok(Self {
            root: cli.root.clone().unwrap_or_else(|| PathBuf::from(".")),
            output: cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            author: cli.author.clone().filter(|a| !a.trim().is_empty()),
            jobs: cli.jobs.unwrap_or(DEFAULT_JOBS).max(1),
            timezone: Timezone::parse(cli.timezone.as_deref())?,
            scan: ScanOptions::new(marker, &cli.exclude)?,
            git: cli.git.clone().unwrap_or_else(|| DEFAULT_GIT.to_string()),
        })
    }

    fn pipeline(&self) -> Result<Pipeline, AppError> {
        Ok(Pipeline {
            root: self.root.clone(),
            output: self.output.clone(),
            scan: self.scan.clone(),
            query: Box::new(GitLog::new(self.git.clone(), self.author.clone())),
            timezone: self.timezone,
            pool: build_pool(self.jobs)?,
        })
    }
}

fn ensure_output_dir(output: &Path) -> Result<(), AppError> {
    if output.is_dir() {
        Ok(())
    } else {
        Err(AppError::MissingOutputDir {
            path: output.to_path_buf(),
        })
    }
}

/// Write one report per day from `start` to `end`, inclusive
pub(crate) fn run_range(
    settings: &Settings,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DaySummary>, AppError> {
    ensure_output_dir(&settings.output)?;
    info!(
        root = %settings.root.display(),
        author = settings.author.as_deref().unwrap_or("*"),
        "collecting history {} .. {}",
        format_date(start),
        format_date(end)
    );
    settings.pipeline()?.write_dir_history(start, end)
}

/// Write reports for `[today - before, today + after]`, today taken at call time
pub(crate) fn run_recent(settings: &Settings, before: u64, after: u64) -> Result<Vec<DaySummary>, AppError> {
    let (start, end) = relative_range(settings.timezone.today(), before, after);
    run_range(settings, start, end)
}

fn list_projects(settings: &Settings) -> Result<(), AppError> {
    let dirs = find_project_dirs(&settings.root, &settings.scan)?;
    for dir in &dirs {
        println!("{}", dir.display());
    }
    info!("{} project directories under {}", dirs.len(), settings.root.display());
    Ok(())
}

/// Dispatch the parsed command line
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let settings = Settings::resolve(cli)?;
    let started = Instant::now();

    let summaries = match parse_command(cli)? {
        RunCommand::Scan => return list_projects(&settings),
        RunCommand::Range { start, end } => run_range(&settings, start, end)?,
        RunCommand::Recent { before, after } => run_recent(&settings, before, after)?,
    };

    if !cli.quiet {
        print_summary_table(
            &summaries,
            &settings.output,
            SummaryTableOptions {
                use_color: cli.use_color(),
                elapsed_ms: Some(started.elapsed().as_secs_f64() * 1000.0),
            },
        );
    }
    Ok(())
}
