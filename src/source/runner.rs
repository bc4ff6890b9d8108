//! Bounded fan-out of external history queries
//!
//! Every directory gets one child process; at most `jobs` of them run at once.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::core::{QueryFailure, QueryOutcome};
use crate::error::AppError;

/// Worker pool whose size caps the number of concurrent child processes
pub(crate) fn build_pool(jobs: usize) -> Result<ThreadPool, AppError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .thread_name(|i| format!("daylog-query-{i}"))
        .build()?;
    Ok(pool)
}

/// Run `build(dir)` for every directory and map each outcome through `on_outcome`.
///
/// Returns once every process has finished. Results follow the order of
/// `dirs`. A failing directory never fails the batch; it becomes that slot's
/// `QueryOutcome::Failure`.
pub(crate) fn run_on_dirs<T, B, F>(pool: &ThreadPool, dirs: &[PathBuf], build: B, on_outcome: F) -> Vec<T>
where
    T: Send,
    B: Fn(&Path) -> Command + Send + Sync,
    F: Fn(&Path, QueryOutcome) -> T + Send + Sync,
{
    pool.install(|| {
        dirs.par_iter()
            .map(|dir| on_outcome(dir, run_command(build(dir))))
            .collect()
    })
}

/// Run a command to completion and capture its stdout
pub(crate) fn run_command(mut cmd: Command) -> QueryOutcome {
    cmd.stdin(Stdio::null());
    match cmd.output() {
        Err(e) => QueryOutcome::Failure(QueryFailure::Spawn(e)),
        Ok(output) if output.status.success() => {
            QueryOutcome::Success(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => QueryOutcome::Failure(QueryFailure::Exit {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
    }
}
