//! `git log` history query

use std::path::Path;
use std::process::Command;

use crate::consts::LOG_FORMAT;
use crate::core::DayWindow;

/// Builds the external command that lists one directory's commits for a day
pub(crate) trait HistoryQuery: Send + Sync {
    /// Command to run, with its working directory set to `dir`
    fn command(&self, dir: &Path, window: &DayWindow) -> Command;

    /// Shell-equivalent rendering for logs
    fn describe(&self, dir: &Path, window: &DayWindow) -> String;
}

#[derive(Debug, Clone)]
pub(crate) struct GitLog {
    program: String,
    author: Option<String>,
}

impl GitLog {
    pub(crate) fn new(program: impl Into<String>, author: Option<String>) -> Self {
        Self {
            program: program.into(),
            author: author.filter(|a| !a.is_empty()),
        }
    }

    fn args(&self, window: &DayWindow) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            format!("--pretty={LOG_FORMAT}"),
            "--abbrev-commit".to_string(),
            format!("--after={}", window.start),
            format!("--before={}", window.end),
        ];
        if let Some(author) = &self.author {
            args.push(format!("--author={author}"));
        }
        args
    }
}

impl HistoryQuery for GitLog {
    fn command(&self, dir: &Path, window: &DayWindow) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(window)).current_dir(dir);
        cmd
    }

    fn describe(&self, dir: &Path, window: &DayWindow) -> String {
        let mut line = format!(
            "cd \"{}\" && {} log --pretty=\"{LOG_FORMAT}\" --abbrev-commit --after=\"{}\" --before=\"{}\"",
            dir.display(),
            self.program,
            window.start,
            window.end
        );
        if let Some(author) = &self.author {
            line.push_str(&format!(" --author=\"{author}\""));
        }
        line
    }
}
