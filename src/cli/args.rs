//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic. Every setting can
//! come from a flag, an environment variable or the config file, in that
//! order of precedence.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "daylog")]
#[command(
    about = "Write one commit-history report per day across every git repository under a folder",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// First day, when called as `daylog START END`
    #[arg(value_name = "START", requires = "end")]
    pub(crate) start: Option<String>,

    /// Last day, when called as `daylog START END`
    #[arg(value_name = "END", requires = "start")]
    pub(crate) end: Option<String>,

    /// Folder to scan for repositories [default: .]
    #[arg(short, long, global = true, env = "DAYLOG_ROOT", value_name = "DIR")]
    pub(crate) root: Option<PathBuf>,

    /// Only include commits whose author matches
    #[arg(short, long, global = true, env = "DAYLOG_AUTHOR")]
    pub(crate) author: Option<String>,

    /// Existing folder the daily reports are written to [default: history]
    #[arg(short, long, global = true, env = "DAYLOG_OUTPUT", value_name = "DIR")]
    pub(crate) output: Option<PathBuf>,

    /// Maximum number of git processes running at once [default: 8]
    #[arg(short, long, global = true, env = "DAYLOG_JOBS")]
    pub(crate) jobs: Option<usize>,

    /// Timezone days are measured in (e.g., "UTC", "America/Sao_Paulo") [default: local]
    #[arg(long, global = true, env = "DAYLOG_TZ", value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Entry that marks a project directory [default: .git]
    #[arg(long, global = true, value_name = "NAME")]
    pub(crate) marker: Option<String>,

    /// Skip directories matching this glob (by name or full path); repeatable
    #[arg(long, global = true, value_name = "GLOB")]
    pub(crate) exclude: Vec<String>,

    /// git executable to run [default: git]
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) git: Option<String>,

    /// Read settings from this file instead of the default locations
    #[arg(long, global = true, env = "DAYLOG_CONFIG", value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Only log warnings and errors; skip the summary table
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Enable debug output (show every git command and timings)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them off
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // Options: only apply if neither flag nor environment set them
        if self.root.is_none() {
            self.root = config.root.clone();
        }
        if self.author.is_none() {
            self.author = config.author.clone();
        }
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        if self.jobs.is_none() {
            self.jobs = config.jobs;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.marker.is_none() {
            self.marker = config.marker.clone();
        }
        if self.git.is_none() {
            self.git = config.git.clone();
        }

        // Exclusions accumulate
        self.exclude.extend(config.exclude.iter().cloned());

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
