use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Result of searching the default locations. Logging is not set up yet when
/// this runs, so what happened is recorded for the caller to report.
#[derive(Debug, Default)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) source: Option<PathBuf>,
    pub(crate) warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Folder scanned for project directories
    #[serde(default)]
    pub(crate) root: Option<PathBuf>,
    #[serde(default)]
    pub(crate) author: Option<String>,
    /// Folder the daily reports are written to
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) jobs: Option<usize>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) marker: Option<String>,
    #[serde(default)]
    pub(crate) exclude: Vec<String>,
    /// Path or name of the git executable
    #[serde(default)]
    pub(crate) git: Option<String>,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl Config {
    /// Load from an explicit path; a missing or malformed file is an error
    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First parseable config from the default locations, or defaults
    pub(crate) fn load() -> LoadedConfig {
        Self::load_first(Self::get_config_paths())
    }

    /// First parseable config among `paths`; unreadable or malformed files
    /// become warnings and the search moves on
    fn load_first(paths: Vec<PathBuf>) -> LoadedConfig {
        let mut warnings = Vec::new();
        for path in paths {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warnings.push(format!("failed to read {}: {}", path.display(), e));
                    continue;
                }
            };
            match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path),
                        warnings,
                    };
                }
                Err(e) => {
                    warnings.push(format!("failed to parse {}: {}", path.display(), e));
                }
            }
        }

        LoadedConfig {
            warnings,
            ..Default::default()
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/daylog/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("daylog").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/daylog/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("daylog").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.daylog.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".daylog.toml"));
        }

        paths
    }
}
