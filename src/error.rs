use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid exclude pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Output folder {} does not exist", .path.display())]
    MissingOutputDir { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_missing_output() {
        let e = AppError::MissingOutputDir {
            path: PathBuf::from("/nope/history"),
        };
        assert_eq!(e.to_string(), "Output folder /nope/history does not exist");
    }

    #[test]
    fn app_error_display_write_includes_cause() {
        let e = AppError::Write {
            path: PathBuf::from("out/2024-01-02.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "Failed to write out/2024-01-02.txt: denied");
    }

    #[test]
    fn app_error_display_pattern() {
        let source = glob::Pattern::new("[").unwrap_err();
        let e = AppError::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(e.to_string().starts_with(r#"Invalid exclude pattern "[": "#));
    }
}
