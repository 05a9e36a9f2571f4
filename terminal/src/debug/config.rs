//! Logging configuration from environment variables

use std::path::PathBuf;

/// Log file name inside [`LoggingConfig::log_dir`], rotated daily
pub const LOG_FILE_NAME: &str = "mpos-terminal.log";

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "mpos_terminal=info,warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directory holding the rolling log files
    pub log_dir: PathBuf,
    /// Filter directive (e.g. "mpos_terminal=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_FILTER.to_string(),
            stderr: false,
        }
    }
}

impl LoggingConfig {
    /// Load configuration from environment variables
    ///
    /// - `MPOS_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`: filter directive
    /// - `MPOS_LOG_STDERR`: `1` mirrors to stderr
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lookup("MPOS_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            stderr: lookup("MPOS_LOG_STDERR").map(|v| v == "1").unwrap_or(false),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
