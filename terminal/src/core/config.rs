//! Runtime configuration from environment variables.
//!
//! | Variable          | Default                  |
//! |-------------------|--------------------------|
//! | `MPOS_API_URL`    | `http://127.0.0.1:8080`  |
//! | `MPOS_TOKEN_FILE` | `.mpos/token`            |
//!
//! `MPOS_API_URL` may also be baked in at build time; the runtime value wins.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TOKEN_FILE: &str = ".mpos/token";

/// Backend location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolve from `MPOS_API_URL` (runtime, then build time), else the default.
    pub fn from_env() -> Self {
        let raw = std::env::var("MPOS_API_URL")
            .ok()
            .or_else(|| option_env!("MPOS_API_URL").map(str::to_string));
        Self::from_raw(raw.as_deref())
    }

    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self {
                base_url: normalize_base_url(url),
            },
            None => Self::default(),
        }
    }

    /// Absolute URL for an API path starting with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Trim, drop trailing slashes and default to `https://` when no scheme is given.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Token file location from `MPOS_TOKEN_FILE`.
pub fn token_file_from_env() -> PathBuf {
    std::env::var("MPOS_TOKEN_FILE")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_is_added_when_missing() {
        assert_eq!(normalize_base_url("api.lazis.id"), "https://api.lazis.id");
        assert_eq!(normalize_base_url(" http://localhost:8080/ "), "http://localhost:8080");
        assert_eq!(normalize_base_url("https://api.lazis.id"), "https://api.lazis.id");
    }

    #[test]
    fn test_blank_value_uses_default() {
        assert_eq!(ApiConfig::from_raw(Some("   ")), ApiConfig::default());
        assert_eq!(ApiConfig::from_raw(None).base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_url_join() {
        let config = ApiConfig::from_raw(Some("api.lazis.id/"));
        assert_eq!(config.url("/api/pos/dashboard"), "https://api.lazis.id/api/pos/dashboard");
    }
}
