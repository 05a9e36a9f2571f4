//! # Common Error Types
//!
//! Consolidated error handling for the POS terminal.
//!
//! ## Error Categories
//!
//! - **Api**: Backend communication errors (network, HTTP status, JSON parsing)
//! - **Validation**: Client-side form checks; these never reach the network
//! - **Session**: Profile fetch rejected by the backend or no stored token
//! - **Storage**: Token file or receipt file I/O
//! - **State**: Invalid workflow transitions
//!
//! ## Usage Pattern
//!
//! ```rust
//! use mpos_terminal::core::error::AppError;
//!
//! fn validate_amount(amount: &str) -> Result<u64, AppError> {
//!     amount
//!         .parse::<u64>()
//!         .ok()
//!         .filter(|v| *v > 0)
//!         .ok_or_else(|| AppError::Validation("Nominal wajib diisi".to_string()))
//! }
//!
//! assert!(validate_amount("0").is_err());
//! ```
//!
//! Screens display [`AppError::user_message`], which is the inner message
//! without the variant prefix, so backend text reaches the user verbatim.

use thiserror::Error;

/// Application-wide error type.
///
/// Every variant carries a human-readable message. The `#[error]` attribute
/// prefixes it with the category for logs.
///
/// # Example
///
/// ```rust
/// use mpos_terminal::core::error::AppError;
///
/// let err = AppError::Api("Login gagal".to_string());
/// assert_eq!(err.to_string(), "API error: Login gagal");
/// assert_eq!(err.user_message(), "Login gagal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Transport failures, non-2xx responses and unparseable bodies. The
    /// message is the backend's `message`/`error` field when present, else a
    /// per-operation fallback.
    #[error("API error: {0}")]
    Api(String),

    /// Input validation error, raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend rejected the stored session (profile fetch failed).
    #[error("Session error: {0}")]
    Session(String),

    /// Local file I/O failed (token file, receipt file).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid state transition.
    #[error("State error: {0}")]
    State(String),
}

impl AppError {
    /// Message shown in the UI.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Api(msg)
            | AppError::Validation(msg)
            | AppError::Session(msg)
            | AppError::Storage(msg)
            | AppError::State(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_strips_prefix() {
        let err = AppError::Validation("Nama donatur wajib diisi".to_string());
        assert_eq!(err.to_string(), "Validation error: Nama donatur wajib diisi");
        assert_eq!(err.user_message(), "Nama donatur wajib diisi");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(AppError::from(io), AppError::Storage(_)));
    }
}
