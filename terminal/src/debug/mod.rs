//! # Logging Infrastructure
//!
//! File-based structured logging for the POS terminal.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at app startup, after loading .env
//! debug::init();
//!
//! tracing::info!(
//!     receipt_number = "BKT-0001",
//!     "Transaction recorded"
//! );
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `mpos_terminal=debug,info`)
//! - `MPOS_LOG_DIR`: Log directory (default: `logs`)
//! - `MPOS_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::LoggingConfig;
pub use logger::init as init_logger;

/// Initialize logging. Call once at startup.
pub fn init() {
    init_logger();
}
