//! # Core Abstractions
//!
//! Foundational pieces used throughout the terminal:
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`ApiService`] trait handlers depend on
//! - **[`config`]**: Backend URL and token file location from the environment
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mpos_terminal::core::ApiService;
//!
//! // In production: the reqwest client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(ApiConfig::from_env(), tokens));
//!
//! // In tests: a recording mock
//! let api: Arc<dyn ApiService> = Arc::new(MockApiService::default());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ApiConfig;
pub use error::{AppError, Result};
pub use service::ApiService;
