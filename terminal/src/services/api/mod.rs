//! # Backend API Client Module
//!
//! HTTP client for the donation backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient, bearer auth, error-body handling
//! ├── auth.rs     - Sign-in and profile endpoints
//! └── pos.rs      - Events, categories, transactions, history, pending, dashboard
//! ```
//!
//! ## Error Messages
//!
//! Failed calls carry the backend's `message` (or `error`) field. When the body
//! has neither, or the request never reached the server, each endpoint uses its
//! own Indonesian fallback such as `"Login gagal"` or `"Validasi gagal"`.

pub mod auth;
pub mod client;
pub mod pos;

pub use client::ApiClient;
pub use pos::ProofImage;
