//! # Services Module
//!
//! External integrations of the POS terminal.
//!
//! ```text
//! services/
//! ├── api/            - Backend HTTP API client (reqwest)
//! ├── token_store.rs  - Bearer token file
//! ├── private_file.rs - Owner-only file writes
//! └── print.rs        - Receipt files opened in the system browser
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                MPOS Terminal                 │
//! │                                              │
//! │  ┌──────────────┐  reads   ┌──────────────┐  │
//! │  │  ApiClient   │ ───────▶ │  TokenStore  │  │
//! │  └──────┬───────┘          └──────────────┘  │
//! │         │                                    │
//! └─────────┼────────────────────────────────────┘
//!           │ HTTP/JSON, multipart
//!           ▼
//! ┌──────────────────────────────────────────────┐
//! │  Donation backend                            │
//! │  /api/auth/*  /api/agen/*  /api/pos/*        │
//! │  /api/events/*  /api/transaction/*           │
//! └──────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod print;
mod private_file;
pub mod token_store;

pub use token_store::TokenStore;
