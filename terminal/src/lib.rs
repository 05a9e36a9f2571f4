//! # LAZIS MPOS Terminal - Library Root
//!
//! Native desktop point-of-sale client for recording donation transactions,
//! validating pending transfer/QRIS payments, browsing history and viewing
//! dashboard aggregates. All business rules live behind the backend REST API;
//! this crate calls it, keeps typed client state and prints receipts.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              mpos-terminal (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI                   │
//! │  egui_plot      - Dashboard charts                     │
//! │  egui_extras    - Tables and date pickers              │
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client (JSON + multipart)       │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (Bearer token)
//!          ▼
//! ┌─────────────────┐
//! │  Donation API   │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state store, entry workflow, handlers
//! - **core**: error type, configuration, the `ApiService` trait
//! - **debug**: file-based logging
//! - **receipt**: pure thermal and formal receipt rendering
//! - **services**: HTTP client, token storage, print surface
//! - **ui**: screens, widgets and theme
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers)
//!   │   ├── services::api (HTTP requests)
//!   │   ├── services::token_store (session token file)
//!   │   └── services::print ──▶ receipt (HTML)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (login, entry, pending, history, dashboard)
//!       ├── widgets::* (forms, tables, charts, nav bar)
//!       └── theme
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The UI thread never waits on the network. Handlers spawn one Tokio task
//! per request; each task sends its result back as an `AppEvent` over an
//! `async_channel`, and `App::on_tick` applies it every frame.
//!
//! ### State Management
//!
//! `AppState` sits in `Arc<parking_lot::RwLock<_>>`. Domain data lives in two
//! slices (auth, pos) changed only through pure reducers.
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p mpos-terminal
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod receipt;
pub mod services;
pub mod ui;

pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result};
