//! # Event Handlers
//!
//! User action handlers organized by screen.

pub mod auth;
pub mod dashboard;
pub mod entry;
pub mod history;
pub mod navigation;
pub mod pending;
pub mod print;
