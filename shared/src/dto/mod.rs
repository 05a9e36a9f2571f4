//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the POS terminal and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Agent sign-in, profile and error bodies
//! - [`catalog`] - Events, categories/campaigns and donor lookup
//! - [`transaction`] - History and pending rows, create-transaction responses
//! - [`dashboard`] - Server-side aggregates for the dashboard screen
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire, mapped with `#[serde(rename_all = "camelCase")]`
//!   or explicit `#[serde(rename = "...")]` for the Indonesian record fields
//! - **Numbers**: amounts and ids go through [`crate::de`] so numeric strings parse
//! - **Missing collections**: default to empty instead of failing the whole response

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod transaction;

pub use auth::*;
pub use catalog::*;
pub use dashboard::*;
pub use transaction::*;
