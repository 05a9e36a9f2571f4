//! # Screen Modules
//!
//! One module per screen:
//!
//! - **[`login`]**: agent sign-in
//! - **[`entry`]**: donation entry workflow and the success receipt
//! - **[`pending`]**: transfer/QRIS transactions awaiting validation
//! - **[`history`]**: validated transactions with filters and reprint
//! - **[`dashboard`]**: aggregate charts ("Grafik")
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // - Read from the cloned state snapshot
//!     // - Call app.handle_* / app.edit_entry for every change
//! }
//! ```
//!
//! Screens never hold the state lock while drawing. Inputs are rendered from
//! the snapshot and written back only when the widget reports a change.

pub mod dashboard;
pub mod entry;
pub mod history;
pub mod login;
pub mod pending;
