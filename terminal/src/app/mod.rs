//! # Application Orchestrator
//!
//! The [`App`] struct ties the egui frame loop to the background API calls.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Main Thread (egui)                   │
//! │  App                                                 │
//! │  - on_tick()        drain finished API calls         │
//! │  - handle_*()       user actions → handlers          │
//! │                                                      │
//! │  State: Arc<RwLock<AppState>>                        │
//! │  - Store { auth, pos } updated via pure reducers     │
//! │  - EntryWorkflow, filters, login form                │
//! └──────────────────────────┬───────────────────────────┘
//!                            │ async_channel (unbounded)
//! ┌──────────────────────────▼───────────────────────────┐
//! │               Tokio tasks                            │
//! │  one spawned task per request, result sent back as   │
//! │  an AppEvent                                         │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers validate first, dispatch the `*Request` action, release the lock,
//! then spawn the call. [`App::on_tick`] turns each [`AppEvent`] into the
//! matching success or failure action.
//!
//! ## Related Modules
//!
//! - [`state`]: screens, forms and injected collaborators
//! - [`store`]: auth and POS slices with their reducers
//! - [`entry`]: donation-entry state machine
//! - [`events`]: results of async calls

pub mod entry;
mod event_handler;
mod events;
mod handlers;
mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use entry::{DonorSource, EntryPhase, EntryWorkflow};
pub use events::AppEvent;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::{CategoryType, HistoryRecord};
use std::sync::Arc;

use crate::app::store::AuthAction;
use crate::core::config::ApiConfig;
use crate::core::service::ApiService;
use crate::receipt::ReceiptLayout;
use crate::services::api::ApiClient;
use crate::services::token_store::TokenStore;

/// Main application orchestrator.
///
/// All UI work happens on the main thread; network calls run on the Tokio
/// runtime that must be entered before [`App::new`] is called.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for the shortest possible time; the UI reads a snapshot.
    pub state: Arc<RwLock<AppState>>,

    /// Results of background calls, polled in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
}

impl App {
    /// Build the app from environment configuration.
    pub fn new() -> Self {
        let config = ApiConfig::from_env();
        let tokens = TokenStore::from_env();
        let api_client: Arc<dyn ApiService> = Arc::new(ApiClient::new(config, tokens.clone()));
        Self::with_services(api_client, tokens)
    }

    /// Build the app around an injected API service and token store.
    ///
    /// A stored token restores the session: the profile is fetched and the
    /// transaction screen opens.
    pub fn with_services(api_client: Arc<dyn ApiService>, token_store: TokenStore) -> Self {
        let stored_token = token_store.load();
        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(AppState::new(api_client, token_store))),
            event_rx,
            event_tx,
        };

        match stored_token {
            Some(token) => {
                tracing::info!("Stored token found, restoring session");
                app.state.write().store.dispatch(AuthAction::SessionRestored(token));
                handlers::auth::fetch_profile(app.state.clone(), app.event_tx.clone());
                handlers::navigation::handle_screen_change(
                    app.state.clone(),
                    app.event_tx.clone(),
                    Screen::Transaction,
                );
            }
            None => tracing::info!("No stored token, showing login"),
        }

        app
    }

    /// Called every frame: apply every finished API call.
    pub fn on_tick(&mut self) {
        let mut processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::trace!(processed, "on_tick: events applied");
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Sender for results of background work
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    pub fn handle_login_click(&mut self) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone());
    }

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    /// Alt+`index` navigation, `index` in 1..=4
    pub fn handle_shortcut(&mut self, index: usize) {
        handlers::navigation::handle_shortcut(self.state.clone(), self.event_tx.clone(), index);
    }

    /// Refetch whatever the current screen shows
    pub fn refresh_current_screen(&mut self) {
        let screen = self.state.read().current_screen;
        handlers::navigation::on_enter(self.state.clone(), self.event_tx.clone(), screen);
    }

    // ---------- Entry ----------

    pub fn handle_start_entry(&mut self, source: DonorSource) {
        handlers::entry::handle_start(self.state.clone(), source);
    }

    /// Edit the entry form in place; clears a displayed success receipt.
    pub fn edit_entry(&mut self, edit: impl FnOnce(&mut EntryWorkflow)) {
        let mut state = self.state.write();
        handlers::entry::mark_edited(&mut state);
        edit(&mut state.entry);
    }

    pub fn handle_category_type_change(&mut self, category_type: CategoryType) {
        handlers::entry::handle_category_type_change(self.state.clone(), self.event_tx.clone(), category_type);
    }

    pub fn handle_donor_search(&mut self) {
        handlers::entry::handle_donor_search(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_pick_image(&mut self) {
        handlers::entry::handle_pick_image(self.state.clone());
    }

    pub fn handle_submit(&mut self) {
        handlers::entry::handle_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_new_entry(&mut self) {
        handlers::entry::handle_new_entry(self.state.clone());
    }

    pub fn handle_reset_entry(&mut self) {
        handlers::entry::handle_reset_entry(self.state.clone(), self.event_tx.clone());
    }

    // ---------- Pending / History / Dashboard ----------

    pub fn handle_validate_click(&mut self, receipt_number: String) {
        handlers::pending::handle_validate_click(self.state.clone(), self.event_tx.clone(), receipt_number);
    }

    pub fn handle_history_filters_change(&mut self, filters: HistoryFilters) {
        handlers::history::handle_filters_change(self.state.clone(), self.event_tx.clone(), filters);
    }

    pub fn handle_history_page_change(&mut self, page: u32) {
        handlers::history::handle_page_change(self.state.clone(), self.event_tx.clone(), page);
    }

    // ---------- Printing ----------

    pub fn handle_print_record(&mut self, record: HistoryRecord, layout: ReceiptLayout) {
        handlers::print::handle_print_record(self.state.clone(), record, layout);
    }

    pub fn handle_print_submitted(&mut self, layout: ReceiptLayout) {
        handlers::print::handle_print_submitted(self.state.clone(), layout);
    }

    pub fn dismiss_notice(&mut self) {
        self.state.write().notice = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
