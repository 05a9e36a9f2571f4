//! # Authentication Handlers
//!
//! Login, profile fetch and logout.

use crate::app::entry::EntryWorkflow;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, HistoryFilters, LoginForm, Screen};
use crate::app::store::{AuthAction, PosAction};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::LoginRequest;
use std::sync::Arc;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (request, api_client) = {
        let mut state = state.write();
        let identifier = state.login.identifier.trim().to_string();
        let password = state.login.password.clone();

        if identifier.is_empty() || password.is_empty() {
            state.login.error = Some("Email/No. HP dan password wajib diisi".to_string());
            return;
        }
        if state.store.auth.loading {
            return;
        }

        state.login.error = None;
        state.store.dispatch(AuthAction::LoginRequest);
        (
            LoginRequest {
                email_or_phone_number: identifier,
                password,
            },
            state.api_client.clone(),
        )
    };

    tokio::spawn(async move {
        let result = api_client.login(request).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Fetch the logged-in agent's profile
pub(crate) fn fetch_profile(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.store.dispatch(AuthAction::GetMeRequest);
        state.api_client.clone()
    };

    tokio::spawn(async move {
        let result = api_client.get_me().await;
        let _ = event_tx.send(AppEvent::ProfileResult(result)).await;
    });
}

/// Drop the stored token and every slice, back to the login screen.
///
/// Internal handler function - use [`crate::app::App::handle_logout`] instead.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let Err(e) = state.token_store.clear() {
        tracing::warn!(error = %e, "Failed to clear stored token on logout");
    }

    state.store.dispatch(AuthAction::Logout);
    state.store.dispatch(PosAction::Reset);
    state.entry = EntryWorkflow::default();
    state.history_filters = HistoryFilters::default();
    state.login = LoginForm::default();
    state.notice = None;
    state.current_screen = Screen::Login;
    tracing::info!("Logged out");
}
