//! # Navigation Handlers
//!
//! Screen changes with the auth guard, and the fetches each screen needs on entry.

use crate::app::events::AppEvent;
use crate::app::handlers::{dashboard, entry, history, pending};
use crate::app::state::{AppState, Screen};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change with authentication guard
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    let target = {
        let mut state = state.write();
        if screen.requires_auth() && !state.is_authenticated() {
            tracing::info!("Access denied: {} requires authentication, redirecting to login", screen.title());
            state.current_screen = Screen::Login;
            return;
        }
        state.current_screen = screen;
        screen
    };

    on_enter(state, event_tx, target);
}

/// Alt+1..Alt+4, `index` starting at 1
pub(crate) fn handle_shortcut(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, index: usize) {
    let Some(screen) = index.checked_sub(1).and_then(|i| Screen::all().get(i)).copied() else {
        return;
    };
    handle_screen_change(state, event_tx, screen);
}

/// Fetch what a screen displays
pub(crate) fn on_enter(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, screen: Screen) {
    tracing::debug!(screen = screen.title(), "Entering screen");
    match screen {
        Screen::Login => {}
        Screen::Transaction => {
            entry::fetch_events(state.clone(), event_tx.clone());
            entry::fetch_categories(state, event_tx);
        }
        Screen::Pending => pending::fetch_pending(state, event_tx),
        Screen::History => {
            entry::fetch_events(state.clone(), event_tx.clone());
            history::fetch_history(state, event_tx);
        }
        Screen::Dashboard => dashboard::fetch_dashboard(state, event_tx),
    }
}
