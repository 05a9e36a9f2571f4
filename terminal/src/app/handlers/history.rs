//! # History Handlers
//!
//! Every request carries a sequence number; responses for older requests are
//! dropped by the reducer.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, HistoryFilters};
use crate::app::store::PosAction;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn fetch_history(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, query, seq) = {
        let mut state = state.write();
        let seq = state.store.pos.history_seq + 1;
        state.store.dispatch(PosAction::HistoryRequest { seq });
        (state.api_client.clone(), state.history_filters.to_query(), seq)
    };

    tokio::spawn(async move {
        let result = api_client.get_history(&query).await;
        let _ = event_tx.send(AppEvent::HistoryResult { seq, result }).await;
    });
}

/// Apply new filters. Any change other than the page resets to page 0.
pub(crate) fn handle_filters_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    mut filters: HistoryFilters,
) {
    {
        let mut state = state.write();
        if filters == state.history_filters {
            return;
        }
        let same_except_page = HistoryFilters {
            page: state.history_filters.page,
            ..filters.clone()
        } == state.history_filters;
        if !same_except_page {
            filters.page = 0;
        }
        state.history_filters = filters;
    }

    fetch_history(state, event_tx);
}

/// Move to another page, staying within the known page count
pub(crate) fn handle_page_change(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, page: u32) {
    {
        let mut state = state.write();
        let total_pages = state.store.pos.history.data.total_pages;
        if page == state.history_filters.page || page >= total_pages.max(1) {
            return;
        }
        state.history_filters.page = page;
    }

    fetch_history(state, event_tx);
}
