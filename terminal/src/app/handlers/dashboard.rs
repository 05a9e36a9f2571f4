//! # Dashboard Handlers

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::store::PosAction;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn fetch_dashboard(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.store.dispatch(PosAction::DashboardRequest);
        state.api_client.clone()
    };

    tokio::spawn(async move {
        let result = api_client.get_dashboard().await;
        let _ = event_tx.send(AppEvent::DashboardResult(result)).await;
    });
}
