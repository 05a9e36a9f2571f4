//! # Pending Validation Handlers

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::store::PosAction;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn fetch_pending(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.store.dispatch(PosAction::PendingRequest);
        state.api_client.clone()
    };

    tokio::spawn(async move {
        let result = api_client.get_pending().await;
        let _ = event_tx.send(AppEvent::PendingResult(result)).await;
    });
}

/// Promote one pending row. A second click on the row already in flight is
/// ignored; other rows are not blocked.
///
/// Internal handler function - use [`crate::app::App::handle_validate_click`] instead.
pub(crate) fn handle_validate_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    receipt_number: String,
) {
    let api_client = {
        let mut state = state.write();
        if state.store.pos.validating.as_deref() == Some(receipt_number.as_str()) {
            return;
        }
        state.store.dispatch(PosAction::ValidateRequest(receipt_number.clone()));
        state.api_client.clone()
    };

    tokio::spawn(async move {
        let result = api_client.validate_pending(&receipt_number).await;
        let _ = event_tx
            .send(AppEvent::ValidateResult {
                receipt_number,
                result,
            })
            .await;
    });
}
