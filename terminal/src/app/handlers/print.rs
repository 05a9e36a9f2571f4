//! # Print Handlers
//!
//! Render a receipt and hand it to the print surface. Failures land in the
//! status-bar notice.

use crate::app::state::AppState;
use crate::receipt::{self, ReceiptLayout, ReceiptSource};
use crate::services::print;
use parking_lot::RwLock;
use shared::HistoryRecord;
use std::sync::Arc;

fn print_source(state: &Arc<RwLock<AppState>>, source: ReceiptSource, layout: ReceiptLayout) {
    let user = state.read().store.auth.user.clone();
    let data = receipt::normalize(&source, user.as_ref());
    let html = receipt::render(&data, layout);

    let outcome = print::print_receipt(&data.receipt_number, layout, &html);
    let mut state = state.write();
    state.notice = match outcome {
        Ok(_) => None,
        Err(e) => Some(e.user_message().to_string()),
    };
}

/// Print a history or pending row
pub(crate) fn handle_print_record(state: Arc<RwLock<AppState>>, record: HistoryRecord, layout: ReceiptLayout) {
    print_source(&state, ReceiptSource::History(record), layout);
}

/// Print the transaction that was just created. The backend may omit the
/// payment method, so the one chosen in the form is used.
pub(crate) fn handle_print_submitted(state: Arc<RwLock<AppState>>, layout: ReceiptLayout) {
    let submitted = {
        let state = state.read();
        state.store.pos.transaction_success.clone().map(|mut tx| {
            tx.payment_method = Some(state.entry.form.payment_method.as_str().to_string());
            tx
        })
    };

    match submitted {
        Some(tx) => print_source(&state, ReceiptSource::Submitted(tx), layout),
        None => tracing::warn!("Print requested without a submitted transaction"),
    }
}
