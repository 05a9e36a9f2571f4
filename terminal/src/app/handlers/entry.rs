//! # Donation Entry Handlers
//!
//! Lookups feeding the entry form, donor search, proof image and submission.

use crate::app::entry::DonorSource;
use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::store::PosAction;
use crate::services::api::ProofImage;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::CategoryType;
use std::sync::Arc;

pub(crate) fn fetch_events(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.store.dispatch(PosAction::EventsRequest);
        state.api_client.clone()
    };

    tokio::spawn(async move {
        let result = api_client.get_events().await;
        let _ = event_tx.send(AppEvent::EventsResult(result)).await;
    });
}

/// Fetch sub-categories for the entry form's current category type
pub(crate) fn fetch_categories(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, category_type) = {
        let mut state = state.write();
        state.store.dispatch(PosAction::CategoriesRequest);
        (state.api_client.clone(), state.entry.form.category_type)
    };

    tokio::spawn(async move {
        let result = api_client.get_categories(category_type).await;
        let _ = event_tx
            .send(AppEvent::CategoriesResult {
                category_type,
                result,
            })
            .await;
    });
}

/// Any form edit hides a displayed success receipt and the inline error
pub(crate) fn mark_edited(state: &mut AppState) {
    state.entry.error = None;
    if state.store.pos.transaction_success.is_some() {
        state.store.dispatch(PosAction::ClearTransactionSuccess);
    }
}

pub(crate) fn handle_start(state: Arc<RwLock<AppState>>, source: DonorSource) {
    let mut state = state.write();
    if let Err(e) = state.entry.start(source) {
        tracing::warn!(error = %e, "Ignored start");
    }
}

/// Switch category type; refetches when it actually changed
pub(crate) fn handle_category_type_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    category_type: CategoryType,
) {
    let changed = {
        let mut state = state.write();
        mark_edited(&mut state);
        state.entry.set_category_type(category_type)
    };

    if changed {
        fetch_categories(state, event_tx);
    }
}

pub(crate) fn handle_donor_search(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, query) = {
        let mut state = state.write();
        let query = state.entry.search.query.trim().to_string();
        state.entry.search.results.clear();
        state.entry.search.error = None;

        if query.is_empty() {
            state.entry.search.searched = false;
            return;
        }
        state.entry.search.loading = true;
        (state.api_client.clone(), query)
    };

    tokio::spawn(async move {
        let result = api_client.search_donors(&query).await;
        let _ = event_tx.send(AppEvent::DonorSearchResult { query, result }).await;
    });
}

/// Pick a payment-proof image with the native file dialog
pub(crate) fn handle_pick_image(state: Arc<RwLock<AppState>>) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Bukti pembayaran")
        .add_filter("Gambar", &["png", "jpg", "jpeg", "webp", "gif"])
        .pick_file()
    else {
        return;
    };

    let loaded = ProofImage::from_path(&path);
    let mut state = state.write();
    mark_edited(&mut state);
    match loaded {
        Ok(image) => {
            tracing::info!(file = %image.file_name, bytes = image.bytes.len(), "Proof image attached");
            state.entry.form.image = Some(Arc::new(image));
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "Failed to read proof image");
            state.entry.error = Some(e.user_message().to_string());
        }
    }
}

/// Validate and submit. Nothing is sent when validation fails.
///
/// Internal handler function - use [`crate::app::App::handle_submit`] instead.
pub(crate) fn handle_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, request, image) = {
        let mut state = state.write();
        if state.store.pos.submitting {
            return;
        }
        let request = match state.entry.submit() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Transaction rejected before submit");
                return;
            }
        };
        let image = state.entry.form.image.as_deref().cloned();
        state.store.dispatch(PosAction::CreateRequest);
        (state.api_client.clone(), request, image)
    };

    tokio::spawn(async move {
        let result = api_client.create_transaction(request, image).await;
        let _ = event_tx.send(AppEvent::TransactionResult(result)).await;
    });
}

/// "Transaksi baru": same donor, event and category, fresh amount
/// Close the receipt and clear the form. The category type falls back to its
/// default, so the sub-category list is refetched when that differs.
pub(crate) fn handle_reset_entry(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let type_changed = {
        let mut state = state.write();
        mark_edited(&mut state);
        let previous = state.entry.form.category_type;
        state.entry.reset();
        state.entry.form.category_type != previous
    };

    if type_changed {
        fetch_categories(state, event_tx);
    }
}

pub(crate) fn handle_new_entry(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.store.dispatch(PosAction::ClearTransactionSuccess);
    if let Err(e) = state.entry.new_entry() {
        tracing::warn!(error = %e, "Ignored new entry");
    }
}
