//! # Event Handler
//!
//! Applies async API results to the store and triggers follow-up fetches.
//!
//! Each result is turned into the matching store action; the write lock is
//! held per event and released before any follow-up handler runs.

use shared::{
    Category, CategoryType, DashboardSummary, DonorMatch, Event, HistoryPage, HistoryRecord,
    LoginResponse, SubmittedTransaction, UserProfile,
};

use crate::app::handlers;
use crate::app::store::{AuthAction, PosAction, ValidateError};
use crate::app::{App, AppEvent, Screen};
use crate::core::error::{AppError, Result};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::ProfileResult(result) => self.handle_profile_result(result),
            AppEvent::EventsResult(result) => self.handle_events_result(result),
            AppEvent::CategoriesResult {
                category_type,
                result,
            } => self.handle_categories_result(category_type, result),
            AppEvent::DonorSearchResult { query, result } => {
                self.handle_donor_search_result(query, result)
            }
            AppEvent::TransactionResult(result) => self.handle_transaction_result(result),
            AppEvent::HistoryResult { seq, result } => self.handle_history_result(seq, result),
            AppEvent::PendingResult(result) => self.handle_pending_result(result),
            AppEvent::ValidateResult {
                receipt_number,
                result,
            } => self.handle_validate_result(receipt_number, result),
            AppEvent::DashboardResult(result) => self.handle_dashboard_result(result),
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<LoginResponse>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.state
                    .write()
                    .store
                    .dispatch(AuthAction::LoginFailure(e.user_message().to_string()));
                return;
            }
        };

        let Some(token) = response.token.filter(|t| !t.is_empty()) else {
            tracing::warn!("Login response carried no token");
            self.state
                .write()
                .store
                .dispatch(AuthAction::LoginFailure("Login gagal".to_string()));
            return;
        };

        {
            let mut state = self.state.write();
            if let Err(e) = state.token_store.save(&token) {
                tracing::error!(error = %e, "Failed to persist token");
                state.notice = Some(e.user_message().to_string());
            }
            state.store.dispatch(AuthAction::LoginSuccess {
                token,
                user: response.user,
            });
            state.login.password.clear();
        }

        handlers::auth::fetch_profile(self.state.clone(), self.event_tx.clone());
        handlers::navigation::handle_screen_change(
            self.state.clone(),
            self.event_tx.clone(),
            Screen::Transaction,
        );
    }

    /// A rejected profile fetch drops the stored token. Either way the session
    /// ends and the login screen is shown.
    fn handle_profile_result(&mut self, result: Result<UserProfile>) {
        let mut state = self.state.write();
        match result {
            Ok(user) => {
                tracing::info!(user = %user.cashier_name(), "Profile loaded");
                state.store.dispatch(AuthAction::GetMeSuccess(user));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Profile fetch failed, ending session");
                if matches!(e, AppError::Session(_)) {
                    if let Err(err) = state.token_store.clear() {
                        tracing::warn!(error = %err, "Failed to clear stored token");
                    }
                }
                state
                    .store
                    .dispatch(AuthAction::GetMeFailure(e.user_message().to_string()));
                state.current_screen = Screen::Login;
            }
        }
    }

    fn handle_events_result(&mut self, result: Result<Vec<Event>>) {
        let mut state = self.state.write();
        match result {
            Ok(events) => state.store.dispatch(PosAction::EventsSuccess(events)),
            Err(e) => state
                .store
                .dispatch(PosAction::EventsFailure(e.user_message().to_string())),
        }
    }

    fn handle_categories_result(&mut self, category_type: CategoryType, result: Result<Vec<Category>>) {
        let mut state = self.state.write();
        if state.entry.form.category_type != category_type {
            tracing::debug!(
                requested = category_type.as_str(),
                current = state.entry.form.category_type.as_str(),
                "Dropping categories for a previous type"
            );
            return;
        }
        match result {
            Ok(categories) => state.store.dispatch(PosAction::CategoriesSuccess(categories)),
            Err(e) => state
                .store
                .dispatch(PosAction::CategoriesFailure(e.user_message().to_string())),
        }
    }

    fn handle_donor_search_result(&mut self, query: String, result: Result<Vec<DonorMatch>>) {
        let mut state = self.state.write();
        if state.entry.search.query.trim() != query {
            return;
        }
        let search = &mut state.entry.search;
        search.loading = false;
        search.searched = true;
        match result {
            Ok(results) => {
                search.results = results;
                search.error = None;
            }
            Err(e) => {
                search.results.clear();
                search.error = Some(e.user_message().to_string());
            }
        }
    }

    fn handle_transaction_result(&mut self, result: Result<SubmittedTransaction>) {
        let mut state = self.state.write();
        match result {
            Ok(tx) => {
                tracing::info!(receipt_number = ?tx.receipt_number, "Transaction recorded");
                state.store.dispatch(PosAction::CreateSuccess(tx));
                state.entry.on_submitted();
            }
            Err(e) => {
                let message = e.user_message().to_string();
                state.store.dispatch(PosAction::CreateFailure(message.clone()));
                state.entry.on_submit_failed(&message);
            }
        }
    }

    fn handle_history_result(&mut self, seq: u64, result: Result<HistoryPage>) {
        let mut state = self.state.write();
        match result {
            Ok(page) => state.store.dispatch(PosAction::HistorySuccess { seq, page }),
            Err(e) => state.store.dispatch(PosAction::HistoryFailure {
                seq,
                error: e.user_message().to_string(),
            }),
        }
    }

    fn handle_pending_result(&mut self, result: Result<Vec<HistoryRecord>>) {
        let mut state = self.state.write();
        match result {
            Ok(rows) => state.store.dispatch(PosAction::PendingSuccess(rows)),
            Err(e) => state
                .store
                .dispatch(PosAction::PendingFailure(e.user_message().to_string())),
        }
    }

    /// Success refetches the whole pending list instead of removing the row.
    fn handle_validate_result(&mut self, receipt_number: String, result: Result<()>) {
        match result {
            Ok(()) => {
                tracing::info!(receipt_number = %receipt_number, "Pending transaction validated");
                self.state
                    .write()
                    .store
                    .dispatch(PosAction::ValidateSuccess(receipt_number));
                handlers::pending::fetch_pending(self.state.clone(), self.event_tx.clone());
            }
            Err(e) => {
                self.state
                    .write()
                    .store
                    .dispatch(PosAction::ValidateFailure(ValidateError {
                        receipt_number,
                        error: e.user_message().to_string(),
                    }));
            }
        }
    }

    fn handle_dashboard_result(&mut self, result: Result<DashboardSummary>) {
        let mut state = self.state.write();
        match result {
            Ok(summary) => state.store.dispatch(PosAction::DashboardSuccess(summary)),
            Err(e) => state
                .store
                .dispatch(PosAction::DashboardFailure(e.user_message().to_string())),
        }
    }
}
