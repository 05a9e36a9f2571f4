//! # Application State Types
//!
//! Screens, form state and the injected collaborators shared by handlers and
//! the UI. Backend data lives in the [`Store`] slices.

use std::sync::Arc;

use chrono::{Months, NaiveDate};
use shared::{CategoryType, HistoryQuery, PaymentMethod};

use crate::app::entry::EntryWorkflow;
use crate::app::store::Store;
use crate::core::service::ApiService;
use crate::services::token_store::TokenStore;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Agent sign-in
    Login,
    /// Donation entry
    Transaction,
    /// Transfer/QRIS transactions awaiting validation
    Pending,
    /// Validated transactions
    History,
    /// Aggregates and charts ("Grafik")
    Dashboard,
}

impl Screen {
    /// Authenticated screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Transaction,
            Screen::Pending,
            Screen::History,
            Screen::Dashboard,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Masuk",
            Screen::Transaction => "Transaksi",
            Screen::Pending => "Pending",
            Screen::History => "History",
            Screen::Dashboard => "Grafik",
        }
    }

    /// Alt+N shortcut label
    pub fn shortcut(&self) -> Option<&'static str> {
        match self {
            Screen::Transaction => Some("Alt+1"),
            Screen::Pending => Some("Alt+2"),
            Screen::History => Some("Alt+3"),
            Screen::Dashboard => Some("Alt+4"),
            Screen::Login => None,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Login)
    }
}

/// Login form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
    /// Client-side check failed
    pub error: Option<String>,
}

/// History page filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFilters {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Option<CategoryType>,
    pub event_id: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub search: String,
    pub page: u32,
}

impl HistoryFilters {
    /// Last month up to `today`
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start_date: today.checked_sub_months(Months::new(1)).unwrap_or(today),
            end_date: today,
            category: None,
            event_id: None,
            payment_method: None,
            search: String::new(),
            page: 0,
        }
    }

    pub fn to_query(&self) -> HistoryQuery {
        HistoryQuery {
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            category: self.category,
            event_id: self.event_id.clone(),
            payment_method: self.payment_method,
            search: self.search.clone(),
            page: self.page,
        }
    }
}

impl Default for HistoryFilters {
    fn default() -> Self {
        Self::starting(chrono::Local::now().date_naive())
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub store: Store,
    pub login: LoginForm,
    pub entry: EntryWorkflow,
    pub history_filters: HistoryFilters,
    /// Transient message for the status bar (print failures etc.)
    pub notice: Option<String>,
    pub api_client: Arc<dyn ApiService>,
    pub token_store: TokenStore,
}

impl AppState {
    pub fn new(api_client: Arc<dyn ApiService>, token_store: TokenStore) -> Self {
        Self {
            current_screen: Screen::Login,
            store: Store::default(),
            login: LoginForm::default(),
            entry: EntryWorkflow::default(),
            history_filters: HistoryFilters::default(),
            notice: None,
            api_client,
            token_store,
        }
    }

    /// Check if user is authenticated (has a bearer token)
    pub fn is_authenticated(&self) -> bool {
        self.store.auth.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_order_and_shortcuts() {
        assert_eq!(
            Screen::all(),
            &[Screen::Transaction, Screen::Pending, Screen::History, Screen::Dashboard]
        );
        assert_eq!(Screen::Dashboard.title(), "Grafik");
        assert_eq!(Screen::History.shortcut(), Some("Alt+3"));
        assert!(!Screen::Login.requires_auth());
        assert!(Screen::Pending.requires_auth());
    }

    #[test]
    fn test_history_filters_default_to_last_month() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        let filters = HistoryFilters::starting(today);

        assert_eq!(filters.start_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(filters.end_date, today);

        let pairs = filters.to_query().query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("startDate", "2026-02-28".to_string()),
                ("endDate", "2026-03-31".to_string()),
                ("page", "0".to_string()),
            ]
        );
    }
}
