//! # Application Events
//!
//! Results of background API calls, sent back to the main thread.

use shared::{
    Category, CategoryType, DashboardSummary, DonorMatch, Event, HistoryPage, HistoryRecord,
    LoginResponse, SubmittedTransaction, UserProfile,
};

use crate::core::error::Result;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    LoginResult(Result<LoginResponse>),
    ProfileResult(Result<UserProfile>),
    EventsResult(Result<Vec<Event>>),
    /// Tagged with the type requested so a late answer for an old type is dropped
    CategoriesResult {
        category_type: CategoryType,
        result: Result<Vec<Category>>,
    },
    DonorSearchResult {
        query: String,
        result: Result<Vec<DonorMatch>>,
    },
    TransactionResult(Result<SubmittedTransaction>),
    HistoryResult {
        seq: u64,
        result: Result<HistoryPage>,
    },
    PendingResult(Result<Vec<HistoryRecord>>),
    ValidateResult {
        receipt_number: String,
        result: Result<()>,
    },
    DashboardResult(Result<DashboardSummary>),
}
