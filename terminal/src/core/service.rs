//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    Category, CategoryType, CreateTransactionRequest, DashboardSummary, DonorMatch, Event,
    HistoryPage, HistoryQuery, HistoryRecord, LoginRequest, LoginResponse, SubmittedTransaction,
    UserProfile,
};

use crate::core::error::Result;
use crate::services::api::ProofImage;

/// Trait for backend API operations, one method per endpoint.
///
/// Handlers hold an `Arc<dyn ApiService>` so tests can swap in a mock.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `POST /api/auth/agen/signin`
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse>;

    /// `GET /api/agen/get-me`
    async fn get_me(&self) -> Result<UserProfile>;

    /// `GET /api/events/get-all`
    async fn get_events(&self) -> Result<Vec<Event>>;

    /// `GET /api/{categoryType}`
    async fn get_categories(&self, category_type: CategoryType) -> Result<Vec<Category>>;

    /// `POST /api/pos/create-transaction` (multipart)
    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
        image: Option<ProofImage>,
    ) -> Result<SubmittedTransaction>;

    /// `GET /api/pos/search-donatur?search=`
    async fn search_donors(&self, query: &str) -> Result<Vec<DonorMatch>>;

    /// `GET /api/pos/history`
    async fn get_history(&self, query: &HistoryQuery) -> Result<HistoryPage>;

    /// `GET /api/transaction/temp`
    async fn get_pending(&self) -> Result<Vec<HistoryRecord>>;

    /// `POST /api/transaction/validate-temp/{receiptNumber}`
    async fn validate_pending(&self, receipt_number: &str) -> Result<()>;

    /// `GET /api/pos/dashboard`
    async fn get_dashboard(&self) -> Result<DashboardSummary>;
}
