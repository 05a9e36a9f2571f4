//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use shared::{
    Category, CategoryType, CreateTransactionRequest, DashboardSummary, DonorMatch, ErrorResponse,
    Event, HistoryPage, HistoryQuery, HistoryRecord, LoginRequest, LoginResponse,
    SubmittedTransaction, UserProfile,
};

use super::pos::ProofImage;
use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::token_store::TokenStore;

/// HTTP client for the donation backend.
///
/// The bearer token is read from the [`TokenStore`] on every request, so a
/// login or logout takes effect without rebuilding the client. No request
/// timeout is configured.
pub struct ApiClient {
    pub(crate) client: Client,
    config: ApiConfig,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: TokenStore) -> Self {
        let client = Client::builder().build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            Client::new()
        });

        tracing::info!(base_url = %config.base_url, "API client created");
        Self {
            client,
            config,
            tokens,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.tokens.load()
    }

    /// Attach `Authorization: Bearer` when a token is stored.
    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Send a request, mapping transport failures to the operation's fallback message.
pub(crate) async fn send(request: RequestBuilder, fallback: &str) -> Result<Response> {
    request.send().await.map_err(|e| {
        tracing::error!(error = %e, "Network error");
        AppError::Api(fallback.to_string())
    })
}

/// Backend message for a failed response: `message`, then `error`, else `fallback`.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .unwrap_or_else(|| fallback.to_string())
}

/// Read a JSON body, turning non-2xx statuses into [`AppError::Api`].
pub(crate) async fn read_json(response: Response, fallback: &str) -> Result<Value> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read response body");
        AppError::Api(fallback.to_string())
    })?;

    if !status.is_success() {
        let message = error_message(&body, fallback);
        tracing::warn!(status = status.as_u16(), error = %message, "Request failed");
        return Err(AppError::Api(message));
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        AppError::Api(fallback.to_string())
    })
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        super::auth::login(self, request).await
    }

    async fn get_me(&self) -> Result<UserProfile> {
        super::auth::get_me(self).await
    }

    async fn get_events(&self) -> Result<Vec<Event>> {
        super::pos::get_events(self).await
    }

    async fn get_categories(&self, category_type: CategoryType) -> Result<Vec<Category>> {
        super::pos::get_categories(self, category_type).await
    }

    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
        image: Option<ProofImage>,
    ) -> Result<SubmittedTransaction> {
        super::pos::create_transaction(self, request, image).await
    }

    async fn search_donors(&self, query: &str) -> Result<Vec<DonorMatch>> {
        super::pos::search_donors(self, query).await
    }

    async fn get_history(&self, query: &HistoryQuery) -> Result<HistoryPage> {
        super::pos::get_history(self, query).await
    }

    async fn get_pending(&self) -> Result<Vec<HistoryRecord>> {
        super::pos::get_pending(self).await
    }

    async fn validate_pending(&self, receipt_number: &str) -> Result<()> {
        super::pos::validate_pending(self, receipt_number).await
    }

    async fn get_dashboard(&self) -> Result<DashboardSummary> {
        super::pos::get_dashboard(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_order() {
        assert_eq!(error_message(r#"{"message":"Password salah","error":"x"}"#, "Login gagal"), "Password salah");
        assert_eq!(error_message(r#"{"error":"Unauthorized"}"#, "Login gagal"), "Unauthorized");
        assert_eq!(error_message(r#"{}"#, "Login gagal"), "Login gagal");
        assert_eq!(error_message("<html>502</html>", "Transaksi gagal"), "Transaksi gagal");
    }

    #[test]
    fn test_authorized_reads_token_each_time() {
        let dir = tempfile::tempdir().unwrap();
        let tokens = TokenStore::new(dir.path().join("token"));
        let client = ApiClient::new(ApiConfig::default(), tokens.clone());

        assert_eq!(client.token(), None);
        tokens.save("fresh").unwrap();
        assert_eq!(client.token().as_deref(), Some("fresh"));

        let request = client
            .authorized(client.client.get(client.url("/api/pos/dashboard")))
            .build()
            .unwrap();
        let header = request.headers().get(reqwest::header::AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer fresh");
    }
}
