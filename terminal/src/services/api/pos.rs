//! # POS Endpoints
//!
//! Lookups, transaction creation, history, pending validation and dashboard.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Url;
use shared::{
    list_from_array, list_from_content, Category, CategoryType, CreateTransactionRequest,
    DashboardSummary, DonorMatch, Event, HistoryPage, HistoryQuery, HistoryRecord,
    SubmittedTransaction,
};

use super::client::{self, ApiClient};
use crate::core::error::{AppError, Result};

/// Payment-proof image attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofImage {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ProofImage {
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bukti".to_string());

        Ok(Self {
            mime: mime_for(path).to_string(),
            file_name,
            bytes,
        })
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[tracing::instrument(skip(api))]
pub async fn get_events(api: &ApiClient) -> Result<Vec<Event>> {
    const FALLBACK: &str = "Gagal mengambil event";
    let response = client::send(api.authorized(api.client.get(api.url("/api/events/get-all"))), FALLBACK).await?;
    let body = client::read_json(response, FALLBACK).await?;
    let events: Vec<Event> = list_from_array(body);
    tracing::debug!(count = events.len(), "Events fetched");
    Ok(events)
}

#[tracing::instrument(skip(api), fields(category_type = category_type.as_str()))]
pub async fn get_categories(api: &ApiClient, category_type: CategoryType) -> Result<Vec<Category>> {
    const FALLBACK: &str = "Gagal mengambil kategori";
    let path = format!("/api/{}", category_type.as_str());
    let response = client::send(api.authorized(api.client.get(api.url(&path))), FALLBACK).await?;
    let body = client::read_json(response, FALLBACK).await?;
    Ok(list_from_array(body))
}

/// Submit a transaction as a multipart form, with the proof image when given.
#[tracing::instrument(skip(api, request, image), fields(category = request.category_type.as_str(), has_image = image.is_some()))]
pub async fn create_transaction(
    api: &ApiClient,
    request: CreateTransactionRequest,
    image: Option<ProofImage>,
) -> Result<SubmittedTransaction> {
    const FALLBACK: &str = "Transaksi gagal";
    tracing::info!("Submitting transaction");
    let start = std::time::Instant::now();

    let mut form = Form::new();
    for (name, value) in request.form_fields() {
        form = form.text(name, value);
    }
    if let Some(image) = image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime)
            .map_err(|e| {
                tracing::error!(error = %e, "Invalid image mime type");
                AppError::Api(FALLBACK.to_string())
            })?;
        form = form.part("image", part);
    }

    let response = client::send(
        api.authorized(api.client.post(api.url("/api/pos/create-transaction")))
            .multipart(form),
        FALLBACK,
    )
    .await?;
    let body = client::read_json(response, FALLBACK).await?;

    let submitted: SubmittedTransaction = serde_json::from_value(body).map_err(|e| {
        tracing::error!(error = %e, "Transaction response parse error");
        AppError::Api(FALLBACK.to_string())
    })?;

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        receipt_number = ?submitted.receipt_number,
        "Transaction created"
    );
    Ok(submitted)
}

/// Look up existing donors. A blank query returns nothing without a request.
#[tracing::instrument(skip(api))]
pub async fn search_donors(api: &ApiClient, query: &str) -> Result<Vec<DonorMatch>> {
    const FALLBACK: &str = "Gagal mencari donatur";
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let request = api
        .authorized(api.client.get(api.url("/api/pos/search-donatur")))
        .query(&[("search", query)]);
    let response = client::send(request, FALLBACK).await?;
    let body = client::read_json(response, FALLBACK).await?;
    Ok(list_from_content(body))
}

#[tracing::instrument(skip(api, query), fields(page = query.page))]
pub async fn get_history(api: &ApiClient, query: &HistoryQuery) -> Result<HistoryPage> {
    const FALLBACK: &str = "Gagal mengambil history";
    let request = api
        .authorized(api.client.get(api.url("/api/pos/history")))
        .query(&query.query_pairs());
    let response = client::send(request, FALLBACK).await?;
    let body = client::read_json(response, FALLBACK).await?;

    Ok(serde_json::from_value(body).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Unexpected history shape, showing empty page");
        HistoryPage::default()
    }))
}

#[tracing::instrument(skip(api))]
pub async fn get_pending(api: &ApiClient) -> Result<Vec<HistoryRecord>> {
    const FALLBACK: &str = "Gagal mengambil transaksi pending";
    let response = client::send(api.authorized(api.client.get(api.url("/api/transaction/temp"))), FALLBACK).await?;
    let body = client::read_json(response, FALLBACK).await?;
    Ok(list_from_array(body))
}

/// Promote a pending transaction to history.
///
/// The receipt number is percent-encoded as a single path segment. The success
/// body is ignored, so empty and non-JSON bodies are fine.
#[tracing::instrument(skip(api))]
pub async fn validate_pending(api: &ApiClient, receipt_number: &str) -> Result<()> {
    const FALLBACK: &str = "Validasi gagal";
    let url = validate_url(&api.url("/api/transaction/validate-temp"), receipt_number)?;

    let response = client::send(api.authorized(api.client.post(url)), FALLBACK).await?;
    let status = response.status();
    if status.is_success() {
        tracing::info!("Pending transaction validated");
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    let message = client::error_message(&body, FALLBACK);
    tracing::warn!(status = status.as_u16(), error = %message, "Validation failed");
    Err(AppError::Api(message))
}

fn validate_url(base: &str, receipt_number: &str) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| AppError::Api(format!("URL tidak valid: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::Api("URL tidak valid".to_string()))?
        .push(receipt_number);
    Ok(url)
}

#[tracing::instrument(skip(api))]
pub async fn get_dashboard(api: &ApiClient) -> Result<DashboardSummary> {
    const FALLBACK: &str = "Gagal mengambil dashboard";
    let response = client::send(api.authorized(api.client.get(api.url("/api/pos/dashboard"))), FALLBACK).await?;
    let body = client::read_json(response, FALLBACK).await?;
    serde_json::from_value(body).map_err(|e| {
        tracing::error!(error = %e, "Dashboard parse error");
        AppError::Api(FALLBACK.to_string())
    })
}
