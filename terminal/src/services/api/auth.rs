//! # Authentication Endpoints
//!
//! Agent sign-in and profile lookup.

use shared::{LoginRequest, LoginResponse, UserProfile};

use super::client::{self, ApiClient};
use crate::core::error::{AppError, Result};

const LOGIN_FALLBACK: &str = "Login gagal";
const SESSION_FALLBACK: &str = "Session expired";

/// Sign in with email or phone number and password.
#[tracing::instrument(skip(api, request), fields(identifier = %request.email_or_phone_number))]
pub async fn login(api: &ApiClient, request: LoginRequest) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = client::send(
        api.client.post(api.url("/api/auth/agen/signin")).json(&request),
        LOGIN_FALLBACK,
    )
    .await?;

    let body = client::read_json(response, LOGIN_FALLBACK).await?;
    let parsed = LoginResponse::from_json(&body);

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        has_token = parsed.token.is_some(),
        "Login successful"
    );
    Ok(parsed)
}

/// Fetch the logged-in agent's profile.
///
/// A rejected request is reported as [`AppError::Session`] so the caller can
/// drop the stored token; transport failures stay [`AppError::Api`].
#[tracing::instrument(skip(api))]
pub async fn get_me(api: &ApiClient) -> Result<UserProfile> {
    let token = api
        .token()
        .ok_or_else(|| AppError::Session("No token".to_string()))?;

    let response = client::send(
        api.client.get(api.url("/api/agen/get-me")).bearer_auth(token),
        SESSION_FALLBACK,
    )
    .await?;

    let status = response.status();
    let body = client::read_json(response, SESSION_FALLBACK)
        .await
        .map_err(|e| {
            if status.is_success() {
                e
            } else {
                AppError::Session(e.user_message().to_string())
            }
        })?;

    UserProfile::from_envelope(body).ok_or_else(|| {
        tracing::warn!("Profile response was not an object");
        AppError::Session(SESSION_FALLBACK.to_string())
    })
}
