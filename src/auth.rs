// ABOUTME: Client for the external sign-up/login service issuing session tokens
// ABOUTME: Maps rejected credentials and unreachable servers onto the application error model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Auth Client
//!
//! The auth service exposes `POST /api/auth/signup` and `POST /api/auth/login`,
//! both answering `{ token, user }` on success and `{ message }` on failure.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use you360_core::constants::messages;
use you360_core::errors::{AppError, AppResult, ErrorCode};
use you360_core::models::{AuthSession, LoginRequest, SignupRequest};

use crate::config::AuthConfig;
use crate::llm::http_client::shared_client;
use crate::logging::AppLogger;

/// Service label used in error messages
const AUTH_SERVICE: &str = "auth";

/// Failure body returned by the auth service
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Which auth endpoint to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthEndpoint {
    Signup,
    Login,
}

impl AuthEndpoint {
    const fn path(self) -> &'static str {
        match self {
            Self::Signup => "/api/auth/signup",
            Self::Login => "/api/auth/login",
        }
    }

    const fn event(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Login => "login",
        }
    }
}

/// HTTP client for the auth service
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    client: Client,
}

impl AuthClient {
    /// Create a client for the service at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: shared_client().clone(),
        }
    }

    /// Create a client from configuration
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank fields, `AuthInvalid` with the service's
    /// message when the service rejects the request, or
    /// `ExternalServiceUnavailable` when it cannot be reached
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: &SignupRequest) -> AppResult<AuthSession> {
        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input(messages::NAME_REQUIRED));
        }
        Self::require_credentials(&request.email, &request.password)?;
        self.post(AuthEndpoint::Signup, &request.email, request).await
    }

    /// Log in to an existing account
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank fields, `AuthInvalid` with the service's
    /// message when the credentials are rejected, or
    /// `ExternalServiceUnavailable` when the service cannot be reached
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> AppResult<AuthSession> {
        Self::require_credentials(&request.email, &request.password)?;
        self.post(AuthEndpoint::Login, &request.email, request).await
    }

    fn require_credentials(email: &str, password: &str) -> AppResult<()> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::invalid_input(messages::CREDENTIALS_REQUIRED));
        }
        Ok(())
    }

    async fn post<B: Serialize + Sync>(
        &self,
        endpoint: AuthEndpoint,
        email: &str,
        body: &B,
    ) -> AppResult<AuthSession> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AppLogger::log_auth_event(email, endpoint.event(), false, Some(&e.to_string()));
                AppError::external_unavailable(AUTH_SERVICE, e.to_string())
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::external_unavailable(AUTH_SERVICE, format!("Failed to read response: {e}"))
        })?;
        debug!(status = status.as_u16(), "Auth service replied");

        if !status.is_success() {
            let message = parse_json::<AuthErrorBody>(&text)
                .and_then(|body| body.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| messages::AUTH_FALLBACK.to_owned());
            AppLogger::log_auth_event(email, endpoint.event(), false, Some(&message));
            return Err(AppError::new(ErrorCode::AuthInvalid, message));
        }

        let session = parse_json::<AuthSession>(&text).ok_or_else(|| {
            AppLogger::log_auth_event(email, endpoint.event(), false, Some("unexpected body"));
            AppError::external_service(AUTH_SERVICE, "Auth service returned an unexpected response")
        })?;
        AppLogger::log_auth_event(email, endpoint.event(), true, None);
        Ok(session)
    }
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    serde_json::from_str(text).ok()
}
