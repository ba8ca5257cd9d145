// ABOUTME: JSON body extractor whose rejections use the API error envelope
// ABOUTME: Malformed, mistyped, or oversized bodies become AppError responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use tracing::debug;
use you360_core::errors::{AppError, ErrorCode};

/// `Json<T>` with rejections rendered as `{"error":{"code","message"}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(rejection_to_error)
    }
}

/// Map an axum JSON rejection onto the application error model
#[must_use]
pub fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let status = rejection.status();
    let message = rejection.body_text();
    debug!(%status, %message, "Rejected request body");
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::new(ErrorCode::PayloadTooLarge, message)
    } else {
        AppError::invalid_input(message)
    }
}
