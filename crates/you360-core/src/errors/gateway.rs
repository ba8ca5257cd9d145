// ABOUTME: Error taxonomy for calls to the external generative-AI provider
// ABOUTME: Distinguishes configuration, throttling, provider, and contract failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::constants::messages;

/// Failures raised by the AI gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No API key is configured; raised before any network call
    #[error("AI provider credential is not configured (set {env_var})")]
    MissingCredential {
        /// Environment variable that should hold the key
        env_var: &'static str,
    },
    /// Provider kept answering 429 after every allowed retry
    #[error("AI provider rate limited the request after {attempts} attempts: {message}")]
    RateLimited {
        /// Total number of HTTP attempts made
        attempts: u32,
        /// Provider message from the last throttled response
        message: String,
    },
    /// Provider answered with a non-2xx, non-429 status
    #[error("AI provider error ({status}): {message}")]
    Provider {
        /// HTTP status returned by the provider
        status: u16,
        /// Message extracted from the provider's error envelope
        message: String,
    },
    /// Reply could not be parsed, or did not match the declared schema
    #[error("AI provider returned a malformed response: {0}")]
    MalformedResponse(String),
    /// Reply envelope held no candidates
    #[error("AI provider returned no candidates")]
    EmptyResponse,
    /// Network failure before an HTTP status was received
    #[error("AI provider request failed: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Message suitable for the feature's display area
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential { .. } => messages::AI_NOT_CONFIGURED.to_owned(),
            Self::RateLimited { .. } => messages::AI_RATE_LIMITED.to_owned(),
            Self::Provider { .. } | Self::Transport(_) => messages::AI_UNAVAILABLE.to_owned(),
            Self::MalformedResponse(_) => messages::AI_MALFORMED.to_owned(),
            Self::EmptyResponse => messages::AI_EMPTY.to_owned(),
        }
    }

    /// Whether the failure should be recorded for diagnostics at error level
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::Provider { .. } | Self::Transport(_)
        )
    }
}

impl From<GatewayError> for AppError {
    fn from(error: GatewayError) -> Self {
        let code = match &error {
            GatewayError::MissingCredential { .. } => ErrorCode::ConfigMissing,
            GatewayError::RateLimited { .. } => ErrorCode::ExternalRateLimited,
            GatewayError::Transport(_) => ErrorCode::ExternalServiceUnavailable,
            GatewayError::Provider { .. }
            | GatewayError::MalformedResponse(_)
            | GatewayError::EmptyResponse => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.user_message()).with_source(error)
    }
}
