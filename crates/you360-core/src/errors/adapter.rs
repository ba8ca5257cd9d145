// ABOUTME: Error type for dashboard feature adapters (mood, sleep, recipes, chat, ...)
// ABOUTME: Wraps gateway failures and adds input validation and in-flight rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode, GatewayError};
use crate::constants::messages;

/// Failures raised by a feature adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// User input was missing or invalid; no request was sent
    #[error("{0}")]
    Validation(String),
    /// The adapter already has a request in flight
    #[error("{feature} is already waiting for a reply")]
    Busy {
        /// Feature whose gate rejected the call
        feature: &'static str,
    },
    /// The gateway call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl AdapterError {
    /// Shorthand for a validation failure
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Message suitable for the feature's display area
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Busy { .. } => messages::REQUEST_IN_FLIGHT.to_owned(),
            Self::Gateway(error) => error.user_message(),
        }
    }
}

impl From<AdapterError> for AppError {
    fn from(error: AdapterError) -> Self {
        match error {
            AdapterError::Validation(message) => Self::new(ErrorCode::InvalidInput, message),
            AdapterError::Busy { .. } => {
                Self::new(ErrorCode::ResourceLocked, error.user_message())
            }
            AdapterError::Gateway(inner) => inner.into(),
        }
    }
}
