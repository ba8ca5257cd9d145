// ABOUTME: Payloads exchanged with the external auth service and the retained session
// ABOUTME: The token and user object are kept for the lifetime of a dashboard session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign-up payload
#[derive(Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Plain-text password, sent over TLS to the auth service
    pub password: String,
}

/// Login payload
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Token and user returned by a successful sign-up or login
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token issued by the auth service
    pub token: String,
    /// User object as returned by the service
    pub user: serde_json::Value,
}

impl AuthSession {
    /// User's display name, falling back to the email address
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user
            .get("name")
            .or_else(|| self.user.get("email"))
            .and_then(serde_json::Value::as_str)
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}
