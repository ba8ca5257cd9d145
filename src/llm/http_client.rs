// ABOUTME: Shared outbound HTTP client for the AI provider and the auth backend
// ABOUTME: Initialized once with configured timeouts; falls back to defaults otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::warn;

use crate::config::HttpClientConfig;

/// Configured timeouts for the shared client
static CLIENT_TIMEOUTS: OnceLock<HttpClientConfig> = OnceLock::new();

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record the timeout configuration for the shared client
///
/// Call once at startup before any request is made; later calls are ignored.
pub fn initialize_shared_client(config: HttpClientConfig) {
    if CLIENT_TIMEOUTS.set(config).is_err() {
        warn!("Shared HTTP client timeouts already initialized; ignoring new values");
    }
}

/// Shared HTTP client with connection pooling and configured timeouts
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let config = CLIENT_TIMEOUTS.get().copied().unwrap_or_default();
        ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
