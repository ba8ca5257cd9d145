// ABOUTME: Defaults for the Gemini generateContent endpoint and its retry policy
// ABOUTME: Environment variable names read by the configuration layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable for the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable for the model id
pub const MODEL_ENV: &str = "YOU360_LLM_MODEL";

/// Environment variable for the provider base URL
pub const BASE_URL_ENV: &str = "YOU360_LLM_BASE_URL";

/// Environment variable for the rate-limit retry cap
pub const MAX_RETRIES_ENV: &str = "YOU360_LLM_MAX_RETRIES";

/// Environment variable for the initial backoff delay
pub const INITIAL_BACKOFF_MS_ENV: &str = "YOU360_LLM_INITIAL_BACKOFF_MS";

/// Default model to use
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Base URL for the Gemini API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Maximum number of 429 retries before giving up
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Delay before the first retry; doubles on each subsequent retry
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 1000;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Provider role name for assistant turns
pub const ROLE_MODEL: &str = "model";

/// Provider role name for user turns
pub const ROLE_USER: &str = "user";

/// MIME type requested for schema-constrained replies
pub const JSON_MIME_TYPE: &str = "application/json";
