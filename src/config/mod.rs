// ABOUTME: Configuration module for the You360 dashboard service and CLI
// ABOUTME: Environment-driven settings for the AI provider, HTTP client, auth, storage, and server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Configuration
//!
//! All settings are read from environment variables with sensible defaults.
//! Nothing here fails on a missing variable: an absent `GEMINI_API_KEY`
//! leaves the AI gateway unconfigured, and every feature reports that in its
//! display area instead of refusing to start.

/// Environment-based configuration loading
pub mod environment;

pub use environment::{
    AppConfig, AuthConfig, HttpClientConfig, LlmConfig, RetryConfig, ServerConfig, StorageConfig,
};
