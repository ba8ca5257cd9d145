// ABOUTME: Environment configuration for the AI gateway, auth backend, storage, and HTTP server
// ABOUTME: Each section loads itself with from_env and falls back to documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};
use you360_core::constants::provider::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_INITIAL_BACKOFF_MS,
    DEFAULT_MAX_RETRIES, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GEMINI_API_KEY_ENV,
    INITIAL_BACKOFF_MS_ENV, MAX_RETRIES_ENV, MODEL_ENV,
};

/// Environment variable for the outbound HTTP request timeout
pub const HTTP_TIMEOUT_SECS_ENV: &str = "YOU360_HTTP_TIMEOUT_SECS";
/// Environment variable for the outbound HTTP connect timeout
pub const HTTP_CONNECT_TIMEOUT_SECS_ENV: &str = "YOU360_HTTP_CONNECT_TIMEOUT_SECS";
/// Environment variable for the auth backend base URL
pub const AUTH_BASE_URL_ENV: &str = "YOU360_AUTH_BASE_URL";
/// Environment variable for the local data directory
pub const DATA_DIR_ENV: &str = "YOU360_DATA_DIR";
/// Environment variable for the API bind address
pub const HOST_ENV: &str = "YOU360_HOST";
/// Environment variable for the API port
pub const PORT_ENV: &str = "YOU360_PORT";
/// Environment variable for allowed CORS origins (comma separated, or `*`)
pub const CORS_ALLOWED_ORIGINS_ENV: &str = "CORS_ALLOWED_ORIGINS";
/// Environment variable for the food-scan upload body limit in bytes
pub const MAX_UPLOAD_BYTES_ENV: &str = "YOU360_MAX_UPLOAD_BYTES";
/// Environment variable for the number of dashboard sessions kept open
pub const MAX_SESSIONS_ENV: &str = "YOU360_MAX_SESSIONS";
/// Environment variable for how long an unused session is kept, in seconds
pub const SESSION_IDLE_TTL_SECS_ENV: &str = "YOU360_SESSION_IDLE_TTL_SECS";

/// Default auth backend, matching the development server
const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:5000";
/// Default API port
const DEFAULT_PORT: u16 = 8360;
/// Default upload limit; fits a base64-encoded phone photo
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
/// Default cap on open dashboard sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1000;
/// Default idle lifetime of a dashboard session
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 60 * 60;
/// Directory name appended to the platform data directory
const DATA_DIR_NAME: &str = "you360";

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Generative-AI provider settings
    pub llm: LlmConfig,
    /// Outbound HTTP client timeouts
    pub http: HttpClientConfig,
    /// Auth backend settings
    pub auth: AuthConfig,
    /// Local persistence settings
    pub storage: StorageConfig,
    /// API server bind settings
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            llm: LlmConfig::from_env(),
            http: HttpClientConfig::from_env(),
            auth: AuthConfig::from_env(),
            storage: StorageConfig::from_env(),
            server: ServerConfig::from_env(),
        };
        info!(
            model = %config.llm.model,
            ai_configured = config.llm.has_api_key(),
            auth_base_url = %config.auth.base_url,
            data_dir = %config.storage.data_dir.display(),
            "Loaded configuration from environment"
        );
        config
    }
}

/// Gemini provider configuration
#[derive(Clone)]
pub struct LlmConfig {
    /// API key; `None` when unset or blank
    pub api_key: Option<String>,
    /// Model id used for every request
    pub model: String,
    /// Provider base URL (overridable for local testing)
    pub base_url: String,
    /// Rate-limit retry policy
    pub retry: RetryConfig,
}

impl LlmConfig {
    /// Load provider configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(GEMINI_API_KEY_ENV)
                .ok()
                .map(|key| key.trim().to_owned())
                .filter(|key| !key.is_empty()),
            model: env_var_or(MODEL_ENV, DEFAULT_MODEL),
            base_url: env_var_or(BASE_URL_ENV, DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            retry: RetryConfig::from_env(),
        }
    }

    /// Whether a credential is available
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            retry: RetryConfig::default(),
        }
    }
}

impl Debug for LlmConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Exponential backoff policy applied to throttled (HTTP 429) provider replies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries allowed after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry in milliseconds
    pub initial_backoff_ms: u64,
}

impl RetryConfig {
    /// Build a policy from explicit values
    #[must_use]
    pub const fn new(max_retries: u32, initial_backoff_ms: u64) -> Self {
        Self {
            max_retries,
            initial_backoff_ms,
        }
    }

    /// Load the retry policy from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_retries: env_parse_or(MAX_RETRIES_ENV, DEFAULT_MAX_RETRIES),
            initial_backoff_ms: env_parse_or(INITIAL_BACKOFF_MS_ENV, DEFAULT_INITIAL_BACKOFF_MS),
        }
    }

    /// Delay before retry number `retry` (zero-based): `initial * 2^retry`
    #[must_use]
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let factor = 2_u64.checked_pow(retry).unwrap_or(u64::MAX);
        Duration::from_millis(self.initial_backoff_ms.saturating_mul(factor))
    }

    /// Total number of HTTP attempts the policy allows
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_INITIAL_BACKOFF_MS)
    }
}

/// Timeouts for the shared outbound HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl HttpClientConfig {
    /// Load HTTP client timeouts from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env_parse_or(HTTP_TIMEOUT_SECS_ENV, DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: env_parse_or(
                HTTP_CONNECT_TIMEOUT_SECS_ENV,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Auth backend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL that `/api/auth/*` paths are appended to
    pub base_url: String,
}

impl AuthConfig {
    /// Load auth backend configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or(AUTH_BASE_URL_ENV, DEFAULT_AUTH_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AUTH_BASE_URL.to_owned(),
        }
    }
}

/// Local persistence configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding persisted state such as the last recipe
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment
    ///
    /// Falls back to the platform data directory, then to the working directory.
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(Self::default_data_dir, PathBuf::from);
        Self { data_dir }
    }

    fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
        }
    }
}

/// API server bind configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// TCP port
    pub port: u16,
    /// Allowed CORS origins; empty or `*` allows any origin
    pub cors_allowed_origins: String,
    /// Largest accepted food-scan request body
    pub max_upload_bytes: usize,
    /// Sessions kept open before the least recently used one is closed
    pub max_sessions: usize,
    /// Seconds a session may go unused before it is closed
    pub session_idle_ttl_secs: u64,
}

impl ServerConfig {
    /// Load server configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env_parse_or(HOST_ENV, IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: env_parse_or(PORT_ENV, DEFAULT_PORT),
            cors_allowed_origins: env_var_or(CORS_ALLOWED_ORIGINS_ENV, "*"),
            max_upload_bytes: env_parse_or(MAX_UPLOAD_BYTES_ENV, DEFAULT_MAX_UPLOAD_BYTES),
            max_sessions: env_parse_or(MAX_SESSIONS_ENV, DEFAULT_MAX_SESSIONS).max(1),
            session_idle_ttl_secs: env_parse_or(
                SESSION_IDLE_TTL_SECS_ENV,
                DEFAULT_SESSION_IDLE_TTL_SECS,
            ),
        }
    }

    /// Idle lifetime of a session
    #[must_use]
    pub const fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs)
    }

    /// Socket address to bind
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            cors_allowed_origins: "*".to_owned(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
            session_idle_ttl_secs: DEFAULT_SESSION_IDLE_TTL_SECS,
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, warning and falling back when it is not valid
fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Invalid value in environment, using default");
            default
        }),
        Err(_) => default,
    }
}
