// ABOUTME: Logging configuration and structured logging setup for the dashboard service and CLI
// ABOUTME: Configures log levels, output format, and writer, plus helpers for domain events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging built on `tracing` and `tracing-subscriber`

use std::env;
use std::io;
use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use tracing::{error, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use you360_core::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Output stream
    pub writer: LogWriter,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

/// Stream the subscriber writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogWriter {
    /// Standard output (server)
    Stdout,
    /// Standard error, keeping stdout free for command output (CLI)
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            writer: LogWriter::Stdout,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::YOU360_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            writer: LogWriter::Stdout,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::YOU360_SERVER.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Configuration for the command-line client: compact, quiet, on stderr
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        let level = if verbose { "debug" } else { "warn" };
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
            format: LogFormat::Compact,
            writer: LogWriter::Stderr,
            service_name: service_names::YOU360_CLI.into(),
            ..Self::default()
        }
    }

    fn make_writer(&self) -> BoxMakeWriter {
        match self.writer {
            LogWriter::Stdout => BoxMakeWriter::new(io::stdout),
            LogWriter::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }

    fn build_filter(&self) -> EnvFilter {
        let directives = [
            "hyper=warn",
            "hyper::proto=warn",
            "reqwest=warn",
            "tower_http=info",
        ];
        directives.iter().fold(EnvFilter::new(&self.level), |filter, directive| {
            filter.add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
        })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.build_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(self.make_writer())
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(self.make_writer())
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(self.make_writer())
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Logging initialized: {config_summary}"
        );
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a completed gateway exchange
    pub fn log_gateway_call(model: &str, attempts: u32, structured: bool, duration: Duration) {
        info!(
            ai.model = %model,
            ai.attempts = attempts,
            ai.structured = structured,
            ai.duration_ms = duration.as_millis() as u64,
            "AI gateway call completed"
        );
    }

    /// Log the outcome of a feature adapter invocation
    pub fn log_adapter_outcome(feature: &str, success: bool, detail: Option<&str>) {
        if success {
            info!(feature = %feature, "Feature request succeeded");
        } else {
            warn!(
                feature = %feature,
                detail = detail.unwrap_or(""),
                "Feature request failed"
            );
        }
    }

    /// Log an authentication attempt; never includes credentials
    pub fn log_auth_event(email: &str, event: &str, success: bool, details: Option<&str>) {
        if success {
            info!(
                auth.email = %email,
                auth.event = %event,
                "Authentication event"
            );
        } else {
            warn!(
                auth.email = %email,
                auth.event = %event,
                auth.details = details.unwrap_or(""),
                "Authentication event failed"
            );
        }
    }

    /// Log a storage failure
    pub fn log_storage_error(operation: &str, key: &str, details: &str) {
        error!(
            storage.operation = %operation,
            storage.key = %key,
            storage.details = %details,
            "Storage operation failed"
        );
    }
}
