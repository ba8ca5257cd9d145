// ABOUTME: Main library entry point for the You360 wellness dashboard
// ABOUTME: Wires the AI gateway, feature adapters, routines, storage, and HTTP API together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # You360
//!
//! Backend for a single-user wellness dashboard. Each dashboard session keeps
//! the current sleep, step, and glucose readings, derives a 0-100 wellness
//! score from them, and exposes AI-backed advice features (mood tips, sleep
//! analysis, step motivation, hair and skin care, diet, exercise plans, food
//! photo scanning, recipes, and a chat assistant) through one Gemini gateway.
//!
//! ## Architecture
//!
//! - **llm**: Gateway, wire format, rate-limit retry, and response schemas
//! - **adapters**: One adapter per feature, each with its own in-flight gate
//! - **session**: Per-dashboard state and the operations the cards invoke
//! - **routines**: Daily routine tracker with progress aggregation
//! - **storage**: Persistence for the last generated recipe
//! - **auth**: Client for the external sign-up and login service
//! - **routes**: Axum HTTP API over sessions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use you360::config::AppConfig;
//! use you360::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env();
//!     let resources = Arc::new(ServerResources::from_config(&config));
//!     let app = you360::routes::router(resources);
//!     let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

/// Feature adapters turning dashboard inputs into AI requests and typed results
pub mod adapters;

/// Client for the external authentication service
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// Error types shared across the crate
pub mod errors;

/// Generative-AI gateway and Gemini transport
pub mod llm;

/// Structured logging setup and domain log helpers
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server state and the session registry
pub mod resources;

/// Daily routine tracker
pub mod routines;

/// HTTP route handlers
pub mod routes;

/// Per-dashboard session state and operations
pub mod session;

/// Last-recipe persistence
pub mod storage;
