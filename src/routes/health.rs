// ABOUTME: Health check route for service monitoring
// ABOUTME: Reports liveness, version, open sessions, and whether the AI gateway is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .with_state(resources)
    }

    async fn health_handler(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "ai_configured": resources.gateway.is_configured(),
            "sessions": resources.session_count(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
