// ABOUTME: HTTP route assembly for the You360 dashboard API
// ABOUTME: Merges per-domain routers and applies tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard API
//!
//! Every dashboard route is scoped to a session created with
//! `POST /api/sessions`. Feature endpoints always answer `200 OK` with a
//! [`Presentation`](crate::adapters::Presentation): adapter failures are
//! display-area messages, not HTTP errors. Unknown sessions and malformed
//! requests use the `{"error":{"code","message"}}` envelope.

/// Auth service proxy routes
pub mod auth;
/// Chat routes
pub mod chat;
/// Dashboard card routes
pub mod dashboard;
/// JSON body extraction
pub mod extract;
/// Health check routes
pub mod health;
/// Food scanner and recipe routes
pub mod nutrition;
/// Routine tracker routes
pub mod routines;
/// Session lifecycle routes
pub mod sessions;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use auth::AuthRoutes;
pub use chat::ChatRoutes;
pub use dashboard::DashboardRoutes;
pub use extract::ApiJson;
pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;
pub use routines::RoutineRoutes;
pub use sessions::SessionRoutes;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;

/// Build the complete API router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.server_config);
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(SessionRoutes::routes(Arc::clone(&resources)))
        .merge(DashboardRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(ChatRoutes::routes(Arc::clone(&resources)))
        .merge(RoutineRoutes::routes(Arc::clone(&resources)))
        .merge(AuthRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
