// ABOUTME: Sign-up and login routes proxied to the external auth service
// ABOUTME: The issued token and user are retained on the dashboard session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use uuid::Uuid;
use you360_core::errors::AppError;
use you360_core::models::{LoginRequest, SignupRequest};

use super::extract::ApiJson;
use crate::resources::ServerResources;

/// Auth routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create the auth routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions/:session_id/auth/signup", post(Self::signup))
            .route("/api/sessions/:session_id/auth/login", post(Self::login))
            .with_state(resources)
    }

    async fn signup(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<SignupRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let auth = resources.auth_client.signup(&request).await?;
        session.sign_in(auth.clone()).await;
        Ok((StatusCode::OK, Json(auth)).into_response())
    }

    async fn login(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<LoginRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let auth = resources.auth_client.login(&request).await?;
        session.sign_in(auth.clone()).await;
        Ok((StatusCode::OK, Json(auth)).into_response())
    }
}
