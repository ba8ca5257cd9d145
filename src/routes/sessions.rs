// ABOUTME: Session lifecycle routes: open, summarize, update readings, close
// ABOUTME: The summary carries the wellness sample, score breakdown, mood, and routine progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use you360_core::errors::AppError;

use super::extract::ApiJson;
use crate::resources::ServerResources;

/// Partial update of the wellness readings
#[derive(Debug, Deserialize)]
pub struct UpdateSampleRequest {
    /// Hours slept
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    /// Glucose reading in mg/dL
    #[serde(default)]
    pub glucose_reading: Option<f64>,
}

/// Session routes implementation
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create the session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions", post(Self::create_session))
            .route("/api/sessions/:session_id", delete(Self::close_session))
            .route("/api/sessions/:session_id/summary", get(Self::summary))
            .route("/api/sessions/:session_id/sample", put(Self::update_sample))
            .with_state(resources)
    }

    async fn create_session(State(resources): State<Arc<ServerResources>>) -> Response {
        let session = resources.create_session();
        let summary = session.summary().await;
        (StatusCode::CREATED, Json(summary)).into_response()
    }

    async fn close_session(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        if resources.close_session(session_id) {
            Ok(StatusCode::NO_CONTENT.into_response())
        } else {
            Err(AppError::not_found(format!("Session {session_id}")))
        }
    }

    async fn summary(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok((StatusCode::OK, Json(session.summary().await)).into_response())
    }

    async fn update_sample(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<UpdateSampleRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        if let Some(hours) = request.sleep_hours {
            session.set_sleep_hours(hours).await?;
        }
        if let Some(reading) = request.glucose_reading {
            session.set_glucose_reading(reading).await?;
        }
        let sample = session.sample().await;
        let score = session.wellness_score().await;
        Ok((
            StatusCode::OK,
            Json(json!({ "sample": sample, "score": score })),
        )
            .into_response())
    }
}
