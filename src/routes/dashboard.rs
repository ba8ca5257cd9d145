// ABOUTME: Dashboard card routes: mood, sleep, steps, hair, skin, diet, exercise
// ABOUTME: Each answers with a Presentation so failures land in the card's display area
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
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use you360_core::errors::{AdapterError, AppError};
use you360_intelligence::Distance;

use super::extract::ApiJson;
use crate::adapters::{ExerciseMode, Presentation, SkinType};
use crate::resources::ServerResources;

// ============================================================================
// Request Types
// ============================================================================

/// Mood selection
#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    /// Selected mood emoji
    pub mood: String,
}

/// Sleep entry
#[derive(Debug, Deserialize)]
pub struct SleepRequest {
    /// Hours slept
    pub hours: f64,
}

/// Hair issue description
#[derive(Debug, Deserialize)]
pub struct HairRequest {
    /// Free-text issue
    pub issue: String,
}

/// Skin type selection
#[derive(Debug, Deserialize)]
pub struct SkinRequest {
    /// Selected skin type
    pub skin_type: SkinType,
}

/// Meal description
#[derive(Debug, Deserialize)]
pub struct DietRequest {
    /// Foods eaten
    pub food: String,
}

/// Workout location selection
#[derive(Debug, Deserialize)]
pub struct ExerciseRequest {
    /// Home or gym
    pub mode: ExerciseMode,
}

/// Dashboard card routes implementation
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create the dashboard card routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions/:session_id/mood", post(Self::mood))
            .route("/api/sessions/:session_id/sleep", post(Self::sleep))
            .route("/api/sessions/:session_id/steps", post(Self::steps))
            .route("/api/sessions/:session_id/hair", post(Self::hair))
            .route("/api/sessions/:session_id/skin", post(Self::skin))
            .route("/api/sessions/:session_id/diet", post(Self::diet))
            .route("/api/sessions/:session_id/exercise", post(Self::exercise))
            .with_state(resources)
    }

    async fn mood(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<MoodRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.select_mood(&request.mood).await))
    }

    async fn sleep(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<SleepRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.analyze_sleep(request.hours).await))
    }

    async fn steps(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(distance): ApiJson<Distance>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.convert_steps(distance).await))
    }

    async fn hair(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<HairRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.hair_advice(&request.issue).await))
    }

    async fn skin(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<SkinRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.skin_advice(request.skin_type).await))
    }

    async fn diet(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<DietRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.estimate_sugar(&request.food).await))
    }

    async fn exercise(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<ExerciseRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.exercise_plan(request.mode).await))
    }
}

/// Render an adapter result as a `200 OK` presentation
pub(crate) fn present<T: Serialize>(result: Result<T, AdapterError>) -> Response {
    (StatusCode::OK, Json(Presentation::from_result(result))).into_response()
}
