// ABOUTME: Routine tracker routes: list, add, edit, delete, and toggle tasks
// ABOUTME: Task lists are accepted as a JSON array or as comma-separated text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use you360_core::errors::AppError;
use you360_core::models::{RoutineId, TimeOfDay};

use super::extract::ApiJson;
use crate::resources::ServerResources;
use crate::routines::{parse_task_list, RoutineView};

/// Tasks as a list or as comma-separated text
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TaskListInput {
    /// Explicit list
    List(Vec<String>),
    /// Comma-separated text as typed in the form
    Text(String),
}

impl TaskListInput {
    fn into_tasks(self) -> Vec<String> {
        match self {
            Self::List(tasks) => tasks,
            Self::Text(text) => parse_task_list(&text),
        }
    }
}

/// Create or replace a routine
#[derive(Debug, Deserialize)]
pub struct RoutineRequest {
    /// Routine name
    pub name: String,
    /// Section of the day
    pub time_of_day: TimeOfDay,
    /// Tasks
    pub tasks: TaskListInput,
}

/// Routine list with the day's aggregate progress
#[derive(Debug, Serialize)]
pub struct RoutineListResponse {
    /// Routines in insertion order
    pub routines: Vec<RoutineView>,
    /// Floored completion percentage across all routines
    pub overall_progress: u8,
}

/// New state of a toggled task
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// Whether the task is now complete
    pub completed: bool,
    /// Routine completion percentage
    pub progress: f64,
    /// Floored completion percentage across all routines
    pub overall_progress: u8,
}

/// Routine routes implementation
pub struct RoutineRoutes;

impl RoutineRoutes {
    /// Create the routine routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/sessions/:session_id/routines",
                get(Self::list_routines).post(Self::add_routine),
            )
            .route(
                "/api/sessions/:session_id/routines/:routine_id",
                put(Self::edit_routine).delete(Self::delete_routine),
            )
            .route(
                "/api/sessions/:session_id/routines/:routine_id/tasks/:task_index/toggle",
                post(Self::toggle_task),
            )
            .with_state(resources)
    }

    async fn list_routines(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let response = session
            .with_routines(|tracker| RoutineListResponse {
                routines: tracker.views(),
                overall_progress: tracker.overall_progress(),
            })
            .await;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn add_routine(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<RoutineRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let view = session
            .with_routines(|tracker| {
                tracker
                    .add_routine(&request.name, request.time_of_day, request.tasks.into_tasks())
                    .map(RoutineView::from)
            })
            .await?;
        Ok((StatusCode::CREATED, Json(view)).into_response())
    }

    async fn edit_routine(
        State(resources): State<Arc<ServerResources>>,
        Path((session_id, routine_id)): Path<(Uuid, RoutineId)>,
        ApiJson(request): ApiJson<RoutineRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let view = session
            .with_routines(|tracker| {
                tracker
                    .edit_routine(
                        routine_id,
                        &request.name,
                        request.time_of_day,
                        request.tasks.into_tasks(),
                    )
                    .map(RoutineView::from)
            })
            .await?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    async fn delete_routine(
        State(resources): State<Arc<ServerResources>>,
        Path((session_id, routine_id)): Path<(Uuid, RoutineId)>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        session
            .with_routines(|tracker| tracker.delete_routine(routine_id))
            .await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    async fn toggle_task(
        State(resources): State<Arc<ServerResources>>,
        Path((session_id, routine_id, task_index)): Path<(Uuid, RoutineId, usize)>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let response = session
            .with_routines(|tracker| {
                let completed = tracker.toggle_task(routine_id, task_index)?;
                Ok::<_, AppError>(ToggleResponse {
                    completed,
                    progress: tracker.progress(routine_id)?,
                    overall_progress: tracker.overall_progress(),
                })
            })
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
