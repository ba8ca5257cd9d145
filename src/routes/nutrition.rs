// ABOUTME: Food scanner and recipe routes, including the persisted last recipe
// ABOUTME: Scanned images arrive as base64 with their MIME type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use you360_core::errors::AppError;

use super::dashboard::present;
use super::extract::ApiJson;
use crate::llm::ImagePayload;
use crate::resources::ServerResources;

/// Uploaded meal photo
#[derive(Debug, Deserialize)]
pub struct FoodScanRequest {
    /// MIME type of the image
    pub mime_type: String,
    /// Standard base64 image data; may be empty when no image was chosen
    #[serde(default)]
    pub data: String,
}

/// Ingredient list for recipe generation
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    /// Free-text ingredients
    pub ingredients: String,
}

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the food scanner and recipe routes
    ///
    /// The food-scan body limit comes from `YOU360_MAX_UPLOAD_BYTES`.
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let upload_limit = resources.server_config.max_upload_bytes;
        Router::new()
            .route(
                "/api/sessions/:session_id/food-scan",
                post(Self::scan_food).layer(DefaultBodyLimit::max(upload_limit)),
            )
            .route("/api/sessions/:session_id/recipe", post(Self::generate_recipe))
            .route("/api/sessions/:session_id/recipe/last", get(Self::last_recipe))
            .with_state(resources)
    }

    async fn scan_food(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<FoodScanRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let bytes = STANDARD
            .decode(request.data.trim())
            .map_err(|e| AppError::invalid_input(format!("Image data is not valid base64: {e}")))?;
        let image = ImagePayload::new(request.mime_type, bytes);
        Ok(present(session.scan_food(&image).await))
    }

    async fn generate_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<RecipeRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.generate_recipe(&request.ingredients).await))
    }

    async fn last_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let recipe = session.last_recipe().await?;
        Ok((StatusCode::OK, Json(json!({ "recipe": recipe }))).into_response())
    }
}
