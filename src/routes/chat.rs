// ABOUTME: Chat routes for the floating wellness assistant
// ABOUTME: Sending appends to the session's conversation; reading returns it in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use you360_core::errors::AppError;

use super::dashboard::present;
use super::extract::ApiJson;
use crate::resources::ServerResources;

/// Chat message from the user
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Message text
    pub message: String,
}

/// Chat routes implementation
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create the chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/sessions/:session_id/chat",
                get(Self::get_conversation).post(Self::send_message),
            )
            .with_state(resources)
    }

    async fn get_conversation(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        let conversation = session.conversation().await;
        Ok((
            StatusCode::OK,
            Json(json!({ "messages": conversation.messages() })),
        )
            .into_response())
    }

    async fn send_message(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        ApiJson(request): ApiJson<SendMessageRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.session(session_id)?;
        Ok(present(session.send_chat(&request.message).await))
    }
}
