// ABOUTME: Google Gemini generateContent wire format and HTTP transport
// ABOUTME: Builds multi-turn, inline-image, and JSON-schema requests; redacts the API key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Transport
//!
//! Set the `GEMINI_API_KEY` environment variable with a key from Google AI
//! Studio. Requests go to `{base_url}/models/{model}:generateContent`.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use you360_core::constants::provider::{GEMINI_API_KEY_ENV, JSON_MIME_TYPE, ROLE_MODEL, ROLE_USER};
use you360_core::errors::GatewayError;
use you360_core::models::{ConversationMessage, MessageRole};

use super::http_client::shared_client;
use super::{AiRequest, GenerativeTransport, ImagePayload, ResponseSchema, TransportReply};
use crate::config::LlmConfig;

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Body of a `generateContent` call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns, final user turn last
    pub contents: Vec<Content>,
    /// Structured-output settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`
    #[serde(default)]
    pub role: String,
    /// Ordered parts of the turn
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Content part; unknown part kinds in replies deserialize as empty text-less parts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Text part
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// Inline image part
    #[must_use]
    pub fn image(image: &ImagePayload) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: STANDARD.encode(&image.bytes),
            }),
        }
    }
}

/// Base64-encoded inline data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Standard base64 encoding of the bytes
    pub data: String,
}

/// Generation settings for structured replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json` when a schema is present
    pub response_mime_type: String,
    /// Required reply shape
    pub response_schema: ResponseSchema,
}

/// Reply envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Model candidates; the first one is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Error envelope on failed calls
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// One reply candidate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
}

/// Provider error envelope body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl GenerateContentRequest {
    /// Build the wire body for an [`AiRequest`]
    #[must_use]
    pub fn from_ai_request(request: &AiRequest) -> Self {
        let mut contents: Vec<Content> = request.history.iter().map(Self::convert_message).collect();

        let mut final_parts = vec![Part::text(request.prompt.clone())];
        if let Some(image) = &request.image {
            final_parts.push(Part::image(image));
        }
        contents.push(Content {
            role: ROLE_USER.to_owned(),
            parts: final_parts,
        });

        Self {
            contents,
            generation_config: request
                .response_schema
                .clone()
                .map(|schema| GenerationConfig {
                    response_mime_type: JSON_MIME_TYPE.to_owned(),
                    response_schema: schema,
                }),
        }
    }

    const fn convert_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::User => ROLE_USER,
            MessageRole::Assistant => ROLE_MODEL,
        }
    }

    fn convert_message(message: &ConversationMessage) -> Content {
        Content {
            role: Self::convert_role(message.role).to_owned(),
            parts: vec![Part::text(message.text.clone())],
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any
    #[must_use]
    pub fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Extract the provider's error message from a raw body, falling back to the body itself
    #[must_use]
    pub fn error_message(body: &str) -> String {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|response| response.error)
            .map(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| body.trim().to_owned())
    }
}

// ============================================================================
// Transport
// ============================================================================

/// HTTP transport to the Gemini API
#[derive(Clone)]
pub struct GeminiTransport {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

impl GeminiTransport {
    /// Create a transport using the shared HTTP client
    #[must_use]
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            client: shared_client().clone(),
        }
    }

    /// Create a transport from provider configuration
    #[must_use]
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    fn build_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

#[async_trait]
impl GenerativeTransport for GeminiTransport {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self, request), fields(model = %model, turns = request.contents.len()))]
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<TransportReply, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingCredential {
            env_var: GEMINI_API_KEY_ENV,
        })?;

        let response = self
            .client
            .post(self.build_url(model))
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.without_url().to_string()))?;

        debug!(status, bytes = body.len(), "Received Gemini reply");
        Ok(TransportReply { status, body })
    }
}

impl Debug for GeminiTransport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiTransport")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_history_roles_map_to_provider_roles() {
        let request = AiRequest::new("And now?").with_history(vec![
            ConversationMessage::user("Hi"),
            ConversationMessage::assistant("Hello!"),
        ]);
        let body = serde_json::to_value(GenerateContentRequest::from_ai_request(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "Hi"}]},
                    {"role": "model", "parts": [{"text": "Hello!"}]},
                    {"role": "user", "parts": [{"text": "And now?"}]}
                ]
            })
        );
    }

    #[test]
    fn test_image_and_schema_are_attached() {
        let request = AiRequest::new("What is this?")
            .with_image(ImagePayload::new("image/png", vec![1, 2, 3]))
            .with_schema(ResponseSchema::object([("name", ResponseSchema::string())]));
        let body = serde_json::to_value(GenerateContentRequest::from_ai_request(&request)).unwrap();
        assert_eq!(
            body["contents"][0]["parts"][1],
            json!({"inlineData": {"mimeType": "image/png", "data": "AQID"}})
        );
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            json!("application/json")
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["type"],
            json!("OBJECT")
        );
    }

    #[test]
    fn test_error_message_prefers_envelope() {
        let body = r#"{"error":{"code":429,"message":"Resource exhausted"}}"#;
        assert_eq!(
            GenerateContentResponse::error_message(body),
            "Resource exhausted"
        );
        assert_eq!(GenerateContentResponse::error_message(" oops "), "oops");
    }

    #[test]
    fn test_debug_redacts_key() {
        let transport = GeminiTransport::new(Some("top-secret".to_owned()), "http://localhost");
        let rendered = format!("{transport:?}");
        assert!(!rendered.contains("top-secret"));
    }
}
