// ABOUTME: Generative-AI gateway abstraction shared by every dashboard feature
// ABOUTME: Request/response value types, the transport seam, and the Gemini implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # AI Gateway
//!
//! Every feature that needs model output builds an [`AiRequest`] and hands it
//! to [`AiGateway::ask`]. The gateway owns the credential check, the wire
//! format, the rate-limit retry policy, and the conversion of provider replies
//! into either cleaned plain text or a schema-checked JSON object.
//!
//! The network hop sits behind [`GenerativeTransport`] so tests can script
//! provider replies without a socket.
//!
//! ## Example
//!
//! ```rust,no_run
//! use you360::config::LlmConfig;
//! use you360::llm::{AiGateway, AiRequest};
//!
//! # async fn example() -> Result<(), you360::errors::GatewayError> {
//! let gateway = AiGateway::from_config(&LlmConfig::from_env());
//! let reply = gateway.ask(&AiRequest::new("Give me one hydration tip")).await?;
//! println!("{}", reply.into_text()?);
//! # Ok(())
//! # }
//! ```

mod gateway;
mod gemini;
/// Shared outbound HTTP client
pub mod http_client;
mod schema;

pub use gateway::AiGateway;
pub use gemini::{
    Content, GeminiTransport, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part,
};
pub use schema::ResponseSchema;

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use you360_core::errors::GatewayError;
use you360_core::models::ConversationMessage;

// ============================================================================
// Request Types
// ============================================================================

/// Image attached to a request, sent inline as base64
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// MIME type such as `image/jpeg`
    pub mime_type: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Create a payload from raw bytes
    #[must_use]
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Whether the MIME type names an image
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.trim().to_ascii_lowercase().starts_with("image/")
    }
}

impl Debug for ImagePayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One request to the generative model
#[derive(Debug, Clone, PartialEq)]
pub struct AiRequest {
    /// Text of the final user turn
    pub prompt: String,
    /// Prior turns, oldest first
    pub history: Vec<ConversationMessage>,
    /// Optional image attached to the final user turn
    pub image: Option<ImagePayload>,
    /// When set, the reply must be a JSON object matching this schema
    pub response_schema: Option<ResponseSchema>,
}

impl AiRequest {
    /// Create a single-turn text request
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            history: Vec::new(),
            image: None,
            response_schema: None,
        }
    }

    /// Prepend prior conversation turns
    #[must_use]
    pub fn with_history(mut self, history: Vec<ConversationMessage>) -> Self {
        self.history = history;
        self
    }

    /// Attach an image to the final turn
    #[must_use]
    pub fn with_image(mut self, image: ImagePayload) -> Self {
        self.image = Some(image);
        self
    }

    /// Require a structured JSON reply
    #[must_use]
    pub fn with_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Successful gateway reply
#[derive(Debug, Clone, PartialEq)]
pub enum AiResponse {
    /// Cleaned text (markdown emphasis removed, trimmed)
    PlainText(String),
    /// JSON object whose required keys were all present
    StructuredJson(Map<String, Value>),
}

impl AiResponse {
    /// Take the reply as text; structured replies are rendered as JSON
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if a structured reply cannot be serialized
    pub fn into_text(self) -> Result<String, GatewayError> {
        match self {
            Self::PlainText(text) => Ok(text),
            Self::StructuredJson(map) => serde_json::to_string(&Value::Object(map))
                .map_err(|e| GatewayError::MalformedResponse(e.to_string())),
        }
    }

    /// Decode a structured reply into a typed value
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` for a plain-text reply or when field types
    /// do not match `T`
    pub fn into_structured<T: DeserializeOwned>(self) -> Result<T, GatewayError> {
        match self {
            Self::StructuredJson(map) => serde_json::from_value(Value::Object(map))
                .map_err(|e| GatewayError::MalformedResponse(e.to_string())),
            Self::PlainText(_) => Err(GatewayError::MalformedResponse(
                "expected a structured reply but received plain text".to_owned(),
            )),
        }
    }
}

// ============================================================================
// Transport Seam
// ============================================================================

/// Raw HTTP exchange result from the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportReply {
    /// Create a reply
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Network hop to the generative provider
#[async_trait]
pub trait GenerativeTransport: Send + Sync {
    /// Short provider identifier for logs
    fn name(&self) -> &'static str;

    /// Whether an API key is available; the gateway never calls `generate` otherwise
    fn has_credential(&self) -> bool;

    /// Send one `generateContent` request and return the raw reply
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` when no HTTP status was received
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<TransportReply, GatewayError>;
}
