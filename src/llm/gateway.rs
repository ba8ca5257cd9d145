// ABOUTME: AI gateway turning AiRequest values into cleaned text or schema-checked JSON
// ABOUTME: Enforces the credential check and exponential backoff on provider rate limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, error, instrument, warn};
use you360_core::constants::provider::GEMINI_API_KEY_ENV;
use you360_core::errors::GatewayError;

use super::gemini::{GenerateContentRequest, GenerateContentResponse};
use super::{AiRequest, AiResponse, GeminiTransport, GenerativeTransport, ResponseSchema, TransportReply};
use crate::config::{LlmConfig, RetryConfig};
use crate::logging::AppLogger;

/// HTTP status the provider uses for throttling
const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Single entry point for generative-model calls
#[derive(Clone)]
pub struct AiGateway {
    transport: Arc<dyn GenerativeTransport>,
    model: String,
    retry: RetryConfig,
}

impl AiGateway {
    /// Create a gateway over an arbitrary transport
    #[must_use]
    pub fn new(
        transport: Arc<dyn GenerativeTransport>,
        model: impl Into<String>,
        retry: RetryConfig,
    ) -> Self {
        Self {
            transport,
            model: model.into(),
            retry,
        }
    }

    /// Create a gateway talking to Gemini with the configured key, model, and retry policy
    #[must_use]
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(
            Arc::new(GeminiTransport::from_config(config)),
            config.model.clone(),
            config.retry,
        )
    }

    /// Model id sent with every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the transport holds a credential
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.transport.has_credential()
    }

    /// Send a request and return the processed reply
    ///
    /// Without a credential this fails immediately and performs no network
    /// call. HTTP 429 replies are retried with exponential backoff; any other
    /// non-2xx status fails at once.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] describing the first unrecoverable failure
    #[instrument(
        skip_all,
        fields(
            provider = self.transport.name(),
            model = %self.model,
            structured = request.response_schema.is_some(),
            image = request.image.is_some(),
        )
    )]
    pub async fn ask(&self, request: &AiRequest) -> Result<AiResponse, GatewayError> {
        if !self.transport.has_credential() {
            error!("AI provider credential missing; set {GEMINI_API_KEY_ENV}");
            return Err(GatewayError::MissingCredential {
                env_var: GEMINI_API_KEY_ENV,
            });
        }

        let started = Instant::now();
        let body = GenerateContentRequest::from_ai_request(request);
        let (reply, attempts) = self.send_with_retry(&body).await?;

        let envelope: GenerateContentResponse = serde_json::from_str(&reply.body).map_err(|e| {
            warn!(error = %e, "Provider reply is not a valid envelope");
            GatewayError::MalformedResponse(format!("invalid reply envelope: {e}"))
        })?;

        let text = envelope
            .first_candidate_text()
            .ok_or(GatewayError::EmptyResponse)?;

        let response = match &request.response_schema {
            Some(schema) => Self::parse_structured(&text, schema)?,
            None => AiResponse::PlainText(Self::clean_text(&text)),
        };

        AppLogger::log_gateway_call(
            &self.model,
            attempts,
            request.response_schema.is_some(),
            started.elapsed(),
        );
        Ok(response)
    }

    /// Perform the HTTP exchange, retrying throttled replies
    ///
    /// Returns the successful reply and the number of attempts it took.
    async fn send_with_retry(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<(TransportReply, u32), GatewayError> {
        let mut retries: u32 = 0;

        loop {
            let reply = self
                .transport
                .generate(&self.model, body)
                .await
                .inspect_err(|e| error!(error = %e, "AI provider request failed"))?;
            let attempts = retries + 1;

            if reply.status == STATUS_TOO_MANY_REQUESTS {
                if retries < self.retry.max_retries {
                    let delay = self.retry.delay_for_retry(retries);
                    warn!(
                        attempt = attempts,
                        max_retries = self.retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "AI provider rate limited (429). Retrying after backoff"
                    );
                    sleep(delay).await;
                    retries += 1;
                    continue;
                }

                let message = GenerateContentResponse::error_message(&reply.body);
                warn!(attempts, "AI provider rate limit persisted; giving up");
                return Err(GatewayError::RateLimited { attempts, message });
            }

            if !(200..300).contains(&reply.status) {
                let message = GenerateContentResponse::error_message(&reply.body);
                error!(status = reply.status, message = %message, "AI provider returned an error");
                return Err(GatewayError::Provider {
                    status: reply.status,
                    message,
                });
            }

            debug!(attempts, "AI provider replied");
            return Ok((reply, attempts));
        }
    }

    /// Parse a structured reply and verify the schema's required keys
    fn parse_structured(text: &str, schema: &ResponseSchema) -> Result<AiResponse, GatewayError> {
        let value: Value = serde_json::from_str(text.trim()).map_err(|e| {
            warn!(error = %e, "Structured reply is not valid JSON");
            GatewayError::MalformedResponse(format!("reply is not valid JSON: {e}"))
        })?;

        let Value::Object(map) = value else {
            return Err(GatewayError::MalformedResponse(
                "reply is not a JSON object".to_owned(),
            ));
        };

        if let Some(missing) = schema
            .required_keys()
            .iter()
            .find(|key| !map.contains_key(key.as_str()))
        {
            warn!(field = %missing, "Structured reply is missing a required field");
            return Err(GatewayError::MalformedResponse(format!(
                "reply is missing required field '{missing}'"
            )));
        }

        Ok(AiResponse::StructuredJson(map))
    }

    /// Remove markdown emphasis markers and surrounding whitespace
    fn clean_text(text: &str) -> String {
        text.replace('*', "").trim().to_owned()
    }
}

impl Debug for AiGateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AiGateway")
            .field("provider", &self.transport.name())
            .field("model", &self.model)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
