// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted AI transport, reply builders, and session constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `you360`
//!
//! Gateway-facing tests never open a socket: [`ScriptedTransport`] hands out
//! canned replies in order and records every request body it receives.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;
use you360::config::RetryConfig;
use you360::errors::GatewayError;
use you360::llm::{AiGateway, GenerateContentRequest, GenerativeTransport, TransportReply};
use you360::session::DashboardSession;
use you360::storage::{InMemoryRecipeStore, RecipeStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Scripted transport
// ============================================================================

/// Transport returning queued replies in order
///
/// When the queue runs dry every further call answers HTTP 500. With a
/// release handle installed, each call waits for one `notify_one` before
/// replying so tests can observe an in-flight request.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<TransportReply>>,
    requests: Mutex<Vec<Value>>,
    calls: AtomicUsize,
    credential: bool,
    release: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    /// Transport with a credential and the given replies
    pub fn new(replies: impl IntoIterator<Item = TransportReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            credential: true,
            release: None,
        })
    }

    /// Transport with a credential and no replies queued
    pub fn idle() -> Arc<Self> {
        Self::new(Vec::<TransportReply>::new())
    }

    /// Transport without a credential
    pub fn without_credential() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            credential: false,
            release: None,
        })
    }

    /// Transport whose calls block until `release` is notified
    pub fn held(
        replies: impl IntoIterator<Item = TransportReply>,
        release: Arc<Notify>,
    ) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            credential: true,
            release: Some(release),
        })
    }

    /// Number of `generate` calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Request bodies received, as JSON
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// Most recent request body
    pub fn last_request(&self) -> Value {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl GenerativeTransport for ScriptedTransport {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn generate(
        &self,
        _model: &str,
        request: &GenerateContentRequest,
    ) -> Result<TransportReply, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());

        if let Some(release) = &self.release {
            release.notified().await;
        }

        let reply = self.replies.lock().unwrap().pop_front();
        Ok(reply.unwrap_or_else(|| TransportReply::new(500, "no scripted reply")))
    }
}

// ============================================================================
// Reply builders
// ============================================================================

/// Successful reply carrying `text` as the first candidate
pub fn text_reply(text: &str) -> TransportReply {
    let body = json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    });
    TransportReply::new(200, body.to_string())
}

/// Successful reply whose text is the serialized `value`
pub fn json_reply(value: &Value) -> TransportReply {
    text_reply(&value.to_string())
}

/// HTTP 429 reply
pub fn rate_limited_reply() -> TransportReply {
    TransportReply::new(
        429,
        json!({ "error": { "code": 429, "message": "Resource has been exhausted" } }).to_string(),
    )
}

/// Valid food scan payload
pub fn food_scan_json() -> Value {
    json!({
        "foodName": "Grilled salmon bowl",
        "calories": "520 kcal",
        "carbs": "45 g",
        "protein": "38 g",
        "fats": "18 g",
        "healthRating": "Healthy",
        "tips": ["Add leafy greens", "Go easy on the sauce"]
    })
}

/// Valid recipe payload
pub fn recipe_json() -> Value {
    json!({
        "title": "Spinach Chicken Rice",
        "ingredientsList": ["1 chicken breast", "2 cups spinach", "1 cup rice"],
        "instructions": "1. Cook the rice. 2. Sear the chicken. 3. Wilt the spinach and serve.",
        "healthyNote": "Lean protein with iron-rich greens."
    })
}

// ============================================================================
// Constructors
// ============================================================================

/// Gateway over `transport` with five retries and no backoff delay
pub fn gateway(transport: &Arc<ScriptedTransport>) -> AiGateway {
    let transport: Arc<dyn GenerativeTransport> = transport.clone();
    AiGateway::new(transport, "test-model", RetryConfig::new(5, 0))
}

/// Session over `transport` with an in-memory recipe store
pub fn session(transport: &Arc<ScriptedTransport>) -> DashboardSession {
    init_test_logging();
    let store: Arc<dyn RecipeStore> = Arc::new(InMemoryRecipeStore::new());
    DashboardSession::new(&gateway(transport), store)
}

/// Session plus a handle on its recipe store
pub fn session_with_store(
    transport: &Arc<ScriptedTransport>,
) -> (DashboardSession, Arc<InMemoryRecipeStore>) {
    init_test_logging();
    let store = Arc::new(InMemoryRecipeStore::new());
    let dyn_store: Arc<dyn RecipeStore> = store.clone();
    (DashboardSession::new(&gateway(transport), dyn_store), store)
}
