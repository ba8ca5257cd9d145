// ABOUTME: Shared server resources handed to every route: gateway, auth client, store, sessions
// ABOUTME: Sessions live in a concurrent map, bounded by an idle lifetime and a count cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;
use you360_core::errors::{AppError, AppResult};

use crate::auth::AuthClient;
use crate::config::{AppConfig, ServerConfig};
use crate::llm::AiGateway;
use crate::session::DashboardSession;
use crate::storage::{FileRecipeStore, RecipeStore};

/// Dependencies and live sessions shared by the HTTP routes
pub struct ServerResources {
    /// Gateway cloned into each new session's adapters
    pub gateway: AiGateway,
    /// Auth service client
    pub auth_client: AuthClient,
    /// Store for the last generated recipe
    pub recipe_store: Arc<dyn RecipeStore>,
    /// Bind, CORS, upload and session limits
    pub server_config: ServerConfig,
    sessions: DashMap<Uuid, SessionEntry>,
    access_clock: AtomicU64,
}

struct SessionEntry {
    session: Arc<DashboardSession>,
    last_seen: Instant,
    /// Monotonic access stamp; the lowest value is the least recently used
    stamp: u64,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        gateway: AiGateway,
        auth_client: AuthClient,
        recipe_store: Arc<dyn RecipeStore>,
        server_config: ServerConfig,
    ) -> Self {
        Self {
            gateway,
            auth_client,
            recipe_store,
            server_config,
            sessions: DashMap::new(),
            access_clock: AtomicU64::new(0),
        }
    }

    /// Assemble resources from configuration
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            AiGateway::from_config(&config.llm),
            AuthClient::from_config(&config.auth),
            Arc::new(FileRecipeStore::new(&config.storage.data_dir)),
            config.server.clone(),
        )
    }

    fn next_stamp(&self) -> u64 {
        self.access_clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Open a new dashboard session
    ///
    /// Idle sessions are swept first. If the map is still at
    /// `max_sessions`, the least recently used session is closed.
    pub fn create_session(&self) -> Arc<DashboardSession> {
        self.evict_idle_sessions();
        while self.sessions.len() >= self.server_config.max_sessions {
            if !self.evict_least_recent() {
                break;
            }
        }

        let session = Arc::new(DashboardSession::new(
            &self.gateway,
            Arc::clone(&self.recipe_store),
        ));
        self.sessions.insert(
            session.id(),
            SessionEntry {
                session: Arc::clone(&session),
                last_seen: Instant::now(),
                stamp: self.next_stamp(),
            },
        );
        info!(session = %session.id(), active = self.sessions.len(), "Opened dashboard session");
        session
    }

    /// Look up a session and mark it as used
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub fn session(&self, id: Uuid) -> AppResult<Arc<DashboardSession>> {
        let stamp = self.next_stamp();
        self.sessions
            .get_mut(&id)
            .map(|mut entry| {
                entry.last_seen = Instant::now();
                entry.stamp = stamp;
                Arc::clone(&entry.session)
            })
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))
    }

    /// Close every session unused for longer than the idle lifetime
    ///
    /// Returns the number of sessions closed.
    pub fn evict_idle_sessions(&self) -> usize {
        let ttl = self.server_config.session_idle_ttl();
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| entry.last_seen.elapsed() < ttl);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            info!(evicted, active = self.sessions.len(), "Closed idle dashboard sessions");
        }
        evicted
    }

    fn evict_least_recent(&self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.stamp)
            .map(|entry| *entry.key());
        let Some(id) = oldest else {
            return false;
        };
        let removed = self.sessions.remove(&id).is_some();
        if removed {
            debug!(session = %id, "Closed least recently used dashboard session");
        }
        removed
    }

    /// Close a session; returns whether it existed
    pub fn close_session(&self, id: Uuid) -> bool {
        let removed = self.sessions.remove(&id).is_some();
        if removed {
            info!(session = %id, "Closed dashboard session");
        }
        removed
    }

    /// Number of open sessions
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
