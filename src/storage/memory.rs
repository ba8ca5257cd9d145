// ABOUTME: In-memory recipe store for tests and sessions that should not touch disk
// ABOUTME: Keeps the last recipe behind an async RwLock for the lifetime of the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tokio::sync::RwLock;
use you360_core::errors::AppResult;
use you360_core::models::SavedRecipe;

use super::RecipeStore;

/// Recipe store held in process memory
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    last: RwLock<Option<SavedRecipe>>,
}

impl InMemoryRecipeStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn load_last(&self) -> AppResult<Option<SavedRecipe>> {
        Ok(self.last.read().await.clone())
    }

    async fn save_last(&self, recipe: &SavedRecipe) -> AppResult<()> {
        *self.last.write().await = Some(recipe.clone());
        Ok(())
    }
}
