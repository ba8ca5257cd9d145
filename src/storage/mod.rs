// ABOUTME: Persistence for the most recently generated recipe
// ABOUTME: File-backed store for real use and an in-memory store for tests and ephemeral sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Storage
//!
//! The dashboard keeps exactly one persisted value: the last generated recipe
//! with its timestamp, stored under the fixed `lastRecipe` key so it survives
//! across sessions.

mod file;
mod memory;

pub use file::FileRecipeStore;
pub use memory::InMemoryRecipeStore;

use async_trait::async_trait;
use you360_core::errors::AppResult;
use you360_core::models::SavedRecipe;

/// Storage for the last generated recipe
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Load the last recipe; `None` when nothing usable is stored
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backing store cannot be read at all
    async fn load_last(&self) -> AppResult<Option<SavedRecipe>>;

    /// Replace the last recipe
    ///
    /// # Errors
    ///
    /// Returns a storage error when the recipe cannot be written
    async fn save_last(&self, recipe: &SavedRecipe) -> AppResult<()>;
}
