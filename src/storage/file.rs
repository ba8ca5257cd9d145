// ABOUTME: File-backed recipe store writing lastRecipe.json into the data directory
// ABOUTME: Missing or corrupt files read as no recipe; each write goes through its own temp file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;
use you360_core::constants::storage_keys::LAST_RECIPE;
use you360_core::errors::{AppError, AppResult};
use you360_core::models::SavedRecipe;

use super::RecipeStore;
use crate::logging::AppLogger;

/// Recipe store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileRecipeStore {
    path: PathBuf,
}

impl FileRecipeStore {
    /// Store `lastRecipe.json` inside `data_dir`
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{LAST_RECIPE}.json")),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecipeStore for FileRecipeStore {
    async fn load_last(&self) -> AppResult<Option<SavedRecipe>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                AppLogger::log_storage_error("load", LAST_RECIPE, &e.to_string());
                return Err(AppError::storage(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        match serde_json::from_str(&contents) {
            Ok(recipe) => Ok(Some(recipe)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable saved recipe");
                Ok(None)
            }
        }
    }

    async fn save_last(&self, recipe: &SavedRecipe) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppLogger::log_storage_error("save", LAST_RECIPE, &e.to_string());
                AppError::storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(recipe)?;
        let tmp_path = self
            .path
            .with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
        fs::write(&tmp_path, json).await.map_err(|e| {
            AppLogger::log_storage_error("save", LAST_RECIPE, &e.to_string());
            AppError::storage(format!("Failed to write {}: {e}", tmp_path.display()))
        })?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            AppLogger::log_storage_error("save", LAST_RECIPE, &e.to_string());
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                debug!(path = %tmp_path.display(), error = %cleanup, "Could not remove temp file");
            }
            return Err(AppError::storage(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            )));
        }

        debug!(path = %self.path.display(), title = %recipe.recipe.title, "Saved last recipe");
        Ok(())
    }
}
