// ABOUTME: Tests for last-recipe persistence in the file and in-memory stores
// ABOUTME: Uses temporary directories so runs never touch the real data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tempfile::TempDir;
use you360::storage::{FileRecipeStore, InMemoryRecipeStore, RecipeStore};
use you360_core::models::{Recipe, SavedRecipe};

fn saved(title: &str) -> SavedRecipe {
    SavedRecipe::stamped_now(Recipe {
        title: title.to_owned(),
        ingredients_list: vec!["2 eggs".to_owned(), "1 tomato".to_owned()],
        instructions: "1. Whisk the eggs. 2. Cook with tomato.".to_owned(),
        healthy_note: "High in protein.".to_owned(),
    })
}

#[tokio::test]
async fn test_file_store_is_empty_before_first_save() {
    let dir = TempDir::new().unwrap();
    let store = FileRecipeStore::new(dir.path());

    assert_eq!(store.load_last().await.unwrap(), None);
}

#[tokio::test]
async fn test_file_store_round_trips_last_recipe() {
    let dir = TempDir::new().unwrap();
    let store = FileRecipeStore::new(dir.path());
    let recipe = saved("Tomato Eggs");

    store.save_last(&recipe).await.unwrap();

    assert!(store.path().ends_with("lastRecipe.json"));
    assert_eq!(store.load_last().await.unwrap(), Some(recipe));
}

#[tokio::test]
async fn test_file_store_keeps_only_latest() {
    let dir = TempDir::new().unwrap();
    let store = FileRecipeStore::new(dir.path());

    store.save_last(&saved("First")).await.unwrap();
    store.save_last(&saved("Second")).await.unwrap();

    let loaded = store.load_last().await.unwrap().unwrap();
    assert_eq!(loaded.recipe.title, "Second");
}

#[tokio::test]
async fn test_file_store_survives_new_instance() {
    let dir = TempDir::new().unwrap();
    FileRecipeStore::new(dir.path())
        .save_last(&saved("Persisted"))
        .await
        .unwrap();

    let reopened = FileRecipeStore::new(dir.path());
    assert_eq!(
        reopened.load_last().await.unwrap().unwrap().recipe.title,
        "Persisted"
    );
}

#[tokio::test]
async fn test_file_store_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let store = FileRecipeStore::new(dir.path().join("nested").join("data"));

    store.save_last(&saved("Nested")).await.unwrap();

    assert!(store.path().exists());
}

#[tokio::test]
async fn test_corrupt_file_is_treated_as_absent() {
    let dir = TempDir::new().unwrap();
    let store = FileRecipeStore::new(dir.path());
    tokio::fs::write(store.path(), "{ not json").await.unwrap();

    assert_eq!(store.load_last().await.unwrap(), None);
}

#[tokio::test]
async fn test_saved_file_uses_display_field_names() {
    let dir = TempDir::new().unwrap();
    let store = FileRecipeStore::new(dir.path());
    store.save_last(&saved("Keys")).await.unwrap();

    let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["title"], "Keys");
    assert!(json["ingredientsList"].is_array());
    assert!(json["healthyNote"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_all_succeed() {
    let dir = TempDir::new().unwrap();
    let titles = ["Oat Bowl", "Lentil Soup", "Tofu Stir Fry", "Chickpea Salad"];

    for _ in 0..25 {
        let saves: Vec<_> = titles
            .iter()
            .map(|title| {
                let store = FileRecipeStore::new(dir.path());
                let recipe = saved(title);
                tokio::spawn(async move { store.save_last(&recipe).await })
            })
            .collect();

        for save in saves {
            save.await.unwrap().unwrap();
        }

        let last = FileRecipeStore::new(dir.path())
            .load_last()
            .await
            .unwrap()
            .unwrap();
        assert!(titles.contains(&last.recipe.title.as_str()));
    }

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[tokio::test]
async fn test_memory_store_replaces_last_recipe() {
    let store = InMemoryRecipeStore::new();
    assert_eq!(store.load_last().await.unwrap(), None);

    store.save_last(&saved("One")).await.unwrap();
    store.save_last(&saved("Two")).await.unwrap();

    assert_eq!(
        store.load_last().await.unwrap().unwrap().recipe.title,
        "Two"
    );
}
