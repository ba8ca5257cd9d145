// ABOUTME: Food scanner and recipe commands for you360-cli
// ABOUTME: Reads meal photos from disk and prints saved recipes with numbered steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::{Context, Result};
use you360::adapters::Presentation;
use you360::llm::ImagePayload;
use you360::session::DashboardSession;

use crate::helpers::display::{print_failure, print_food_scan, print_recipe};

/// MIME type for an image path, judged by extension
fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

pub async fn scan(session: &DashboardSession, path: &Path) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let image = ImagePayload::new(mime_for_path(path), bytes);
    match Presentation::from_result(session.scan_food(&image).await) {
        Presentation::Ready { data } => print_food_scan(&data),
        Presentation::Failed { message } => print_failure(&message),
    }
    Ok(())
}

pub async fn recipe(session: &DashboardSession, ingredients: &str) {
    match Presentation::from_result(session.generate_recipe(ingredients).await) {
        Presentation::Ready { data } => print_recipe(&data),
        Presentation::Failed { message } => print_failure(&message),
    }
}

pub async fn last_recipe(session: &DashboardSession) -> Result<()> {
    match session.last_recipe().await? {
        Some(saved) => print_recipe(&saved),
        None => println!("No recipe saved yet."),
    }
    Ok(())
}
