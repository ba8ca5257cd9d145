// ABOUTME: Structured replies for the food-image scanner and the recipe generator
// ABOUTME: Field names follow the JSON keys declared in the response schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Verdict returned by the food scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthRating {
    /// Wholesome food
    Healthy,
    /// Processed or calorie-dense food
    #[serde(rename = "Junk Food")]
    JunkFood,
}

impl HealthRating {
    /// Schema enum values, in declaration order
    pub const VALUES: [&'static str; 2] = ["Healthy", "Junk Food"];

    /// Whether the food was rated healthy
    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Nutritional estimate for a photographed dish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodScan {
    /// Name of the identified food
    pub food_name: String,
    /// Estimated calories
    pub calories: String,
    /// Estimated carbohydrates
    pub carbs: String,
    /// Estimated protein
    pub protein: String,
    /// Estimated fats
    pub fats: String,
    /// Healthy or junk verdict
    pub health_rating: HealthRating,
    /// Ordered health tips
    pub tips: Vec<String>,
}

/// Recipe suggested from a list of ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe title
    pub title: String,
    /// Ingredient lines
    pub ingredients_list: Vec<String>,
    /// Step-by-step instructions as a single string
    pub instructions: String,
    /// Why the recipe is healthy
    pub healthy_note: String,
}

impl Recipe {
    /// Split numbered instructions ("1. Chop 2. Fry") into individual steps
    ///
    /// Text without numbering yields a single step.
    #[must_use]
    pub fn instruction_steps(&self) -> Vec<String> {
        split_numbered_steps(&self.instructions)
    }
}

/// Most recently generated recipe with its generation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// The recipe itself
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Human-readable local timestamp of generation
    pub timestamp: String,
}

impl SavedRecipe {
    /// Display format of the generation timestamp, e.g. `3/14/2025, 7:05:09 PM`
    pub const TIMESTAMP_FORMAT: &'static str = "%-m/%-d/%Y, %-I:%M:%S %p";

    /// Stamp a recipe with the current local time
    #[must_use]
    pub fn stamped_now(recipe: Recipe) -> Self {
        Self {
            recipe,
            timestamp: Local::now().format(Self::TIMESTAMP_FORMAT).to_string(),
        }
    }
}

fn split_numbered_steps(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut steps = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        if let Some(marker_len) = numbered_marker_len(&chars[i..]) {
            let preceded_by_boundary = i == 0 || chars[i - 1].is_whitespace();
            if preceded_by_boundary {
                push_step(&mut steps, &current);
                current.clear();
                i += marker_len;
                continue;
            }
        }
        current.push(chars[i]);
        i += 1;
    }
    push_step(&mut steps, &current);
    steps
}

/// Length of a leading `<digits>.<whitespace>` marker
fn numbered_marker_len(chars: &[char]) -> Option<usize> {
    let digits = chars.iter().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    if chars.get(digits) != Some(&'.') {
        return None;
    }
    let spaces = chars[digits + 1..]
        .iter()
        .take_while(|c| c.is_whitespace())
        .count();
    (spaces > 0).then_some(digits + 1 + spaces)
}

fn push_step(steps: &mut Vec<String>, raw: &str) {
    let step = raw.trim();
    if !step.is_empty() {
        steps.push(step.to_owned());
    }
}
