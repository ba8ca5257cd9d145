// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for you360-cli
// ABOUTME: Renders dashboard cards, food scans, and recipes as plain text

use you360_core::models::{FoodScan, SavedRecipe};

const RULE_WIDTH: usize = 60;

/// Print a titled card
pub fn print_card(title: &str, body: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{body}");
}

/// Print a display-area failure message
pub fn print_failure(message: &str) {
    eprintln!("Error: {message}");
}

/// Print a food scan result
pub fn print_food_scan(scan: &FoodScan) {
    let rating = if scan.health_rating.is_healthy() {
        "Healthy"
    } else {
        "Junk Food"
    };
    let mut body = format!(
        "Calories: {}\nCarbs: {}\nProtein: {}\nFats: {}\nHealth rating: {rating}\n",
        scan.calories, scan.carbs, scan.protein, scan.fats
    );
    for tip in &scan.tips {
        body.push_str(&format!("\n- {tip}"));
    }
    print_card(&scan.food_name, &body);
}

/// Print a saved recipe with numbered steps
pub fn print_recipe(saved: &SavedRecipe) {
    let recipe = &saved.recipe;
    let mut body = format!("Saved: {}\n\nIngredients:\n", saved.timestamp);
    for ingredient in &recipe.ingredients_list {
        body.push_str(&format!("- {ingredient}\n"));
    }
    body.push('\n');
    for (index, step) in recipe.instruction_steps().iter().enumerate() {
        body.push_str(&format!("{}. {step}\n", index + 1));
    }
    body.push_str(&format!("\n{}", recipe.healthy_note));
    print_card(&recipe.title, &body);
}
