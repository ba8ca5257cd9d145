// ABOUTME: Recipe adapter turning an ingredient list into a structured healthy recipe
// ABOUTME: Persisting the result as the last recipe is done by the owning session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use you360_core::constants::messages;
use you360_core::errors::AdapterError;
use you360_core::models::Recipe;

use super::{require_text, AdviceFeature};
use crate::llm::{AiRequest, AiResponse, ResponseSchema};

/// Recipe generation feature
#[derive(Debug, Clone, Copy)]
pub struct RecipeFeature;

impl RecipeFeature {
    /// Structured reply shape for a recipe
    #[must_use]
    pub fn schema() -> ResponseSchema {
        ResponseSchema::object([
            ("title", ResponseSchema::string()),
            (
                "ingredientsList",
                ResponseSchema::array_of(ResponseSchema::string()),
            ),
            ("instructions", ResponseSchema::string()),
            ("healthyNote", ResponseSchema::string()),
        ])
    }
}

impl AdviceFeature for RecipeFeature {
    const NAME: &'static str = "recipe";
    type Input = String;
    type Output = Recipe;

    fn build_request(input: &String) -> Result<AiRequest, AdapterError> {
        let ingredients = require_text(input, messages::NO_INGREDIENTS)?;
        let prompt = format!(
            "Based on the following ingredients, suggest a healthy and easy-to-make recipe. \
             Provide a short note on why it's healthy. Respond with a JSON object containing \
             the following keys: \"title\", \"ingredientsList\" (an array of strings), \
             \"instructions\" (a single string with step-by-step instructions), and \
             \"healthyNote\". Do not include any other text or markdown.\n\
             Ingredients: {ingredients}"
        );
        Ok(AiRequest::new(prompt).with_schema(Self::schema()))
    }

    fn map_response(_input: &String, response: AiResponse) -> Result<Recipe, AdapterError> {
        Ok(response.into_structured()?)
    }
}
