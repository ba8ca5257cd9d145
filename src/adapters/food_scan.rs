// ABOUTME: Food scanner adapter sending a meal photo and requesting structured nutrition facts
// ABOUTME: Rejects missing or non-image uploads before any network call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use you360_core::constants::messages;
use you360_core::errors::AdapterError;
use you360_core::models::{FoodScan, HealthRating};

use super::AdviceFeature;
use crate::llm::{AiRequest, AiResponse, ImagePayload, ResponseSchema};

const SCAN_PROMPT: &str = "What is this food and what is its nutritional value? Please provide estimated values for calories, carbs, protein, and fat. Also, state whether it is a healthy food or junk food, and give some additional health tips.";

/// Food image scan feature
#[derive(Debug, Clone, Copy)]
pub struct FoodScanFeature;

impl FoodScanFeature {
    /// Structured reply shape for a scan
    #[must_use]
    pub fn schema() -> ResponseSchema {
        ResponseSchema::object([
            ("foodName", ResponseSchema::string()),
            ("calories", ResponseSchema::string()),
            ("carbs", ResponseSchema::string()),
            ("protein", ResponseSchema::string()),
            ("fats", ResponseSchema::string()),
            ("healthRating", ResponseSchema::string_enum(&HealthRating::VALUES)),
            ("tips", ResponseSchema::array_of(ResponseSchema::string())),
        ])
    }
}

impl AdviceFeature for FoodScanFeature {
    const NAME: &'static str = "food_scan";
    type Input = ImagePayload;
    type Output = FoodScan;

    fn build_request(input: &ImagePayload) -> Result<AiRequest, AdapterError> {
        if input.bytes.is_empty() {
            return Err(AdapterError::validation(messages::NO_IMAGE_SELECTED));
        }
        if !input.is_image() {
            return Err(AdapterError::validation(messages::UNSUPPORTED_IMAGE));
        }
        Ok(AiRequest::new(SCAN_PROMPT)
            .with_image(input.clone())
            .with_schema(Self::schema()))
    }

    fn map_response(_input: &ImagePayload, response: AiResponse) -> Result<FoodScan, AdapterError> {
        Ok(response.into_structured()?)
    }
}
