// ABOUTME: Diet card adapter estimating the post-meal blood sugar impact of a meal
// ABOUTME: Pairs the model's advice with a simulated post-meal glucose reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use you360_core::constants::messages;
use you360_core::errors::AdapterError;
use you360_intelligence::GlucoseEstimator;

use super::{require_text, AdviceFeature};
use crate::llm::{AiRequest, AiResponse};

/// Blood sugar estimate display model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SugarEstimate {
    /// Foods as entered
    pub food: String,
    /// Model's impact estimate and mitigation tips
    pub advice: String,
    /// Simulated post-meal reading in mg/dL
    pub estimated_reading: f64,
}

/// Blood sugar estimate feature
#[derive(Debug, Clone, Copy)]
pub struct SugarEstimateFeature;

impl AdviceFeature for SugarEstimateFeature {
    const NAME: &'static str = "diet";
    type Input = String;
    type Output = SugarEstimate;

    fn build_request(input: &String) -> Result<AiRequest, AdapterError> {
        let food = require_text(input, messages::FOOD_REQUIRED)?;
        Ok(AiRequest::new(format!(
            "I ate: {food}. Estimate post-meal blood sugar impact for a non-diabetic adult, add quick mitigation tips."
        )))
    }

    fn map_response(input: &String, response: AiResponse) -> Result<SugarEstimate, AdapterError> {
        Ok(SugarEstimate {
            food: input.trim().to_owned(),
            advice: response.into_text()?,
            estimated_reading: GlucoseEstimator::post_meal_reading(),
        })
    }
}
