// ABOUTME: Steps card adapter converting a walked distance into steps plus a motivational line
// ABOUTME: Conversion and the daily ratchet are local; the model only supplies the message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use you360_core::constants::messages;
use you360_core::errors::AdapterError;
use you360_intelligence::Distance;

use super::AdviceFeature;
use crate::llm::{AiRequest, AiResponse};

/// Step conversion display model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    /// Distance as entered
    pub distance: Distance,
    /// Distance in meters
    pub meters: f64,
    /// Steps for this distance
    pub steps: u64,
    /// Daily total after the ratchet
    pub steps_today: u64,
    /// Motivational line
    pub message: String,
}

/// Motivational message for a converted distance
#[derive(Debug, Clone, Copy)]
pub struct StepMotivationFeature;

impl StepMotivationFeature {
    /// Reject negative or non-finite distances
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Validation` for unusable input
    pub fn validate(distance: &Distance) -> Result<(), AdapterError> {
        if distance.value.is_finite() && distance.value >= 0.0 {
            Ok(())
        } else {
            Err(AdapterError::validation(messages::INVALID_DISTANCE))
        }
    }
}

impl AdviceFeature for StepMotivationFeature {
    const NAME: &'static str = "steps";
    type Input = Distance;
    type Output = String;

    fn build_request(input: &Distance) -> Result<AiRequest, AdapterError> {
        Self::validate(input)?;
        Ok(AiRequest::new(format!(
            "I walked {} {}. Convert to steps (assume 0.78m per step) then give one motivational line.",
            input.value, input.unit
        )))
    }

    fn map_response(_input: &Distance, response: AiResponse) -> Result<String, AdapterError> {
        Ok(response.into_text()?)
    }
}
