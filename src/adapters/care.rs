// ABOUTME: Hair, skin, and exercise adapters returning concise free-text care plans
// ABOUTME: Hair needs a described issue; skin type and exercise mode are closed choices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use you360_core::constants::messages;
use you360_core::errors::AdapterError;

use super::{require_text, AdviceFeature};
use crate::llm::{AiRequest, AiResponse};

/// Free-text advice for a care card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareAdvice {
    /// What the advice is about (issue, skin type, or plan type)
    pub topic: String,
    /// Model's advice
    pub advice: String,
}

// ============================================================================
// Hair
// ============================================================================

/// Hair care feature
#[derive(Debug, Clone, Copy)]
pub struct HairCareFeature;

impl AdviceFeature for HairCareFeature {
    const NAME: &'static str = "hair";
    type Input = String;
    type Output = CareAdvice;

    fn build_request(input: &String) -> Result<AiRequest, AdapterError> {
        let issue = require_text(input, messages::HAIR_ISSUE_REQUIRED)?;
        Ok(AiRequest::new(format!(
            "User says: {issue}. Provide a concise hair care routine (3 steps), two dietary recommendations, and one quick home remedy. Keep it short, do not ask follow-up questions."
        )))
    }

    fn map_response(input: &String, response: AiResponse) -> Result<CareAdvice, AdapterError> {
        Ok(CareAdvice {
            topic: input.trim().to_owned(),
            advice: response.into_text()?,
        })
    }
}

// ============================================================================
// Skin
// ============================================================================

/// Skin types offered by the skin card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkinType {
    /// Dry skin
    #[default]
    Dry,
    /// Oily skin
    Oily,
    /// Combination skin
    Combination,
}

impl SkinType {
    /// Label used in prompts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Oily => "Oily",
            Self::Combination => "Combination",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dry" => Ok(Self::Dry),
            "oily" => Ok(Self::Oily),
            "combination" => Ok(Self::Combination),
            other => Err(format!("unknown skin type: {other}")),
        }
    }
}

/// Skin care feature
#[derive(Debug, Clone, Copy)]
pub struct SkinCareFeature;

impl AdviceFeature for SkinCareFeature {
    const NAME: &'static str = "skin";
    type Input = SkinType;
    type Output = CareAdvice;

    fn build_request(input: &SkinType) -> Result<AiRequest, AdapterError> {
        Ok(AiRequest::new(format!(
            "Skin type is {input}. Suggest a minimal AM/PM routine for Indian climate with product actives (generic). Keep it concise."
        )))
    }

    fn map_response(input: &SkinType, response: AiResponse) -> Result<CareAdvice, AdapterError> {
        Ok(CareAdvice {
            topic: input.as_str().to_owned(),
            advice: response.into_text()?,
        })
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// Where the workout plan is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseMode {
    /// Bodyweight plan at home
    #[default]
    Home,
    /// Push/pull/legs plan at the gym
    Gym,
}

impl ExerciseMode {
    /// Label used in display models
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Gym => "gym",
        }
    }

    const fn plan_request(self) -> &'static str {
        match self {
            Self::Home => "Create a 3-day home bodyweight plan.",
            Self::Gym => "Create a 3-day gym push/pull/legs plan.",
        }
    }
}

impl FromStr for ExerciseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "gym" => Ok(Self::Gym),
            other => Err(format!("unknown exercise mode: {other}")),
        }
    }
}

/// Exercise plan feature
#[derive(Debug, Clone, Copy)]
pub struct ExercisePlanFeature;

impl AdviceFeature for ExercisePlanFeature {
    const NAME: &'static str = "exercise";
    type Input = ExerciseMode;
    type Output = CareAdvice;

    fn build_request(input: &ExerciseMode) -> Result<AiRequest, AdapterError> {
        Ok(AiRequest::new(format!(
            "{} Include sets/reps and warm-up. Keep concise.",
            input.plan_request()
        )))
    }

    fn map_response(input: &ExerciseMode, response: AiResponse) -> Result<CareAdvice, AdapterError> {
        Ok(CareAdvice {
            topic: input.as_str().to_owned(),
            advice: response.into_text()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_hair_issue_is_rejected_with_guidance() {
        let error = HairCareFeature::build_request(&"   ".to_owned()).unwrap_err();
        assert_eq!(error.user_message(), messages::HAIR_ISSUE_REQUIRED);
    }

    #[test]
    fn test_exercise_prompt_matches_mode() {
        let request = ExercisePlanFeature::build_request(&ExerciseMode::Gym).unwrap();
        assert!(request.prompt.starts_with("Create a 3-day gym push/pull/legs plan."));
        assert!(request.prompt.ends_with("Keep concise."));
    }

    #[test]
    fn test_skin_type_parses_case_insensitively() {
        assert_eq!("OILY".parse::<SkinType>().unwrap(), SkinType::Oily);
        assert!("scaly".parse::<SkinType>().is_err());
    }
}
