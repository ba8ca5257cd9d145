// ABOUTME: Mood card adapter producing a one-line supportive tip for the selected mood
// ABOUTME: Accepts any non-blank mood, typically one of the fifteen emoji presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use you360_core::constants::messages;
use you360_core::errors::AdapterError;

use super::{require_text, AdviceFeature};
use crate::llm::{AiRequest, AiResponse};

/// Tip shown after a mood is picked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodTip {
    /// Mood the tip responds to
    pub mood: String,
    /// One-line tip
    pub tip: String,
}

/// Mood tip feature
#[derive(Debug, Clone, Copy)]
pub struct MoodTipFeature;

impl AdviceFeature for MoodTipFeature {
    const NAME: &'static str = "mood";
    type Input = String;
    type Output = MoodTip;

    fn build_request(input: &String) -> Result<AiRequest, AdapterError> {
        let mood = require_text(input, messages::MOOD_REQUIRED)?;
        Ok(AiRequest::new(format!(
            "User selected mood {mood}. Provide a one-line supportive wellness tip (max 20 words)."
        )))
    }

    fn map_response(input: &String, response: AiResponse) -> Result<MoodTip, AdapterError> {
        Ok(MoodTip {
            mood: input.trim().to_owned(),
            tip: response.into_text()?,
        })
    }
}
