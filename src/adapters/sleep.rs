// ABOUTME: Sleep card adapter pairing the deep/light breakdown with an AI sleep analysis
// ABOUTME: The breakdown is computed locally; only the narrative comes from the model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use you360_core::constants::messages;
use you360_core::errors::AdapterError;
use you360_intelligence::SleepBreakdown;

use super::AdviceFeature;
use crate::llm::{AiRequest, AiResponse};

/// Sleep analysis display model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepReport {
    /// Hours slept
    pub hours: f64,
    /// Estimated deep sleep
    pub deep_hours: f64,
    /// Estimated light sleep
    pub light_hours: f64,
    /// Whether the night fell short of eight hours
    pub below_recommended: bool,
    /// Model's analysis with tips
    pub analysis: String,
}

/// Sleep analysis feature
#[derive(Debug, Clone, Copy)]
pub struct SleepAnalysisFeature;

impl AdviceFeature for SleepAnalysisFeature {
    const NAME: &'static str = "sleep";
    type Input = f64;
    type Output = SleepReport;

    fn build_request(input: &f64) -> Result<AiRequest, AdapterError> {
        let hours = *input;
        if !hours.is_finite() || hours < 0.0 {
            return Err(AdapterError::validation(messages::INVALID_SLEEP_HOURS));
        }
        Ok(AiRequest::new(format!(
            "I slept {hours} hours. Give a concise sleep analysis with 2 tips and whether it's below or above 8 hours."
        )))
    }

    fn map_response(input: &f64, response: AiResponse) -> Result<SleepReport, AdapterError> {
        let breakdown = SleepBreakdown::from_hours(*input);
        Ok(SleepReport {
            hours: breakdown.hours,
            deep_hours: breakdown.deep_hours,
            light_hours: breakdown.light_hours,
            below_recommended: breakdown.below_recommended(),
            analysis: response.into_text()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_hours_are_rejected() {
        assert!(matches!(
            SleepAnalysisFeature::build_request(&-1.0),
            Err(AdapterError::Validation(_))
        ));
        assert!(SleepAnalysisFeature::build_request(&f64::NAN).is_err());
    }

    #[test]
    fn test_report_includes_breakdown() {
        let report = SleepAnalysisFeature::map_response(
            &7.0,
            AiResponse::PlainText("Good night".to_owned()),
        )
        .unwrap();
        assert!((report.deep_hours - 1.5).abs() < f64::EPSILON);
        assert!((report.light_hours - 5.5).abs() < f64::EPSILON);
        assert!(report.below_recommended);
    }
}
