// ABOUTME: Wellness score engine mapping sleep, steps, and glucose onto a 0-100 scale
// ABOUTME: Deterministic and total; every sample yields a score without failure modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Wellness Score Engine
//!
//! ```text
//! score = 55
//!       + min(steps / 120, 20)
//!       + min(max(sleep - 6, 0) * 4, 20)
//!       - max(glucose - 120, 0) / 5
//! ```
//!
//! The result is rounded to the nearest integer and clamped to `[0, 100]`.
//! The score never decreases with more steps or more sleep above six hours,
//! and never increases with a higher glucose reading above 120 mg/dL.

use serde::{Deserialize, Serialize};
use you360_core::constants::wellness::{
    BASE_SCORE, GLUCOSE_PER_PENALTY_POINT, GLUCOSE_THRESHOLD, MAX_SCORE, MAX_SLEEP_BONUS,
    MAX_STEP_BONUS, MIN_SCORE, SLEEP_BASELINE_HOURS, SLEEP_POINTS_PER_HOUR, STEPS_PER_POINT,
};
use you360_core::models::{WellnessSample, WellnessScore};

/// Per-component contributions to a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellnessScoreBreakdown {
    /// Starting score
    pub base: f64,
    /// Bonus earned from steps (0-20)
    pub step_bonus: f64,
    /// Bonus earned from sleep above six hours (0-20)
    pub sleep_bonus: f64,
    /// Penalty for glucose above 120 mg/dL (>= 0)
    pub glucose_penalty: f64,
    /// Final rounded and clamped score
    pub score: WellnessScore,
}

/// Wellness score calculator
pub struct WellnessScorer;

impl WellnessScorer {
    /// Compute the wellness score for a sample
    #[must_use]
    pub fn compute(sample: &WellnessSample) -> WellnessScore {
        Self::breakdown(sample).score
    }

    /// Compute the score along with each component's contribution
    #[must_use]
    pub fn breakdown(sample: &WellnessSample) -> WellnessScoreBreakdown {
        let step_bonus = Self::step_bonus(sample.steps_today);
        let sleep_bonus = Self::sleep_bonus(sample.sleep_hours);
        let glucose_penalty = Self::glucose_penalty(sample.glucose_reading);

        let raw = BASE_SCORE + step_bonus + sleep_bonus - glucose_penalty;
        let clamped = raw
            .round()
            .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));

        WellnessScoreBreakdown {
            base: BASE_SCORE,
            step_bonus,
            sleep_bonus,
            glucose_penalty,
            score: WellnessScore::new(clamped as u8),
        }
    }

    /// Step bonus, saturating at +20
    #[must_use]
    pub fn step_bonus(steps_today: u64) -> f64 {
        (steps_today as f64 / STEPS_PER_POINT).min(MAX_STEP_BONUS)
    }

    /// Sleep bonus for hours above the baseline, saturating at +20 and never negative
    #[must_use]
    pub fn sleep_bonus(sleep_hours: f64) -> f64 {
        let extra = if sleep_hours.is_finite() {
            (sleep_hours - SLEEP_BASELINE_HOURS).max(0.0)
        } else {
            0.0
        };
        (extra * SLEEP_POINTS_PER_HOUR).min(MAX_SLEEP_BONUS)
    }

    /// Penalty for glucose above the threshold
    #[must_use]
    pub fn glucose_penalty(glucose_reading: f64) -> f64 {
        if !glucose_reading.is_finite() {
            return 0.0;
        }
        (glucose_reading - GLUCOSE_THRESHOLD).max(0.0) / GLUCOSE_PER_PENALTY_POINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_components() {
        let breakdown = WellnessScorer::breakdown(&WellnessSample::new(8.0, 1200, 130.0));
        assert!((breakdown.step_bonus - 10.0).abs() < f64::EPSILON);
        assert!((breakdown.sleep_bonus - 8.0).abs() < f64::EPSILON);
        assert!((breakdown.glucose_penalty - 2.0).abs() < f64::EPSILON);
        assert_eq!(breakdown.score.value(), 71);
    }
}
