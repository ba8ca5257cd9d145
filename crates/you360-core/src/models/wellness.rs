// ABOUTME: Wellness sample inputs and the bounded 0-100 wellness score
// ABOUTME: Samples are transient and recomputed on every dashboard interaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::wellness::{
    DEFAULT_GLUCOSE_READING, DEFAULT_SLEEP_HOURS, MAX_SCORE, MIN_SCORE,
};

/// Inputs to the wellness score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellnessSample {
    /// Hours slept last night
    pub sleep_hours: f64,
    /// Steps recorded today
    pub steps_today: u64,
    /// Latest blood glucose reading in mg/dL
    pub glucose_reading: f64,
}

impl WellnessSample {
    /// Create a sample, clamping negative or non-finite readings to zero
    #[must_use]
    pub fn new(sleep_hours: f64, steps_today: u64, glucose_reading: f64) -> Self {
        Self {
            sleep_hours: non_negative(sleep_hours),
            steps_today,
            glucose_reading: non_negative(glucose_reading),
        }
    }
}

impl Default for WellnessSample {
    fn default() -> Self {
        Self::new(DEFAULT_SLEEP_HOURS, 0, DEFAULT_GLUCOSE_READING)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Wellness score, always within `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WellnessScore(u8);

impl WellnessScore {
    /// Build a score, saturating at the upper bound
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_SCORE, MAX_SCORE))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for WellnessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
