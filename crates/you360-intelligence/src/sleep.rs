// ABOUTME: Splits a night's sleep into deep and light portions for the sleep card
// ABOUTME: Deep sleep is a fixed 22% share; both values are rounded to one decimal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use you360_core::constants::wellness::{DEEP_SLEEP_FRACTION, RECOMMENDED_SLEEP_HOURS};

/// Descriptive deep/light split of total sleep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepBreakdown {
    /// Total hours slept
    pub hours: f64,
    /// Estimated deep sleep, one decimal
    pub deep_hours: f64,
    /// Remaining light sleep, one decimal, never negative
    pub light_hours: f64,
}

impl SleepBreakdown {
    /// Compute the breakdown; negative or non-finite input is treated as zero
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        let hours = if hours.is_finite() { hours.max(0.0) } else { 0.0 };
        let deep_hours = round_one_decimal(hours * DEEP_SLEEP_FRACTION);
        let light_hours = round_one_decimal(hours - deep_hours).max(0.0);
        Self {
            hours,
            deep_hours,
            light_hours,
        }
    }

    /// Whether the night fell short of the recommended eight hours
    #[must_use]
    pub fn below_recommended(&self) -> bool {
        self.hours < RECOMMENDED_SLEEP_HOURS
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
