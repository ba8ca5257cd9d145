// ABOUTME: Converts walked distance into steps and keeps the daily step total monotonic
// ABOUTME: Uses a fixed 0.78 m stride; the daily total only ever ratchets upward
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use you360_core::constants::wellness::STRIDE_LENGTH_M;

/// Unit of a walked distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers
    Km,
    /// Meters
    M,
}

impl DistanceUnit {
    /// Short unit label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::M => "m",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" => Ok(Self::Km),
            "m" | "meter" | "meters" => Ok(Self::M),
            other => Err(format!("unknown distance unit: {other}")),
        }
    }
}

/// A walked distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Magnitude in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: DistanceUnit,
}

impl Distance {
    /// Create a distance
    #[must_use]
    pub const fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    /// Distance in meters
    #[must_use]
    pub fn meters(&self) -> f64 {
        match self.unit {
            DistanceUnit::Km => self.value * 1000.0,
            DistanceUnit::M => self.value,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Steps needed to cover a distance, rounded and floored at zero
#[must_use]
pub fn steps_from_distance(distance: &Distance) -> u64 {
    let steps = (distance.meters() / STRIDE_LENGTH_M).round();
    if steps.is_finite() && steps > 0.0 {
        steps as u64
    } else {
        0
    }
}

/// Daily step total that never decreases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCounter {
    steps_today: u64,
}

impl StepCounter {
    /// Start from an existing total
    #[must_use]
    pub const fn new(steps_today: u64) -> Self {
        Self { steps_today }
    }

    /// Current total
    #[must_use]
    pub const fn steps_today(&self) -> u64 {
        self.steps_today
    }

    /// Record a new reading; smaller readings leave the total untouched
    pub fn record(&mut self, steps: u64) -> u64 {
        self.steps_today = self.steps_today.max(steps);
        self.steps_today
    }
}
