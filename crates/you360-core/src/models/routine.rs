// ABOUTME: Routine and task types for the daily routine tracker
// ABOUTME: Each task carries its own completion flag so names and states never drift apart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned to a routine by the tracker
pub type RoutineId = u64;

/// Section of the day a routine belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// Morning section
    Morning,
    /// Afternoon section
    Afternoon,
    /// Evening section
    Evening,
    /// Health and wellness section
    Wellness,
}

impl TimeOfDay {
    /// All sections in display order
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Wellness];

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Wellness => "Wellness",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "wellness" => Ok(Self::Wellness),
            other => Err(format!("unknown time of day: {other}")),
        }
    }
}

/// A single checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineTask {
    /// Task label
    pub name: String,
    /// Whether the task is done
    pub completed: bool,
}

impl RoutineTask {
    /// Create an incomplete task
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

/// Named group of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// Tracker-assigned id
    pub id: RoutineId,
    /// Routine name
    pub name: String,
    /// Section of the day
    pub time_of_day: TimeOfDay,
    /// Ordered tasks
    pub tasks: Vec<RoutineTask>,
}

impl Routine {
    /// Number of tasks marked complete
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Total number of tasks
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }
}
