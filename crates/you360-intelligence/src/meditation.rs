// ABOUTME: Countdown timer behind the dashboard's meditation card
// ABOUTME: Driven by one tick per second from the caller; stops itself at zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Meditation countdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeditationTimer {
    remaining_secs: u32,
    running: bool,
}

impl MeditationTimer {
    /// Idle timer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining_secs: 0,
            running: false,
        }
    }

    /// Start a session of `minutes`; zero minutes leaves the timer idle
    pub fn start(&mut self, minutes: u32) -> bool {
        let seconds = minutes.saturating_mul(60);
        if seconds == 0 {
            return false;
        }
        self.remaining_secs = seconds;
        self.running = true;
        true
    }

    /// Advance one second; returns `true` when this tick finished the session
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Whether a session is in progress
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left in the session
    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Remaining time as `m:ss`
    #[must_use]
    pub fn remaining_display(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}
