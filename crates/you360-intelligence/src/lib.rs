// ABOUTME: Wellness intelligence algorithms for the You360 dashboard
// ABOUTME: Score computation, step and sleep conversions, glucose estimates, routine progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # You360 Intelligence
//!
//! Deterministic, side-effect free computations behind the dashboard cards.
//! Nothing in this crate performs I/O; the AI-backed features live in the
//! root crate and call into these functions for their numeric outputs.

/// Distance to step conversion and the daily step ratchet
pub mod activity;
/// Simulated post-meal glucose estimate
pub mod glucose;
/// Meditation countdown timer
pub mod meditation;
/// Routine completion percentages
pub mod routine_progress;
/// Sleep stage breakdown
pub mod sleep;
/// Bounded 0-100 wellness score
pub mod wellness_score;

pub use activity::{steps_from_distance, Distance, DistanceUnit, StepCounter};
pub use glucose::GlucoseEstimator;
pub use meditation::MeditationTimer;
pub use routine_progress::{overall_progress, routine_progress};
pub use sleep::SleepBreakdown;
pub use wellness_score::{WellnessScoreBreakdown, WellnessScorer};
