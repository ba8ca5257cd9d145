// ABOUTME: Wellness score weights and the physiological constants behind step and sleep math
// ABOUTME: Values mirror the dashboard's published formula and must not drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Score before any adjustment
pub const BASE_SCORE: f64 = 55.0;

/// Steps that earn one score point
pub const STEPS_PER_POINT: f64 = 120.0;

/// Cap on the step bonus
pub const MAX_STEP_BONUS: f64 = 20.0;

/// Sleep hours that earn no bonus
pub const SLEEP_BASELINE_HOURS: f64 = 6.0;

/// Points per hour of sleep above the baseline
pub const SLEEP_POINTS_PER_HOUR: f64 = 4.0;

/// Cap on the sleep bonus
pub const MAX_SLEEP_BONUS: f64 = 20.0;

/// Glucose reading (mg/dL) above which the score is penalised
pub const GLUCOSE_THRESHOLD: f64 = 120.0;

/// mg/dL above the threshold that cost one score point
pub const GLUCOSE_PER_PENALTY_POINT: f64 = 5.0;

/// Lowest possible score
pub const MIN_SCORE: u8 = 0;

/// Highest possible score
pub const MAX_SCORE: u8 = 100;

/// Assumed stride length in meters
pub const STRIDE_LENGTH_M: f64 = 0.78;

/// Share of total sleep attributed to deep sleep
pub const DEEP_SLEEP_FRACTION: f64 = 0.22;

/// Recommended nightly sleep used in analysis prompts
pub const RECOMMENDED_SLEEP_HOURS: f64 = 8.0;

/// Lowest simulated post-meal glucose reading (mg/dL)
pub const POST_MEAL_GLUCOSE_MIN: u32 = 110;

/// Width of the simulated post-meal range; readings fall in `[MIN, MIN + SPREAD)`
pub const POST_MEAL_GLUCOSE_SPREAD: u32 = 25;

/// Default sleep hours for a fresh session
pub const DEFAULT_SLEEP_HOURS: f64 = 7.5;

/// Default glucose reading for a fresh session
pub const DEFAULT_GLUCOSE_READING: f64 = 105.0;

/// Default mood for a fresh session
pub const DEFAULT_MOOD: &str = "😊";

/// Mood presets offered by the dashboard
pub const MOOD_PRESETS: [&str; 15] = [
    "😀", "😊", "😐", "😔", "😡", "🥳", "😭", "😴", "🤒", "🤩", "😅", "😎", "😤", "😢", "🤯",
];
