// ABOUTME: Tests for distance-to-step conversion, the daily step ratchet, and sleep breakdowns
// ABOUTME: Also covers the simulated glucose reading and the meditation countdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use you360_intelligence::{
    steps_from_distance, Distance, DistanceUnit, GlucoseEstimator, MeditationTimer,
    SleepBreakdown, StepCounter,
};

// ============================================================================
// Steps
// ============================================================================

#[test]
fn test_three_kilometers_is_3846_steps() {
    let distance = Distance::new(3.0, DistanceUnit::Km);
    assert!((distance.meters() - 3000.0).abs() < f64::EPSILON);
    assert_eq!(steps_from_distance(&distance), 3846);
}

#[test]
fn test_meters_are_converted_directly() {
    assert_eq!(steps_from_distance(&Distance::new(780.0, DistanceUnit::M)), 1000);
}

#[test]
fn test_negative_distance_yields_no_steps() {
    assert_eq!(steps_from_distance(&Distance::new(-2.0, DistanceUnit::Km)), 0);
    assert_eq!(steps_from_distance(&Distance::new(f64::NAN, DistanceUnit::M)), 0);
}

#[test]
fn test_step_counter_never_decreases() {
    let mut counter = StepCounter::new(5000);
    assert_eq!(counter.record(3846), 5000);
    assert_eq!(counter.record(7692), 7692);
    assert_eq!(counter.record(0), 7692);
    assert_eq!(counter.steps_today(), 7692);
}

#[test]
fn test_distance_unit_parsing() {
    assert_eq!("KM".parse::<DistanceUnit>().unwrap(), DistanceUnit::Km);
    assert_eq!("meters".parse::<DistanceUnit>().unwrap(), DistanceUnit::M);
    assert!("miles".parse::<DistanceUnit>().is_err());
}

// ============================================================================
// Sleep
// ============================================================================

#[test]
fn test_sleep_breakdown_splits_deep_and_light() {
    let breakdown = SleepBreakdown::from_hours(7.0);
    assert!((breakdown.deep_hours - 1.5).abs() < 1e-9);
    assert!((breakdown.light_hours - 5.5).abs() < 1e-9);
    assert!(breakdown.below_recommended());
}

#[test]
fn test_eight_hours_meets_recommendation() {
    assert!(!SleepBreakdown::from_hours(8.0).below_recommended());
}

#[test]
fn test_negative_sleep_is_treated_as_zero() {
    let breakdown = SleepBreakdown::from_hours(-3.0);
    assert!(breakdown.hours.abs() < f64::EPSILON);
    assert!(breakdown.light_hours >= 0.0);
}

// ============================================================================
// Glucose and meditation
// ============================================================================

#[test]
fn test_post_meal_reading_in_simulated_range() {
    for _ in 0..100 {
        let reading = GlucoseEstimator::post_meal_reading();
        assert!((110.0..135.0).contains(&reading));
    }
}

#[test]
fn test_meditation_timer_counts_down_to_completion() {
    let mut timer = MeditationTimer::new();
    assert!(timer.start(1));
    assert_eq!(timer.remaining_display(), "1:00");

    for _ in 0..59 {
        assert!(!timer.tick());
    }
    assert_eq!(timer.remaining_display(), "0:01");
    assert!(timer.tick());
    assert!(!timer.is_running());
    assert!(!timer.tick());
}

#[test]
fn test_meditation_timer_rejects_zero_minutes() {
    let mut timer = MeditationTimer::new();
    assert!(!timer.start(0));
    assert!(!timer.is_running());
}
